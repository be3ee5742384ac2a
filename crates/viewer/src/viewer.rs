use foundation::ids::MarkerId;
use foundation::math::Vec2;
use foundation::time::Time;
use media::buffer::ProgressSnapshot;
use media::clock::PlaybackClock;
use media::session::{Session, SessionBackend, SessionConfig, StreamingEngine};
use media::surface::MediaSurface;
use runtime::event_bus::EventBus;
use runtime::frame::Frame;
use runtime::phase::{Phase, PhaseSchedule};
use tracing::debug;
use scene::activity::{ActivityPolicy, active_marker};
use scene::camera::OrbitCamera;
use scene::highlight::HighlightState;
use scene::marker::MarkerStore;
use scene::picking::ViewSphere;

use crate::render::RenderBackend;
use crate::router::{InteractionRouter, Mode};

/// The playback/marker synchronization core.
///
/// Owns every piece of process-wide state (markers, mode, derived progress)
/// and wires the three collaborators together. All state is single-owner and
/// mutated only from the frame phases and the discrete user-edit entry
/// points below; nothing here is shared across threads.
pub struct Viewer<R, M, E> {
    render: R,
    media: M,
    engine: E,
    session: Session,
    config: SessionConfig,
    clock: PlaybackClock,
    camera: OrbitCamera,
    sphere: ViewSphere,
    markers: MarkerStore,
    highlight: HighlightState,
    policy: ActivityPolicy,
    router: InteractionRouter,
    active: Option<MarkerId>,
    shut_down: bool,
}

impl<R, M, E> Viewer<R, M, E>
where
    R: RenderBackend,
    M: MediaSurface,
    E: StreamingEngine,
{
    /// Builds the viewer and attaches the streaming session.
    pub fn new(render: R, mut media: M, mut engine: E, config: SessionConfig) -> Self {
        let session = Session::attach(&mut engine, &mut media, &config);
        Self {
            render,
            media,
            engine,
            session,
            config,
            clock: PlaybackClock::new(),
            camera: OrbitCamera::new(),
            sphere: ViewSphere::default(),
            markers: MarkerStore::new(),
            highlight: HighlightState::new(),
            policy: ActivityPolicy::default(),
            router: InteractionRouter::new(),
            active: None,
            shut_down: false,
        }
    }

    pub fn with_activity_policy(mut self, policy: ActivityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> SessionBackend {
        self.session.backend()
    }

    pub fn mode(&self) -> Mode {
        self.router.mode()
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    /// The marker resolved as active on the last render tick.
    pub fn active_marker(&self) -> Option<MarkerId> {
        self.active
    }

    /// The derived progress values from the last progress tick (or seek).
    pub fn progress(&self) -> ProgressSnapshot {
        self.clock.snapshot()
    }

    /// The transient jump-to highlight, if it has not expired by `now`.
    pub fn highlighted(&mut self, now: Time) -> Option<MarkerId> {
        self.highlight.current(now)
    }

    // ---- discrete user edits -------------------------------------------

    pub fn toggle_mark_mode(&mut self) -> Mode {
        self.router.toggle_mode()
    }

    /// A pointer click in NDC.
    ///
    /// In mark mode, a sphere hit creates a marker at the intersection point
    /// and the current playback position; the visual starts hidden and the
    /// next render tick decides its visibility. Everything else is a no-op.
    pub fn pointer_click(
        &mut self,
        ndc: Vec2,
        frame: Frame,
        bus: &mut EventBus,
    ) -> Option<MarkerId> {
        let point = self.router.route_click(&self.camera, self.sphere, ndc)?;
        let visual = self.render.create_marker_visual(point);
        let marker = self
            .markers
            .add(Time(self.media.current_time()), point, visual);
        bus.emit(
            frame,
            "marker",
            format!(
                "created id={} t={:.3}",
                marker.id.value(),
                marker.capture_time.0
            ),
        );
        Some(marker.id)
    }

    /// A pointer drag in radians of rotation; applied on the next render
    /// tick, orbit mode only.
    pub fn pointer_drag(&mut self, d_yaw_rad: f64, d_pitch_rad: f64) {
        self.router.route_drag(d_yaw_rad, d_pitch_rad);
    }

    /// Wheel zoom (FOV), independent of the mode.
    pub fn wheel(&mut self, delta: f64) {
        self.router.route_wheel(&mut self.camera, delta);
    }

    /// Timeline click: seek to a normalized fraction.
    ///
    /// Clears any highlight, since the view has moved away from its context.
    pub fn seek(&mut self, fraction: f64, frame: Frame, bus: &mut EventBus) {
        self.highlight.clear();
        if let Some(target) = self.clock.seek(&mut self.media, fraction) {
            bus.emit(frame, "media", format!("seek t={target:.3}"));
        }
    }

    /// Jump to a stored marker.
    ///
    /// Moves the playback position to the marker's capture time, pauses,
    /// highlights the marker for `highlight_timeout_s`, reorients the camera
    /// toward the marker without moving it, and restores the default FOV.
    /// Repeating the jump with no intervening seek lands in the same state.
    pub fn jump_to(&mut self, id: MarkerId, frame: Frame, bus: &mut EventBus) -> bool {
        let Some(marker) = self.markers.get(id).copied() else {
            return false;
        };
        self.clock.seek_to(&mut self.media, marker.capture_time.0);
        self.clock.pause(&mut self.media);
        self.highlight
            .set(id, frame.time, self.config.highlight_timeout_s);
        self.camera.look_at(marker.position);
        self.camera.reset_fov();
        bus.emit(frame, "marker", format!("jump id={}", id.value()));
        true
    }

    pub fn play(&mut self) {
        self.clock.play(&mut self.media);
    }

    pub fn pause(&mut self) {
        self.clock.pause(&mut self.media);
    }

    // ---- frame phases ---------------------------------------------------

    /// Render tick: sync the camera, recompute marker activity, render.
    pub fn render_tick(&mut self, frame: Frame, bus: &mut EventBus) {
        self.router.sync_camera(&mut self.camera);

        let position = self.media.current_time();
        let active = active_marker(&self.markers, position, self.policy);
        for marker in self.markers.iter() {
            self.render
                .set_visual_visible(marker.visual, self.policy.is_active(position, marker));
        }
        if active != self.active {
            self.active = active;
            let message = match active {
                Some(id) => format!("active id={}", id.value()),
                None => "active none".to_string(),
            };
            bus.emit(frame, "marker", message);
        }

        // Expire a stale highlight on the loop clock.
        let _ = self.highlight.current(frame.time);

        self.render.render(&self.camera);
    }

    /// Progress tick: drain session events, recompute derived progress.
    ///
    /// Runs once per frame like the render tick, with no ordering guarantee
    /// between the two.
    pub fn progress_tick(&mut self, frame: Frame, bus: &mut EventBus) {
        for event in self.engine.poll_events() {
            self.session.handle_event(&mut self.media, &event);
            bus.emit(frame, "session", format!("{event:?}"));
        }
        self.clock.refresh(&self.media);
    }

    /// Synchronous teardown: streaming session destroyed, playback paused,
    /// renderer resources released. Idempotent.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.session.teardown(&mut self.engine, &mut self.media);
        self.render.release_all();
        self.shut_down = true;
        debug!(markers = self.markers.len(), "viewer shut down");
    }
}

/// The per-frame schedule: the render tick and the progress tick, registered
/// as independent phases. Both run once per display refresh; neither may
/// assume it runs before the other.
pub fn frame_schedule<R, M, E>() -> PhaseSchedule<Viewer<R, M, E>>
where
    R: RenderBackend,
    M: MediaSurface,
    E: StreamingEngine,
{
    let mut schedule = PhaseSchedule::new();
    schedule.add_phase(Phase::new("render", render_phase));
    schedule.add_phase(Phase::new("progress", progress_phase));
    schedule
}

fn render_phase<R, M, E>(viewer: &mut Viewer<R, M, E>, frame: Frame, bus: &mut EventBus)
where
    R: RenderBackend,
    M: MediaSurface,
    E: StreamingEngine,
{
    viewer.render_tick(frame, bus);
}

fn progress_phase<R, M, E>(viewer: &mut Viewer<R, M, E>, frame: Frame, bus: &mut EventBus)
where
    R: RenderBackend,
    M: MediaSurface,
    E: StreamingEngine,
{
    viewer.progress_tick(frame, bus);
}
