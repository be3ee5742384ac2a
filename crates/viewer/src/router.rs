use foundation::math::{Vec2, Vec3};
use scene::camera::OrbitCamera;
use scene::picking::{ViewSphere, intersect_sphere, ray_from_ndc};

/// Pointer interaction mode, toggled by one explicit control.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks and drags reorient the camera.
    #[default]
    Orbit,
    /// Clicks drop markers on the playback sphere.
    Mark,
}

/// Routes raw pointer input into marker creation or camera commands.
///
/// All mode gating lives here so the mode/marker invariants are enforced in
/// one place and testable without a rendering surface. Drag input
/// accumulates until the next render tick, which drains it into the camera
/// ("advance the orbit collaborator" step).
#[derive(Debug, Default)]
pub struct InteractionRouter {
    mode: Mode,
    pending_yaw_rad: f64,
    pending_pitch_rad: f64,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Orbit => Mode::Mark,
            Mode::Mark => Mode::Orbit,
        };
        self.mode
    }

    /// A pointer click in NDC.
    ///
    /// Only a mark-mode click that actually hits the sphere yields a marker
    /// position; a ray miss is a no-op, and orbit-mode clicks never create
    /// markers regardless of what the ray would hit.
    pub fn route_click(
        &self,
        camera: &OrbitCamera,
        sphere: ViewSphere,
        ndc: Vec2,
    ) -> Option<Vec3> {
        if self.mode != Mode::Mark {
            return None;
        }
        let ray = ray_from_ndc(camera, ndc.x, ndc.y)?;
        intersect_sphere(ray, sphere)
    }

    /// A pointer drag, in radians of camera rotation. Orbit mode only.
    pub fn route_drag(&mut self, d_yaw_rad: f64, d_pitch_rad: f64) {
        if self.mode != Mode::Orbit {
            return;
        }
        self.pending_yaw_rad += d_yaw_rad;
        self.pending_pitch_rad += d_pitch_rad;
    }

    /// Wheel input adjusts the FOV directly, independent of the mode.
    pub fn route_wheel(&self, camera: &mut OrbitCamera, delta: f64) {
        camera.apply_wheel(delta);
    }

    /// Render-tick step 1: apply accumulated drag input to the camera.
    pub fn sync_camera(&mut self, camera: &mut OrbitCamera) {
        if self.pending_yaw_rad != 0.0 || self.pending_pitch_rad != 0.0 {
            camera.orbit(self.pending_yaw_rad, self.pending_pitch_rad);
            self.pending_yaw_rad = 0.0;
            self.pending_pitch_rad = 0.0;
        }
    }
}
