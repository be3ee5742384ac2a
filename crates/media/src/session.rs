use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::surface::{MediaSurface, SourceKind};

/// Pass-through tuning for the streaming engine.
///
/// These knobs mirror the player's shipped adaptive-streaming configuration
/// and are handed to the engine unchanged; the core never reinterprets them.
/// Retry policy for segment fetches lives entirely here, not in the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub url: String,
    /// Alternate sources tried in order when falling back to native playback.
    #[serde(default)]
    pub fallback_urls: Vec<String>,
    #[serde(default = "default_buffer_length_s")]
    pub max_buffer_length_s: f64,
    #[serde(default = "default_buffer_length_s")]
    pub max_max_buffer_length_s: f64,
    #[serde(default = "default_buffer_size_bytes")]
    pub max_buffer_size_bytes: u64,
    #[serde(default = "default_buffer_hole_s")]
    pub max_buffer_hole_s: f64,
    #[serde(default = "default_true")]
    pub progressive: bool,
    #[serde(default = "default_true")]
    pub start_frag_prefetch: bool,
    #[serde(default = "default_frag_timeout_ms")]
    pub frag_load_timeout_ms: u64,
    #[serde(default = "default_frag_retry")]
    pub frag_load_max_retry: u32,
    /// Lifetime of the jump-to-marker highlight (seconds).
    #[serde(default = "default_highlight_timeout_s")]
    pub highlight_timeout_s: f64,
}

fn default_buffer_length_s() -> f64 {
    600.0
}

fn default_buffer_size_bytes() -> u64 {
    4 * 1024 * 1024 * 1024
}

fn default_buffer_hole_s() -> f64 {
    0.5
}

fn default_true() -> bool {
    true
}

fn default_frag_timeout_ms() -> u64 {
    10_000
}

fn default_frag_retry() -> u32 {
    5
}

fn default_highlight_timeout_s() -> f64 {
    3.0
}

impl SessionConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fallback_urls: Vec::new(),
            max_buffer_length_s: default_buffer_length_s(),
            max_max_buffer_length_s: default_buffer_length_s(),
            max_buffer_size_bytes: default_buffer_size_bytes(),
            max_buffer_hole_s: default_buffer_hole_s(),
            progressive: true,
            start_frag_prefetch: true,
            frag_load_timeout_ms: default_frag_timeout_ms(),
            frag_load_max_retry: default_frag_retry(),
            highlight_timeout_s: default_highlight_timeout_s(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Notifications emitted by the streaming collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The manifest parsed; playback may start.
    ManifestReady,
    /// A segment finished loading. Informational only.
    SegmentLoaded { sequence: u64 },
}

/// Which playback path the session ended up on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionBackend {
    /// The streaming engine drives the media element.
    Engine,
    /// The element plays the source natively, no engine involved.
    Native,
    /// No supported path; playback never starts.
    Unavailable,
}

/// Streaming collaborator consumed by the session.
///
/// Real implementations wrap an adaptive-bitrate client; tests script one.
pub trait StreamingEngine {
    /// Whether the engine can run on this host at all.
    fn is_supported(&self) -> bool;

    /// Attach to the media element and start loading `config.url`.
    fn load(&mut self, config: &SessionConfig);

    /// Drains events observed since the last poll, in arrival order.
    fn poll_events(&mut self) -> Vec<SessionEvent>;

    /// Synchronous teardown of the streaming session.
    fn destroy(&mut self);
}

/// One playback session: source selection, autoplay, teardown.
#[derive(Debug)]
pub struct Session {
    backend: SessionBackend,
}

impl Session {
    /// Wires the engine (or a native fallback) to the media element.
    ///
    /// Selection order follows the reference player: a supported engine wins;
    /// otherwise the first URL the element can play natively (primary first,
    /// then fallbacks) is assigned directly; otherwise playback never starts
    /// and the failure is logged, not surfaced.
    pub fn attach(
        engine: &mut impl StreamingEngine,
        media: &mut impl MediaSurface,
        config: &SessionConfig,
    ) -> Self {
        if engine.is_supported() {
            engine.load(config);
            return Self {
                backend: SessionBackend::Engine,
            };
        }

        let candidates = std::iter::once(config.url.as_str())
            .chain(config.fallback_urls.iter().map(String::as_str));
        for url in candidates {
            if media.can_play_natively(SourceKind::from_url(url)) {
                debug!(url, "streaming engine unsupported, using native playback");
                media.set_source(url);
                // Native path: the element starts as soon as it can.
                if let Err(err) = media.play() {
                    warn!(error = %err, "autoplay rejected on native source");
                }
                return Self {
                    backend: SessionBackend::Native,
                };
            }
        }

        warn!(url = %config.url, "no supported playback path for source");
        Self {
            backend: SessionBackend::Unavailable,
        }
    }

    pub fn backend(&self) -> SessionBackend {
        self.backend
    }

    /// Reacts to one engine event.
    ///
    /// `ManifestReady` triggers a single autoplay attempt; rejection is
    /// caught and logged. `SegmentLoaded` is logged and otherwise ignored.
    pub fn handle_event(&mut self, media: &mut impl MediaSurface, event: &SessionEvent) {
        match event {
            SessionEvent::ManifestReady => {
                if let Err(err) = media.play() {
                    warn!(error = %err, "autoplay rejected on manifest ready");
                }
            }
            SessionEvent::SegmentLoaded { sequence } => {
                debug!(sequence, "segment loaded");
            }
        }
    }

    /// Synchronous teardown: destroy the engine session, pause playback.
    ///
    /// Nothing holds a cancellable handle across teardown, so there is no
    /// pending-operation tracking.
    pub fn teardown(
        &mut self,
        engine: &mut impl StreamingEngine,
        media: &mut impl MediaSurface,
    ) {
        engine.destroy();
        media.pause();
    }
}
