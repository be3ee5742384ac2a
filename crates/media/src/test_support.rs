//! Scripted collaborators for tests.
//!
//! These stand in for the host media element and the streaming engine so the
//! synchronization core can be exercised without a display or a network.

use foundation::time::TimeSpan;

use crate::error::{MediaError, Result};
use crate::session::{SessionConfig, SessionEvent, StreamingEngine};
use crate::surface::{MediaSurface, SourceKind};

/// A media element whose state is set directly by the test.
#[derive(Debug)]
pub struct ScriptedMedia {
    pub position: f64,
    pub duration: Option<f64>,
    pub buffered: Vec<TimeSpan>,
    pub paused: bool,
    /// When set, `play()` rejects like a host requiring a user gesture.
    pub reject_play: bool,
    pub source: Option<String>,
    pub native_kinds: Vec<SourceKind>,
}

impl Default for ScriptedMedia {
    fn default() -> Self {
        Self {
            position: 0.0,
            duration: None,
            buffered: Vec::new(),
            // A media element with no source starts paused.
            paused: true,
            reject_play: false,
            source: None,
            native_kinds: Vec::new(),
        }
    }
}

impl ScriptedMedia {
    pub fn with_duration(duration_s: f64) -> Self {
        Self {
            duration: Some(duration_s),
            paused: true,
            ..Self::default()
        }
    }
}

impl MediaSurface for ScriptedMedia {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn buffered(&self) -> Vec<TimeSpan> {
        self.buffered.clone()
    }

    fn play(&mut self) -> Result<()> {
        if self.reject_play {
            return Err(MediaError::AutoplayRejected(
                "user gesture required".into(),
            ));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn can_play_natively(&self, kind: SourceKind) -> bool {
        self.native_kinds.contains(&kind)
    }

    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
    }
}

/// A streaming engine that records what was asked of it.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    pub supported: bool,
    pub loaded: Option<SessionConfig>,
    pub queued: Vec<SessionEvent>,
    pub destroyed: bool,
}

impl ScriptedEngine {
    pub fn supported() -> Self {
        Self {
            supported: true,
            ..Self::default()
        }
    }

    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, event: SessionEvent) {
        self.queued.push(event);
    }
}

impl StreamingEngine for ScriptedEngine {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn load(&mut self, config: &SessionConfig) {
        self.loaded = Some(config.clone());
    }

    fn poll_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.queued)
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}
