use tracing::warn;

use crate::buffer::ProgressSnapshot;
use crate::surface::MediaSurface;

/// Thin playback state over the media surface.
///
/// The clock never advances time itself; the surface's native clock does.
/// It owns only the derived progress snapshot and the seek entry points.
#[derive(Debug, Default)]
pub struct PlaybackClock {
    snapshot: ProgressSnapshot,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot
    }

    /// Progress-tick recomputation from live surface state.
    pub fn refresh(&mut self, media: &impl MediaSurface) {
        self.snapshot =
            ProgressSnapshot::compute(media.current_time(), media.duration(), &media.buffered());
    }

    /// Starts playback, treating rejection as non-fatal.
    pub fn play(&self, media: &mut impl MediaSurface) {
        if let Err(err) = media.play() {
            warn!(error = %err, "playback start rejected");
        }
    }

    pub fn pause(&self, media: &mut impl MediaSurface) {
        media.pause();
    }

    /// Seek to a normalized timeline fraction.
    ///
    /// Returns the applied absolute time, or `None` while the duration is
    /// still unknown (the seek is dropped, matching a timeline that cannot
    /// be clicked before metadata arrives).
    pub fn seek(&mut self, media: &mut impl MediaSurface, fraction: f64) -> Option<f64> {
        let fraction = fraction.clamp(0.0, 1.0);
        let duration = media.duration().filter(|d| *d > 0.0)?;
        let target = fraction * duration;
        media.set_current_time(target);
        self.snapshot = ProgressSnapshot::pending_seek(fraction);
        Some(target)
    }

    /// Seek to an absolute time (jump-to-marker path).
    ///
    /// The buffered value resets to 0 pending recomputation, like any seek.
    pub fn seek_to(&mut self, media: &mut impl MediaSurface, seconds: f64) {
        media.set_current_time(seconds);
        let fraction = match media.duration().filter(|d| *d > 0.0) {
            Some(duration) => (seconds / duration).clamp(0.0, 1.0),
            None => 0.0,
        };
        self.snapshot = ProgressSnapshot::pending_seek(fraction);
    }
}
