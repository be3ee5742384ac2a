use foundation::ids::MarkerId;
use foundation::time::Time;

/// The transient jump-to-marker highlight.
///
/// Highlighting is UI-only state: it never feeds the activity computation.
/// It is time-bounded on the frame-loop clock (not the playback clock, which
/// is paused right after a jump) and is also cleared by any seek, since the
/// view has moved away from the marker's context.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Highlight {
    pub marker: MarkerId,
    pub expires_at: Time,
}

#[derive(Debug, Default)]
pub struct HighlightState {
    current: Option<Highlight>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, marker: MarkerId, now: Time, timeout_s: f64) {
        self.current = Some(Highlight {
            marker,
            expires_at: Time(now.0 + timeout_s),
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The highlighted marker, dropping it once `now` passes the expiry.
    pub fn current(&mut self, now: Time) -> Option<MarkerId> {
        if let Some(h) = self.current
            && now.0 >= h.expires_at.0
        {
            self.current = None;
        }
        self.current.map(|h| h.marker)
    }
}
