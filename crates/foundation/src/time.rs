/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // seconds

/// A buffered media range in seconds.
///
/// Ranges reported by a media surface are ordered by `start` and disjoint.
/// Containment treats both endpoints as inclusive, matching how the buffer
/// tracker decides whether a position is covered by a range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeSpan {
    pub start: Time,
    pub end: Time,
}

impl TimeSpan {
    pub fn new(start_s: f64, end_s: f64) -> Self {
        Self {
            start: Time(start_s),
            end: Time(end_s),
        }
    }

    pub fn contains(&self, t: f64) -> bool {
        self.start.0 <= t && t <= self.end.0
    }

    pub fn duration(&self) -> f64 {
        (self.end.0 - self.start.0).max(0.0)
    }
}
