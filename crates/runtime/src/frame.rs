use foundation::time::Time;

/// Display-refresh frame metadata.
///
/// One `Frame` is produced per host refresh callback and handed to every
/// phase that runs within it. It is intentionally small and pure so frame
/// sequences can be scripted in tests without a display.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Refresh interval (seconds).
    pub dt_s: f64,
    /// Loop time at the start of the frame (seconds). This is the frame
    /// loop's own timebase, not the playback position.
    pub time: Time,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s,
            time: Time(index as f64 * dt_s),
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use foundation::time::Time;

    #[test]
    fn frame_time_tracks_refresh_interval() {
        let f = Frame::new(120, 1.0 / 60.0);
        assert_eq!(f.time, Time(2.0));
    }

    #[test]
    fn next_advances_index_and_time() {
        let f0 = Frame::new(0, 0.5);
        let f1 = f0.next();
        assert_eq!(f1.index, 1);
        assert_eq!(f1.time, Time(0.5));
    }
}
