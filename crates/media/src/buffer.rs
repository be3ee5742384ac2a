use foundation::time::TimeSpan;

/// Furthest contiguous playable time relative to `position`.
///
/// Single pass, left to right over ranges ordered by start:
/// - a range containing `position` is authoritative: its end is the answer;
/// - a range ending before `position` is the best answer so far (a later
///   range might still contain the position);
/// - a range starting after `position` means a gap follows, so scanning
///   stops; buffer beyond a gap is not playable-through.
pub fn buffered_through(ranges: &[TimeSpan], position: f64) -> f64 {
    let mut through = 0.0;
    for span in ranges {
        if span.contains(position) {
            return span.end.0;
        }
        if span.end.0 < position {
            through = span.end.0;
            continue;
        }
        break;
    }
    through
}

/// Derived timeline percentages, recomputed every progress tick.
///
/// Both values are 0 while the duration is unknown; that is a transient
/// precondition, not an error.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ProgressSnapshot {
    pub progress_pct: f64,
    pub buffered_pct: f64,
}

impl ProgressSnapshot {
    pub fn compute(position: f64, duration: Option<f64>, ranges: &[TimeSpan]) -> Self {
        let Some(duration) = duration.filter(|d| *d > 0.0) else {
            return Self::default();
        };
        Self {
            progress_pct: position / duration * 100.0,
            buffered_pct: buffered_through(ranges, position) / duration * 100.0,
        }
    }

    /// Snapshot forced by a seek: progress jumps to the clicked fraction and
    /// the buffered value resets to 0 pending the next recomputation.
    pub fn pending_seek(fraction: f64) -> Self {
        Self {
            progress_pct: fraction * 100.0,
            buffered_pct: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProgressSnapshot, buffered_through};
    use foundation::time::TimeSpan;

    fn ranges() -> Vec<TimeSpan> {
        vec![TimeSpan::new(0.0, 5.0), TimeSpan::new(7.0, 10.0)]
    }

    #[test]
    fn range_containing_position_is_authoritative() {
        assert_eq!(buffered_through(&ranges(), 3.0), 5.0);
    }

    #[test]
    fn position_in_gap_stops_at_previous_range() {
        assert_eq!(buffered_through(&ranges(), 6.0), 5.0);
    }

    #[test]
    fn position_in_later_range_scans_past_earlier_ones() {
        assert_eq!(buffered_through(&ranges(), 8.0), 10.0);
    }

    #[test]
    fn no_ranges_means_nothing_buffered() {
        assert_eq!(buffered_through(&[], 3.0), 0.0);
    }

    #[test]
    fn position_before_all_ranges_reports_zero() {
        let ranges = vec![TimeSpan::new(4.0, 9.0)];
        assert_eq!(buffered_through(&ranges, 1.0), 0.0);
    }

    #[test]
    fn snapshot_is_zero_without_duration() {
        let s = ProgressSnapshot::compute(3.0, None, &ranges());
        assert_eq!(s, ProgressSnapshot::default());
        let s = ProgressSnapshot::compute(3.0, Some(0.0), &ranges());
        assert_eq!(s, ProgressSnapshot::default());
    }

    #[test]
    fn snapshot_percentages_derive_from_position_and_ranges() {
        let s = ProgressSnapshot::compute(3.0, Some(10.0), &ranges());
        assert_eq!(s.progress_pct, 30.0);
        assert_eq!(s.buffered_pct, 50.0);
    }

    #[test]
    fn pending_seek_resets_buffered() {
        let s = ProgressSnapshot::pending_seek(0.5);
        assert_eq!(s.progress_pct, 50.0);
        assert_eq!(s.buffered_pct, 0.0);
    }
}
