use foundation::ids::MarkerId;
use foundation::math::precision::stable_total_cmp_f64;

use crate::marker::{Marker, MarkerStore};

/// Comparison rule deciding whether a marker is active at a playback
/// position.
///
/// The rule is a policy rather than a constant because the two reference
/// revisions disagree: the later one compared by exact float equality, the
/// earlier one used a ±1 s window. Exact equality will rarely fire against a
/// real playback clock, so `Window` is the default.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ActivityPolicy {
    /// Literal float equality with the capture time.
    Exact,
    /// Active while `|position - capture_time| < tolerance_s`.
    Window { tolerance_s: f64 },
}

impl Default for ActivityPolicy {
    fn default() -> Self {
        Self::Window { tolerance_s: 1.0 }
    }
}

impl ActivityPolicy {
    pub fn is_active(self, position: f64, marker: &Marker) -> bool {
        match self {
            Self::Exact => position == marker.capture_time.0,
            Self::Window { tolerance_s } => (position - marker.capture_time.0).abs() < tolerance_s,
        }
    }
}

/// Resolves the at-most-one active marker for the current position.
///
/// Ordering contract:
/// - The marker whose capture time is closest to `position` wins (stable
///   float ordering on the absolute delta).
/// - Ties break toward the lowest id.
pub fn active_marker(
    store: &MarkerStore,
    position: f64,
    policy: ActivityPolicy,
) -> Option<MarkerId> {
    let mut best: Option<(f64, MarkerId)> = None;

    for marker in store.iter() {
        if !policy.is_active(position, marker) {
            continue;
        }
        let delta = (position - marker.capture_time.0).abs();
        best = match best {
            None => Some((delta, marker.id)),
            Some((best_delta, best_id)) => {
                let ord =
                    stable_total_cmp_f64(delta, best_delta).then_with(|| marker.id.cmp(&best_id));
                if ord.is_lt() {
                    Some((delta, marker.id))
                } else {
                    Some((best_delta, best_id))
                }
            }
        };
    }

    best.map(|(_delta, id)| id)
}

#[cfg(test)]
mod tests {
    use super::{ActivityPolicy, active_marker};
    use crate::marker::{MarkerStore, VisualId};
    use foundation::math::Vec3;
    use foundation::time::Time;

    fn store_with_times(times: &[f64]) -> MarkerStore {
        let mut store = MarkerStore::new();
        for (i, t) in times.iter().enumerate() {
            store.add(Time(*t), Vec3::zero(), VisualId(i as u64));
        }
        store
    }

    #[test]
    fn exact_policy_requires_bit_equality() {
        let store = store_with_times(&[10.0]);
        assert!(active_marker(&store, 10.0, ActivityPolicy::Exact).is_some());
        assert!(active_marker(&store, 10.0000001, ActivityPolicy::Exact).is_none());
    }

    #[test]
    fn window_policy_matches_within_tolerance() {
        let store = store_with_times(&[10.0]);
        let policy = ActivityPolicy::Window { tolerance_s: 1.0 };
        assert!(active_marker(&store, 10.6, policy).is_some());
        assert!(active_marker(&store, 9.4, policy).is_some());
        assert!(active_marker(&store, 11.0, policy).is_none()); // open bound
        assert!(active_marker(&store, 12.0, policy).is_none());
    }

    #[test]
    fn closest_capture_time_wins() {
        let store = store_with_times(&[10.0, 10.4]);
        let policy = ActivityPolicy::Window { tolerance_s: 1.0 };
        let active = active_marker(&store, 10.3, policy).expect("active");
        let expected = store.iter().nth(1).expect("second marker").id;
        assert_eq!(active, expected);
    }

    #[test]
    fn ties_break_toward_lowest_id() {
        let store = store_with_times(&[10.0, 10.0]);
        let policy = ActivityPolicy::Window { tolerance_s: 1.0 };
        let active = active_marker(&store, 10.0, policy).expect("active");
        let expected = store.iter().next().expect("first marker").id;
        assert_eq!(active, expected);
    }

    #[test]
    fn never_returns_a_marker_without_a_stored_time() {
        let store = store_with_times(&[5.0, 20.0]);
        let policy = ActivityPolicy::default();
        for position in [0.0, 4.0, 6.1, 19.0, 21.1, 100.0] {
            if let Some(id) = active_marker(&store, position, policy) {
                let marker = store.get(id).expect("resolved markers are stored");
                assert!((position - marker.capture_time.0).abs() < 1.0);
            }
        }
    }
}
