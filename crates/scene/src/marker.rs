use foundation::ids::{MarkerId, MarkerIdAllocator};
use foundation::math::Vec3;
use foundation::time::Time;

/// Renderer-owned visual object handle. Opaque to the core; the rendering
/// collaborator issues one per marker and keeps the actual mesh.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VisualId(pub u64);

/// A user annotation captured at a playback position.
///
/// Immutable after creation: position and capture time never change, and no
/// delete path exists, so a marker lives for the whole session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    /// Playback position at creation (seconds). Not validated against the
    /// duration; it may exceed it when the duration was unknown at capture.
    pub capture_time: Time,
    /// Scene-space intersection point on the viewing sphere.
    pub position: Vec3,
    pub visual: VisualId,
}

/// Owns every marker for the session.
///
/// Ordering contract: iteration yields markers in creation (ascending id)
/// order.
#[derive(Debug, Default)]
pub struct MarkerStore {
    ids: MarkerIdAllocator,
    markers: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new marker and returns it. Ids are fresh for the process
    /// lifetime; capture time is taken as given.
    pub fn add(&mut self, capture_time: Time, position: Vec3, visual: VisualId) -> Marker {
        let marker = Marker {
            id: self.ids.allocate(),
            capture_time,
            position,
            visual,
        };
        self.markers.push(marker);
        marker
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerStore, VisualId};
    use foundation::math::Vec3;
    use foundation::time::Time;

    #[test]
    fn every_added_marker_gets_a_unique_id() {
        let mut store = MarkerStore::new();
        let mut ids = Vec::new();
        for i in 0..32 {
            let m = store.add(Time(i as f64), Vec3::new(0.0, 0.0, 50.0), VisualId(i));
            ids.push(m.id);
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn stores_the_capture_tuple_verbatim() {
        let mut store = MarkerStore::new();
        let m = store.add(Time(12.5), Vec3::new(1.0, 2.0, 3.0), VisualId(7));
        let got = store.get(m.id).expect("stored");
        assert_eq!(got.capture_time, Time(12.5));
        assert_eq!(got.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(got.visual, VisualId(7));
    }

    #[test]
    fn capture_time_past_duration_is_not_rejected() {
        let mut store = MarkerStore::new();
        let m = store.add(Time(1.0e6), Vec3::zero(), VisualId(0));
        assert!(store.get(m.id).is_some());
    }

    #[test]
    fn iteration_is_in_creation_order() {
        let mut store = MarkerStore::new();
        let a = store.add(Time(9.0), Vec3::zero(), VisualId(0));
        let b = store.add(Time(1.0), Vec3::zero(), VisualId(1));
        let order: Vec<_> = store.iter().map(|m| m.id).collect();
        assert_eq!(order, vec![a.id, b.id]);
    }
}
