use crate::event_bus::EventBus;
use crate::frame::Frame;

/// A per-frame callback run by [`PhaseSchedule`].
///
/// Phases model the host's independently rescheduled refresh callbacks: each
/// registered phase runs once per frame against the shared single-owner host
/// state `V`.
pub struct Phase<V> {
    pub id: &'static str,
    /// Smaller values run earlier within a frame.
    pub priority: i32,
    pub run: fn(host: &mut V, frame: Frame, bus: &mut EventBus),
}

impl<V> Phase<V> {
    pub fn new(id: &'static str, run: fn(host: &mut V, frame: Frame, bus: &mut EventBus)) -> Self {
        Self {
            id,
            priority: 0,
            run,
        }
    }

    pub fn with_priority(
        id: &'static str,
        priority: i32,
        run: fn(host: &mut V, frame: Frame, bus: &mut EventBus),
    ) -> Self {
        Self { id, priority, run }
    }
}

/// Runs every registered phase once per frame.
///
/// The internal order is deterministic (`(priority, id, insertion order)`) so
/// frame sequences replay identically, but it is an implementation detail:
/// distinct phases carry no ordering guarantee toward each other beyond "both
/// run once per frame", and must not rely on one running first.
#[derive(Default)]
pub struct PhaseSchedule<V> {
    next_order: u64,
    phases: Vec<(u64, Phase<V>)>,
}

impl<V> PhaseSchedule<V> {
    pub fn new() -> Self {
        Self {
            next_order: 0,
            phases: Vec::new(),
        }
    }

    pub fn add_phase(&mut self, phase: Phase<V>) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.phases.push((order, phase));
    }

    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Run all phases for the given frame.
    pub fn run_frame(&mut self, host: &mut V, frame: Frame, bus: &mut EventBus) {
        self.phases.sort_by(|(oa, a), (ob, b)| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.id.cmp(b.id))
                .then_with(|| oa.cmp(ob))
        });

        for (_order, phase) in &self.phases {
            (phase.run)(host, frame, bus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, PhaseSchedule};
    use crate::event_bus::EventBus;
    use crate::frame::Frame;

    #[derive(Default)]
    struct Host {
        log: Vec<&'static str>,
    }

    fn phase_a(host: &mut Host, frame: Frame, bus: &mut EventBus) {
        host.log.push("a");
        bus.emit(frame, "phase", "a");
    }

    fn phase_b(host: &mut Host, frame: Frame, bus: &mut EventBus) {
        host.log.push("b");
        bus.emit(frame, "phase", "b");
    }

    #[test]
    fn runs_each_phase_once_per_frame() {
        let mut sched = PhaseSchedule::new();
        sched.add_phase(Phase::new("render", phase_a));
        sched.add_phase(Phase::new("progress", phase_b));

        let mut host = Host::default();
        let mut bus = EventBus::new();
        sched.run_frame(&mut host, Frame::new(0, 1.0 / 60.0), &mut bus);
        sched.run_frame(&mut host, Frame::new(1, 1.0 / 60.0), &mut bus);

        assert_eq!(host.log.len(), 4);
        assert_eq!(host.log.iter().filter(|p| **p == "a").count(), 2);
        assert_eq!(host.log.iter().filter(|p| **p == "b").count(), 2);
    }

    #[test]
    fn replay_is_deterministic() {
        let run = |order_swapped: bool| {
            let mut sched = PhaseSchedule::new();
            if order_swapped {
                sched.add_phase(Phase::new("b", phase_b));
                sched.add_phase(Phase::new("a", phase_a));
            } else {
                sched.add_phase(Phase::new("a", phase_a));
                sched.add_phase(Phase::new("b", phase_b));
            }
            let mut host = Host::default();
            let mut bus = EventBus::new();
            sched.run_frame(&mut host, Frame::new(0, 1.0), &mut bus);
            host.log
        };

        // Registration order does not leak into the replayed order.
        assert_eq!(run(false), run(true));
    }

    #[test]
    fn priority_overrides_id_order() {
        let mut sched = PhaseSchedule::new();
        sched.add_phase(Phase::with_priority("a", 10, phase_a));
        sched.add_phase(Phase::with_priority("b", -1, phase_b));

        let mut host = Host::default();
        let mut bus = EventBus::new();
        sched.run_frame(&mut host, Frame::new(0, 1.0), &mut bus);
        assert_eq!(host.log, vec!["b", "a"]);
    }
}
