use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Deferred execution on the host's event loop.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    queue: Vec<Pending>,
}

impl ClockState {
    fn pop_due(&mut self, limit: Option<Duration>) -> Option<Pending> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| limit.map_or(true, |l| p.due <= l))
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let pending = self.queue.swap_remove(idx);
        self.now = self.now.max(pending.due);
        Some(pending)
    }
}

/// Virtual-time scheduler. Tasks only run when the clock is advanced, in
/// (due time, scheduling order) order, so step sequences are deterministic.
#[derive(Clone, Default)]
pub struct LogicalClock {
    state: Rc<RefCell<ClockState>>,
}

impl LogicalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Move time forward by `by`, running every task that falls due on the way
    /// (including tasks scheduled by those tasks). Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        loop {
            // borrow must end before the task runs: tasks reschedule themselves
            let next = self.state.borrow_mut().pop_due(Some(target));
            match next {
                Some(p) => {
                    (p.task)();
                    ran += 1;
                }
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
        ran
    }

    /// Run until the queue is empty, jumping time to each due point.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.state.borrow_mut().pop_due(None);
            match next {
                Some(p) => {
                    (p.task)();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}

impl Scheduler for LogicalClock {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut st = self.state.borrow_mut();
        let due = st.now + delay;
        let seq = st.next_seq;
        st.next_seq += 1;
        st.queue.push(Pending { due, seq, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_runs_only_due_tasks_in_order() {
        let clock = LogicalClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (name, ms) in [("b", 20u64), ("a", 10), ("c", 20)] {
            let log = log.clone();
            clock.schedule(Duration::from_millis(ms), Box::new(move || log.borrow_mut().push(name)));
        }
        assert_eq!(clock.advance(Duration::from_millis(15)), 1);
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(clock.advance(Duration::from_millis(5)), 2);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(clock.now(), Duration::from_millis(20));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn tasks_can_reschedule_from_inside_advance() {
        let clock = LogicalClock::new();
        let hits = Rc::new(RefCell::new(0));
        fn tick(clock: LogicalClock, hits: Rc<RefCell<u32>>) {
            let c = clock.clone();
            clock.schedule(
                Duration::from_millis(10),
                Box::new(move || {
                    *hits.borrow_mut() += 1;
                    if *hits.borrow() < 3 {
                        tick(c, hits);
                    }
                }),
            );
        }
        tick(clock.clone(), hits.clone());
        assert_eq!(clock.advance(Duration::from_millis(25)), 2);
        assert_eq!(clock.run_until_idle(), 1);
        assert_eq!(*hits.borrow(), 3);
        assert_eq!(clock.now(), Duration::from_millis(30));
    }
}
