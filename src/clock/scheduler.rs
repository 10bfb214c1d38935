//! Periodic tick sources.
//!
//! The clock never reads the wall clock directly. It registers a periodic
//! interval with a [`Scheduler`] and is fed the [`Tick`]s that come due.
//! Every registration carries a generation number, and every tick remembers
//! the generation it was produced for, so a tick that outlives its
//! registration can be recognised and dropped.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Smallest period a scheduler will honour.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A source of monotonic time.
pub trait TimeSource {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Time that only moves when told to.
///
/// Clones share the same offset, so a test can keep one copy and hand the
/// other to a scheduler.
#[derive(Debug, Clone)]
pub struct ManualTime {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualTime {
    /// Create a manual time source frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Move time forward by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Default for ManualTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

/// Handle to a live periodic registration.
///
/// Deliberately neither `Clone` nor `Copy`: whoever holds it owns the
/// registration and gives it back through [`Scheduler::release`].
#[derive(Debug, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

impl TickHandle {
    /// Whether `tick` was produced for this registration.
    #[must_use]
    pub const fn owns(&self, tick: Tick) -> bool {
        self.generation == tick.generation
    }
}

/// One firing of a periodic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

/// Registers periodic intervals and reports the ticks that have come due.
pub trait Scheduler {
    /// Start a periodic interval, replacing any previous one.
    fn register(&mut self, period: Duration) -> TickHandle;

    /// Stop the interval belonging to `handle`.
    ///
    /// Releasing a handle that is no longer current is a no-op.
    fn release(&mut self, handle: TickHandle);

    /// Ticks that came due since the last call.
    fn due_ticks(&mut self) -> Vec<Tick>;

    /// Time until the next tick, if an interval is registered.
    fn next_due_in(&self) -> Option<Duration> {
        None
    }
}

#[derive(Debug)]
struct Registration {
    generation: u64,
    period: Duration,
    next_due: Instant,
}

/// Fixed-period scheduler driven by a [`TimeSource`].
///
/// A late poll delivers one tick for every period that elapsed. No drift
/// correction is applied.
#[derive(Debug)]
pub struct IntervalScheduler<T: TimeSource = SystemTime> {
    time: T,
    last_generation: u64,
    active: Option<Registration>,
}

impl IntervalScheduler<SystemTime> {
    /// Scheduler on wall-clock time.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemTime)
    }
}

impl<T: TimeSource> IntervalScheduler<T> {
    /// Scheduler on the given time source.
    #[must_use]
    pub const fn new(time: T) -> Self {
        Self {
            time,
            last_generation: 0,
            active: None,
        }
    }

    /// Whether an interval is registered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl<T: TimeSource> Scheduler for IntervalScheduler<T> {
    fn register(&mut self, period: Duration) -> TickHandle {
        self.last_generation += 1;
        let period = period.max(MIN_PERIOD);
        self.active = Some(Registration {
            generation: self.last_generation,
            period,
            next_due: self.time.now() + period,
        });
        TickHandle {
            generation: self.last_generation,
        }
    }

    fn release(&mut self, handle: TickHandle) {
        if self
            .active
            .as_ref()
            .is_some_and(|reg| reg.generation == handle.generation)
        {
            self.active = None;
        }
    }

    fn due_ticks(&mut self) -> Vec<Tick> {
        let now = self.time.now();
        let mut ticks = Vec::new();

        if let Some(reg) = self.active.as_mut() {
            while reg.next_due <= now {
                ticks.push(Tick {
                    generation: reg.generation,
                });
                reg.next_due += reg.period;
            }
        }

        ticks
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|reg| reg.next_due.saturating_duration_since(self.time.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> (ManualTime, IntervalScheduler<ManualTime>) {
        let time = ManualTime::new();
        (time.clone(), IntervalScheduler::new(time))
    }

    #[test]
    fn test_no_ticks_without_registration() {
        let (time, mut sched) = scheduler();
        time.advance_secs(10);
        assert!(sched.due_ticks().is_empty());
        assert_eq!(sched.next_due_in(), None);
    }

    #[test]
    fn test_ticks_once_per_period() {
        let (time, mut sched) = scheduler();
        let handle = sched.register(Duration::from_secs(1));

        time.advance(Duration::from_millis(999));
        assert!(sched.due_ticks().is_empty());

        time.advance(Duration::from_millis(1));
        let ticks = sched.due_ticks();
        assert_eq!(ticks.len(), 1);
        assert!(handle.owns(ticks[0]));

        // Already delivered
        assert!(sched.due_ticks().is_empty());
    }

    #[test]
    fn test_late_poll_delivers_every_elapsed_period() {
        let (time, mut sched) = scheduler();
        let _handle = sched.register(Duration::from_secs(1));

        time.advance_secs(5);
        assert_eq!(sched.due_ticks().len(), 5);
    }

    #[test]
    fn test_release_stops_ticks() {
        let (time, mut sched) = scheduler();
        let handle = sched.register(Duration::from_secs(1));
        sched.release(handle);

        time.advance_secs(3);
        assert!(sched.due_ticks().is_empty());
        assert!(!sched.is_active());
    }

    #[test]
    fn test_reregistration_bumps_generation() {
        let (time, mut sched) = scheduler();
        let first = sched.register(Duration::from_secs(1));
        time.advance_secs(1);
        let stale = sched.due_ticks()[0];

        sched.release(first);
        let second = sched.register(Duration::from_secs(1));

        assert!(!second.owns(stale));
    }

    #[test]
    fn test_releasing_stale_handle_keeps_current() {
        let (time, mut sched) = scheduler();
        let first = sched.register(Duration::from_secs(1));
        let second = sched.register(Duration::from_secs(1));

        sched.release(first);
        assert!(sched.is_active());

        time.advance_secs(1);
        let ticks = sched.due_ticks();
        assert_eq!(ticks.len(), 1);
        assert!(second.owns(ticks[0]));
    }

    #[test]
    fn test_next_due_in() {
        let (time, mut sched) = scheduler();
        let _handle = sched.register(Duration::from_secs(1));
        time.advance(Duration::from_millis(400));
        assert_eq!(sched.next_due_in(), Some(Duration::from_millis(600)));
    }
}
