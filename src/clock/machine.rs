//! The Pomodoro countdown state machine.

use std::time::Duration;

use log::{debug, info};
use serde::Serialize;

use crate::clock::format::format_time;
use crate::clock::length::{Length, LengthTarget};
use crate::clock::phase::Phase;
use crate::clock::scheduler::{Scheduler, Tick, TickHandle};

/// Nominal time between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Something that happened to the clock.
///
/// Collaborators (audio, status line) react to these instead of being
/// called from inside the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// The countdown started or resumed.
    Started,
    /// The countdown paused.
    Paused,
    /// All state returned to defaults.
    Reset,
    /// A configurable length changed.
    LengthChanged {
        /// Which length.
        target: LengthTarget,
        /// Its new value.
        length: Length,
    },
    /// A phase ran out and the next one began.
    PhaseTransitioned {
        /// The phase that ran out.
        from: Phase,
        /// The phase that began.
        to: Phase,
    },
}

/// Read-only view of the clock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockSnapshot {
    /// Configured break length.
    pub break_length: Length,
    /// Configured session length.
    pub session_length: Length,
    /// Phase counting down.
    pub phase: Phase,
    /// Seconds left in the phase.
    pub time_left: u32,
    /// Whether the countdown is running.
    pub running: bool,
}

impl ClockSnapshot {
    /// Configured length of the current phase.
    #[must_use]
    pub const fn phase_length(&self) -> Length {
        match self.phase {
            Phase::Session => self.session_length,
            Phase::Break => self.break_length,
        }
    }

    /// Fraction of the current phase that has elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.phase_length().seconds());
        let left = f64::from(self.time_left);
        (1.0 - left / total).clamp(0.0, 1.0)
    }

    /// Time left as `MM:SS`.
    #[must_use]
    pub fn format_time_left(&self) -> String {
        format_time(self.time_left)
    }
}

/// Alternating session/break countdown.
///
/// The clock is running exactly when it holds a [`TickHandle`]; there is no
/// separate flag that could disagree with the registration.
pub struct PomodoroClock<S: Scheduler> {
    scheduler: S,
    period: Duration,
    break_length: Length,
    session_length: Length,
    phase: Phase,
    time_left: u32,
    tick: Option<TickHandle>,
    events: Vec<ClockEvent>,
}

impl<S: Scheduler> PomodoroClock<S> {
    /// Create an idle clock with default lengths and a one-second tick.
    pub fn new(scheduler: S) -> Self {
        Self::with_period(scheduler, TICK_PERIOD)
    }

    /// Create an idle clock ticking every `period`.
    pub fn with_period(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            break_length: Length::DEFAULT_BREAK,
            session_length: Length::DEFAULT_SESSION,
            phase: Phase::Session,
            time_left: Length::DEFAULT_SESSION.seconds(),
            tick: None,
            events: Vec::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            break_length: self.break_length,
            session_length: self.session_length,
            phase: self.phase,
            time_left: self.time_left,
            running: self.is_running(),
        }
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Lengthen `target` by one minute, stopping at the upper bound.
    ///
    /// Returns `false` when ignored because the clock is running.
    pub fn increment(&mut self, target: LengthTarget) -> bool {
        self.adjust(target, Length::incremented)
    }

    /// Shorten `target` by one minute, stopping at the lower bound.
    ///
    /// Returns `false` when ignored because the clock is running.
    pub fn decrement(&mut self, target: LengthTarget) -> bool {
        self.adjust(target, Length::decremented)
    }

    fn adjust(&mut self, target: LengthTarget, step: fn(Length) -> Length) -> bool {
        if self.is_running() {
            return false;
        }

        let length = match target {
            LengthTarget::Break => {
                self.break_length = step(self.break_length);
                self.break_length
            }
            LengthTarget::Session => {
                self.session_length = step(self.session_length);
                // Applied whatever the phase; only reachable while idle.
                self.time_left = self.session_length.seconds();
                self.session_length
            }
        };

        debug!("{target} set to {length}");
        self.events.push(ClockEvent::LengthChanged { target, length });
        true
    }

    /// Start or resume the countdown. No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.tick = Some(self.scheduler.register(self.period));
        info!("{} started with {} left", self.phase, format_time(self.time_left));
        self.events.push(ClockEvent::Started);
    }

    /// Pause the countdown, keeping time left and phase. No-op if idle.
    pub fn pause(&mut self) {
        if let Some(handle) = self.tick.take() {
            self.scheduler.release(handle);
            info!("{} paused with {} left", self.phase, format_time(self.time_left));
            self.events.push(ClockEvent::Paused);
        }
    }

    /// Pause if running, start otherwise.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop the countdown and restore every default.
    pub fn reset(&mut self) {
        if let Some(handle) = self.tick.take() {
            self.scheduler.release(handle);
        }
        self.break_length = Length::DEFAULT_BREAK;
        self.session_length = Length::DEFAULT_SESSION;
        self.phase = Phase::Session;
        self.time_left = Length::DEFAULT_SESSION.seconds();
        info!("clock reset");
        self.events.push(ClockEvent::Reset);
    }

    /// Apply one tick.
    ///
    /// Ticks from a released registration are discarded. Returns whether the
    /// tick was applied.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if !self.tick.as_ref().is_some_and(|handle| handle.owns(tick)) {
            debug!("discarding stale tick {tick:?}");
            return false;
        }

        if self.time_left > 0 {
            self.time_left -= 1;
        } else {
            let from = self.phase;
            self.phase = from.next();
            self.time_left = self.snapshot().phase_length().seconds();
            info!("{from} finished, {} begins", self.phase);
            self.events.push(ClockEvent::PhaseTransitioned {
                from,
                to: self.phase,
            });
        }
        true
    }

    /// Apply every tick the scheduler has due. Returns how many applied.
    pub fn poll(&mut self) -> usize {
        let ticks = self.scheduler.due_ticks();
        ticks.into_iter().filter(|&tick| self.on_tick(tick)).count()
    }

    /// Time until the next tick, if running.
    #[must_use]
    pub fn next_tick_in(&self) -> Option<Duration> {
        if self.is_running() {
            self.scheduler.next_due_in()
        } else {
            None
        }
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<ClockEvent> {
        std::mem::take(&mut self.events)
    }

    /// Release the tick registration for good.
    ///
    /// Also runs on drop. State is left as it was, but nothing will tick it
    /// again until `start` is called.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.tick.take() {
            self.scheduler.release(handle);
            debug!("tick registration released on teardown");
        }
    }
}

impl<S: Scheduler> Drop for PomodoroClock<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
