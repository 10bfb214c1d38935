//! The countdown core.
//!
//! Provides the session/break state machine and everything it depends on:
//! - Saturating phase lengths
//! - The session/break phase
//! - Injected tick scheduling with stale-tick protection
//! - `MM:SS` formatting

pub mod format;
pub mod length;
pub mod machine;
pub mod phase;
pub mod scheduler;

pub use format::format_time;
pub use length::{Length, LengthTarget};
pub use machine::{ClockEvent, ClockSnapshot, PomodoroClock, TICK_PERIOD};
pub use phase::Phase;
pub use scheduler::{
    IntervalScheduler, ManualTime, Scheduler, SystemTime, Tick, TickHandle, TimeSource,
};
