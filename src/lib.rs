//! pomoclock - A 25 + 5 Pomodoro clock for the terminal
//!
//! The countdown itself lives in [`clock`], independent of any terminal or
//! sound device. [`widget`] pairs it with an [`audio`] cue and [`tui`] draws
//! it with ratatui.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
pub mod widget;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use clock::{format_time, ClockEvent, ClockSnapshot, Length, LengthTarget, Phase, PomodoroClock};
pub use error::PomoError;
pub use widget::TimerWidget;
