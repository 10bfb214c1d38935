//! Application state for the TUI.

use chrono::Local;

use crate::audio::AudioCue;
use crate::clock::{ClockEvent, ClockSnapshot, LengthTarget, Scheduler};
use crate::widget::TimerWidget;

/// Key help shown on `?`.
pub const HELP: &str =
    "[/]:break -/+ | -/+:session -/+ | space:start/pause | r:reset | q:quit";

/// Application state.
pub struct App<S: Scheduler, A: AudioCue> {
    /// The timer being displayed.
    widget: TimerWidget<S, A>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether to draw with colors.
    pub colors: bool,
}

impl<S: Scheduler, A: AudioCue> App<S, A> {
    /// Create a new app instance.
    pub fn new(widget: TimerWidget<S, A>) -> Self {
        Self {
            widget,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
            colors: true,
        }
    }

    /// Current clock state.
    #[must_use]
    pub const fn snapshot(&self) -> ClockSnapshot {
        self.widget.snapshot()
    }

    /// Underlying widget.
    #[must_use]
    pub const fn widget(&self) -> &TimerWidget<S, A> {
        &self.widget
    }

    /// Lengthen `target`.
    pub fn increment(&mut self, target: LengthTarget) {
        let events = self.widget.increment(target);
        self.report(&events, target);
    }

    /// Shorten `target`.
    pub fn decrement(&mut self, target: LengthTarget) {
        let events = self.widget.decrement(target);
        self.report(&events, target);
    }

    /// Start or pause.
    pub fn toggle(&mut self) {
        let events = self.widget.toggle();
        self.describe(&events);
    }

    /// Restore defaults.
    pub fn reset(&mut self) {
        let events = self.widget.reset();
        self.describe(&events);
    }

    /// Apply due ticks.
    pub fn on_idle(&mut self) {
        let events = self.widget.poll();
        self.describe(&events);
    }

    /// Show key help.
    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }

    /// Stop ticking and leave the main loop.
    pub fn quit(&mut self) {
        self.widget.dispose();
        self.should_quit = true;
    }

    fn report(&mut self, events: &[ClockEvent], target: LengthTarget) {
        if events.is_empty() && self.snapshot().running {
            self.status = Some(format!("{target} is locked while running"));
        } else {
            self.describe(events);
        }
    }

    fn describe(&mut self, events: &[ClockEvent]) {
        let Some(last) = events.last() else {
            return;
        };

        self.status = Some(match last {
            ClockEvent::Started => "Running".to_string(),
            ClockEvent::Paused => "Paused".to_string(),
            ClockEvent::Reset => "Reset to 25 + 5".to_string(),
            ClockEvent::LengthChanged { target, length } => {
                format!("{target}: {length} min")
            }
            ClockEvent::PhaseTransitioned { to, .. } => {
                format!("{to} started at {}", Local::now().format("%H:%M"))
            }
        });
    }
}
