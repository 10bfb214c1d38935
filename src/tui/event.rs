//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::audio::AudioCue;
use crate::clock::{LengthTarget, Scheduler};
use crate::error::PomoError;
use crate::tui::app::App;

/// Longest time to block waiting for a key.
pub const MAX_POLL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Restore defaults.
    Reset,
    /// Lengthen a phase.
    Increment(LengthTarget),
    /// Shorten a phase.
    Decrement(LengthTarget),
}

/// Handle terminal events.
///
/// Waits at most `timeout` for input. Returns an action to take, or None if
/// no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: Scheduler, A: AudioCue>(
    app: &mut App<S, A>,
    timeout: Duration,
) -> Result<Option<Action>, PomoError> {
    if event::poll(timeout.min(MAX_POLL))
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(handle_key(app, key));
        }
    }

    Ok(None)
}

/// Map a key press to an action.
pub fn handle_key<S: Scheduler, A: AudioCue>(app: &mut App<S, A>, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Char(' ' | 'p') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),

        KeyCode::Char('[' | 'b') => Some(Action::Decrement(LengthTarget::Break)),
        KeyCode::Char(']' | 'B') => Some(Action::Increment(LengthTarget::Break)),
        KeyCode::Char('-' | 's') | KeyCode::Down => {
            Some(Action::Decrement(LengthTarget::Session))
        }
        KeyCode::Char('+' | '=' | 'S') | KeyCode::Up => {
            Some(Action::Increment(LengthTarget::Session))
        }

        KeyCode::Char('?') => {
            app.show_help();
            None
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::TerminalBell;
    use crate::clock::{IntervalScheduler, ManualTime, PomodoroClock};
    use crate::tui::app::HELP;
    use crate::widget::TimerWidget;

    fn app() -> App<IntervalScheduler<ManualTime>, TerminalBell<Vec<u8>>> {
        let clock = PomodoroClock::new(IntervalScheduler::new(ManualTime::new()));
        App::new(TimerWidget::new(clock, None))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(handle_key(&mut app, press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_control_keys() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, press(KeyCode::Char(' '))), Some(Action::Toggle));
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('['))),
            Some(Action::Decrement(LengthTarget::Break))
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char(']'))),
            Some(Action::Increment(LengthTarget::Break))
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('-'))),
            Some(Action::Decrement(LengthTarget::Session))
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('+'))),
            Some(Action::Increment(LengthTarget::Session))
        );
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_help_sets_status() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('?'))), None);
        assert_eq!(app.status.as_deref(), Some(HELP));
    }

    #[test]
    fn test_release_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut app, key), None);
    }
}
