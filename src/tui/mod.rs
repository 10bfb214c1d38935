//! Terminal User Interface (TUI) for pomoclock.
//!
//! Renders the 25 + 5 clock and maps key presses onto its controls.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, HELP};
pub use event::{handle_key, Action};
pub use ui::render;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;

use crate::audio::{self, AudioCue};
use crate::clock::{IntervalScheduler, PomodoroClock, Scheduler};
use crate::config::Config;
use crate::error::PomoError;
use crate::widget::TimerWidget;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), PomoError> {
    let clock = PomodoroClock::new(IntervalScheduler::system());
    let widget = TimerWidget::new(clock, audio::from_config(&config.audio));
    let mut app = App::new(widget);
    app.colors = config.ui.color.tui_colors();

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    let restore_raw_mode = || {
        disable_raw_mode().ok();
    };
    or_cleanup(
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}"))),
        restore_raw_mode,
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_cleanup(
        Terminal::new(backend)
            .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}"))),
        || {
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            restore_raw_mode();
        },
    )?;

    info!("tui started");
    let result = run_app(&mut terminal, &mut app);
    app.quit();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run `cleanup` when a setup step failed, then pass the result on.
fn or_cleanup<T>(
    result: Result<T, PomoError>,
    cleanup: impl FnOnce(),
) -> Result<T, PomoError> {
    if result.is_err() {
        cleanup();
    }
    result
}

/// Run the main application loop.
fn run_app<B: Backend, S: Scheduler, A: AudioCue>(
    terminal: &mut Terminal<B>,
    app: &mut App<S, A>,
) -> Result<(), PomoError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        // Wake up for the next tick even without input
        let timeout = app
            .widget()
            .clock()
            .next_tick_in()
            .unwrap_or(event::MAX_POLL);

        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                Action::Quit => app.quit(),
                Action::Toggle => app.toggle(),
                Action::Reset => app.reset(),
                Action::Increment(target) => app.increment(target),
                Action::Decrement(target) => app.decrement(target),
            }
        }

        app.on_idle();
    }

    Ok(())
}
