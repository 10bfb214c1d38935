//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::audio::AudioCue;
use crate::clock::{ClockSnapshot, LengthTarget, Phase, Scheduler};
use crate::tui::app::App;

const TITLE: &str = "25 + 5 Clock";

/// Render the application UI.
pub fn render<S: Scheduler, A: AudioCue>(frame: &mut Frame<'_>, app: &App<S, A>) {
    let snapshot = app.snapshot();
    let palette = Palette::new(app.colors);

    // Create layout: header, lengths, countdown, progress, controls, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Lengths
            Constraint::Length(4), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Controls
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, &palette, chunks[0]);
    render_lengths(frame, &snapshot, &palette, chunks[1]);
    render_countdown(frame, &snapshot, &palette, chunks[2]);
    render_progress(frame, &snapshot, &palette, chunks[3]);
    render_controls(frame, &snapshot, &palette, chunks[4]);
    render_status_bar(frame, app.status.as_deref(), &palette, chunks[6]);
}

/// Styles, flattened to the default style when colors are off.
struct Palette {
    colors: bool,
}

impl Palette {
    const fn new(colors: bool) -> Self {
        Self { colors }
    }

    fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    fn phase(&self, phase: Phase) -> Style {
        self.fg(match phase {
            Phase::Session => Color::Cyan,
            Phase::Break => Color::Green,
        })
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, palette: &Palette, area: Rect) {
    let header = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(palette.fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the break and session length adjusters.
fn render_lengths(frame: &mut Frame<'_>, snapshot: &ClockSnapshot, palette: &Palette, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let entries = [
        (LengthTarget::Break, snapshot.break_length.minutes(), "[", "]"),
        (LengthTarget::Session, snapshot.session_length.minutes(), "-", "+"),
    ];

    // Adjusters are inert while running
    let key_style = if snapshot.running {
        palette.fg(Color::DarkGray)
    } else {
        palette.fg(Color::Yellow)
    };

    for ((target, minutes, down, up), column) in entries.into_iter().zip(columns.iter()) {
        let line = Line::from(vec![
            Span::styled(format!("{down} ▼  "), key_style),
            Span::styled(minutes.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  ▲ {up}"), key_style),
        ]);

        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {target} ")),
        );
        frame.render_widget(paragraph, *column);
    }
}

/// Render the phase label and time left.
fn render_countdown(
    frame: &mut Frame<'_>,
    snapshot: &ClockSnapshot,
    palette: &Palette,
    area: Rect,
) {
    let style = palette.phase(snapshot.phase);
    let lines = vec![
        Line::from(Span::styled(
            snapshot.phase.label(),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            snapshot.format_time_left(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let countdown = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style),
    );

    frame.render_widget(countdown, area);
}

/// Render the phase progress gauge.
fn render_progress(frame: &mut Frame<'_>, snapshot: &ClockSnapshot, palette: &Palette, area: Rect) {
    let progress = snapshot.progress();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (progress * 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(palette.phase(snapshot.phase))
        .ratio(progress)
        .label(format!("{percent}%"));

    frame.render_widget(gauge, area);
}

/// Render the start/stop and reset controls.
fn render_controls(frame: &mut Frame<'_>, snapshot: &ClockSnapshot, palette: &Palette, area: Rect) {
    let toggle = if snapshot.running {
        Span::styled(" ⏸ pause [space] ", palette.fg(Color::Red))
    } else {
        Span::styled(" ▶ start [space] ", palette.fg(Color::Green))
    };

    let controls = Paragraph::new(Line::from(vec![
        toggle,
        Span::raw("  "),
        Span::styled(" ↺ reset [r] ", palette.fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(controls, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, status: Option<&str>, palette: &Palette, area: Rect) {
    let status_text = status.unwrap_or("?:help | q:quit");

    let status = Paragraph::new(status_text).style(palette.fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::TerminalBell;
    use crate::clock::{IntervalScheduler, ManualTime, PomodoroClock};
    use crate::widget::TimerWidget;
    use ratatui::{backend::TestBackend, Terminal};

    type TestApp = App<IntervalScheduler<ManualTime>, TerminalBell<Vec<u8>>>;

    fn app() -> (ManualTime, TestApp) {
        let time = ManualTime::new();
        let clock = PomodoroClock::new(IntervalScheduler::new(time.clone()));
        (time, App::new(TimerWidget::new(clock, None)))
    }

    fn draw(app: &TestApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 18)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_renders_defaults() {
        let (_, app) = app();
        let screen = draw(&app);

        assert!(screen.contains(TITLE));
        assert!(screen.contains("Break Length"));
        assert!(screen.contains("Session Length"));
        assert!(screen.contains("Session"));
        assert!(screen.contains("25:00"));
        assert!(screen.contains("start"));
    }

    #[test]
    fn test_renders_running_state() {
        let (time, mut app) = app();
        app.toggle();
        time.advance_secs(5);
        app.on_idle();

        let screen = draw(&app);
        assert!(screen.contains("24:55"));
        assert!(screen.contains("pause"));
    }

    #[test]
    fn test_renders_without_colors() {
        let (_, mut app) = app();
        app.colors = false;
        let screen = draw(&app);
        assert!(screen.contains("25:00"));
    }
}
