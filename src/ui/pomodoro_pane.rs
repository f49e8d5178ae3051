use crate::domain::{Phase, PomodoroState};
use crate::ui::styles::{
    break_gauge_style, default_style, modal_title_style, muted_style, work_gauge_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Render the countdown, its phase and both phase lengths
pub fn render_pomodoro_pane(f: &mut Frame, pomodoro: &PomodoroState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Phase
            Constraint::Length(3), // Clock
            Constraint::Length(1), // Gauge
            Constraint::Length(1),
            Constraint::Min(0), // Settings
        ])
        .split(area);

    let phase = pomodoro.phase();
    f.render_widget(
        Paragraph::new(Line::styled(phase.label(), modal_title_style())).alignment(Alignment::Center),
        chunks[0],
    );

    let status = if pomodoro.is_active { "running" } else { "paused" };
    let clock = vec![
        Line::raw(""),
        Line::styled(pomodoro.clock_label(), default_style()),
        Line::styled(status, muted_style()),
    ];
    f.render_widget(Paragraph::new(clock).alignment(Alignment::Center), chunks[1]);

    let gauge_style = match phase {
        Phase::Work => work_gauge_style(),
        Phase::Break => break_gauge_style(),
    };
    let gauge = Gauge::default()
        .gauge_style(gauge_style)
        .ratio(pomodoro.progress())
        .label("");
    f.render_widget(gauge, chunks[2]);

    let settings = vec![
        Line::raw(format!("Focus length: {} min", pomodoro.work_duration / 60)),
        Line::raw(format!("Break length: {} min", pomodoro.break_duration / 60)),
    ];
    f.render_widget(Paragraph::new(settings).alignment(Alignment::Center), chunks[4]);
}
