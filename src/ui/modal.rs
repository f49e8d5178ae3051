use crate::app::AppState;
use crate::domain::Tool;
use crate::persistence::Backend;
use crate::ui::{
    habits_pane::render_habits_pane,
    journal_pane::render_journal_pane,
    layout::create_modal_area,
    list_pane::render_task_list,
    notes_pane::render_notes_pane,
    pomodoro_pane::render_pomodoro_pane,
    styles::{category_color, modal_title_style, muted_style},
};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

/// Render the open tool on top of the launcher
pub fn render_tool_modal<B: Backend>(f: &mut Frame, app: &AppState<B>, tool: &Tool, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(category_color(tool.category)))
        .title(Span::styled(format!(" {} ", tool.name), modal_title_style()))
        .title(
            Title::from(Span::styled(" Esc to close ", muted_style()))
                .position(Position::Bottom)
                .alignment(Alignment::Right),
        );
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let store = &app.store;
    let selected = app.selected_index;
    let today = Local::now().date_naive();
    match tool.id.as_str() {
        "pomodoro" => render_pomodoro_pane(f, store.pomodoro(), inner),
        "tasks" => render_task_list(f, store.tasks(), selected, today, inner),
        "notes" => render_notes_pane(f, store.notes(), selected, inner),
        "habits" => render_habits_pane(f, store.habits(), selected, today, inner),
        "journal" => render_journal_pane(f, store.journal(), selected, inner),
        _ => render_unavailable(f, tool, inner),
    }
}

fn render_unavailable(f: &mut Frame, tool: &Tool, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw(tool.description.clone()),
        Line::raw(""),
        Line::styled("This tool is not available in the terminal yet.", muted_style()),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
