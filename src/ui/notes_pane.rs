use crate::domain::Note;
use crate::ui::styles::{border_style, default_style, muted_style, selected_style};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Note headlines on the left, the highlighted note on the right
pub fn render_notes_pane(f: &mut Frame, notes: &[Note], selected: usize, area: Rect) {
    if notes.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No notes yet. Press a to add one.", muted_style())),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = notes
        .iter()
        .enumerate()
        .map(|(idx, note)| {
            let headline = match note.headline() {
                "" => "(empty)".to_string(),
                text => text.to_string(),
            };
            let style = if idx == selected {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(headline).style(style)
        })
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::RIGHT).border_style(border_style())),
        chunks[0],
    );

    if let Some(note) = notes.get(selected) {
        let edited = note.updated_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        let mut lines = vec![
            Line::styled(format!("edited {}", edited), muted_style()),
            Line::raw(""),
        ];
        lines.extend(note.content.lines().map(|line| Line::raw(line.to_string())));

        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::LEFT).border_style(border_style()))
                .wrap(Wrap { trim: false }),
            chunks[1],
        );
    }
}
