use crate::domain::JournalEntry;
use crate::ui::styles::{default_style, muted_style, selected_style};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render journal entries with the highlighted one in full below
pub fn render_journal_pane(f: &mut Frame, entries: &[JournalEntry], selected: usize, area: Rect) {
    if entries.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No entries yet. Press a to write one.", muted_style())),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let date = entry.created_at.with_timezone(&Local).format("%Y-%m-%d");
            let mood = entry.mood.map(|m| m.symbol()).unwrap_or("  ");
            let first = entry.content.lines().next().unwrap_or("");
            let style = if idx == selected {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", date), muted_style()),
                Span::raw(format!("{} ", mood)),
                Span::raw(first.to_string()),
            ]))
            .style(style)
        })
        .collect();
    f.render_widget(List::new(items), chunks[0]);

    if let Some(entry) = entries.get(selected) {
        let title = match entry.mood {
            Some(mood) => format!(" {} {} ", mood.symbol(), mood.label()),
            None => " Entry ".to_string(),
        };
        let lines: Vec<Line> = entry
            .content
            .lines()
            .map(|line| Line::raw(line.to_string()))
            .collect();
        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::TOP).title(title))
                .wrap(Wrap { trim: false }),
            chunks[1],
        );
    }
}
