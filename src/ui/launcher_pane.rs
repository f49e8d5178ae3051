use crate::app::{AppState, LAUNCHER_COLUMNS};
use crate::persistence::Backend;
use crate::ui::layout::launcher_cells;
use crate::ui::styles::{category_color, muted_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the tool grid
pub fn render_launcher_pane<B: Backend>(f: &mut Frame, app: &AppState<B>, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Productivity Hub ", title_style()));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let cells = launcher_cells(inner, app.tools.len(), LAUNCHER_COLUMNS);
    for (idx, (tool, cell)) in app.tools.iter().zip(cells).enumerate() {
        let accent = Style::default().fg(category_color(tool.category));
        let highlighted = idx == app.launcher_index;

        let title = if highlighted {
            Span::styled(format!(" {} ", tool.name), selected_style())
        } else {
            Span::styled(format!(" {} ", tool.name), accent)
        };
        let mut lines = vec![
            Line::raw(tool.description.clone()),
            Line::styled(tool.category.name(), muted_style()),
        ];
        if tool.is_coming_soon() {
            lines.push(Line::styled("Coming soon", muted_style()));
        }

        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(if highlighted { selected_style() } else { accent })
                    .title(title),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(card, cell);
    }
}
