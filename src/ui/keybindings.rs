use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::Backend;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the current mode and tool
pub fn hints_for(mode: UiMode, tool: Option<&str>) -> &'static str {
    match (mode, tool) {
        (UiMode::Launcher, _) => " ←/→/↑/↓ select   Enter open   q quit",
        (UiMode::Input, _) => " Enter save   Tab next field/mood   Esc cancel",
        (UiMode::Tool, Some("pomodoro")) => {
            " Space start/pause   r reset   +/- focus length   [/] break length   Esc close"
        }
        (UiMode::Tool, Some("tasks")) => {
            " ↑/↓ select   Space done   i important   a add   x delete   Esc close"
        }
        (UiMode::Tool, Some("notes")) => " ↑/↓ select   a add   e edit in $EDITOR   x delete   Esc close",
        (UiMode::Tool, Some("habits")) => {
            " ↑/↓ select   1-7 toggle day (1 = today)   a add   x delete   Esc close"
        }
        (UiMode::Tool, Some("journal")) => " ↑/↓ select   a add   e edit   x delete   Esc close",
        (UiMode::Tool, _) => " Esc close",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings<B: Backend>(f: &mut Frame, app: &AppState<B>, area: Rect) {
    let hints = Line::raw(hints_for(app.ui_mode, app.active_tool_id()));
    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
