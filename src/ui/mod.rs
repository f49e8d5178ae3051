pub mod habits_pane;
pub mod input_form;
pub mod journal_pane;
pub mod keybindings;
pub mod launcher_pane;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod notes_pane;
pub mod pomodoro_pane;
pub mod styles;

use crate::app::AppState;
use crate::persistence::Backend;
use input_form::render_input_form;
use keybindings::render_keybindings;
use launcher_pane::render_launcher_pane;
use layout::create_layout;
use modal::render_tool_modal;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use styles::error_style;

/// Main render function - draws the entire UI
pub fn render<B: Backend>(f: &mut Frame, app: &AppState<B>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_launcher_pane(f, app, layout.launcher_area);
    render_status(f, app, layout.status_area);

    if let Some(tool) = app.store.modal().active_tool() {
        render_tool_modal(f, app, tool, size);
    }

    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}

fn render_status<B: Backend>(f: &mut Frame, app: &AppState<B>, area: Rect) {
    if let Some(status) = &app.status {
        let line = Line::styled(format!(" {}", status), error_style());
        f.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::persistence::MemoryBackend;
    use crate::store::Store;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &AppState<MemoryBackend>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_launcher() {
        let app = AppState::new(Store::open(MemoryBackend::new()));
        let screen = draw(&app);
        assert!(screen.contains("Pomodoro Timer"));
        assert!(screen.contains("Journal"));
    }

    #[test]
    fn test_render_open_tool() {
        let mut app = AppState::new(Store::open(MemoryBackend::new()));
        app.store.add_task(Task::new("Water plants", None).unwrap()).unwrap();
        app.launcher_index = 1;
        app.open_highlighted_tool();

        let screen = draw(&app);
        assert!(screen.contains("Task Manager"));
        assert!(screen.contains("Water plants"));
    }

    #[test]
    fn test_render_pomodoro_clock() {
        let mut app = AppState::new(Store::open(MemoryBackend::new()));
        app.open_highlighted_tool();
        let screen = draw(&app);
        assert!(screen.contains("25:00"));
        assert!(screen.contains("Focus Time"));
    }
}
