use crate::app::{AppState, LAUNCHER_COLUMNS};
use crate::domain::UiMode;
use crate::persistence::Backend;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::env;
use std::fs;
use std::process::Command;
use tempfile::NamedTempFile;

/// Handle one key press. Returns true when the dashboard should quit.
pub fn handle_key<B: Backend>(app: &mut AppState<B>, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Launcher => handle_launcher_mode(app, key),
        UiMode::Tool => handle_tool_mode(app, key),
        UiMode::Input => handle_input_form_mode(app, key),
    }
}

/// Whether `key` will spawn an external editor, so the caller can hand the
/// terminal over first
pub fn wants_editor<B: Backend>(app: &AppState<B>, key: &KeyEvent) -> bool {
    app.ui_mode == UiMode::Tool
        && app.active_tool_id() == Some("notes")
        && matches!(key.code, KeyCode::Char('e') | KeyCode::Char('E'))
}

fn handle_launcher_mode<B: Backend>(app: &mut AppState<B>, key: KeyEvent) -> Result<bool> {
    app.clear_status();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_launcher(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_launcher(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_launcher(-(LAUNCHER_COLUMNS as isize)),
        KeyCode::Down | KeyCode::Char('j') => app.move_launcher(LAUNCHER_COLUMNS as isize),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_highlighted_tool(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_tool_mode<B: Backend>(app: &mut AppState<B>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_tool();
            return Ok(false);
        }
        KeyCode::Up => {
            app.move_selection_up();
            return Ok(false);
        }
        KeyCode::Down => {
            app.move_selection_down();
            return Ok(false);
        }
        _ => {}
    }

    let tool = app.active_tool_id().map(str::to_owned);
    match tool.as_deref() {
        Some("pomodoro") => handle_pomodoro_keys(app, key),
        Some("tasks") => handle_task_keys(app, key),
        Some("notes") => handle_note_keys(app, key),
        Some("habits") => handle_habit_keys(app, key),
        Some("journal") => handle_journal_keys(app, key),
        _ => {}
    }
    Ok(false)
}

fn handle_pomodoro_keys<B: Backend>(app: &mut AppState<B>, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_pomodoro(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_pomodoro(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_work_minutes(1),
        KeyCode::Char('-') | KeyCode::Char('_') => app.adjust_work_minutes(-1),
        KeyCode::Char(']') => app.adjust_break_minutes(1),
        KeyCode::Char('[') => app.adjust_break_minutes(-1),
        _ => {}
    }
}

fn handle_task_keys<B: Backend>(app: &mut AppState<B>, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_task(),
        KeyCode::Char('i') | KeyCode::Char('I') => app.toggle_selected_important(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.remove_selected(),
        _ => {}
    }
}

// `e` never reaches here: the event loop sees it through `wants_editor` and
// runs `edit_selected_note` around a terminal hand-off.
fn handle_note_keys<B: Backend>(app: &mut AppState<B>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.remove_selected(),
        _ => {}
    }
}

fn handle_habit_keys<B: Backend>(app: &mut AppState<B>, key: KeyEvent) {
    match key.code {
        // 1 = today, 7 = six days ago
        KeyCode::Char(c @ '1'..='7') => {
            let days_back = u64::from(c as u8 - b'1');
            app.toggle_selected_habit(days_back);
        }
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.remove_selected(),
        _ => {}
    }
}

fn handle_journal_keys<B: Backend>(app: &mut AppState<B>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add(),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => app.start_edit_journal(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.remove_selected(),
        _ => {}
    }
}

fn handle_input_form_mode<B: Backend>(app: &mut AppState<B>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Tab => app.input_form_tab(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Edit the highlighted note in $EDITOR. The caller must leave raw mode first.
pub fn edit_selected_note<B: Backend>(app: &mut AppState<B>) -> Result<()> {
    let Some(note) = app.selected_note() else {
        return Ok(());
    };

    let editor = env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    });

    let mut temp_file = NamedTempFile::new().context("Failed to create temporary file")?;
    std::io::Write::write_all(&mut temp_file, note.content.as_bytes())?;
    let temp_path = temp_file.into_temp_path();

    let status = Command::new(&editor)
        .arg(&temp_path)
        .status()
        .with_context(|| format!("Failed to launch editor `{}`", editor))?;

    if status.success() {
        let edited = fs::read_to_string(&temp_path)?;
        app.update_selected_note(edited.trim_end());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HabitTrack, Note, Task};
    use crate::persistence::MemoryBackend;
    use crate::store::Store;
    use chrono::Local;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState<MemoryBackend> {
        AppState::new(Store::open(MemoryBackend::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn open(app: &mut AppState<MemoryBackend>, id: &str) {
        app.launcher_index = app.tools.iter().position(|t| t.id == id).unwrap();
        handle_key(app, key(KeyCode::Enter)).unwrap();
    }

    #[test]
    fn test_handle_launcher_navigation() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.launcher_index, 1);
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.launcher_index, 1 + LAUNCHER_COLUMNS);
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        handle_key(&mut app, key(KeyCode::Left)).unwrap();
        assert_eq!(app.launcher_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_escape_closes_tool_without_quitting() {
        let mut app = create_test_app();
        open(&mut app, "pomodoro");
        assert_eq!(app.ui_mode, UiMode::Tool);

        let quit = handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!quit);
        assert_eq!(app.ui_mode, UiMode::Launcher);
        assert!(!app.store.modal().is_open());
    }

    #[test]
    fn test_handle_pomodoro_keys() {
        let mut app = create_test_app();
        open(&mut app, "pomodoro");

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.store.pomodoro().is_active);
        handle_key(&mut app, key(KeyCode::Char('+'))).unwrap();
        assert_eq!(app.store.pomodoro().work_duration, 26 * 60);
        handle_key(&mut app, key(KeyCode::Char(']'))).unwrap();
        assert_eq!(app.store.pomodoro().break_duration, 6 * 60);
        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert!(!app.store.pomodoro().is_active);
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();
        open(&mut app, "tasks");

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Input);
        for c in "New".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.store.tasks()[0].title, "New");
        assert_eq!(app.ui_mode, UiMode::Tool);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_escape_cancels_input() {
        let mut app = create_test_app();
        open(&mut app, "notes");
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Tool);
        assert!(app.store.notes().is_empty());
    }

    #[test]
    fn test_handle_task_toggles_and_delete() {
        let mut app = create_test_app();
        open(&mut app, "tasks");
        app.store.add_task(Task::new("Task", None).unwrap()).unwrap();

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('i'))).unwrap();
        assert!(app.store.tasks()[0].completed);
        assert!(app.store.tasks()[0].important);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert!(app.store.tasks().is_empty());
    }

    #[test]
    fn test_handle_habit_day_keys() {
        let mut app = create_test_app();
        open(&mut app, "habits");
        app.store.add_habit(HabitTrack::new("Walk").unwrap()).unwrap();

        handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
        let today = Local::now().date_naive();
        assert!(app.store.habits()[0].is_done(today));
        assert!(!app.store.habits()[0].is_done(today.pred_opt().unwrap()));

        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert!(app.store.habits()[0].is_done(today.pred_opt().unwrap()));
    }

    #[test]
    fn test_wants_editor_only_for_notes() {
        let mut app = create_test_app();
        open(&mut app, "notes");
        app.store.add_note(Note::new("hello")).unwrap();
        assert!(wants_editor(&app, &key(KeyCode::Char('e'))));
        assert!(!wants_editor(&app, &key(KeyCode::Char('a'))));

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        open(&mut app, "journal");
        assert!(!wants_editor(&app, &key(KeyCode::Char('e'))));
    }

    #[test]
    fn test_edit_key_is_left_to_event_loop() {
        let mut app = create_test_app();
        open(&mut app, "notes");
        app.store.add_note(Note::new("hello")).unwrap();
        let before = app.store.snapshot().clone();

        assert!(!handle_key(&mut app, key(KeyCode::Char('e'))).unwrap());
        assert_eq!(app.ui_mode, UiMode::Tool);
        assert_eq!(app.store.snapshot(), &before);
    }

    #[test]
    fn test_unimplemented_tool_ignores_keys() {
        let mut app = create_test_app();
        open(&mut app, "weather");
        let before = app.store.snapshot().clone();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.store.snapshot(), &before);
        assert_eq!(app.ui_mode, UiMode::Tool);
    }
}
