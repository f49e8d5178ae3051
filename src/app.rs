use crate::domain::collection::find;
use crate::domain::{
    catalog, HabitTrack, JournalEntry, Mood, Note, Task, Tool, UiMode, ValidationError,
};
use crate::persistence::{Backend, FileBackend};
use crate::store::{Persisted, Store};
use crate::ticker::{Clock, TickDriver};
use chrono::{Days, Local, NaiveDate};

/// Tool cards per launcher row
pub const LAUNCHER_COLUMNS: usize = 4;

/// What the open input form will create or change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPurpose {
    AddTask,
    AddNote,
    AddHabit,
    AddJournal,
    EditJournal(String),
}

impl InputPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AddTask => " Add Task ",
            Self::AddNote => " Add Note ",
            Self::AddHabit => " Add Habit ",
            Self::AddJournal => " New Journal Entry ",
            Self::EditJournal(_) => " Edit Journal Entry ",
        }
    }
}

/// Input form state
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub purpose: InputPurpose,
    pub text: String,
    pub due_date: String, // YYYY-MM-DD, tasks only
    pub mood: Option<Mood>,
    pub editing_field: usize, // 0 = text, 1 = due date
}

impl InputFormState {
    fn new(purpose: InputPurpose) -> Self {
        Self {
            purpose,
            text: String::new(),
            due_date: String::new(),
            mood: None,
            editing_field: 0,
        }
    }
}

/// Dashboard state: the store plus everything only the terminal cares about
pub struct AppState<B: Backend = FileBackend> {
    pub store: Store<B>,
    pub tools: Vec<Tool>,
    pub launcher_index: usize,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub status: Option<String>,
}

impl<B: Backend> AppState<B> {
    /// Wrap a hydrated store. A tool left open last session opens again.
    pub fn new(store: Store<B>) -> Self {
        let tools = catalog();
        let launcher_index = store
            .modal()
            .active_id()
            .and_then(|id| tools.iter().position(|tool| tool.id == id))
            .unwrap_or(0);
        let ui_mode = if store.modal().is_open() {
            UiMode::Tool
        } else {
            UiMode::Launcher
        };

        Self {
            store,
            tools,
            launcher_index,
            selected_index: 0,
            ui_mode,
            input_form: None,
            status: None,
        }
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Surface a failed write on the status line. The change itself stays.
    pub fn report(&mut self, result: Persisted) {
        if let Err(err) = result {
            self.status = Some(format!("Not saved: {}", err));
        }
    }

    fn report_invalid(&mut self, err: ValidationError) {
        self.status = Some(err.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // Launcher

    pub fn highlighted_tool(&self) -> Option<&Tool> {
        self.tools.get(self.launcher_index)
    }

    /// Move the launcher highlight, staying inside the grid
    pub fn move_launcher(&mut self, delta: isize) {
        let last = self.tools.len().saturating_sub(1) as isize;
        let next = (self.launcher_index as isize + delta).clamp(0, last);
        self.launcher_index = next as usize;
    }

    pub fn open_highlighted_tool(&mut self) {
        if let Some(tool) = self.highlighted_tool().cloned() {
            let result = self.store.open_modal(tool);
            self.report(result);
            self.selected_index = 0;
            self.ui_mode = UiMode::Tool;
        }
    }

    pub fn close_tool(&mut self) {
        let result = self.store.close_modal();
        self.report(result);
        self.input_form = None;
        self.ui_mode = UiMode::Launcher;
    }

    pub fn active_tool_id(&self) -> Option<&str> {
        self.store.modal().active_id()
    }

    // Rows inside the open tool

    fn active_len(&self) -> usize {
        match self.active_tool_id() {
            Some("tasks") => self.store.tasks().len(),
            Some("notes") => self.store.notes().len(),
            Some("habits") => self.store.habits().len(),
            Some("journal") => self.store.journal().len(),
            _ => 0,
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.active_len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.active_len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    fn selected_id(&self) -> Option<String> {
        let i = self.selected_index;
        match self.active_tool_id()? {
            "tasks" => self.store.tasks().get(i).map(|t| t.id.clone()),
            "notes" => self.store.notes().get(i).map(|n| n.id.clone()),
            "habits" => self.store.habits().get(i).map(|h| h.id.clone()),
            "journal" => self.store.journal().get(i).map(|e| e.id.clone()),
            _ => None,
        }
    }

    pub fn selected_note(&self) -> Option<&Note> {
        if self.active_tool_id() != Some("notes") {
            return None;
        }
        self.store.notes().get(self.selected_index)
    }

    /// Delete the highlighted row of whichever collection is open
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let tool = self.active_tool_id().map(str::to_owned);
        let result = match tool.as_deref() {
            Some("tasks") => self.store.remove_task(&id),
            Some("notes") => self.store.remove_note(&id),
            Some("habits") => self.store.remove_habit(&id),
            Some("journal") => self.store.remove_journal_entry(&id),
            _ => Ok(()),
        };
        self.report(result);
        self.clamp_selection();
    }

    // Pomodoro

    pub fn toggle_pomodoro(&mut self) {
        let result = if self.store.pomodoro().is_active {
            self.store.pause_pomodoro()
        } else {
            self.store.start_pomodoro()
        };
        self.report(result);
    }

    pub fn reset_pomodoro(&mut self) {
        let result = self.store.reset_pomodoro();
        self.report(result);
    }

    /// Change the work length by `delta` minutes
    pub fn adjust_work_minutes(&mut self, delta: i64) {
        let minutes = i64::from(self.store.pomodoro().work_duration / 60) + delta;
        let result = self.store.set_work_duration(minutes);
        self.report(result);
    }

    /// Change the break length by `delta` minutes
    pub fn adjust_break_minutes(&mut self, delta: i64) {
        let minutes = i64::from(self.store.pomodoro().break_duration / 60) + delta;
        let result = self.store.set_break_duration(minutes);
        self.report(result);
    }

    /// Apply every tick the driver owes, keeping it armed only while the timer runs
    pub fn drive_ticks<C: Clock>(&mut self, driver: &mut TickDriver<C>) {
        driver.sync(self.store.pomodoro().is_active);
        let due = driver.due_ticks();
        if due > 0 {
            let result = self.store.advance(due);
            self.report(result);
        }
        driver.sync(self.store.pomodoro().is_active);
    }

    // Tasks

    pub fn toggle_selected_task(&mut self) {
        if let Some(id) = self.selected_id() {
            let result = self.store.toggle_task(&id);
            self.report(result);
        }
    }

    pub fn toggle_selected_important(&mut self) {
        if let Some(id) = self.selected_id() {
            let result = self.store.toggle_task_important(&id);
            self.report(result);
        }
    }

    // Notes

    pub fn update_selected_note(&mut self, content: &str) {
        if let Some(id) = self.selected_id() {
            let result = self.store.update_note(&id, content);
            self.report(result);
        }
    }

    // Habits

    /// Flip the highlighted habit for the day `days_back` days before today
    pub fn toggle_selected_habit(&mut self, days_back: u64) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(date) = self.today().checked_sub_days(Days::new(days_back)) else {
            return;
        };
        let result = self.store.toggle_habit_day(&id, date);
        self.report(result);
    }

    // Input form

    pub fn start_input(&mut self, purpose: InputPurpose) {
        let mut form = InputFormState::new(purpose);
        if let InputPurpose::EditJournal(id) = &form.purpose {
            if let Some(entry) = find(self.store.journal(), id) {
                form.text = entry.content.clone();
                form.mood = entry.mood;
            }
        }
        self.input_form = Some(form);
        self.ui_mode = UiMode::Input;
    }

    /// Open the form that matches the active tool
    pub fn start_add(&mut self) {
        let purpose = match self.active_tool_id() {
            Some("tasks") => InputPurpose::AddTask,
            Some("notes") => InputPurpose::AddNote,
            Some("habits") => InputPurpose::AddHabit,
            Some("journal") => InputPurpose::AddJournal,
            _ => return,
        };
        self.start_input(purpose);
    }

    pub fn start_edit_journal(&mut self) {
        if self.active_tool_id() != Some("journal") {
            return;
        }
        if let Some(id) = self.selected_id() {
            self.start_input(InputPurpose::EditJournal(id));
        }
    }

    /// Tab: switch to the due date field for tasks, cycle the mood for new entries
    pub fn input_form_tab(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.purpose {
                InputPurpose::AddTask => form.editing_field = (form.editing_field + 1) % 2,
                InputPurpose::AddJournal => form.mood = Mood::cycle(form.mood),
                _ => {}
            }
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.push(c),
                _ => form.due_date.push(c),
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.text.pop();
                }
                _ => {
                    form.due_date.pop();
                }
            }
        }
    }

    /// Submit the form. Invalid input keeps it open with a message.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            return;
        };

        let outcome = match &form.purpose {
            InputPurpose::AddTask => self.submit_task(&form),
            InputPurpose::AddNote => self.submit_note(&form),
            InputPurpose::AddHabit => HabitTrack::new(&form.text).map(|habit| {
                let result = self.store.add_habit(habit);
                self.report(result);
            }),
            InputPurpose::AddJournal if form.text.trim().is_empty() => {
                Err(ValidationError::Empty("entry"))
            }
            InputPurpose::AddJournal => {
                let entry = JournalEntry::new(&form.text, form.mood);
                let result = self.store.add_journal_entry(entry);
                self.report(result);
                Ok(())
            }
            InputPurpose::EditJournal(id) => {
                let result = self.store.update_journal_entry(id, &form.text);
                self.report(result);
                Ok(())
            }
        };

        match outcome {
            Ok(()) => self.ui_mode = UiMode::Tool,
            Err(err) => {
                self.report_invalid(err);
                self.input_form = Some(form);
            }
        }
    }

    fn submit_task(&mut self, form: &InputFormState) -> Result<(), ValidationError> {
        let due_text = form.due_date.trim();
        let due = if due_text.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(due_text, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    self.status = Some(format!("Ignored due date `{}`, use YYYY-MM-DD", due_text));
                    None
                }
            }
        };
        let task = Task::new(&form.text, due)?;
        let result = self.store.add_task(task);
        self.report(result);
        Ok(())
    }

    fn submit_note(&mut self, form: &InputFormState) -> Result<(), ValidationError> {
        if form.text.trim().is_empty() {
            return Err(ValidationError::Empty("note"));
        }
        let result = self.store.add_note(Note::new(&form.text));
        self.report(result);
        Ok(())
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Tool;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_tool;
    use crate::persistence::MemoryBackend;
    use crate::ticker::ManualClock;
    use std::time::Duration;

    fn create_test_app() -> AppState<MemoryBackend> {
        AppState::new(Store::open(MemoryBackend::new()))
    }

    fn open_tool(app: &mut AppState<MemoryBackend>, id: &str) {
        app.launcher_index = app.tools.iter().position(|t| t.id == id).unwrap();
        app.open_highlighted_tool();
    }

    fn type_text(app: &mut AppState<MemoryBackend>, text: &str) {
        for c in text.chars() {
            app.input_form_add_char(c);
        }
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.ui_mode, UiMode::Launcher);
        assert_eq!(app.tools.len(), 17);
        assert_eq!(app.launcher_index, 0);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_reopens_tool_from_last_session() {
        let mut store = Store::open(MemoryBackend::new());
        store.open_modal(find_tool("habits").unwrap()).unwrap();
        let app = AppState::new(store);
        assert_eq!(app.ui_mode, UiMode::Tool);
        assert_eq!(app.highlighted_tool().unwrap().id, "habits");
    }

    #[test]
    fn test_move_launcher_stays_in_grid() {
        let mut app = create_test_app();
        app.move_launcher(-1);
        assert_eq!(app.launcher_index, 0);
        app.move_launcher(LAUNCHER_COLUMNS as isize);
        assert_eq!(app.launcher_index, LAUNCHER_COLUMNS);
        app.move_launcher(100);
        assert_eq!(app.launcher_index, app.tools.len() - 1);
    }

    #[test]
    fn test_open_and_close_tool() {
        let mut app = create_test_app();
        open_tool(&mut app, "tasks");
        assert_eq!(app.ui_mode, UiMode::Tool);
        assert_eq!(app.active_tool_id(), Some("tasks"));

        app.close_tool();
        assert_eq!(app.ui_mode, UiMode::Launcher);
        assert!(!app.store.modal().is_open());
    }

    #[test]
    fn test_add_task_with_due_date() {
        let mut app = create_test_app();
        open_tool(&mut app, "tasks");
        app.start_add();
        type_text(&mut app, "Ship it");
        app.input_form_tab();
        type_text(&mut app, "2024-03-01");
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Tool);
        let task = &app.store.tasks()[0];
        assert_eq!(task.title, "Ship it");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_empty_title_keeps_form_open() {
        let mut app = create_test_app();
        open_tool(&mut app, "tasks");
        app.start_add();
        type_text(&mut app, "   ");
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Input);
        assert!(app.input_form.is_some());
        assert!(app.store.tasks().is_empty());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_bad_due_date_is_dropped() {
        let mut app = create_test_app();
        open_tool(&mut app, "tasks");
        app.start_add();
        type_text(&mut app, "Task");
        app.input_form_tab();
        type_text(&mut app, "tomorrow");
        app.submit_input_form();

        assert_eq!(app.store.tasks()[0].due_date, None);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_toggle_and_remove_selected_task() {
        let mut app = create_test_app();
        open_tool(&mut app, "tasks");
        app.store.add_task(Task::new("one", None).unwrap()).unwrap();
        app.store.add_task(Task::new("two", None).unwrap()).unwrap();

        app.move_selection_down();
        app.toggle_selected_task();
        app.toggle_selected_important();
        assert!(app.store.tasks()[1].completed);
        assert!(app.store.tasks()[1].important);

        app.remove_selected();
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_journal_entry_with_mood_and_edit() {
        let mut app = create_test_app();
        open_tool(&mut app, "journal");
        app.start_add();
        type_text(&mut app, "Calm day");
        app.input_form_tab();
        app.submit_input_form();
        assert_eq!(app.store.journal()[0].mood, Some(Mood::Good));

        app.start_edit_journal();
        assert_eq!(app.input_form.as_ref().unwrap().text, "Calm day");
        app.input_form_backspace();
        app.input_form_backspace();
        app.input_form_backspace();
        type_text(&mut app, "week");
        app.submit_input_form();
        assert_eq!(app.store.journal()[0].content, "Calm week");
    }

    #[test]
    fn test_toggle_habit_today() {
        let mut app = create_test_app();
        open_tool(&mut app, "habits");
        app.start_add();
        type_text(&mut app, "Stretch");
        app.submit_input_form();

        app.toggle_selected_habit(0);
        let today = Local::now().date_naive();
        assert!(app.store.habits()[0].is_done(today));
    }

    #[test]
    fn test_adjust_durations() {
        let mut app = create_test_app();
        app.adjust_work_minutes(5);
        assert_eq!(app.store.pomodoro().work_duration, 30 * 60);
        app.adjust_break_minutes(-10);
        assert_eq!(app.store.pomodoro().break_duration, 60);
    }

    #[test]
    fn test_failed_write_shows_status() {
        let mut app = create_test_app();
        app.store.backend_mut().set_fail_writes(true);
        app.toggle_pomodoro();
        assert!(app.store.pomodoro().is_active);
        assert!(app.status.as_deref().unwrap().starts_with("Not saved"));
    }

    #[test]
    fn test_drive_ticks_follows_running_flag() {
        let mut app = create_test_app();
        let clock = ManualClock::new();
        let mut driver = TickDriver::new(clock.clone());

        app.drive_ticks(&mut driver);
        assert!(!driver.is_armed());

        app.toggle_pomodoro();
        app.drive_ticks(&mut driver);
        clock.advance(Duration::from_secs(3));
        app.drive_ticks(&mut driver);
        assert_eq!(app.store.pomodoro().time_left, 1497);

        app.toggle_pomodoro();
        clock.advance(Duration::from_secs(3));
        app.drive_ticks(&mut driver);
        assert!(!driver.is_armed());
        assert_eq!(app.store.pomodoro().time_left, 1497);
    }

    #[test]
    fn test_drive_ticks_catches_up_with_one_write() {
        let mut app = create_test_app();
        let clock = ManualClock::new();
        let mut driver = TickDriver::new(clock.clone());

        app.toggle_pomodoro();
        app.drive_ticks(&mut driver);
        let writes = app.store.backend().writes();

        // blocked for 30 minutes, e.g. in the editor
        clock.advance(Duration::from_secs(1800));
        app.drive_ticks(&mut driver);

        assert_eq!(app.store.backend().writes(), writes + 1);
        let pomodoro = app.store.pomodoro();
        assert!(pomodoro.is_break);
        assert_eq!(pomodoro.time_left, pomodoro.break_duration - 299);
    }
}
