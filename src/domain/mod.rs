pub mod collection;
pub mod enums;
pub mod habit;
pub mod journal;
pub mod note;
pub mod pomodoro;
pub mod task;
pub mod tool;

pub use collection::ValidationError;
pub use enums::{Category, Mood, Phase, UiMode};
pub use habit::HabitTrack;
pub use journal::JournalEntry;
pub use note::Note;
pub use pomodoro::PomodoroState;
pub use task::Task;
pub use tool::{catalog, find_tool, ModalState, Tool};
