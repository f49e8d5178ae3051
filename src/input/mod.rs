pub mod handler;

pub use handler::{edit_selected_note, handle_key, wants_editor};
