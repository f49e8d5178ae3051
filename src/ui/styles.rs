use crate::domain::Category;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Countdown gauge style for the focus phase
pub fn work_gauge_style() -> Style {
    Style::default().fg(Color::Red).bg(Color::DarkGray)
}

/// Countdown gauge style for the break phase
pub fn break_gauge_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Done/completed style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Important task marker
pub fn important_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Overdue due date
pub fn overdue_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Secondary text such as timestamps
pub fn muted_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Accent color of a launcher category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::TimeManagement => Color::Red,
        Category::Productivity => Color::Green,
        Category::Wellness => Color::Magenta,
        Category::Utilities => Color::Blue,
    }
}
