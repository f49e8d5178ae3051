use crate::domain::HabitTrack;
use crate::ui::styles::{default_style, done_style, muted_style, selected_style};
use chrono::{Days, NaiveDate};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Days shown per habit, today first
const WEEK: u64 = 7;

/// Today and the six days before it, in key order (1 = today)
pub fn week_ending(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK)
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

/// One row per habit with a mark for each of the last seven days
pub fn render_habits_pane(
    f: &mut Frame,
    habits: &[HabitTrack],
    selected: usize,
    today: NaiveDate,
    area: Rect,
) {
    if habits.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No habits yet. Press a to add one.", muted_style())),
            area,
        );
        return;
    }

    let days = week_ending(today);
    let name_width = habits
        .iter()
        .map(|h| h.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut header = vec![Span::raw(format!("{:width$}  ", "", width = name_width))];
    for (key, day) in days.iter().enumerate() {
        header.push(Span::styled(
            format!("{}{} ", key + 1, &day.format("%a").to_string()[..1]),
            muted_style(),
        ));
    }
    let mut lines = vec![Line::from(header), Line::raw("")];

    for (idx, habit) in habits.iter().enumerate() {
        let row_style = if idx == selected {
            selected_style()
        } else {
            default_style()
        };
        let mut spans = vec![Span::styled(
            format!("{:width$}  ", habit.name, width = name_width),
            row_style,
        )];
        for day in &days {
            let (mark, style): (&str, Style) = if habit.is_done(*day) {
                (" ■ ", done_style())
            } else {
                (" · ", muted_style())
            };
            spans.push(Span::styled(mark, style));
        }
        spans.push(Span::styled(
            format!("  streak {}", habit.streak_ending(today)),
            muted_style(),
        ));
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}
