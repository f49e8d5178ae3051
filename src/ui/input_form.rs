use crate::app::{AppState, InputPurpose};
use crate::persistence::Backend;
use crate::ui::{
    layout::create_form_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_line(value: &str, editing: bool) -> Line<'_> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ])
}

/// Render the input form for the open tool
pub fn render_input_form<B: Backend>(f: &mut Frame, app: &AppState<B>, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };
    let form_area = create_form_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, form_area);

    let label = match form.purpose {
        InputPurpose::AddTask => "Title:",
        InputPurpose::AddHabit => "Habit:",
        _ => "Text:",
    };

    let mut lines = vec![
        Line::raw(""),
        Line::raw(label),
        field_line(&form.text, form.editing_field == 0),
        Line::raw(""),
    ];

    match form.purpose {
        InputPurpose::AddTask => {
            lines.push(Line::raw("Due date (YYYY-MM-DD, optional):"));
            lines.push(field_line(&form.due_date, form.editing_field == 1));
        }
        InputPurpose::AddJournal => {
            let mood = form
                .mood
                .map(|m| format!("{} {}", m.symbol(), m.label()))
                .unwrap_or_else(|| "none".to_string());
            lines.push(Line::from(vec![
                Span::raw("Mood: "),
                Span::styled(mood, modal_title_style()),
            ]));
        }
        _ => {}
    }

    if let Some(status) = &app.status {
        lines.push(Line::raw(""));
        lines.push(Line::raw(status.clone()));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(form.purpose.title(), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, form_area);
}
