use crate::domain::Task;
use crate::ui::styles::{
    default_style, done_style, important_style, muted_style, overdue_style, selected_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the task list
pub fn render_task_list(f: &mut Frame, tasks: &[Task], selected: usize, today: NaiveDate, area: Rect) {
    if tasks.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No tasks yet. Press a to add one.", muted_style())),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, today);
            let style = if idx == selected {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items), area);
}

/// Format: [x] ★ Write proposal  due 2024-03-01
fn create_task_line(task: &Task, today: NaiveDate) -> Line<'static> {
    let mut spans = Vec::new();

    let check = if task.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(check.to_string()));

    if task.important {
        spans.push(Span::styled("★ ".to_string(), important_style()));
    }

    let title_style = if task.completed {
        done_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(task.title.clone(), title_style));

    if let Some(due) = task.due_date {
        let style = if task.is_overdue(today) {
            overdue_style()
        } else {
            muted_style()
        };
        spans.push(Span::styled(format!("  due {}", due.format("%Y-%m-%d")), style));
    }

    Line::from(spans)
}
