use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::entities::{Priority, Task};
use crate::icons::IconService;
use crate::scene::priority_color;
use crate::utils::color::hex_to_color;
use crate::utils::datetime::format_human_date_from;

/// Coloured priority marker, same palette as the spatial view
#[must_use]
pub fn create_priority_badge(priority: Priority, icons: &IconService) -> Span<'static> {
    Span::styled(
        icons.priority(priority),
        Style::default()
            .fg(hex_to_color(priority_color(priority)))
            .add_modifier(Modifier::BOLD),
    )
}

/// Category label on a muted background
#[must_use]
pub fn create_category_badge(category: &str, icons: &IconService) -> Span<'static> {
    Span::styled(
        format!("{} {}", icons.category(), category),
        Style::default().fg(Color::White).bg(Color::Rgb(55, 65, 81)),
    )
}

/// Due date relative to `today`, red when the task is overdue
#[must_use]
pub fn create_due_badge(task: &Task, today: NaiveDate, icons: &IconService) -> Span<'static> {
    let label = format_human_date_from(task.due_date, today);
    if task.is_overdue(today) {
        Span::styled(
            format!("{} {}", icons.overdue(), label),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("{} {}", icons.due_date(), label),
            Style::default().fg(Color::Rgb(255, 165, 0)),
        )
    }
}

/// Metadata badges shown after the task title
#[must_use]
pub fn create_task_badges(task: &Task, today: NaiveDate, icons: &IconService) -> Vec<Span<'static>> {
    let mut badges = vec![create_category_badge(&task.category, icons)];

    if !task.status.is_completed() {
        badges.push(create_due_badge(task, today, icons));
    }

    if task.starred {
        badges.push(Span::styled(icons.starred(), Style::default().fg(Color::Yellow)));
    }

    badges
}
