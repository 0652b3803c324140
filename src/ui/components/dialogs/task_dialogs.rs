use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::layout::LayoutManager;
use crate::voice::VOCABULARY;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Single-line input dialog used for creating and editing a todo
pub fn render_task_input_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    input_buffer: &str,
    cursor_position: usize,
    submit_label: &'static str,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} ", title), Color::Cyan);
    let inner = block.inner(dialog_area);
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Length(1)])
        .margin(1)
        .split(inner);

    f.render_widget(block, dialog_area);
    f.render_widget(create_input_paragraph(input_buffer, cursor_position, "Todo"), chunks[0]);
    f.render_widget(
        create_instructions_paragraph(&[("Enter", Color::Green, submit_label), shortcuts::ESC_CANCEL]),
        chunks[2],
    );
}

/// Search dialog; the task list behind it filters live while typing
pub fn render_task_search_dialog(
    f: &mut Frame,
    area: Rect,
    input_buffer: &str,
    cursor_position: usize,
    match_count: usize,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" Search Todos ".to_string(), Color::Yellow);
    let inner = block.inner(dialog_area);
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(inner);

    let summary = if input_buffer.trim().is_empty() {
        "Start typing to search title and description".to_string()
    } else if match_count == 1 {
        "1 matching todo".to_string()
    } else {
        format!("{} matching todos", match_count)
    };

    f.render_widget(block, dialog_area);
    f.render_widget(create_input_paragraph(input_buffer, cursor_position, "Query"), chunks[0]);
    f.render_widget(Paragraph::new(summary).style(Style::default().fg(Color::Gray)), chunks[1]);
    f.render_widget(
        create_instructions_paragraph(&[("Enter", Color::Green, " Keep"), ("Esc", Color::Red, " Clear")]),
        chunks[3],
    );
}

/// Typed stand-in for the speech recognizer
pub fn render_voice_prompt_dialog(f: &mut Frame, area: Rect, input_buffer: &str, cursor_position: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" 🎤 Voice Command ".to_string(), Color::Magenta);
    let inner = block.inner(dialog_area);
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(inner);

    let phrases = VOCABULARY
        .iter()
        .map(|entry| entry.phrase)
        .collect::<Vec<_>>()
        .join(" • ");

    f.render_widget(block, dialog_area);
    f.render_widget(create_input_paragraph(input_buffer, cursor_position, "Say"), chunks[0]);
    f.render_widget(Paragraph::new(phrases).style(Style::default().fg(Color::Gray)), chunks[1]);
    f.render_widget(
        create_instructions_paragraph(&[("Enter", Color::Green, " Send"), shortcuts::ESC_CANCEL]),
        chunks[3],
    );
}
