use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Rounded dialog frame tinted with `theme_color`
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Input field with a block cursor drawn at `cursor_position` (in chars)
pub fn create_input_paragraph(input_buffer: &str, cursor_position: usize, field_title: &str) -> Paragraph<'static> {
    let before: String = input_buffer.chars().take(cursor_position).collect();
    let after: String = input_buffer.chars().skip(cursor_position).collect();

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(Line::from(vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Cyan)),
        Span::styled(after, Style::default().fg(Color::White)),
    ]))
    .block(input_block)
}

/// (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

pub fn create_instructions_paragraph(instructions: &[InstructionShortcut]) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (index, (key, color, desc)) in instructions.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

pub mod shortcuts {
    use super::*;

    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}

/// Render `content` inside `area`, showing only the lines from the scroll
/// offset onwards and a scrollbar when the text does not fit.
pub fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    block: Block<'static>,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, area, scrollbar_state);
    }
}
