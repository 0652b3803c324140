//! Landing screen shown when nobody is signed in.

use crate::constants::{APP_TAGLINE, APP_TITLE, LANDING_SIGN_IN_HINT};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_landing(f: &mut Frame, area: Rect, user_env: &str) {
    let card = LayoutManager::centered_rect_lines(60, 11, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(LANDING_SIGN_IN_HINT),
        Line::from(Span::styled(
            format!("export {}=<your name>", user_env),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled("q: quit • ?: help", Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, card);
}
