//! Toasts and celebration overlays drawn above the dashboard.

use crate::celebration::ActiveCelebration;
use crate::icons::IconService;
use crate::notify::{Toast, ToastKind};
use crate::ui::layout::LayoutManager;
use crate::utils::color::hex_to_color;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Warning => Color::Yellow,
        ToastKind::Info => Color::Cyan,
    }
}

/// Stack toasts in the top right corner, oldest on top
pub fn render_toasts<'a>(f: &mut Frame, area: Rect, toasts: impl Iterator<Item = &'a Toast>, icons: &IconService) {
    let toasts: Vec<&Toast> = toasts.collect();
    let areas = LayoutManager::toast_areas(area, toasts.len());

    for (toast, toast_area) in toasts.into_iter().zip(areas) {
        let color = toast_color(toast.kind);
        let mut text = format!("{} {}", icons.toast(toast.kind), toast.title);
        if let Some(message) = &toast.message {
            text.push_str(": ");
            text.push_str(message);
        }

        let paragraph = Paragraph::new(text).style(Style::default().fg(Color::White)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

/// Deterministic confetti field: glyphs scatter across the area and drift
/// down one row every couple of frames.
pub fn confetti_positions(area: Rect, frame: u64, count: usize) -> Vec<(u16, u16, usize)> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let seed = (i as u64).wrapping_mul(2_654_435_761).wrapping_add(97);
            let x = (seed % u64::from(area.width)) as u16;
            let y = ((seed / 7 + frame / 2) % u64::from(area.height)) as u16;
            (area.x + x, area.y + y, i % 3)
        })
        .collect()
}

pub fn render_celebration(f: &mut Frame, area: Rect, celebration: &ActiveCelebration) {
    let style = celebration.kind.style();

    let confetti_count = (usize::from(area.width) * usize::from(area.height) / 40).clamp(12, 160);
    let buf = f.buffer_mut();
    for (x, y, variant) in confetti_positions(area, celebration.frame, confetti_count) {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(style.glyphs[variant])
                .set_style(Style::default().fg(hex_to_color(style.colors[variant])));
        }
    }

    let banner_area = LayoutManager::centered_rect_lines(40, 5, area);
    f.render_widget(Clear, banner_area);
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            style.message,
            Style::default()
                .fg(hex_to_color(style.colors[0]))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(hex_to_color(style.colors[1]))),
    );
    f.render_widget(banner, banner_area);
}
