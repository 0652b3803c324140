//! Status bar

use crate::session::Route;
use crate::view_model::ViewMode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub struct StatusBar;

impl StatusBar {
    /// Shortcut hints, prefixed with the number of background operations still running
    pub fn render(f: &mut Frame, area: Rect, route: Route, view_mode: ViewMode, pending_operations: usize) {
        let hints = match (route, view_mode) {
            (Route::Landing, _) => "?: help • q: quit",
            (Route::Dashboard, ViewMode::Grid) => {
                "a: add • Space: toggle • s: star • /: search • Tab: filter • v: spatial • ?: help • q: quit"
            }
            (Route::Dashboard, ViewMode::Spatial) => {
                "j/k: select • Space: toggle • r: spin • v: grid • ?: help • q: quit"
            }
        };

        let (text, color) = if pending_operations > 0 {
            (format!("⟳ Saving ({}) • {}", pending_operations, hints), Color::Yellow)
        } else {
            (hints.to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        f.render_widget(status_bar, area);
    }
}
