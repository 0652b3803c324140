//! Layout management and calculations

use crate::constants::MAIN_AREA_MIN_WIDTH;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the dashboard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub header: Rect,
    pub filter_bar: Rect,
    pub main: Rect,
    pub stats: Rect,
    pub status_bar: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Header (1 line), filter tabs (3 lines), main content with the stats
    /// panel on the right, status bar (1 line). The stats panel collapses
    /// when the terminal is too narrow to keep the main area usable.
    #[must_use]
    pub fn dashboard_layout(area: Rect, stats_panel_width: u16) -> DashboardAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let stats_width = if rows[2].width.saturating_sub(stats_panel_width) >= MAIN_AREA_MIN_WIDTH {
            stats_panel_width
        } else {
            0
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(stats_width)])
            .split(rows[2]);

        DashboardAreas {
            header: rows[0],
            filter_bar: rows[1],
            main: columns[0],
            stats: columns[1],
            status_bar: rows[3],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Stack of toasts in the top right corner, one 3-line box per toast
    #[must_use]
    pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
        let width = area.width.min(44);
        let x = area.x + area.width.saturating_sub(width + 1);
        (0..count)
            .map(|index| Rect::new(x, area.y + 1 + (index as u16) * 3, width, 3))
            .filter(|rect| rect.bottom() <= area.bottom())
            .collect()
    }
}
