//! Statistics panel

use crate::ui::core::{actions::Action, Component};
use crate::view_model::Statistics;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Gauge, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct StatsPanelComponent {
    pub statistics: Statistics,
    pub milestone_interval: usize,
    /// Last milestone that was celebrated, if any
    pub last_milestone: Option<usize>,
}

impl StatsPanelComponent {
    pub fn new(milestone_interval: usize) -> Self {
        Self {
            milestone_interval: milestone_interval.max(1),
            ..Default::default()
        }
    }

    pub fn update_data(&mut self, statistics: Statistics, last_milestone: Option<usize>) {
        self.statistics = statistics;
        self.last_milestone = last_milestone;
    }

    /// Completed tasks still needed for the next milestone
    pub fn to_next_milestone(&self) -> usize {
        let interval = self.milestone_interval.max(1);
        interval - self.statistics.completed % interval
    }

    fn stat_line(label: &str, value: usize, color: Color) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    }
}

impl Component for StatsPanelComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if rect.width == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Progress ");
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).split(inner);

        let stats = &self.statistics;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Rgb(31, 41, 55)))
            .percent(u16::from(stats.completion_rate.min(100)))
            .label(format!("{}% complete", stats.completion_rate));
        f.render_widget(gauge, chunks[0]);

        let mut lines = vec![
            Self::stat_line("Total", stats.total, Color::White),
            Self::stat_line("Completed", stats.completed, Color::Green),
            Self::stat_line("In progress", stats.in_progress, Color::Yellow),
            Self::stat_line("To do", stats.todo, Color::Cyan),
            Self::stat_line("Starred", stats.starred, Color::Yellow),
            Line::from(""),
        ];

        if stats.is_all_done() {
            lines.push(Line::from(Span::styled(
                "All done! ✨",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("{} more to the next milestone", self.to_next_milestone()),
                Style::default().fg(Color::Gray),
            )));
        }
        if let Some(milestone) = self.last_milestone {
            lines.push(Line::from(Span::styled(
                format!("🏆 Last milestone: {}", milestone),
                Style::default().fg(Color::Rgb(245, 158, 11)),
            )));
        }

        f.render_widget(Paragraph::new(lines), chunks[2]);
    }
}
