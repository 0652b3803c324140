//! Filter tabs with per-status task counts.

use crate::ui::core::{actions::Action, Component};
use crate::view_model::Filter;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Tabs},
    Frame,
};

pub struct FilterBarComponent {
    pub active: Filter,
    pub counts: [(Filter, usize); 4],
    pub search_query: String,
}

impl Default for FilterBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self {
            active: Filter::All,
            counts: Filter::ALL.map(|filter| (filter, 0)),
            search_query: String::new(),
        }
    }

    pub fn update_data(&mut self, active: Filter, counts: [(Filter, usize); 4], search_query: &str) {
        self.active = active;
        self.counts = counts;
        self.search_query = search_query.to_string();
    }

    fn selected_index(&self) -> usize {
        Filter::ALL.iter().position(|filter| *filter == self.active).unwrap_or(0)
    }
}

impl Component for FilterBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => Action::CycleFilter,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Action::SetFilter(Filter::ALL[index])
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let search_width = if self.search_query.is_empty() {
            0
        } else {
            (self.search_query.chars().count() as u16 + 8).min(rect.width / 2)
        };
        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(search_width)]).split(rect);

        let titles: Vec<Line> = self
            .counts
            .iter()
            .enumerate()
            .map(|(index, (filter, count))| {
                Line::from(vec![
                    Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
                    Span::raw(format!("{} ", filter.label())),
                    Span::styled(format!("{}", count), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Filter "),
            )
            .select(self.selected_index())
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");
        f.render_widget(tabs, chunks[0]);

        if search_width > 0 {
            let search = Paragraph::new(self.search_query.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .title(" / "),
                );
            f.render_widget(search, chunks[1]);
        }
    }
}
