use crate::constants::EMPTY_TASK_LIST;
use crate::entities::{Task, TaskStatus};
use crate::icons::IconService;
use crate::ui::components::badge::{create_priority_badge, create_task_badges};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// The filtered task list shown in grid view mode
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    pub title: String,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            title: "Tasks".to_string(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    /// Replace the visible tasks, keeping the selection on the same task when it is still listed
    pub fn update_data(&mut self, tasks: Vec<Task>, title: String) {
        let selected_id = self.get_selected_task().map(|task| task.id.clone());
        self.tasks = tasks;
        self.title = title;
        if let Some(id) = selected_id {
            if let Some(index) = self.tasks.iter().position(|task| task.id == id) {
                self.selected_index = index;
            }
        }
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn create_task_item(&self, task: &Task) -> ListItem<'static> {
        let today = datetime::today();
        let mut line_spans = Vec::new();

        let status_style = match task.status {
            TaskStatus::Completed => Style::default().fg(Color::Green),
            TaskStatus::InProgress => Style::default().fg(Color::Yellow),
            TaskStatus::Todo => Style::default().fg(Color::White),
        };
        line_spans.push(Span::styled(
            format!("{} ", self.icons.task_status(task.status)),
            status_style,
        ));

        line_spans.push(create_priority_badge(task.priority, &self.icons));
        line_spans.push(Span::raw(" "));

        let content_style = if task.status.is_completed() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(task.title.clone(), content_style));

        for badge in create_task_badges(task, today, &self.icons) {
            line_spans.push(Span::raw(" "));
            line_spans.push(badge);
        }

        let mut lines = vec![Line::from(line_spans)];
        if !task.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", task.description),
                Style::default().fg(Color::Gray),
            )));
        }

        ListItem::new(lines)
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let selected = self.get_selected_task();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation),
            KeyCode::Enter | KeyCode::Char(' ') => match selected {
                Some(task) => Action::ToggleStatus(task.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('s') => match selected {
                Some(task) => Action::ToggleStar(task.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('p') => match selected {
                Some(task) => Action::CyclePriority(task.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('w') => match selected {
                Some(task) if task.status != TaskStatus::InProgress => Action::StartTask(task.id.clone()),
                _ => Action::None,
            },
            KeyCode::Char('e') => match selected {
                Some(task) => Action::ShowDialog(DialogType::TaskEdit {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('d') => match selected {
                Some(task) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ({}) ", self.title, self.tasks.len()));

        if self.tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_TASK_LIST)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();
        let total_items = items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);
        self.scrollbar_helper.update_state(
            total_items,
            self.selected_index,
            Some(list_area.height.saturating_sub(2) as usize),
        );

        let tasks_list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(tasks_list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
