//! Modal dialog component.
//!
//! One component owns whichever dialog is open: the todo input dialogs, the
//! live search prompt, the typed voice prompt and the read-only system dialogs
//! (help, logs, info, error). Rendering of each dialog lives in
//! [`crate::ui::components::dialogs`]; this module keeps the input buffer and
//! turns keys into actions.

use crate::constants::INFO_EMPTY_TASK;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::notify::ToastKind;
use crate::store::UpdateTaskArgs;
use crate::ui::components::dialogs::{scroll_behavior::DialogScroll, system_dialogs, task_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Cursor position in characters, not bytes
    pub cursor_position: usize,
    pub icons: IconService,
    pub scroll: DialogScroll,
    /// Number of todos matching the current search, shown in the search dialog
    pub search_match_count: usize,
    pub voice_supported: bool,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            icons: IconService::default(),
            scroll: DialogScroll::default(),
            search_match_count: 0,
            voice_supported: false,
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn set_input(&mut self, text: &str) {
        self.input_buffer = text.to_string();
        self.cursor_position = text.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.input_buffer.len())
    }

    /// Apply a line-editing key. Returns true when the buffer content changed.
    fn edit_input(&mut self, code: KeyCode) -> bool {
        let char_count = self.input_buffer.chars().count();
        match code {
            KeyCode::Char(c) => {
                let index = self.byte_index(self.cursor_position);
                self.input_buffer.insert(index, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                let index = self.byte_index(self.cursor_position - 1);
                self.input_buffer.remove(index);
                self.cursor_position -= 1;
                true
            }
            KeyCode::Delete if self.cursor_position < char_count => {
                let index = self.byte_index(self.cursor_position);
                self.input_buffer.remove(index);
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(char_count);
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = char_count;
                false
            }
            _ => false,
        }
    }

    fn handle_submit(&mut self) -> Action {
        let input = self.input_buffer.trim().to_string();
        let action = match &self.dialog_type {
            Some(DialogType::TaskCreation) => {
                if input.is_empty() {
                    // The dialog stays open so the user can type a title
                    return Action::Notify(ToastKind::Info, INFO_EMPTY_TASK.to_string());
                }
                Action::CreateTask(input)
            }
            Some(DialogType::TaskEdit { task_id, title }) => {
                if input.is_empty() {
                    return Action::Notify(ToastKind::Info, INFO_EMPTY_TASK.to_string());
                }
                if input == *title {
                    Action::HideDialog
                } else {
                    Action::EditTask {
                        id: task_id.clone(),
                        args: UpdateTaskArgs::title(input),
                    }
                }
            }
            Some(DialogType::DeleteConfirmation { task_id, .. }) => Action::DeleteTask(task_id.clone()),
            Some(DialogType::VoicePrompt) => {
                if input.is_empty() {
                    Action::HideDialog
                } else {
                    Action::VoiceTranscript(input)
                }
            }
            Some(DialogType::TaskSearch { .. }) => Action::HideDialog,
            _ => Action::None,
        };
        self.clear_dialog();
        action
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    fn handle_scrollable_keys(&mut self, key: KeyEvent, close_keys: &[KeyCode], any_key_closes: bool) -> Action {
        if close_keys.contains(&key.code) {
            return Action::HideDialog;
        }
        if self.scroll.handle_key(key.code) || !any_key_closes {
            Action::None
        } else {
            Action::HideDialog
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match dialog_type {
            DialogType::Info(_) | DialogType::Error(_) => self.handle_scrollable_keys(key, &[], true),
            DialogType::Help => {
                self.handle_scrollable_keys(key, &[KeyCode::Esc, KeyCode::Char('?'), KeyCode::Char('h')], false)
            }
            DialogType::Logs => {
                self.handle_scrollable_keys(key, &[KeyCode::Esc, KeyCode::Char('G'), KeyCode::Char('q')], false)
            }
            DialogType::DeleteConfirmation { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => self.handle_submit(),
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::TaskSearch { .. } => match key.code {
                KeyCode::Enter => self.handle_submit(),
                KeyCode::Esc => {
                    self.clear_dialog();
                    Action::SetSearch(String::new())
                }
                code => {
                    if self.edit_input(code) {
                        Action::SetSearch(self.input_buffer.clone())
                    } else {
                        Action::None
                    }
                }
            },
            _ => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                code => {
                    self.edit_input(code);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                match &dialog_type {
                    DialogType::TaskEdit { title, .. } => self.set_input(title),
                    DialogType::TaskSearch { query } => self.set_input(query),
                    _ => self.set_input(""),
                }
                log::debug!("Dialog opened: {:?}", dialog_type);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::TaskCreation => task_dialogs::render_task_input_dialog(
                f,
                rect,
                "New Todo",
                &self.input_buffer,
                self.cursor_position,
                " Add",
            ),
            DialogType::TaskEdit { .. } => task_dialogs::render_task_input_dialog(
                f,
                rect,
                "Edit Todo",
                &self.input_buffer,
                self.cursor_position,
                " Save",
            ),
            DialogType::TaskSearch { .. } => task_dialogs::render_task_search_dialog(
                f,
                rect,
                &self.input_buffer,
                self.cursor_position,
                self.search_match_count,
            ),
            DialogType::VoicePrompt => {
                task_dialogs::render_voice_prompt_dialog(f, rect, &self.input_buffer, self.cursor_position)
            }
            DialogType::DeleteConfirmation { title, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &title)
            }
            DialogType::Info(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                &self.icons,
                ToastKind::Info,
                &message,
                self.scroll.offset,
                &mut self.scroll.state,
            ),
            DialogType::Error(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                &self.icons,
                ToastKind::Error,
                &message,
                self.scroll.offset,
                &mut self.scroll.state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(
                f,
                rect,
                self.voice_supported,
                self.scroll.offset,
                &mut self.scroll.state,
            )
            }
            DialogType::Logs => {
                let logger = self.logger.clone().unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logger, self.scroll.offset, &mut self.scroll.state)
            }
        }
    }
}
