//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::entities::{Priority, TaskStatus};
use crate::notify::ToastKind;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub todo: &'static str,
    pub in_progress: &'static str,
    pub completed: &'static str,
}

/// Toast and dialog icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

/// Task metadata icons
#[derive(Debug, Clone)]
pub struct MetaIcons {
    pub starred: &'static str,
    pub due_date: &'static str,
    pub overdue: &'static str,
    pub category: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
    pub priority: PriorityIcons,
    pub meta: MetaIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                todo: "🔳",
                in_progress: "⏳",
                completed: "✅",
            },
            ui: UiIcons {
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            priority: PriorityIcons {
                high: "🔴",
                medium: "🟡",
                low: "🟢",
            },
            meta: MetaIcons {
                starred: "⭐",
                due_date: "📅",
                overdue: "⏰",
                category: "🏷️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                todo: "○",
                in_progress: "◐",
                completed: "●",
            },
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            priority: PriorityIcons {
                high: "▲",
                medium: "◆",
                low: "▼",
            },
            meta: MetaIcons {
                starred: "★",
                due_date: "◷",
                overdue: "⚠",
                category: "◉",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                todo: "[ ]",
                in_progress: "[~]",
                completed: "[X]",
            },
            ui: UiIcons {
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            priority: PriorityIcons {
                high: "!!",
                medium: "!",
                low: "-",
            },
            meta: MetaIcons {
                starred: "*",
                due_date: "@",
                overdue: "!",
                category: "#",
            },
        }
    }

    #[must_use]
    pub fn task_status(&self, status: TaskStatus) -> &'static str {
        let icons = self.icons().task_status;
        match status {
            TaskStatus::Todo => icons.todo,
            TaskStatus::InProgress => icons.in_progress,
            TaskStatus::Completed => icons.completed,
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::High => icons.high,
            Priority::Medium => icons.medium,
            Priority::Low => icons.low,
        }
    }

    #[must_use]
    pub fn toast(&self, kind: ToastKind) -> &'static str {
        let icons = self.icons().ui;
        match kind {
            ToastKind::Success => icons.success,
            ToastKind::Error => icons.error,
            ToastKind::Warning => icons.warning,
            ToastKind::Info => icons.info,
        }
    }

    #[must_use]
    pub fn starred(&self) -> &'static str {
        self.icons().meta.starred
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().meta.due_date
    }

    #[must_use]
    pub fn overdue(&self) -> &'static str {
        self.icons().meta.overdue
    }

    #[must_use]
    pub fn category(&self) -> &'static str {
        self.icons().meta.category
    }
}
