//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_TASK_CREATED: &str = "✅ Task added";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_VIEW_GRID: &str = "Switched to grid view";
pub const SUCCESS_VIEW_SPATIAL: &str = "Switched to spatial view";

// Error Messages
pub const ERROR_TASK_CREATE_FAILED: &str = "❌ Failed to save task";
pub const ERROR_TASK_STATUS_FAILED: &str = "❌ Failed to update task status";
pub const ERROR_TASK_STAR_FAILED: &str = "❌ Failed to update task";
pub const ERROR_TASK_UPDATE_FAILED: &str = "❌ Failed to update task";
pub const ERROR_TASK_DELETE_FAILED: &str = "❌ Failed to delete task";
pub const ERROR_STORE_LOAD_FAILED: &str = "❌ Failed to load tasks";

// Validation Messages
pub const INFO_EMPTY_TASK: &str = "Please enter a todo";
pub const INFO_NO_TASK_SELECTED: &str = "No task selected";
pub const INFO_VOICE_UNRECOGNISED: &str = "Command not recognised";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const APP_TITLE: &str = "todoflow";
pub const APP_TAGLINE: &str = "Tasks that celebrate with you";
pub const LANDING_SIGN_IN_HINT: &str = "Sign in to see your dashboard. Set your name and restart:";
pub const EMPTY_TASK_LIST: &str = "No tasks found. Press 'a' to add one.";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Minimum statistics panel width in columns
pub const STATS_PANEL_MIN_WIDTH: u16 = 20;
/// Maximum statistics panel width in columns
pub const STATS_PANEL_MAX_WIDTH: u16 = 60;
/// Default statistics panel width in columns
pub const STATS_PANEL_DEFAULT_WIDTH: u16 = 30;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 30;

// Logging
/// Lines kept in the in-memory buffer shown by the logs dialog
pub const MAX_LOG_ENTRIES: usize = 500;
