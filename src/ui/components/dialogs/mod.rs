//! Rendering helpers for the modal dialogs

pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;
pub mod task_dialogs;
