//! Core UI functionality for todoflow.
//!
//! This module contains the fundamental building blocks for the user interface:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//! - [`task_manager`] - Background store calls and timers
//!
//! Components turn key events into [`Action`]s, the app component applies
//! them, and background work reports back through the same action channel.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{JobId, JobKind, TaskManager};
