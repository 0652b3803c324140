//! todoflow - a terminal task manager that celebrates progress
//!
//! Tasks live in a pluggable task store and are mirrored into an in-memory
//! view model that derives filtered views and live statistics. Completing
//! tasks, reaching milestones and finishing the list fire celebrations.
//!
//! # Modules
//!
//! * [`view_model`] - Task collection, filters, statistics and milestones
//! * [`store`] - Task store contract and the in-memory implementation
//! * [`session`] - Signed-in user and the landing/dashboard gate
//! * [`voice`] - Voice command vocabulary and subscriptions
//! * [`scene`] - Spiral layout and projection for the spatial view
//! * [`ui`] - Terminal user interface components and rendering

/// Celebration kinds and the timed overlay state
pub mod celebration;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task records
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Toast notifications
pub mod notify;

/// Spatial scene layout
pub mod scene;

/// Session provider and route gating
pub mod session;

/// Task store abstraction
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// In-memory task view model
pub mod view_model;

/// Voice command parsing and dispatch
pub mod voice;

pub use entities::task;
