//! Utility modules for todoflow.
//!
//! - [`datetime`] - Due date formatting and parsing
//! - [`color`] - Hex colour conversion for the terminal palette

pub mod color;
pub mod datetime;
