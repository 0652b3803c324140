//! Task store abstraction.
//!
//! This module defines the contract the application expects from the hosted
//! data layer holding task records: a live, ordered collection that can be
//! subscribed to, and a small set of mutation requests. The in-process
//! [`memory::MemoryStore`] implements it; [`factory::create_store`] builds a
//! store from configuration.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::watch;

use crate::entities::{Priority, Task, TaskStatus};

pub mod factory;
pub mod memory;

pub use factory::create_store;
pub use memory::MemoryStore;

/// Common error types for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Other(String),
}

/// Arguments for the full-record edit path. `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct UpdateTaskArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub starred: Option<bool>,
}

impl UpdateTaskArgs {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Apply the requested changes to `task`
    pub fn apply_to(&self, task: &mut Task) -> Result<(), StoreError> {
        if let Some(title) = &self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(StoreError::InvalidData("task title cannot be empty".to_string()));
            }
            task.title = title.to_string();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(starred) = self.starred {
            task.starred = starred;
        }
        Ok(())
    }
}

/// Store trait that every task data layer must implement.
///
/// Mutations resolve once the store has accepted them; the updated collection
/// is then re-delivered to every subscriber.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the store type identifier (e.g., "memory").
    fn store_type(&self) -> &str;

    /// Current collection in insertion order
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Live view of the collection, updated after every accepted mutation
    fn subscribe(&self) -> watch::Receiver<Vec<Task>>;

    async fn create(&self, task: Task) -> Result<Task, StoreError>;
    async fn toggle_complete(&self, id: &str) -> Result<Task, StoreError>;
    async fn update(&self, id: &str, args: UpdateTaskArgs) -> Result<Task, StoreError>;
    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}
