//! Store factory for creating task stores from configuration.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{Duration, Local};
use serde_json::Value;

use super::{memory::MemoryStore, TaskStore};
use crate::entities::task::next_task_id;
use crate::entities::{Priority, Task, TaskStatus};

/// Create a store instance from a store type and JSON-encoded options.
///
/// # Arguments
/// * `store_type` - The type of store (e.g., "memory")
/// * `options` - JSON-encoded options string
///
/// # Errors
/// Returns error if:
/// - Store type is unknown
/// - Options are invalid JSON
pub fn create_store(store_type: &str, options: &str) -> Result<Arc<dyn TaskStore>> {
    let opts: Value = if options.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(options).map_err(|e| anyhow!("Failed to parse store options JSON: {}", e))?
    };

    match store_type {
        "memory" => {
            let seed_demo = opts["seed_demo"].as_bool().unwrap_or(false);
            let tasks = if seed_demo { demo_tasks() } else { Vec::new() };
            log::info!("Creating memory store with {} seeded tasks", tasks.len());
            Ok(Arc::new(MemoryStore::with_tasks(tasks)))
        }
        _ => Err(anyhow!("Unknown store type: {}", store_type)),
    }
}

/// A handful of tasks covering every status and priority
pub fn demo_tasks() -> Vec<Task> {
    let today = Local::now().date_naive();
    let specs: [(&str, &str, Priority, TaskStatus, i64, &str, bool); 4] = [
        (
            "Plan the week",
            "Review goals and block focus time",
            Priority::High,
            TaskStatus::InProgress,
            0,
            "Work",
            true,
        ),
        ("Buy groceries", "Milk, eggs, coffee", Priority::Medium, TaskStatus::Todo, 1, "Personal", false),
        ("Renew passport", "", Priority::Low, TaskStatus::Todo, -2, "Errands", false),
        ("Morning run", "5km around the park", Priority::Medium, TaskStatus::Completed, 0, "Health", false),
    ];

    specs
        .into_iter()
        .map(|(title, description, priority, status, offset, category, starred)| {
            let mut task = Task::with_id(next_task_id(), title, today + Duration::days(offset));
            task.description = description.to_string();
            task.priority = priority;
            task.status = status;
            task.category = category.to_string();
            task.starred = starred;
            task
        })
        .collect()
}
