use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Category assigned to tasks created without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Opaque task identifier, unique within a collection
pub type TaskId = String;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Next priority in the low -> medium -> high -> low cycle
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Binary toggle: completed goes back to todo, everything else becomes completed.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Completed => TaskStatus::Todo,
            TaskStatus::Todo | TaskStatus::InProgress => TaskStatus::Completed,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub category: String,
    pub starred: bool,
}

impl Model {
    /// Build a task with creation defaults. The title is trimmed; callers reject empty titles.
    pub fn new(title: &str) -> Self {
        Self::with_id(next_task_id(), title, Local::now().date_naive())
    }

    pub fn with_id(id: impl Into<TaskId>, title: &str, due_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.trim().to_string(),
            description: String::new(),
            priority: Priority::default(),
            status: TaskStatus::default(),
            due_date,
            category: DEFAULT_CATEGORY.to_string(),
            starred: false,
        }
    }

    /// Overdue means past its due date and not yet completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.status.is_completed()
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a task id from the current millisecond timestamp.
///
/// Ids are strictly increasing within the process, so two tasks created in
/// the same millisecond still get distinct identifiers.
pub fn next_task_id() -> TaskId {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = if now > last { now } else { last + 1 };
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}
