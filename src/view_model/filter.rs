use crate::entities::{Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status filter applied to the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    #[default]
    All,
    Todo,
    InProgress,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Todo, Filter::InProgress, Filter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Todo => task.status == TaskStatus::Todo,
            Filter::InProgress => task.status == TaskStatus::InProgress,
            Filter::Completed => task.status == TaskStatus::Completed,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Todo,
            Filter::Todo => Filter::InProgress,
            Filter::InProgress => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Todo => "todo",
            Filter::InProgress => "in-progress",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Todo => "To Do",
            Filter::InProgress => "In Progress",
            Filter::Completed => "Completed",
        }
    }
}

impl FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "todo" => Ok(Filter::Todo),
            "in-progress" => Ok(Filter::InProgress),
            "completed" => Ok(Filter::Completed),
            other => anyhow::bail!("unknown filter '{}'", other),
        }
    }
}

/// How the task collection is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Grid,
    Spatial,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Spatial,
            ViewMode::Spatial => ViewMode::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Spatial => "spatial",
        }
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "spatial" => Ok(ViewMode::Spatial),
            other => anyhow::bail!("unknown view mode '{}'", other),
        }
    }
}

fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
        || task.category.to_lowercase().contains(needle)
}

/// Tasks passing both the status filter and the search query, in source order.
///
/// The search is a case-insensitive substring match against title, description
/// and category. An empty query matches everything.
pub fn derive_filtered_view<'a>(tasks: &'a [Task], filter: Filter, search_query: &str) -> Vec<&'a Task> {
    let needle = search_query.to_lowercase();
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| needle.is_empty() || matches_search(task, &needle))
        .collect()
}
