use crate::entities::{Task, TaskStatus};

/// Number of completed tasks between two milestone celebrations
pub const DEFAULT_MILESTONE_INTERVAL: usize = 5;

/// Aggregate counts over a task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
    pub starred: usize,
    /// Rounded percentage of completed tasks, 0 for an empty collection
    pub completion_rate: u8,
}

impl Statistics {
    /// True when the completed count sits on a positive multiple of `interval`
    pub fn is_milestone(&self, interval: usize) -> bool {
        interval > 0 && self.completed > 0 && self.completed % interval == 0
    }

    pub fn is_all_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub fn derive_statistics(tasks: &[Task]) -> Statistics {
    let mut stats = Statistics {
        total: tasks.len(),
        ..Default::default()
    };

    for task in tasks {
        match task.status {
            TaskStatus::Completed => stats.completed += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Todo => stats.todo += 1,
        }
        if task.starred {
            stats.starred += 1;
        }
    }

    if stats.total > 0 {
        stats.completion_rate = ((stats.completed as f64 * 100.0) / stats.total as f64).round() as u8;
    }

    stats
}

/// Milestone condition at the default interval of five completed tasks
pub fn check_milestone(stats: &Statistics) -> bool {
    stats.is_milestone(DEFAULT_MILESTONE_INTERVAL)
}
