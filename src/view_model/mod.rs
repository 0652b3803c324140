//! Task view model: the in-memory task collection plus the view parameters
//! applied to it.
//!
//! The view model owns the tasks, the active [`Filter`], the search query, the
//! [`ViewMode`] and the task input buffer. Derived views ([`derive_filtered_view`])
//! and aggregate [`Statistics`] are pure functions recomputed on demand.
//!
//! Mutations return an [`Outcome`] describing the celebrations they trigger.
//! Immediate celebrations are listed in [`Outcome::celebrations`]; a reached
//! milestone is reported separately in [`Outcome::milestone`] so the caller can
//! schedule it after a short delay on a timer it owns.

pub mod filter;
pub mod milestone;
pub mod statistics;

pub use filter::{derive_filtered_view, Filter, ViewMode};
pub use milestone::MilestoneTracker;
pub use statistics::{check_milestone, derive_statistics, Statistics, DEFAULT_MILESTONE_INTERVAL};

use crate::celebration::CelebrationKind;
use crate::entities::{Task, TaskStatus};

/// Side effects produced by a view model mutation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Record created or modified by the operation, `None` for a no-op
    pub task: Option<Task>,
    pub celebrations: Vec<CelebrationKind>,
    /// Completed count of a newly reached milestone, to be celebrated after a delay
    pub milestone: Option<usize>,
}

impl Outcome {
    pub fn is_noop(&self) -> bool {
        self.task.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskViewModel {
    tasks: Vec<Task>,
    filter: Filter,
    search_query: String,
    view_mode: ViewMode,
    input: String,
    milestones: MilestoneTracker,
    all_done_celebrated: bool,
}

impl TaskViewModel {
    pub fn new(milestone_interval: usize) -> Self {
        Self {
            milestones: MilestoneTracker::new(milestone_interval),
            ..Default::default()
        }
    }

    /// Start from an existing collection. Progress already present is not celebrated.
    pub fn with_tasks(tasks: Vec<Task>, milestone_interval: usize) -> Self {
        let mut view_model = Self::new(milestone_interval);
        view_model.load_tasks(tasks);
        view_model
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn milestone_tracker(&self) -> &MilestoneTracker {
        &self.milestones
    }

    // View parameters

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn cycle_filter(&mut self) -> Filter {
        self.filter = self.filter.next();
        self.filter
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    // Input buffer

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Create a task from the current input buffer
    pub fn submit_input(&mut self) -> Outcome {
        let text = self.input.clone();
        self.create_task(&text)
    }

    // Derived views

    pub fn visible_tasks(&self) -> Vec<&Task> {
        derive_filtered_view(&self.tasks, self.filter, &self.search_query)
    }

    pub fn statistics(&self) -> Statistics {
        derive_statistics(&self.tasks)
    }

    /// Task count shown next to each filter tab (search query not applied)
    pub fn filter_counts(&self) -> [(Filter, usize); 4] {
        Filter::ALL.map(|filter| (filter, self.tasks.iter().filter(|task| filter.matches(task)).count()))
    }

    // Mutations

    /// Append a new task. Empty or whitespace-only titles are ignored.
    pub fn create_task(&mut self, title: &str) -> Outcome {
        let title = title.trim();
        if title.is_empty() {
            return Outcome::default();
        }

        let task = Task::new(title);
        self.tasks.push(task.clone());
        self.input.clear();

        let mut outcome = Outcome {
            task: Some(task),
            celebrations: vec![CelebrationKind::Celebration],
            milestone: None,
        };
        self.evaluate(&mut outcome);
        outcome
    }

    /// Flip a task between completed and todo. An in-progress task becomes completed.
    pub fn toggle_status(&mut self, id: &str) -> Outcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Outcome::default();
        };

        task.status = task.status.toggled();
        let mut outcome = Outcome {
            task: Some(task.clone()),
            ..Default::default()
        };
        if task.status == TaskStatus::Completed {
            outcome.celebrations.push(CelebrationKind::TaskCompleted);
        }

        self.evaluate(&mut outcome);
        outcome
    }

    pub fn toggle_star(&mut self, id: &str) -> Outcome {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.starred = !task.starred;
                Outcome {
                    task: Some(task.clone()),
                    ..Default::default()
                }
            }
            None => Outcome::default(),
        }
    }

    /// Adopt a fresh collection delivered by the task store.
    ///
    /// Snapshots can arrive after newer local edits, so nothing is celebrated
    /// here; milestone and achievement tracking are primed to the snapshot.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.load_tasks(tasks);
    }

    /// Replace the collection without celebrating existing progress
    pub fn load_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        let stats = self.statistics();
        self.milestones.prime(&stats);
        self.all_done_celebrated = stats.is_all_done();
    }

    fn evaluate(&mut self, outcome: &mut Outcome) {
        let stats = self.statistics();

        outcome.milestone = self.milestones.check(&stats);

        if stats.is_all_done() {
            if !self.all_done_celebrated {
                self.all_done_celebrated = true;
                outcome.celebrations.push(CelebrationKind::Achievement);
            }
        } else {
            self.all_done_celebrated = false;
        }
    }
}
