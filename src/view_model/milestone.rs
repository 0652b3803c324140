use super::statistics::{Statistics, DEFAULT_MILESTONE_INTERVAL};

/// Remembers the completed count it last saw so a milestone fires once per
/// upward threshold crossing instead of once per recomputation.
///
/// Only a rising count fires. Reaching 5, dropping to 4 and completing another
/// task fires again; un-completing from 6 down to 5 does not.
#[derive(Debug, Clone)]
pub struct MilestoneTracker {
    interval: usize,
    last_celebrated: Option<usize>,
    last_completed: usize,
}

impl Default for MilestoneTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MILESTONE_INTERVAL)
    }
}

impl MilestoneTracker {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            last_celebrated: None,
            last_completed: 0,
        }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Most recent milestone at or below the current completed count
    pub fn last_celebrated(&self) -> Option<usize> {
        self.last_celebrated
    }

    /// Returns the completed count when a new milestone should be celebrated.
    pub fn check(&mut self, stats: &Statistics) -> Option<usize> {
        let rising = stats.completed > self.last_completed;
        self.last_completed = stats.completed;

        if let Some(last) = self.last_celebrated {
            if stats.completed < last {
                self.last_celebrated = None;
            }
        }

        if !rising || !stats.is_milestone(self.interval) {
            return None;
        }

        self.last_celebrated = Some(stats.completed);
        Some(stats.completed)
    }

    /// Record the current state as already seen without firing.
    ///
    /// Used whenever the collection is adopted wholesale (initial load, store
    /// snapshots) so existing progress does not trigger a celebration.
    pub fn prime(&mut self, stats: &Statistics) {
        self.last_completed = stats.completed;
        self.last_celebrated = stats.is_milestone(self.interval).then_some(stats.completed);
    }
}
