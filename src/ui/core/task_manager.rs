use super::actions::Action;
use crate::celebration::CelebrationKind;
use crate::entities::Task;
use crate::notify::ToastKind;
use crate::store::{StoreError, TaskStore};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Load,
    Subscription,
    StoreOperation,
    Timer,
}

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub kind: JobKind,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

/// Runs store calls and timers off the UI loop. Results come back as
/// [`Action`]s on the channel returned by [`TaskManager::new`]. Dropping the
/// manager aborts every job still running.
pub struct TaskManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, kind: JobKind, description: String, handle: JoinHandle<()>) -> JobId {
        let id = self.next_job_id;
        self.next_job_id += 1;
        self.jobs.insert(
            id,
            BackgroundJob {
                id,
                kind,
                handle,
                description,
                started_at: Instant::now(),
            },
        );
        id
    }

    /// Fetch the initial collection from the store
    pub fn spawn_initial_load(&mut self, store: Arc<dyn TaskStore>) -> JobId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match store.list().await {
                Ok(tasks) => Action::TasksLoaded(tasks),
                Err(e) => Action::StoreOperationFailed(format!("{}: {}", crate::constants::ERROR_STORE_LOAD_FAILED, e)),
            };
            let _ = action_sender.send(action);
        });

        self.register(JobKind::Load, "Initial load".to_string(), handle)
    }

    /// Re-read the collection after a rejected write. The result arrives as a
    /// snapshot so the view adopts whatever the store holds.
    pub fn spawn_resync(&mut self, store: Arc<dyn TaskStore>) -> JobId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match store.list().await {
                Ok(tasks) => Action::StoreSnapshot(tasks),
                Err(e) => Action::Notify(
                    ToastKind::Error,
                    format!("{}: {}", crate::constants::ERROR_STORE_LOAD_FAILED, e),
                ),
            };
            let _ = action_sender.send(action);
        });

        self.register(JobKind::Load, "Resync after failed write".to_string(), handle)
    }

    /// Forward every collection the store re-delivers as a snapshot action
    pub fn spawn_store_listener(&mut self, mut receiver: watch::Receiver<Vec<Task>>) -> JobId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let tasks = receiver.borrow_and_update().clone();
                if action_sender.send(Action::StoreSnapshot(tasks)).is_err() {
                    break;
                }
            }
        });

        self.register(JobKind::Subscription, "Store subscription".to_string(), handle)
    }

    /// Run a store mutation. Success reports the optional message, failure is
    /// prefixed with `failure_title`.
    pub fn spawn_store_operation<F, Fut>(&mut self, description: String, failure_title: &'static str, operation: F) -> JobId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Option<String>, StoreError>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match operation().await {
                Ok(message) => Action::StoreOperationSucceeded(message),
                Err(e) => Action::StoreOperationFailed(format!("{}: {}", failure_title, e)),
            };
            let _ = action_sender.send(action);
        });

        self.register(JobKind::StoreOperation, description, handle)
    }

    /// Fire a celebration after `delay`
    pub fn spawn_delayed_celebration(&mut self, kind: CelebrationKind, delay: Duration) -> JobId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(Action::Celebrate(kind));
        });

        self.register(JobKind::Timer, format!("Delayed {} celebration", kind.as_str()), handle)
    }

    /// Drop finished jobs. Returns how many were removed.
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.jobs.len();
        self.jobs.retain(|_, job| !job.handle.is_finished());
        before - self.jobs.len()
    }

    /// Number of store operations still in flight
    pub fn pending_operations(&self) -> usize {
        self.jobs
            .values()
            .filter(|job| job.kind == JobKind::StoreOperation && !job.handle.is_finished())
            .count()
    }

    /// Number of timers that have not fired yet
    pub fn pending_timers(&self) -> usize {
        self.jobs
            .values()
            .filter(|job| job.kind == JobKind::Timer && !job.handle.is_finished())
            .count()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, job) in self.jobs.drain() {
            log::debug!(
                "Aborting background job {} '{}' after {:?}",
                job.id,
                job.description,
                job.started_at.elapsed()
            );
            job.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.jobs.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
