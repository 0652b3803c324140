use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{watch, RwLock};

use super::{StoreError, TaskStore, UpdateTaskArgs};
use crate::entities::Task;

/// In-process task store.
///
/// Keeps tasks in insertion order and publishes a fresh snapshot on its watch
/// channel after every successful mutation.
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
    snapshot_tx: watch::Sender<Vec<Task>>,
    fail_mutations: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let (snapshot_tx, _) = watch::channel(tasks.clone());
        Self {
            tasks: RwLock::new(tasks),
            snapshot_tx,
            fail_mutations: AtomicBool::new(false),
        }
    }

    /// Make every subsequent mutation fail with [`StoreError::Unavailable`]
    pub fn set_fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail_mutations.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("memory store is rejecting writes".to_string()));
        }
        Ok(())
    }

    fn publish(&self, tasks: &[Task]) {
        // send_replace keeps the value current even when nobody is subscribed
        self.snapshot_tx.send_replace(tasks.to_vec());
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    fn store_type(&self) -> &str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.read().await.clone())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.snapshot_tx.subscribe()
    }

    async fn create(&self, task: Task) -> Result<Task, StoreError> {
        self.check_available()?;
        if task.title.trim().is_empty() {
            return Err(StoreError::InvalidData("task title cannot be empty".to_string()));
        }

        let mut tasks = self.tasks.write().await;
        if tasks.iter().any(|existing| existing.id == task.id) {
            return Err(StoreError::Conflict(format!("task {} already exists", task.id)));
        }
        tasks.push(task.clone());
        self.publish(&tasks);
        Ok(task)
    }

    async fn toggle_complete(&self, id: &str) -> Result<Task, StoreError> {
        self.check_available()?;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        task.status = task.status.toggled();
        let updated = task.clone();
        self.publish(&tasks);
        Ok(updated)
    }

    async fn update(&self, id: &str, args: UpdateTaskArgs) -> Result<Task, StoreError> {
        self.check_available()?;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        // A rejected edit leaves the stored record untouched
        let mut edited = task.clone();
        args.apply_to(&mut edited)?;
        *task = edited.clone();
        self.publish(&tasks);
        Ok(edited)
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.check_available()?;
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        tasks.remove(index);
        self.publish(&tasks);
        Ok(())
    }
}
