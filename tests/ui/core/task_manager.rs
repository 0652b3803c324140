use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use todoflow::celebration::CelebrationKind;
use todoflow::entities::Task;
use todoflow::store::{MemoryStore, StoreError, TaskStore};
use todoflow::ui::core::{Action, TaskManager};

fn task(id: &str, title: &str) -> Task {
    Task::with_id(id, title, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
}

#[tokio::test]
async fn test_delayed_celebration_fires_after_delay() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delayed_celebration(CelebrationKind::Milestone, Duration::from_millis(10));
    assert_eq!(manager.pending_timers(), 1);
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(matches!(rx.try_recv(), Ok(Action::Celebrate(CelebrationKind::Milestone))));
    assert_eq!(manager.pending_timers(), 0);
    assert_eq!(manager.cleanup_finished_tasks(), 1);
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_store_operation_results() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_store_operation("ok".to_string(), "Failed", || async {
        Ok::<_, StoreError>(Some("Saved".to_string()))
    });
    manager.spawn_store_operation("broken".to_string(), "Failed to save", || async {
        Err::<Option<String>, _>(StoreError::Unavailable("offline".to_string()))
    });

    tokio::time::sleep(Duration::from_millis(20)).await;

    let mut succeeded = None;
    let mut failed = None;
    while let Ok(action) = rx.try_recv() {
        match action {
            Action::StoreOperationSucceeded(message) => succeeded = message,
            Action::StoreOperationFailed(error) => failed = Some(error),
            other => panic!("unexpected action {:?}", other),
        }
    }
    assert_eq!(succeeded.as_deref(), Some("Saved"));
    let failed = failed.expect("failure should be reported");
    assert!(failed.starts_with("Failed to save: "));
    assert!(failed.contains("offline"));
    assert_eq!(manager.pending_operations(), 0);
}

#[tokio::test]
async fn test_initial_load_and_store_listener() {
    let store = Arc::new(MemoryStore::with_tasks(vec![task("1", "First")]));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_initial_load(store.clone());
    manager.spawn_store_listener(store.subscribe());
    tokio::time::sleep(Duration::from_millis(20)).await;

    match rx.try_recv() {
        Ok(Action::TasksLoaded(tasks)) => assert_eq!(tasks.len(), 1),
        other => panic!("expected TasksLoaded, got {:?}", other),
    }
    // No snapshot until the store changes
    assert!(rx.try_recv().is_err());

    store.create(task("2", "Second")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    match rx.try_recv() {
        Ok(Action::StoreSnapshot(tasks)) => assert_eq!(tasks.len(), 2),
        other => panic!("expected StoreSnapshot, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resync_delivers_store_collection_as_snapshot() {
    let store = Arc::new(MemoryStore::with_tasks(vec![task("1", "First"), task("2", "Second")]));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_resync(store.clone());
    tokio::time::sleep(Duration::from_millis(20)).await;

    match rx.try_recv() {
        Ok(Action::StoreSnapshot(tasks)) => {
            assert_eq!(tasks, store.list().await.unwrap());
        }
        other => panic!("expected StoreSnapshot, got {:?}", other),
    }
}

#[tokio::test]
async fn test_drop_aborts_pending_jobs() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delayed_celebration(CelebrationKind::Milestone, Duration::from_millis(30));
    drop(manager);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    manager.spawn_delayed_celebration(CelebrationKind::Achievement, Duration::from_secs(60));
    manager.spawn_delayed_celebration(CelebrationKind::Celebration, Duration::from_secs(60));
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert_eq!(manager.pending_timers(), 0);
}
