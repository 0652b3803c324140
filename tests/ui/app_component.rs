use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use todoflow::celebration::CelebrationKind;
use todoflow::config::Config;
use todoflow::constants::{
    ERROR_TASK_STATUS_FAILED, INFO_EMPTY_TASK, INFO_VOICE_UNRECOGNISED, SUCCESS_TASK_CREATED, SUCCESS_VIEW_SPATIAL,
};
use todoflow::entities::{Task, TaskStatus};
use todoflow::icons::IconTheme;
use todoflow::logger::Logger;
use todoflow::notify::ToastKind;
use todoflow::session::{Route, StaticSession};
use todoflow::store::{MemoryStore, TaskStore};
use todoflow::ui::core::{Action, Component, DialogType, EventType};
use todoflow::ui::AppComponent;
use todoflow::view_model::{Filter, ViewMode};

fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    let mut task = Task::with_id(id, title, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    task.status = status;
    task
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.celebration.milestone_delay_ms = 0;
    config
}

/// Signed-in app whose view model and store both hold `tasks`
fn dashboard(config: &Config, tasks: Vec<Task>) -> (AppComponent, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_tasks(tasks.clone()));
    let mut app = AppComponent::new(config, store.clone(), &StaticSession::signed_in("Ada"), Logger::new());
    app.dispatch(Action::TasksLoaded(tasks));
    (app, store)
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Let background jobs run, then feed their results through a tick
async fn settle(app: &mut AppComponent) {
    tokio::time::sleep(Duration::from_millis(30)).await;
    app.handle_event(EventType::Tick(Duration::ZERO));
}

fn has_toast(app: &AppComponent, kind: ToastKind, text: &str) -> bool {
    app.toasts().visible().any(|toast| toast.kind == kind && toast.title.contains(text))
}

fn screen_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_start_loads_tasks_from_store() {
    let config = test_config();
    let store = Arc::new(MemoryStore::with_tasks(vec![
        task("1", "First", TaskStatus::Todo),
        task("2", "Second", TaskStatus::Completed),
    ]));
    let mut app = AppComponent::new(&config, store, &StaticSession::signed_in("Ada"), Logger::new());
    assert_eq!(app.route(), Route::Dashboard);
    assert!(app.is_loading());

    app.start();
    settle(&mut app).await;

    assert!(!app.is_loading());
    assert_eq!(app.view_model().tasks().len(), 2);
    assert_eq!(app.selected_task_id().as_deref(), Some("1"));
    // Existing progress is not celebrated
    assert!(app.celebration().is_none());
}

#[tokio::test]
async fn test_signed_out_user_sees_landing() {
    let config = test_config();
    let store = Arc::new(MemoryStore::with_tasks(vec![task("1", "Secret", TaskStatus::Todo)]));
    let mut app = AppComponent::new(&config, store, &StaticSession::signed_out(), Logger::new());
    app.start();
    settle(&mut app).await;

    assert_eq!(app.route(), Route::Landing);
    assert!(!app.is_loading());
    assert!(app.view_model().tasks().is_empty());

    // Task shortcuts are inactive on the landing screen
    press(&mut app, KeyCode::Char('a'));
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog_type(), Some(&DialogType::Help));
    press(&mut app, KeyCode::Esc);
    assert!(app.dialog_type().is_none());

    let screen = screen_text(&mut app);
    assert!(screen.contains("todoflow"));
    assert!(!screen.contains("Secret"));

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_create_task_through_dialog() {
    let config = test_config();
    let (mut app, store) = dashboard(&config, Vec::new());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.dialog_type(), Some(&DialogType::TaskCreation));
    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);

    assert!(app.dialog_type().is_none());
    let tasks = app.view_model().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(app.celebration().map(|c| c.kind), Some(CelebrationKind::Celebration));

    settle(&mut app).await;
    let stored = store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, app.view_model().tasks()[0].id);
    assert!(has_toast(&app, ToastKind::Success, SUCCESS_TASK_CREATED));
}

#[tokio::test]
async fn test_empty_submission_prompts_for_a_title() {
    let config = test_config();
    let (mut app, _store) = dashboard(&config, Vec::new());

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "  ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.dialog_type(), Some(&DialogType::TaskCreation));
    assert!(app.view_model().tasks().is_empty());
    assert!(has_toast(&app, ToastKind::Info, INFO_EMPTY_TASK));
}

#[tokio::test]
async fn test_toggle_selected_task() {
    let config = test_config();
    let (mut app, store) = dashboard(
        &config,
        vec![task("1", "First", TaskStatus::Todo), task("2", "Second", TaskStatus::Todo)],
    );

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.view_model().task("1").unwrap().status, TaskStatus::Completed);
    assert_eq!(app.celebration().map(|c| c.kind), Some(CelebrationKind::TaskCompleted));
    assert_eq!(app.pending_operations(), 1);

    settle(&mut app).await;
    assert_eq!(app.pending_operations(), 0);
    assert_eq!(store.list().await.unwrap()[0].status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_failed_toggle_resyncs_view_from_store() {
    let config = test_config();
    let (mut app, store) = dashboard(
        &config,
        vec![task("1", "First", TaskStatus::Todo), task("2", "Second", TaskStatus::Todo)],
    );
    store.set_fail_mutations(true);

    app.dispatch(Action::ToggleStatus("2".to_string()));
    assert_eq!(app.view_model().task("2").unwrap().status, TaskStatus::Completed);

    // First tick reports the failure, the second adopts the re-read collection
    settle(&mut app).await;
    assert!(has_toast(&app, ToastKind::Error, ERROR_TASK_STATUS_FAILED));
    settle(&mut app).await;

    assert_eq!(app.view_model().task("2").unwrap().status, TaskStatus::Todo);
    assert_eq!(store.list().await.unwrap()[1].status, TaskStatus::Todo);

    // With the store back, toggling lands where the user asked
    store.set_fail_mutations(false);
    app.dispatch(Action::ToggleStatus("2".to_string()));
    settle(&mut app).await;
    assert_eq!(app.view_model().task("2").unwrap().status, TaskStatus::Completed);
    assert_eq!(store.list().await.unwrap()[1].status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_failed_create_leaves_no_task_behind() {
    let config = test_config();
    let (mut app, store) = dashboard(&config, vec![task("1", "First", TaskStatus::Todo)]);
    store.set_fail_mutations(true);

    app.dispatch(Action::CreateTask("Buy milk".to_string()));
    assert_eq!(app.view_model().tasks().len(), 2);

    settle(&mut app).await;
    settle(&mut app).await;

    assert_eq!(app.view_model().tasks().len(), 1);
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_toggle_sends_resulting_status_to_store() {
    let config = test_config();
    // Store already holds the task as completed, the view still shows it open
    let store = Arc::new(MemoryStore::with_tasks(vec![task("1", "First", TaskStatus::Completed)]));
    let mut app = AppComponent::new(&config, store.clone(), &StaticSession::signed_in("Ada"), Logger::new());
    app.dispatch(Action::TasksLoaded(vec![task("1", "First", TaskStatus::Todo)]));

    app.dispatch(Action::ToggleStatus("1".to_string()));
    settle(&mut app).await;

    assert_eq!(store.list().await.unwrap()[0].status, TaskStatus::Completed);
    assert_eq!(app.view_model().task("1").unwrap().status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_stale_snapshot_does_not_repeat_milestone() {
    let config = test_config();
    let mut tasks: Vec<Task> = (0..4)
        .map(|i| task(&format!("c{}", i), "Done", TaskStatus::Completed))
        .collect();
    tasks.push(task("o0", "Open", TaskStatus::Todo));
    let (mut app, _store) = dashboard(&config, tasks);

    app.dispatch(Action::ToggleStatus("o0".to_string()));
    let after_first_toggle = app.view_model().tasks().to_vec();
    app.dispatch(Action::ToggleStatus("o0".to_string()));
    settle(&mut app).await;
    assert_eq!(app.pending_timers(), 0);

    // The store re-delivers the state from the first toggle after the second one
    app.dispatch(Action::StoreSnapshot(after_first_toggle));
    assert_eq!(app.pending_timers(), 0);
    assert_eq!(app.view_model().statistics().completed, 5);
}

#[tokio::test]
async fn test_milestone_is_celebrated_after_delay() {
    let config = test_config();
    let mut tasks: Vec<Task> = (0..4)
        .map(|i| task(&format!("c{}", i), "Done", TaskStatus::Completed))
        .collect();
    tasks.push(task("o0", "Open", TaskStatus::Todo));
    tasks.push(task("o1", "Open", TaskStatus::Todo));
    let (mut app, _store) = dashboard(&config, tasks);

    app.dispatch(Action::ToggleStatus("o0".to_string()));
    assert_eq!(app.celebration().map(|c| c.kind), Some(CelebrationKind::TaskCompleted));
    assert_eq!(app.pending_timers(), 1);

    settle(&mut app).await;
    assert_eq!(app.celebration().map(|c| c.kind), Some(CelebrationKind::Milestone));
    assert_eq!(app.pending_timers(), 0);
    assert_eq!(app.view_model().milestone_tracker().last_celebrated(), Some(5));
}

#[tokio::test]
async fn test_celebrations_can_be_disabled() {
    let mut config = test_config();
    config.celebration.enabled = false;
    let mut tasks: Vec<Task> = (0..4)
        .map(|i| task(&format!("c{}", i), "Done", TaskStatus::Completed))
        .collect();
    tasks.push(task("o0", "Open", TaskStatus::Todo));
    let (mut app, _store) = dashboard(&config, tasks);

    // Fifth completion and the last open task: milestone and achievement, both suppressed
    app.dispatch(Action::ToggleStatus("o0".to_string()));
    assert!(app.celebration().is_none());
    assert_eq!(app.pending_timers(), 0);

    app.dispatch(Action::Celebrate(CelebrationKind::Celebration));
    assert!(app.celebration().is_none());
}

#[tokio::test]
async fn test_celebration_expires_on_tick() {
    let mut config = test_config();
    config.celebration.display_ms = 200;
    let (mut app, _store) = dashboard(&config, Vec::new());

    app.dispatch(Action::Celebrate(CelebrationKind::Achievement));
    assert!(app.celebration().is_some());
    app.handle_event(EventType::Tick(Duration::from_millis(250)));
    assert!(app.celebration().is_none());
}

#[tokio::test]
async fn test_filter_search_and_view_keys() {
    let config = test_config();
    let (mut app, _store) = dashboard(
        &config,
        vec![task("1", "Buy milk", TaskStatus::Todo), task("2", "Call mom", TaskStatus::Completed)],
    );

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.view_model().filter(), Filter::Completed);
    assert_eq!(app.selected_task_id().as_deref(), Some("2"));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view_model().filter(), Filter::All);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "milk");
    assert_eq!(app.view_model().search_query(), "milk");
    assert_eq!(app.view_model().visible_tasks().len(), 1);
    press(&mut app, KeyCode::Enter);
    assert!(app.dialog_type().is_none());
    assert_eq!(app.view_model().search_query(), "milk");

    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.view_model().view_mode(), ViewMode::Spatial);
    assert!(has_toast(&app, ToastKind::Info, SUCCESS_VIEW_SPATIAL));
    let screen = screen_text(&mut app);
    assert!(screen.contains("Spatial"));

    let theme = app.icon_theme();
    press(&mut app, KeyCode::Char('i'));
    assert_ne!(app.icon_theme(), theme);
}

#[tokio::test]
async fn test_esc_clears_search_before_quitting() {
    let config = test_config();
    let (mut app, _store) = dashboard(&config, Vec::new());
    app.dispatch(Action::SetSearch("milk".to_string()));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view_model().search_query(), "");
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits() {
    let config = test_config();
    let (mut app, _store) = dashboard(&config, Vec::new());
    press(&mut app, KeyCode::Char('a'));

    // Even with a dialog open
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_voice_prompt_runs_commands() {
    let config = test_config();
    let (mut app, _store) = dashboard(
        &config,
        vec![task("1", "Buy milk", TaskStatus::Todo), task("2", "Call mom", TaskStatus::Todo)],
    );
    app.dispatch(Action::SetFilter(Filter::Completed));
    app.dispatch(Action::SetSearch("zzz".to_string()));

    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.dialog_type(), Some(&DialogType::VoicePrompt));
    type_text(&mut app, "Show tasks");
    press(&mut app, KeyCode::Enter);

    assert!(app.dialog_type().is_none());
    assert_eq!(app.view_model().filter(), Filter::All);
    assert_eq!(app.view_model().search_query(), "");
    assert_eq!(app.view_model().visible_tasks().len(), 2);

    app.dispatch(Action::VoiceTranscript("complete task".to_string()));
    assert_eq!(app.view_model().task("1").unwrap().status, TaskStatus::Completed);

    app.dispatch(Action::VoiceTranscript("toggle view".to_string()));
    assert_eq!(app.view_model().view_mode(), ViewMode::Spatial);

    app.dispatch(Action::VoiceTranscript("add task".to_string()));
    assert_eq!(app.dialog_type(), Some(&DialogType::TaskCreation));
}

#[tokio::test]
async fn test_unrecognised_voice_transcript() {
    let config = test_config();
    let (mut app, _store) = dashboard(&config, Vec::new());

    app.dispatch(Action::VoiceTranscript("make coffee".to_string()));
    assert!(has_toast(
        &app,
        ToastKind::Info,
        &format!("{}: \"make coffee\"", INFO_VOICE_UNRECOGNISED)
    ));
}

#[tokio::test]
async fn test_voice_prompt_hidden_when_unsupported() {
    let mut config = test_config();
    config.voice.enabled = false;
    let (mut app, _store) = dashboard(&config, Vec::new());

    press(&mut app, KeyCode::Char(':'));
    assert!(app.dialog_type().is_none());
}

#[tokio::test]
async fn test_delete_with_confirmation_syncs_from_store() {
    let config = test_config();
    let tasks = vec![task("1", "First", TaskStatus::Todo), task("2", "Second", TaskStatus::Todo)];
    let store = Arc::new(MemoryStore::with_tasks(tasks));
    let mut app = AppComponent::new(&config, store.clone(), &StaticSession::signed_in("Ada"), Logger::new());
    app.start();
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(app.dialog_type(), Some(DialogType::DeleteConfirmation { task_id, .. }) if task_id == "1"));
    press(&mut app, KeyCode::Char('y'));
    assert!(app.dialog_type().is_none());

    settle(&mut app).await;
    settle(&mut app).await;
    assert_eq!(store.list().await.unwrap().len(), 1);
    let remaining: Vec<&str> = app.view_model().tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(remaining, vec!["2"]);
}

#[tokio::test]
async fn test_edit_title_and_star() {
    let config = test_config();
    let tasks = vec![task("1", "Old title", TaskStatus::Todo)];
    let store = Arc::new(MemoryStore::with_tasks(tasks));
    let mut app = AppComponent::new(&config, store.clone(), &StaticSession::signed_in("Ada"), Logger::new());
    app.start();
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('e'));
    for _ in 0.."Old title".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "New title");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('s'));
    assert!(app.view_model().task("1").unwrap().starred);

    settle(&mut app).await;
    settle(&mut app).await;
    let stored = &store.list().await.unwrap()[0];
    assert_eq!(stored.title, "New title");
    assert!(stored.starred);
    assert_eq!(app.view_model().task("1").unwrap().title, "New title");
}

#[tokio::test]
async fn test_dashboard_renders_tasks_and_greeting() {
    let config = test_config();
    let (mut app, _store) = dashboard(&config, vec![task("1", "Water plants", TaskStatus::Todo)]);

    let screen = screen_text(&mut app);
    assert!(screen.contains("Welcome back, Ada!"));
    assert!(screen.contains("Water plants"));

    app.dispatch(Action::Celebrate(CelebrationKind::TaskCompleted));
    let screen = screen_text(&mut app);
    assert!(screen.contains("Task Completed!"));
}

#[test]
fn test_default_icon_theme_from_config() {
    let mut config = Config::default();
    config.ui.icon_theme = IconTheme::Ascii;
    let store = Arc::new(MemoryStore::new());
    let app = AppComponent::new(&config, store, &StaticSession::signed_in("Ada"), Logger::new());
    assert_eq!(app.icon_theme(), IconTheme::Ascii);
}
