use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::time::Duration;
use todoflow::entities::{Task, TaskStatus};
use todoflow::ui::components::overlays::confetti_positions;
use todoflow::ui::components::{FilterBarComponent, SpatialViewComponent, StatsPanelComponent, TaskListComponent};
use todoflow::ui::core::{Action, Component, DialogType};
use todoflow::ui::LayoutManager;
use todoflow::view_model::{derive_statistics, Filter};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn tasks(count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| Task::with_id(i.to_string(), &format!("Task {}", i), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()))
        .collect()
}

#[test]
fn test_filter_bar_keys() {
    let mut bar = FilterBarComponent::new();
    assert!(matches!(bar.handle_key_events(key(KeyCode::Tab)), Action::CycleFilter));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('1'))), Action::SetFilter(Filter::All)));
    assert!(matches!(
        bar.handle_key_events(key(KeyCode::Char('3'))),
        Action::SetFilter(Filter::InProgress)
    ));
    assert!(matches!(
        bar.handle_key_events(key(KeyCode::Char('4'))),
        Action::SetFilter(Filter::Completed)
    ));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('5'))), Action::None));
}

#[test]
fn test_task_list_navigation_wraps() {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(3), "All".to_string());
    assert_eq!(list.get_selected_task().map(|t| t.id.as_str()), Some("0"));

    list.update(Action::PreviousTask);
    assert_eq!(list.selected_index, 2);
    list.update(Action::NextTask);
    assert_eq!(list.selected_index, 0);
}

#[test]
fn test_task_list_keeps_selection_across_updates() {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(3), "All".to_string());
    list.update(Action::NextTask);

    // Task "1" moves to the front
    let mut reordered = tasks(3);
    reordered.swap(0, 1);
    list.update_data(reordered, "All".to_string());
    assert_eq!(list.get_selected_task().map(|t| t.id.as_str()), Some("1"));

    list.update_data(Vec::new(), "All".to_string());
    assert!(list.get_selected_task().is_none());
    assert!(matches!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None));
}

#[test]
fn test_task_list_task_keys() {
    let mut list = TaskListComponent::new();
    let mut items = tasks(1);
    items[0].status = TaskStatus::InProgress;
    list.update_data(items, "All".to_string());

    assert!(matches!(list.handle_key_events(key(KeyCode::Enter)), Action::ToggleStatus(id) if id == "0"));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('s'))), Action::ToggleStar(id) if id == "0"));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('p'))), Action::CyclePriority(_)));
    // Already in progress
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('w'))), Action::None));
    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('a'))),
        Action::ShowDialog(DialogType::TaskCreation)
    ));
    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('e'))),
        Action::ShowDialog(DialogType::TaskEdit { .. })
    ));
}

#[test]
fn test_stats_panel_next_milestone() {
    let mut panel = StatsPanelComponent::new(5);
    let mut items = tasks(8);
    for task in items.iter_mut().take(3) {
        task.status = TaskStatus::Completed;
    }
    panel.update_data(derive_statistics(&items), None);
    assert_eq!(panel.to_next_milestone(), 2);

    for task in items.iter_mut().take(5) {
        task.status = TaskStatus::Completed;
    }
    panel.update_data(derive_statistics(&items), Some(5));
    assert_eq!(panel.to_next_milestone(), 5);
}

#[test]
fn test_spatial_view_rotation() {
    let mut view = SpatialViewComponent::new();
    let items = tasks(4);
    view.update_data(items.iter(), Some("2".to_string()));
    assert_eq!(view.nodes.len(), 4);

    view.tick(Duration::from_secs(1));
    assert!(view.angle > 0.0);

    view.handle_key_events(key(KeyCode::Char('r')));
    assert!(!view.rotating);
    let angle = view.angle;
    view.tick(Duration::from_secs(1));
    assert_eq!(view.angle, angle);
}

#[test]
fn test_confetti_stays_inside_area() {
    let area = Rect::new(5, 3, 40, 12);
    let first = confetti_positions(area, 0, 30);
    assert_eq!(first.len(), 30);
    for (x, y, variant) in &first {
        assert!(*x >= area.x && *x < area.right());
        assert!(*y >= area.y && *y < area.bottom());
        assert!(*variant < 3);
    }

    // Deterministic per frame, drifting over time
    assert_eq!(first, confetti_positions(area, 0, 30));
    assert_ne!(first, confetti_positions(area, 2, 30));

    assert!(confetti_positions(Rect::new(0, 0, 0, 10), 0, 30).is_empty());
}

#[test]
fn test_dashboard_layout() {
    let areas = LayoutManager::dashboard_layout(Rect::new(0, 0, 120, 40), 30);
    assert_eq!(areas.header.height, 1);
    assert_eq!(areas.filter_bar.height, 3);
    assert_eq!(areas.status_bar.height, 1);
    assert_eq!(areas.stats.width, 30);
    assert_eq!(areas.main.width, 90);

    // Too narrow for the stats panel
    let narrow = LayoutManager::dashboard_layout(Rect::new(0, 0, 50, 20), 30);
    assert_eq!(narrow.stats.width, 0);
    assert_eq!(narrow.main.width, 50);
}

#[test]
fn test_toast_areas() {
    let areas = LayoutManager::toast_areas(Rect::new(0, 0, 100, 8), 3);
    // Only two 3-line toasts fit below the first row
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].y, 1);
    assert_eq!(areas[1].y, 4);
    assert_eq!(areas[0].right(), 99);
}
