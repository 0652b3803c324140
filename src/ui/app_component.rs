use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crate::celebration::{ActiveCelebration, CelebrationKind};
use crate::config::Config;
use crate::constants::*;
use crate::entities::{Task, TaskId, TaskStatus};
use crate::icons::{IconService, IconTheme};
use crate::logger::Logger;
use crate::notify::{Notifier, ToastKind, ToastQueue};
use crate::session::{greeting, route_for, Route, SessionProvider, User};
use crate::store::{StoreError, TaskStore, UpdateTaskArgs};
use crate::ui::components::{
    landing, overlays, DialogComponent, FilterBarComponent, SpatialViewComponent, StatsPanelComponent, StatusBar,
    TaskListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::view_model::{Filter, Outcome, TaskViewModel, ViewMode};
use crate::voice::{SubscriptionId, VoiceCommand, VoiceCommands};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

/// Upper bound on follow-up actions handled for a single input, guards against action cycles
const MAX_CHAINED_ACTIONS: usize = 32;

pub struct AppComponent {
    // Component composition
    filter_bar: FilterBarComponent,
    task_list: TaskListComponent,
    spatial_view: SpatialViewComponent,
    stats_panel: StatsPanelComponent,
    dialog: DialogComponent,

    // Application state
    view_model: TaskViewModel,
    toasts: ToastQueue,
    celebration: Option<ActiveCelebration>,
    icons: IconService,
    route: Route,
    user: Option<User>,
    loading: bool,

    // Services
    store: Arc<dyn TaskStore>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    voice: VoiceCommands,
    voice_subscription: SubscriptionId,
    voice_rx: mpsc::UnboundedReceiver<VoiceCommand>,
    logger: Logger,

    // Settings
    celebrations_enabled: bool,
    milestone_delay: Duration,
    celebration_duration: Duration,
    stats_panel_width: u16,
    user_env: String,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, store: Arc<dyn TaskStore>, session: &dyn SessionProvider, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut voice = VoiceCommands::new(config.voice.enabled);
        let (voice_subscription, voice_rx) = voice.subscribe();

        let mut view_model = TaskViewModel::new(config.celebration.milestone_interval);
        view_model.set_filter(config.default_filter().unwrap_or_default());
        view_model.set_view_mode(config.default_view_mode().unwrap_or_default());

        let icons = IconService::new(config.ui.icon_theme);
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());
        dialog.voice_supported = voice.is_supported();

        let route = route_for(session);
        let user = session.current_user();
        logger.log(format!(
            "AppComponent: starting on {:?} with '{}' store",
            route,
            store.store_type()
        ));

        let mut app = Self {
            filter_bar: FilterBarComponent::new(),
            task_list: TaskListComponent::new(),
            spatial_view: SpatialViewComponent::new(),
            stats_panel: StatsPanelComponent::new(config.celebration.milestone_interval),
            dialog,
            view_model,
            toasts: ToastQueue::new(config.notifications.duration(), config.notifications.max_visible),
            celebration: None,
            icons,
            route,
            user,
            loading: true,
            store,
            task_manager,
            background_action_rx,
            voice,
            voice_subscription,
            voice_rx,
            logger,
            celebrations_enabled: config.celebration.enabled,
            milestone_delay: config.celebration.milestone_delay(),
            celebration_duration: config.celebration.display_duration(),
            stats_panel_width: config.ui.stats_panel_width,
            user_env: config.session.user_env.clone(),
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    /// Load the collection and subscribe to store snapshots. Needs a tokio runtime.
    pub fn start(&mut self) {
        if self.route != Route::Dashboard {
            self.loading = false;
            return;
        }
        self.logger.log("AppComponent: loading tasks".to_string());
        self.task_manager.spawn_initial_load(self.store.clone());
        self.task_manager.spawn_store_listener(self.store.subscribe());
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view_model(&self) -> &TaskViewModel {
        &self.view_model
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn celebration(&self) -> Option<&ActiveCelebration> {
        self.celebration.as_ref()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn icon_theme(&self) -> IconTheme {
        self.icons.theme()
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.task_list.get_selected_task().map(|task| task.id.clone())
    }

    pub fn pending_operations(&self) -> usize {
        self.task_manager.pending_operations()
    }

    pub fn pending_timers(&self) -> usize {
        self.task_manager.pending_timers()
    }

    /// Push the view model state down into the components
    fn sync_component_data(&mut self) {
        let visible: Vec<Task> = self.view_model.visible_tasks().into_iter().cloned().collect();
        let title = self.view_model.filter().label().to_string();

        self.task_list.icons = self.icons.clone();
        self.task_list.update_data(visible, title);
        let selected_id = self.selected_task_id();
        self.spatial_view.update_data(self.task_list.tasks.iter(), selected_id);

        self.filter_bar.update_data(
            self.view_model.filter(),
            self.view_model.filter_counts(),
            self.view_model.search_query(),
        );
        self.stats_panel.update_data(
            self.view_model.statistics(),
            self.view_model.milestone_tracker().last_celebrated(),
        );

        self.dialog.icons = self.icons.clone();
        self.dialog.search_match_count = self.task_list.tasks.len();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if self.route == Route::Landing {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('/') => Action::ShowDialog(DialogType::TaskSearch {
                query: self.view_model.search_query().to_string(),
            }),
            KeyCode::Char('v') => Action::ToggleViewMode,
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char(':') if self.voice.is_supported() => Action::ShowDialog(DialogType::VoicePrompt),
            KeyCode::Esc => {
                if self.view_model.search_query().is_empty() {
                    self.logger.log("Global key: Esc - quitting application".to_string());
                    Action::Quit
                } else {
                    Action::SetSearch(String::new())
                }
            }
            _ => Action::None,
        }
    }

    /// Route a key to the first component that claims it
    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C quits from anywhere, dialogs included
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.route == Route::Landing {
            return self.handle_global_key(key);
        }

        let action = self.filter_bar.handle_key_events(key);
        if !matches!(action, Action::None) {
            return action;
        }

        if self.view_model.view_mode() == ViewMode::Spatial {
            self.spatial_view.handle_key_events(key);
        }

        let action = self.task_list.handle_key_events(key);
        if !matches!(action, Action::None) {
            return action;
        }

        self.handle_global_key(key)
    }

    /// Run an action through the component hierarchy, then the app-level
    /// handler, following up on any actions that produces.
    pub fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        let mut handled = 0;

        while let Some(action) = queue.pop_front() {
            handled += 1;
            if handled > MAX_CHAINED_ACTIONS {
                log::warn!("Dropping action chain after {} steps", MAX_CHAINED_ACTIONS);
                break;
            }

            let action = self.dialog.update(action);
            let action = self.task_list.update(action);
            let follow_up = self.handle_app_action(action);
            if !matches!(follow_up, Action::None) {
                queue.push_back(follow_up);
            }

            while let Ok(command) = self.voice_rx.try_recv() {
                queue.push_back(Action::VoiceCommand(command));
            }

            // Keep the selection and derived views current for the next action in the chain
            self.sync_component_data();
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }

            // Task operations: applied locally first, then forwarded to the store.
            // A rejected write resyncs the view from the store.
            Action::CreateTask(title) => {
                self.view_model.set_input(title);
                let outcome = self.view_model.submit_input();
                let Some(task) = outcome.task.clone() else {
                    return Action::Notify(ToastKind::Info, INFO_EMPTY_TASK.to_string());
                };
                self.logger.log(format!("Task: creating '{}' ({})", task.title, task.id));
                self.apply_outcome(outcome);

                let store = self.store.clone();
                self.task_manager.spawn_store_operation(
                    format!("Create task {}", task.id),
                    ERROR_TASK_CREATE_FAILED,
                    move || async move {
                        store.create(task).await?;
                        Ok::<_, StoreError>(Some(SUCCESS_TASK_CREATED.to_string()))
                    },
                );
                Action::None
            }
            Action::ToggleStatus(id) => {
                let outcome = self.view_model.toggle_status(&id);
                if outcome.is_noop() {
                    self.logger.log(format!("Task: cannot toggle unknown task {}", id));
                    return Action::None;
                }
                self.logger.log(format!("Task: toggled status of {}", id));

                // Absolute status, not a flip of whatever the store holds
                if let Some(task) = outcome.task.as_ref() {
                    let args = UpdateTaskArgs {
                        status: Some(task.status),
                        ..Default::default()
                    };
                    self.spawn_update(id, args, ERROR_TASK_STATUS_FAILED, None);
                }
                self.apply_outcome(outcome);
                Action::None
            }
            Action::ToggleStar(id) => {
                let Some(task) = self.view_model.toggle_star(&id).task else {
                    return Action::None;
                };
                let args = UpdateTaskArgs {
                    starred: Some(task.starred),
                    ..Default::default()
                };
                self.spawn_update(id, args, ERROR_TASK_STAR_FAILED, None);
                Action::None
            }
            Action::CyclePriority(id) => {
                let Some(task) = self.view_model.task(&id) else {
                    return Action::None;
                };
                let args = UpdateTaskArgs {
                    priority: Some(task.priority.cycle()),
                    ..Default::default()
                };
                self.spawn_update(id, args, ERROR_TASK_UPDATE_FAILED, None);
                Action::None
            }
            Action::StartTask(id) => {
                let args = UpdateTaskArgs {
                    status: Some(TaskStatus::InProgress),
                    ..Default::default()
                };
                self.spawn_update(id, args, ERROR_TASK_STATUS_FAILED, None);
                Action::None
            }
            Action::EditTask { id, args } => {
                self.spawn_update(id, args, ERROR_TASK_UPDATE_FAILED, Some(SUCCESS_TASK_UPDATED));
                Action::None
            }
            Action::DeleteTask(id) => {
                self.logger.log(format!("Task: deleting {}", id));
                let store = self.store.clone();
                self.task_manager.spawn_store_operation(
                    format!("Delete task {}", id),
                    ERROR_TASK_DELETE_FAILED,
                    move || async move {
                        store.remove(&id).await?;
                        Ok::<_, StoreError>(Some(SUCCESS_TASK_DELETED.to_string()))
                    },
                );
                Action::None
            }

            // View operations
            Action::SetFilter(filter) => {
                self.view_model.set_filter(filter);
                Action::None
            }
            Action::CycleFilter => {
                let filter = self.view_model.cycle_filter();
                self.logger.log(format!("View: filter {}", filter.as_str()));
                Action::None
            }
            Action::SetSearch(query) => {
                self.view_model.set_search_query(query);
                Action::None
            }
            Action::ToggleViewMode => {
                let message = match self.view_model.toggle_view_mode() {
                    ViewMode::Grid => SUCCESS_VIEW_GRID,
                    ViewMode::Spatial => SUCCESS_VIEW_SPATIAL,
                };
                Action::Notify(ToastKind::Info, message.to_string())
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("View: icon theme {:?}", self.icons.theme()));
                Action::None
            }

            // Store events
            Action::TasksLoaded(tasks) => {
                self.logger.log(format!("Store: loaded {} tasks", tasks.len()));
                self.view_model.load_tasks(tasks);
                self.loading = false;
                Action::None
            }
            Action::StoreSnapshot(tasks) => {
                log::debug!("Store snapshot with {} tasks", tasks.len());
                self.loading = false;
                self.view_model.replace_tasks(tasks);
                Action::None
            }
            Action::StoreOperationSucceeded(message) => {
                if let Some(message) = message {
                    self.toasts.success(&message);
                }
                Action::None
            }
            Action::StoreOperationFailed(error) => {
                log::error!("{}", error);
                self.logger.log(format!("Store: {}", error));
                self.loading = false;
                self.toasts.error(&error);
                // The view applied the edit before the store rejected it
                if self.route == Route::Dashboard {
                    self.task_manager.spawn_resync(self.store.clone());
                }
                Action::None
            }

            // Celebrations
            Action::Celebrate(kind) => {
                self.celebrate(kind);
                Action::None
            }
            Action::ScheduleMilestone(completed) => {
                self.logger
                    .log(format!("Milestone: {} tasks completed, celebrating shortly", completed));
                if self.celebrations_enabled {
                    self.task_manager
                        .spawn_delayed_celebration(CelebrationKind::Milestone, self.milestone_delay);
                }
                Action::None
            }

            // Voice
            Action::VoiceTranscript(transcript) => match self.voice.hear(&transcript) {
                // The matched command comes back through our subscription
                Some(_) => Action::None,
                None => Action::Notify(
                    ToastKind::Info,
                    format!("{}: \"{}\"", INFO_VOICE_UNRECOGNISED, transcript.trim()),
                ),
            },
            Action::VoiceCommand(command) => self.handle_voice_command(command),

            Action::Notify(kind, message) => {
                self.toasts.notify(kind, &message);
                Action::None
            }

            // Handled by components, or nothing left to do
            _ => Action::None,
        }
    }

    fn handle_voice_command(&mut self, command: VoiceCommand) -> Action {
        self.logger.log(format!("Voice: handling '{}'", command));
        match command {
            VoiceCommand::Add => Action::ShowDialog(DialogType::TaskCreation),
            VoiceCommand::Complete => match self.selected_task_id() {
                Some(id) => Action::ToggleStatus(id),
                None => Action::Notify(ToastKind::Info, INFO_NO_TASK_SELECTED.to_string()),
            },
            VoiceCommand::Show => {
                self.view_model.set_filter(Filter::All);
                self.view_model.clear_search();
                Action::None
            }
            VoiceCommand::Search => Action::ShowDialog(DialogType::TaskSearch {
                query: self.view_model.search_query().to_string(),
            }),
            VoiceCommand::Toggle => Action::ToggleViewMode,
            VoiceCommand::Celebrate => Action::Celebrate(CelebrationKind::Celebration),
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        for kind in outcome.celebrations {
            self.celebrate(kind);
        }
        if let Some(completed) = outcome.milestone {
            self.handle_app_action(Action::ScheduleMilestone(completed));
        }
    }

    /// Show a celebration, replacing any still on screen
    fn celebrate(&mut self, kind: CelebrationKind) {
        log::info!("Celebration: {}", kind.as_str());
        if self.celebrations_enabled {
            self.celebration = Some(ActiveCelebration::new(kind, self.celebration_duration));
        }
    }

    fn spawn_update(&mut self, id: TaskId, args: UpdateTaskArgs, failure_title: &'static str, success: Option<&'static str>) {
        self.logger.log(format!("Task: updating {} with {:?}", id, args));
        let store = self.store.clone();
        self.task_manager
            .spawn_store_operation(format!("Update task {}", id), failure_title, move || async move {
                store.update(&id, args).await?;
                Ok::<_, StoreError>(success.map(str::to_string))
            });
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }
        while let Ok(command) = self.voice_rx.try_recv() {
            actions.push(Action::VoiceCommand(command));
        }

        let cleaned = self.task_manager.cleanup_finished_tasks();
        if cleaned > 0 {
            log::debug!("Background: cleaned up {} finished jobs", cleaned);
        }
        actions
    }

    fn tick(&mut self, elapsed: Duration) {
        self.toasts.tick(elapsed);
        if let Some(celebration) = &mut self.celebration {
            if !celebration.tick(elapsed) {
                self.celebration = None;
            }
        }
        if self.view_model.view_mode() == ViewMode::Spatial {
            self.spatial_view.tick(elapsed);
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        match event_type {
            EventType::Key(key) => {
                let action = self.route_key(key);
                self.dispatch(action);
            }
            EventType::Tick(elapsed) => {
                self.tick(elapsed);
                for action in self.process_background_actions() {
                    self.dispatch(action);
                }
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let mode = match self.view_model.view_mode() {
            ViewMode::Grid => "grid",
            ViewMode::Spatial => "spatial",
        };
        let mut spans = vec![
            Span::styled(
                format!(" {} ", APP_TITLE),
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(greeting(self.user.as_ref()), Style::default().fg(Color::White)),
            Span::styled(format!("  [{}]", mode), Style::default().fg(Color::DarkGray)),
        ];
        if self.loading {
            spans.push(Span::styled("  ⟳ Loading tasks...", Style::default().fg(Color::Yellow)));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.route {
            Route::Landing => {
                landing::render_landing(f, rect, &self.user_env);
                let status_area = Rect::new(rect.x, rect.bottom().saturating_sub(1), rect.width, rect.height.min(1));
                StatusBar::render(f, status_area, self.route, self.view_model.view_mode(), 0);
            }
            Route::Dashboard => {
                let areas = LayoutManager::dashboard_layout(rect, self.stats_panel_width);

                self.render_header(f, areas.header);
                self.filter_bar.render(f, areas.filter_bar);
                match self.view_model.view_mode() {
                    ViewMode::Grid => self.task_list.render(f, areas.main),
                    ViewMode::Spatial => self.spatial_view.render(f, areas.main),
                }
                self.stats_panel.render(f, areas.stats);
                StatusBar::render(
                    f,
                    areas.status_bar,
                    self.route,
                    self.view_model.view_mode(),
                    self.task_manager.pending_operations(),
                );

                if let Some(celebration) = &self.celebration {
                    overlays::render_celebration(f, areas.main, celebration);
                }
            }
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
        overlays::render_toasts(f, rect, self.toasts.visible(), &self.icons);
    }
}

impl Drop for AppComponent {
    fn drop(&mut self) {
        self.voice.unsubscribe(self.voice_subscription);
    }
}
