use crate::celebration::CelebrationKind;
use crate::entities::{Task, TaskId};
use crate::notify::ToastKind;
use crate::store::UpdateTaskArgs;
use crate::view_model::Filter;
use crate::voice::VoiceCommand;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // Task operations
    CreateTask(String),
    ToggleStatus(TaskId),
    ToggleStar(TaskId),
    CyclePriority(TaskId),
    StartTask(TaskId),
    EditTask {
        id: TaskId,
        args: UpdateTaskArgs,
    },
    DeleteTask(TaskId),

    // View operations
    SetFilter(Filter),
    CycleFilter,
    SetSearch(String),
    ToggleViewMode,
    CycleIconTheme,

    // Store events
    TasksLoaded(Vec<Task>),
    StoreSnapshot(Vec<Task>),
    StoreOperationSucceeded(Option<String>),
    StoreOperationFailed(String),

    // Celebrations
    Celebrate(CelebrationKind),
    ScheduleMilestone(usize),

    // Voice
    VoiceTranscript(String),
    VoiceCommand(VoiceCommand),

    // UI operations
    Notify(ToastKind, String),
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    TaskCreation,
    TaskEdit { task_id: TaskId, title: String },
    DeleteConfirmation { task_id: TaskId, title: String },
    TaskSearch { query: String },
    VoicePrompt,
    Error(String),
    Info(String),
    Help,
    Logs,
}
