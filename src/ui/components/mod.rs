//! Reusable UI components

pub mod badge;
pub mod landing;
pub mod overlays;
pub mod scrollbar_helper;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod filter_bar_component;
pub mod spatial_view;
pub mod stats_panel;
pub mod task_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use filter_bar_component::FilterBarComponent;
pub use spatial_view::SpatialViewComponent;
pub use stats_panel::StatsPanelComponent;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
