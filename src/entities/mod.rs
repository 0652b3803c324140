pub mod task;

pub use task::Model as Task;
pub use task::{Priority, TaskId, TaskStatus};
