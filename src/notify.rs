//! Toast notifications.
//!
//! Anything that wants to tell the user something goes through the
//! fire-and-forget [`Notifier`] sink. [`ToastQueue`] is the implementation the
//! UI renders: it keeps a bounded number of toasts and expires them over time.

use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub remaining: Duration,
}

pub trait Notifier {
    fn notify(&mut self, kind: ToastKind, title: &str);

    fn success(&mut self, title: &str) {
        self.notify(ToastKind::Success, title);
    }

    fn error(&mut self, title: &str) {
        self.notify(ToastKind::Error, title);
    }

    fn info(&mut self, title: &str) {
        self.notify(ToastKind::Info, title);
    }
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000), 3)
    }
}

impl ToastQueue {
    pub fn new(duration: Duration, max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
            max_visible: max_visible.max(1),
        }
    }

    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: Option<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message,
            remaining: self.duration,
        };
        let id = toast.id;
        self.toasts.push_back(toast);
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Count down every toast and drop the expired ones
    pub fn tick(&mut self, elapsed: Duration) {
        for toast in &mut self.toasts {
            toast.remaining = toast.remaining.saturating_sub(elapsed);
        }
        self.toasts.retain(|toast| !toast.remaining.is_zero());
    }

    /// Oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, kind: ToastKind, title: &str) {
        log::debug!("Toast {:?}: {}", kind, title);
        self.push(kind, title, None);
    }
}
