//! Celebration overlays fired on task completion, milestones and other highlights.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CelebrationKind {
    TaskCompleted,
    Milestone,
    Achievement,
    Celebration,
}

/// Visual parameters for one celebration kind
#[derive(Debug, Clone, Copy)]
pub struct CelebrationStyle {
    /// Hex colours used for the confetti glyphs
    pub colors: [&'static str; 3],
    pub glyphs: [&'static str; 3],
    pub message: &'static str,
}

impl CelebrationKind {
    #[must_use]
    pub fn style(&self) -> CelebrationStyle {
        match self {
            CelebrationKind::TaskCompleted => CelebrationStyle {
                colors: ["#10b981", "#3b82f6", "#8b5cf6"],
                glyphs: ["◎", "✔", "★"],
                message: "Task Completed! 🎉",
            },
            CelebrationKind::Milestone => CelebrationStyle {
                colors: ["#f59e0b", "#ef4444", "#ec4899"],
                glyphs: ["★", "🏆", "♛"],
                message: "Milestone Reached! 🏆",
            },
            CelebrationKind::Achievement => CelebrationStyle {
                colors: ["#8b5cf6", "#06b6d4", "#84cc16"],
                glyphs: ["ϟ", "✦", "♥"],
                message: "Achievement Unlocked! ✨",
            },
            CelebrationKind::Celebration => CelebrationStyle {
                colors: ["#ec4899", "#f97316", "#eab308"],
                glyphs: ["✦", "♥", "ϟ"],
                message: "Celebration Time! 🎊",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CelebrationKind::TaskCompleted => "task-completed",
            CelebrationKind::Milestone => "milestone",
            CelebrationKind::Achievement => "achievement",
            CelebrationKind::Celebration => "celebration",
        }
    }
}

/// A celebration currently on screen, counting down to dismissal
#[derive(Debug, Clone)]
pub struct ActiveCelebration {
    pub kind: CelebrationKind,
    pub remaining: Duration,
    /// Frames elapsed since the celebration started, drives the confetti animation
    pub frame: u64,
}

impl ActiveCelebration {
    pub fn new(kind: CelebrationKind, duration: Duration) -> Self {
        Self {
            kind,
            remaining: duration,
            frame: 0,
        }
    }

    /// Advance the countdown. Returns `false` once the celebration has expired.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.frame = self.frame.wrapping_add(1);
        !self.remaining.is_zero()
    }
}
