//! Spatial task scene.
//!
//! Lays tasks out on a rising spiral (two full turns over the collection,
//! three stacked layers) and projects the points onto a 2D canvas seen from a
//! fixed camera. Shape encodes status, colour encodes priority.

use std::f64::consts::PI;

use crate::entities::{Priority, Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Box,
    Sphere,
    Cylinder,
}

impl Shape {
    pub fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => Shape::Box,
            TaskStatus::InProgress => Shape::Sphere,
            TaskStatus::Completed => Shape::Cylinder,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Shape::Box => "■",
            Shape::Sphere => "●",
            Shape::Cylinder => "▮",
        }
    }
}

/// Hex colour for a priority
pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "#ef4444",
        Priority::Medium => "#f59e0b",
        Priority::Low => "#10b981",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub task_id: String,
    pub title: String,
    pub position: Point3,
    pub shape: Shape,
    pub color: &'static str,
    pub starred: bool,
}

/// Position of the `index`-th of `count` tasks on the spiral
pub fn spiral_position(index: usize, count: usize) -> Point3 {
    let count = count.max(1) as f64;
    let i = index as f64;
    let angle = (i / count) * PI * 4.0;
    let radius = 3.0 + i * 0.5;
    let height = ((index % 3) as f64) * 2.0 - 2.0;
    Point3 {
        x: angle.cos() * radius,
        y: height,
        z: angle.sin() * radius,
    }
}

pub fn layout<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<SceneNode> {
    let tasks: Vec<&Task> = tasks.into_iter().collect();
    let count = tasks.len();
    tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| SceneNode {
            task_id: task.id.clone(),
            title: task.title.clone(),
            position: spiral_position(index, count),
            shape: Shape::for_status(task.status),
            color: priority_color(task.priority),
            starred: task.starred,
        })
        .collect()
}

/// Camera looking at the origin from above and in front
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Point3,
    pub focal_length: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point3 { x: 0.0, y: 5.0, z: 10.0 },
            focal_length: 10.0,
        }
    }
}

impl Camera {
    /// Perspective projection onto the camera plane. Returns `None` for points
    /// at or behind the eye.
    pub fn project(&self, point: Point3) -> Option<(f64, f64)> {
        let depth = self.eye.z - point.z;
        if depth <= 0.0 {
            return None;
        }
        let scale = self.focal_length / depth;
        Some(((point.x - self.eye.x) * scale, (point.y - self.eye.y) * scale))
    }
}

/// Rotate a point around the vertical axis, used to spin the scene
pub fn rotate_y(point: Point3, radians: f64) -> Point3 {
    let (sin, cos) = radians.sin_cos();
    Point3 {
        x: point.x * cos + point.z * sin,
        y: point.y,
        z: -point.x * sin + point.z * cos,
    }
}
