//! Spatial view: the filtered tasks drawn as a slowly spinning spiral.

use std::f64::consts::TAU;
use std::time::Duration;

use crate::entities::Task;
use crate::scene::{self, rotate_y, Camera, SceneNode};
use crate::ui::core::{actions::Action, Component};
use crate::utils::color::hex_to_color;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::BorderType,
        canvas::{Canvas, Circle},
        Block, Borders,
    },
    Frame,
};

/// Radians per second while auto-rotation is on
const ROTATION_SPEED: f64 = 0.35;

pub struct SpatialViewComponent {
    pub nodes: Vec<SceneNode>,
    pub selected_id: Option<String>,
    pub angle: f64,
    pub rotating: bool,
    camera: Camera,
}

impl Default for SpatialViewComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialViewComponent {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            selected_id: None,
            angle: 0.0,
            rotating: true,
            camera: Camera::default(),
        }
    }

    pub fn update_data<'a>(&mut self, tasks: impl IntoIterator<Item = &'a Task>, selected_id: Option<String>) {
        self.nodes = scene::layout(tasks);
        self.selected_id = selected_id;
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if self.rotating {
            self.angle = (self.angle + ROTATION_SPEED * elapsed.as_secs_f64()) % TAU;
        }
    }

    /// Projected nodes, farthest first so nearer glyphs are printed on top
    fn projected(&self) -> Vec<(f64, f64, f64, &SceneNode)> {
        let mut points: Vec<_> = self
            .nodes
            .iter()
            .filter_map(|node| {
                let rotated = rotate_y(node.position, self.angle);
                self.camera
                    .project(rotated)
                    .map(|(x, y)| (x, y, rotated.z, node))
            })
            .collect();
        points.sort_by(|a, b| a.2.total_cmp(&b.2));
        points
    }
}

impl Component for SpatialViewComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('r') {
            self.rotating = !self.rotating;
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let projected = self.projected();

        let extent = projected
            .iter()
            .fold(1.0_f64, |acc, (x, y, _, _)| acc.max(x.abs()).max(y.abs()))
            * 1.15;
        let center_y = if projected.is_empty() {
            0.0
        } else {
            projected.iter().map(|(_, y, _, _)| *y).sum::<f64>() / projected.len() as f64
        };

        let title = if self.rotating {
            format!(" Spatial ({}) · r to pause ", self.nodes.len())
        } else {
            format!(" Spatial ({}) · r to spin ", self.nodes.len())
        };
        let selected_id = self.selected_id.clone();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .x_bounds([-extent, extent])
            .y_bounds([center_y - extent / 2.0, center_y + extent / 2.0])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: center_y,
                    radius: extent / 8.0,
                    color: Color::Rgb(55, 65, 81),
                });
                ctx.layer();

                for (x, y, _, node) in &projected {
                    let mut style = Style::default().fg(hex_to_color(node.color));
                    let selected = selected_id.as_deref() == Some(node.task_id.as_str());
                    let mut spans = vec![Span::styled(node.shape.glyph(), style)];
                    if node.starred {
                        spans.push(Span::styled("★", Style::default().fg(Color::Yellow)));
                    }
                    if selected {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                        spans = vec![
                            Span::styled(format!("{} {}", node.shape.glyph(), node.title), style),
                        ];
                    }
                    ctx.print(*x, *y, Line::from(spans));
                }
            });

        f.render_widget(canvas, rect);
    }
}
