/*
 * Obstacle Module
 *
 * This module defines the Obstacle struct and its declared shape kind.
 * Obstacles are static regions placed by the user at the cursor; particles
 * are pushed out of them by physics::resolve_collisions.
 *
 * Only the Circle kind takes part in collision, and every kind is drawn as a
 * circle of its radius. The selector for Square and Triangle is kept so the
 * placement settings round-trip through the UI, but those kinds are inert.
 */

use nannou::prelude::*;

use crate::renderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Circle,
    Square,
    Triangle,
}

impl ObstacleKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObstacleKind::Circle => "Circle",
            ObstacleKind::Square => "Square",
            ObstacleKind::Triangle => "Triangle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub position: Point2,
    pub radius: f32,
    pub color: Rgb,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(position: Point2, radius: f32, color: Rgb, kind: ObstacleKind) -> Self {
        Self {
            position,
            radius,
            color,
            kind,
        }
    }

    pub fn draw(&self, draw: &Draw, window_rect: Rect) {
        let screen_pos = renderer::sim_to_screen(self.position, window_rect);

        draw.ellipse()
            .color(self.color)
            .radius(self.radius)
            .xy(screen_pos);
    }
}
