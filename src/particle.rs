/*
 * Particle Module
 *
 * This module defines the Particle struct for the wind field. A particle
 * carries its position and velocity in simulation coordinates (origin at the
 * bottom-left of the screen) plus a draw color. Particles are created once at
 * startup by physics::populate_grid and live for the whole process.
 */

use nannou::prelude::*;

use crate::renderer;
use crate::PARTICLE_RADIUS;

// Default particle color, a muted moss green
pub const PARTICLE_COLOR: (f32, f32, f32) = (0.0745, 0.2745, 0.0667);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
    pub color: Rgb,
}

impl Particle {
    pub fn new(x: f32, y: f32) -> Self {
        let (r, g, b) = PARTICLE_COLOR;

        Self {
            position: pt2(x, y),
            velocity: Vec2::ZERO,
            color: rgb(r, g, b),
        }
    }

    // Draw the particle as a filled circle
    pub fn draw(&self, draw: &Draw, window_rect: Rect) {
        let screen_pos = renderer::sim_to_screen(self.position, window_rect);

        draw.ellipse()
            .color(self.color)
            .radius(PARTICLE_RADIUS)
            .xy(screen_pos);
    }
}
