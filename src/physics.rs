/*
 * Physics Module
 *
 * This module contains the per-frame system operations over the particle
 * field: the initial grid layout, the horizontal advection by the current
 * wind speed, and the particle/obstacle collision resolution.
 *
 * All three are single-pass loops over plain slices so they can be driven
 * directly by tests. Collision is a full pairwise scan, O(particles x
 * obstacles) per frame; at tens of particles and a handful of obstacles no
 * spatial partitioning is warranted.
 */

use log::debug;
use nannou::prelude::*;

use crate::obstacle::{Obstacle, ObstacleKind};
use crate::particle::Particle;

// Vertical offset of the first particle row
const ROW_BASELINE_Y: f32 = 50.0;

// Lay out the particle field: `rows` particles per column, spaced
// screen_height / rows apart starting at ROW_BASELINE_Y, with columns
// replicated leftward from x = 0 at `column_spacing` intervals so the field
// scrolls into view. Deterministic; pure function of its arguments.
pub fn populate_grid(
    rows: usize,
    column_spacing: f32,
    screen_width: f32,
    screen_height: f32,
) -> Vec<Particle> {
    if rows == 0 || column_spacing <= 0.0 {
        return Vec::new();
    }

    let padding = screen_height / rows as f32;
    let columns = (screen_width / column_spacing) as usize;
    let mut particles = Vec::with_capacity(columns * rows);

    for j in 0..columns {
        for i in 0..rows {
            let x = -(j as f32 * column_spacing);
            let y = padding * i as f32 + ROW_BASELINE_Y;
            particles.push(Particle::new(x, y));
        }
    }

    particles
}

// Advect every particle horizontally by the current wind speed. The speed is
// uniform across the field; a particle that leaves the right edge wraps back
// to x = 0. Vertical position is fixed at initialization and never changes.
pub fn advance_particles(particles: &mut [Particle], wind_speed: f32, screen_width: f32) {
    for particle in particles.iter_mut() {
        particle.velocity.x = wind_speed;
        particle.position.x += particle.velocity.x;

        if particle.position.x > screen_width {
            particle.position.x = 0.0;
        }
    }
}

// Push interpenetrating particles out to the obstacle boundary and kill
// their velocity. Only Circle obstacles collide. Returns the number of
// resolved collisions; each one is logged with the pair indices.
//
// A particle whose center coincides exactly with an obstacle center has no
// defined push direction and is left where it is.
pub fn resolve_collisions(particles: &mut [Particle], obstacles: &[Obstacle]) -> usize {
    let mut resolved = 0;

    for (pi, particle) in particles.iter_mut().enumerate() {
        for (oi, obstacle) in obstacles.iter().enumerate() {
            if obstacle.kind != ObstacleKind::Circle {
                continue;
            }

            let dx = particle.position.x - obstacle.position.x;
            let dy = particle.position.y - obstacle.position.y;
            let dist_sq = dx * dx + dy * dy;

            if dist_sq <= obstacle.radius * obstacle.radius {
                let dist = dist_sq.sqrt();
                if dist > 0.0 {
                    // Place the particle on the boundary along the line from
                    // the obstacle center through the particle
                    let scale = obstacle.radius / dist;
                    particle.position.x = obstacle.position.x + dx * scale;
                    particle.position.y = obstacle.position.y + dy * scale;
                    particle.velocity = Vec2::ZERO;

                    debug!("particle {pi} pushed to boundary of obstacle {oi}");
                    resolved += 1;
                }
            }
        }
    }

    resolved
}
