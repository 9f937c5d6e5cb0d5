/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable state for the demo: the wind parameters and the settings for
 * the next obstacle to be placed. It is owned by the Model and mutated only
 * through the UI and the input handlers, replacing the file-scope globals
 * of the original sketch.
 */

use nannou::prelude::*;
use std::ops::RangeInclusive;

use crate::obstacle::{Obstacle, ObstacleKind};
use crate::wind::WindParameters;

pub struct SimulationParams {
    pub wind: WindParameters,
    // Settings applied to the next placed obstacle
    pub obstacle_color: [f32; 3],
    pub obstacle_size: f32,
    pub obstacle_kind: ObstacleKind,
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            wind: WindParameters::default(),
            obstacle_color: [0.8, 0.25, 0.2],
            obstacle_size: 40.0,
            obstacle_kind: ObstacleKind::Circle,
            show_debug: false,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    // Build an obstacle at `position` from the current placement settings
    pub fn pending_obstacle(&self, position: Point2) -> Obstacle {
        let [r, g, b] = self.obstacle_color;
        Obstacle::new(position, self.obstacle_size, rgb(r, g, b), self.obstacle_kind)
    }

    // Ranges for the UI sliders
    pub fn color_channel_range() -> RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn obstacle_size_range() -> RangeInclusive<f32> {
        0.0..=100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_obstacle_uses_placement_settings() {
        let params = SimulationParams {
            obstacle_color: [0.1, 0.2, 0.3],
            obstacle_size: 55.0,
            obstacle_kind: ObstacleKind::Triangle,
            ..SimulationParams::default()
        };

        let obstacle = params.pending_obstacle(pt2(320.0, 240.0));
        assert_eq!(obstacle.position, pt2(320.0, 240.0));
        assert_eq!(obstacle.radius, 55.0);
        assert_eq!(obstacle.color, rgb(0.1, 0.2, 0.3));
        assert_eq!(obstacle.kind, ObstacleKind::Triangle);
    }
}
