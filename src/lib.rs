/*
 * Wind Particle Demo - Module Definitions
 *
 * This file defines the module structure for the wind particle application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use obstacle::{Obstacle, ObstacleKind};
pub use params::SimulationParams;
pub use particle::Particle;
pub use wind::WindParameters;

// Define modules
pub mod app;
pub mod debug;
pub mod input;
pub mod obstacle;
pub mod params;
pub mod particle;
pub mod physics;
pub mod renderer;
pub mod ui;
pub mod wind;

// Constants
pub const SCREEN_WIDTH: f32 = 1400.0;
pub const SCREEN_HEIGHT: f32 = 1000.0;
pub const PARTICLE_RADIUS: f32 = 5.0;
pub const PARTICLE_ROWS: usize = 20;
pub const PARTICLE_COLUMN_SPACING: f32 = 25.0;
