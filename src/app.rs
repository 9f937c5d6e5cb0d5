/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update.
 * One frame is: event dispatch (keyboard and mouse handlers) -> update
 * (UI pass, wind computation, advection, collision resolution) -> view.
 * Everything runs on the main thread.
 */

use log::info;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input;
use crate::obstacle::Obstacle;
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::physics;
use crate::renderer;
use crate::ui;
use crate::{PARTICLE_COLUMN_SPACING, PARTICLE_ROWS, SCREEN_HEIGHT, SCREEN_WIDTH};

// Main model for the application
pub struct Model {
    pub particles: Vec<Particle>,
    pub obstacles: Vec<Obstacle>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Wind speed computed from the parameters this frame
    pub wind_speed: f32,
}

impl Model {
    // Single entry point for emptying the obstacle list
    pub fn clear_obstacles(&mut self) {
        if !self.obstacles.is_empty() {
            info!("cleared {} obstacles", self.obstacles.len());
        }
        self.obstacles.clear();
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Create the main window; failure here aborts with a diagnostic
    let window_id = app
        .new_window()
        .title("Wind Particle Demo")
        .size(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to create the main window");

    let window = app
        .window(window_id)
        .expect("Main window missing after creation");

    // Create the UI
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();

    // Lay out the particle field once; the count is fixed from here on
    let particles = physics::populate_grid(
        PARTICLE_ROWS,
        PARTICLE_COLUMN_SPACING,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
    );

    Model {
        particles,
        obstacles: Vec::new(),
        params,
        egui,
        debug_info: DebugInfo::default(),
        wind_speed: 0.0,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // UI pass; the displayed wind speed is last frame's value
    let clear_obstacles = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.wind_speed,
        model.obstacles.len(),
    );

    if clear_obstacles {
        model.clear_obstacles();
    }

    // Re-derive the wind speed from the freshly tuned parameters
    model.wind_speed = model.params.wind.speed();

    // Only advance the field if the simulation is not paused
    if !model.params.pause_simulation {
        physics::advance_particles(&mut model.particles, model.wind_speed, SCREEN_WIDTH);
        model.debug_info.collisions_last_frame =
            physics::resolve_collisions(&mut model.particles, &model.obstacles);
    }
}
