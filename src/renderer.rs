/*
 * Renderer Module
 *
 * This module draws one frame: the particle field, the obstacles, the debug
 * overlay when enabled, and the egui panel on top.
 *
 * Simulation coordinates have their origin at the bottom-left of the screen
 * with y pointing up; nannou frames are centered on the window, so every
 * draw call goes through sim_to_screen.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;

// Translate a point from simulation space to nannou's centered frame space
pub fn sim_to_screen(point: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.bottom() + point.y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    // Draw the particle field, then the obstacles on top of it
    for particle in &model.particles {
        particle.draw(&draw, window_rect);
    }

    for obstacle in &model.obstacles {
        obstacle.draw(&draw, window_rect);
    }

    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.particles.len(),
            model.obstacles.len(),
            model.wind_speed,
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
