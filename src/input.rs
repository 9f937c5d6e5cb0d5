/*
 * Input Module
 *
 * This module handles user input events for the wind particle demo.
 *
 * Obstacle placement is a keyboard action resolved against the cursor
 * position on the main event loop, so the obstacle list is only ever touched
 * between frames. The cursor query reports simulation coordinates (origin at
 * the bottom-left of the window) or the sentinel (-1, -1) when the pointer
 * is outside the window bounds.
 */

use log::info;
use nannou::prelude::*;

use crate::app::Model;

// Sentinel returned when the cursor is outside the window
pub fn cursor_outside() -> Vec2 {
    vec2(-1.0, -1.0)
}

// Current cursor position in simulation coordinates, or the sentinel
pub fn cursor_sim_position(app: &App) -> Vec2 {
    let window_rect = app.window_rect();
    let mouse = app.mouse.position();

    if mouse.x < window_rect.left()
        || mouse.x > window_rect.right()
        || mouse.y < window_rect.bottom()
        || mouse.y > window_rect.top()
    {
        return cursor_outside();
    }

    // nannou uses centered window coordinates with y up, so shifting by the
    // bottom-left corner lands in simulation space
    vec2(mouse.x - window_rect.left(), mouse.y - window_rect.bottom())
}

// Keyboard handler: Space places an obstacle at the cursor, C clears them all
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            // Ignore placement while the pointer is captured by the UI
            if model.egui.ctx().is_pointer_over_area() {
                return;
            }

            let cursor = cursor_sim_position(app);
            if cursor == cursor_outside() {
                return;
            }

            let obstacle = model.params.pending_obstacle(pt2(cursor.x, cursor.y));
            info!(
                "placed {} obstacle {} at ({:.0}, {:.0})",
                obstacle.kind.label(),
                model.obstacles.len(),
                cursor.x,
                cursor.y
            );
            model.obstacles.push(obstacle);
        }
        Key::C => {
            model.clear_obstacles();
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
