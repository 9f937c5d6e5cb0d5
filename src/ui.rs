/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides sliders for the wind parameters, controls
 * for the next obstacle to be placed, and read-only frame statistics.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::obstacle::ObstacleKind;
use crate::params::SimulationParams;
use crate::wind::WindParameters;

// Update the UI and return whether the obstacle list should be cleared
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    wind_speed: f32,
    obstacle_count: usize,
) -> bool {
    let mut clear_obstacles = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Wind Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Wind Parameters", |ui| {
                ui.add(egui::Slider::new(&mut params.wind.dt, WindParameters::dt_range()).text("dt"));
                ui.add(
                    egui::Slider::new(&mut params.wind.coriolis, WindParameters::coriolis_range())
                        .text("Coriolis f"),
                );
                ui.add(
                    egui::Slider::new(&mut params.wind.friction, WindParameters::friction_range())
                        .text("Friction k"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.wind.pressure_gradient_x,
                        WindParameters::pressure_gradient_range(),
                    )
                    .text("Pressure dPdx"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.wind.pressure_gradient_y,
                        WindParameters::pressure_gradient_range(),
                    )
                    .text("Pressure dPdy"),
                );
            });

            ui.collapsing("Obstacle Placement", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.obstacle_color[0],
                        SimulationParams::color_channel_range(),
                    )
                    .text("Red"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.obstacle_color[1],
                        SimulationParams::color_channel_range(),
                    )
                    .text("Green"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.obstacle_color[2],
                        SimulationParams::color_channel_range(),
                    )
                    .text("Blue"),
                );
                ui.add(
                    egui::Slider::new(&mut params.obstacle_size, SimulationParams::obstacle_size_range())
                        .text("Size"),
                );

                ui.horizontal(|ui| {
                    for kind in [ObstacleKind::Circle, ObstacleKind::Square, ObstacleKind::Triangle] {
                        ui.radio_value(&mut params.obstacle_kind, kind, kind.label());
                    }
                });

                ui.label("Space places an obstacle at the cursor, C clears all");

                if ui.button("Clear Obstacles").clicked() {
                    clear_obstacles = true;
                }

                ui.label(format!("Obstacles: {}", obstacle_count));
            });

            ui.separator();

            ui.label(format!("Wind Speed: {:.3} m/s", wind_speed));
            ui.label(format!("FPS: {:.1}", debug_info.fps));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    clear_obstacles
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    particle_count: usize,
    obstacle_count: usize,
    wind_speed: f32,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Wind speed: {:.3} m/s", wind_speed),
        format!("Particles: {}", particle_count),
        format!("Obstacles: {}", obstacle_count),
        format!("Collisions: {}", debug_info.collisions_last_frame),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
