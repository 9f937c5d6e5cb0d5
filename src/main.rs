/*
 * Wind Particle Demo
 *
 * This application advects a field of particles with a simplified wind
 * dynamics equation. The wind speed comes from one explicit Euler step of a
 * damped, Coriolis-coupled, pressure-forced momentum balance, reduced to its
 * magnitude.
 *
 * The simulation includes interactive sliders to adjust the wind parameters
 * in real-time, obstacle placement at the cursor, and a debug overlay with
 * frame statistics.
 */

use windfield::app;

fn main() {
    env_logger::init();

    nannou::app(app::model).update(app::update).run();
}
