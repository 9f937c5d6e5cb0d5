/*
 * Wind Module
 *
 * This module defines the WindParameters struct and the wind speed equation.
 * The equation applies one explicit Euler step to a linearized horizontal
 * momentum balance with Coriolis deflection, pressure-gradient forcing and
 * linear friction, then returns the magnitude of the stepped wind vector.
 *
 * The base wind vector (u, v) is never mutated: each call re-integrates a
 * single step from the same baseline, so the result is the instantaneous
 * forced-response speed for the current parameters rather than an
 * accumulated velocity state.
 */

use std::ops::RangeInclusive;

// Air density at sea level, kg/m^3. Keeps the 1/rho division well-defined.
pub const AIR_DENSITY: f32 = 1.225;

// Tunable wind parameters, adjusted through the UI every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindParameters {
    pub dt: f32,
    pub coriolis: f32,
    pub friction: f32,
    pub pressure_gradient_x: f32,
    pub pressure_gradient_y: f32,
    pub base_u: f32,
    pub base_v: f32,
}

impl Default for WindParameters {
    fn default() -> Self {
        Self {
            dt: 0.1,
            coriolis: 0.0,
            friction: 0.1,
            pressure_gradient_x: 0.0,
            pressure_gradient_y: 0.0,
            base_u: 0.0,
            base_v: 0.0,
        }
    }
}

impl WindParameters {
    // Current wind speed derived from the base vector and the tuned forcing terms
    pub fn speed(&self) -> f32 {
        wind_speed_equation(
            self.base_u,
            self.base_v,
            AIR_DENSITY,
            self.pressure_gradient_x,
            self.pressure_gradient_y,
            self.coriolis,
            self.friction,
            self.dt,
        )
    }

    // Ranges for the UI sliders
    pub fn dt_range() -> RangeInclusive<f32> {
        0.01..=1.0
    }

    pub fn coriolis_range() -> RangeInclusive<f32> {
        -1.0..=1.0
    }

    pub fn friction_range() -> RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn pressure_gradient_range() -> RangeInclusive<f32> {
        -10.0..=10.0
    }
}

// One explicit Euler step of the damped, Coriolis-coupled, pressure-forced
// momentum balance, reduced to the magnitude of the stepped vector.
// `rho` must be non-zero; all call sites pass AIR_DENSITY.
pub fn wind_speed_equation(
    u: f32,
    v: f32,
    rho: f32,
    dpdx: f32,
    dpdy: f32,
    f: f32,
    k: f32,
    dt: f32,
) -> f32 {
    let du_dt = f * v - (1.0 / rho) * dpdx - k * u;
    let dv_dt = -f * u - (1.0 / rho) * dpdy - k * v;

    let u_new = u + du_dt * dt;
    let v_new = v + dv_dt * dt;

    (u_new * u_new + v_new * v_new).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32, tol: f32) {
        assert!(
            (a - b).abs() <= tol,
            "expected {a} to be within {tol} of {b}"
        );
    }

    #[test]
    fn zero_inputs_give_zero_speed() {
        let speed = wind_speed_equation(0.0, 0.0, AIR_DENSITY, 0.0, 0.0, 0.0, 0.1, 0.1);
        assert_eq!(speed, 0.0);
    }

    #[test]
    fn pressure_gradient_drives_wind() {
        // u' = -(1/1.225) * 5 * 0.1, v' = 0
        let speed = wind_speed_equation(0.0, 0.0, AIR_DENSITY, 5.0, 0.0, 0.0, 0.0, 0.1);
        assert_close(speed, 5.0 / AIR_DENSITY * 0.1, 1e-6);
    }

    #[test]
    fn friction_damps_base_wind() {
        let undamped = wind_speed_equation(2.0, 0.0, AIR_DENSITY, 0.0, 0.0, 0.0, 0.0, 0.1);
        let damped = wind_speed_equation(2.0, 0.0, AIR_DENSITY, 0.0, 0.0, 0.0, 0.5, 0.1);
        assert_eq!(undamped, 2.0);
        assert_close(damped, 1.9, 1e-6);
    }

    #[test]
    fn coriolis_deflects_without_changing_sign_of_magnitude() {
        // f couples the components: u stays, v picks up -f*u*dt
        let speed = wind_speed_equation(1.0, 0.0, AIR_DENSITY, 0.0, 0.0, 1.0, 0.0, 0.1);
        assert_close(speed, (1.0f32 + 0.01).sqrt(), 1e-6);
    }

    #[test]
    fn speed_is_non_negative_and_finite() {
        let samples = [
            (0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1),
            (3.0, -2.0, 10.0, -10.0, 1.0, 1.0, 1.0),
            (-5.0, 4.0, -7.5, 2.5, -1.0, 0.0, 0.01),
        ];
        for (u, v, dpdx, dpdy, f, k, dt) in samples {
            let speed = wind_speed_equation(u, v, AIR_DENSITY, dpdx, dpdy, f, k, dt);
            assert!(speed >= 0.0);
            assert!(speed.is_finite());
        }
    }

    #[test]
    fn default_parameters_are_calm() {
        let params = WindParameters::default();
        assert_eq!(params.speed(), 0.0);
    }

    #[test]
    fn speed_matches_free_function() {
        let params = WindParameters {
            pressure_gradient_x: 5.0,
            ..WindParameters::default()
        };
        let expected = wind_speed_equation(0.0, 0.0, AIR_DENSITY, 5.0, 0.0, 0.0, 0.1, 0.1);
        assert_eq!(params.speed(), expected);
    }
}
