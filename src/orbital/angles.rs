//! Orbit and spin angles as closed-form functions of simulated days

use std::f64::consts::TAU;

use crate::orbital::params::{BodyParams, EARTH_NAME};
use crate::orbital::time::TimeMode;

/// Earth spins at this fraction of its real rate in static mode so the
/// surface stays readable at 10 days per second.
pub const STATIC_SPIN_SLOWDOWN: f64 = 0.2;
pub const STATIC_SPIN_SLOWDOWN_BODY: &str = EARTH_NAME;

/// Revolution angle in `[0, 2π)`.
pub fn orbital_angle(days: f64, orbit_period: f64) -> f64 {
    let angle = TAU * days.rem_euclid(orbit_period) / orbit_period;
    // rem_euclid can round up to exactly the period for tiny negative inputs
    if angle >= TAU { 0.0 } else { angle }
}

/// Unwrapped spin angle. The sign of `rot_period` sets the direction.
pub fn spin_angle(days: f64, rot_period: f64) -> f64 {
    TAU * days / rot_period
}

/// Day count fed to the spin formula for `body` under `mode`.
pub fn spin_input_days(body: &BodyParams, days: f64, mode: TimeMode) -> f64 {
    if mode == TimeMode::Static && body.name == STATIC_SPIN_SLOWDOWN_BODY {
        days * STATIC_SPIN_SLOWDOWN
    } else {
        days
    }
}

/// Orbit and spin angles for one body at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyAngles {
    /// `None` for bodies that never revolve.
    pub orbit: Option<f64>,
    /// `None` for bodies that never spin.
    pub spin: Option<f64>,
}

impl BodyAngles {
    pub fn at(body: &BodyParams, days: f64, mode: TimeMode) -> Self {
        Self {
            orbit: body.orbit_period.map(|p| orbital_angle(days, p)),
            spin: body
                .rot_period
                .map(|p| spin_angle(spin_input_days(body, days, mode), p)),
        }
    }

    /// Spin wrapped into `[0, 2π)` for writing into an `f32` rotation.
    pub fn display_spin(&self) -> Option<f32> {
        self.spin.map(|s| s.rem_euclid(TAU) as f32)
    }

    pub fn display_orbit(&self) -> Option<f32> {
        self.orbit.map(|o| o as f32)
    }
}
