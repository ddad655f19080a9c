//! Orbital mechanics module
//!
//! This module handles the body parameter table, orbit and spin angle
//! calculations, and the simulation clock that drives them.

use bevy::prelude::*;

pub mod angles;
pub mod params;
pub mod systems;
pub mod time;

pub use angles::{BodyAngles, orbital_angle, spin_angle};
pub use params::{BodyParams, MOON, PLANETS};
pub use systems::update_body_transforms;
pub use time::{
    SimulationTime, TimeMode, TimeModeRequest, advance_simulation_clock,
    apply_time_mode_requests,
};

use crate::config::AppConfig;
use crate::frame::FrameSet;

/// Plugin for the simulation clock and body transform updates
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        let static_speed = app
            .world()
            .get_resource::<AppConfig>()
            .map(|cfg| cfg.static_speed)
            .unwrap_or(time::DEFAULT_STATIC_SPEED);

        app.insert_resource(SimulationTime::new(static_speed))
            .add_message::<TimeModeRequest>()
            .add_systems(
                Update,
                (
                    (apply_time_mode_requests, advance_simulation_clock)
                        .chain()
                        .in_set(FrameSet::Time),
                    update_body_transforms.in_set(FrameSet::Ephemeris),
                ),
            );
    }
}
