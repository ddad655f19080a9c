//! Scene graph module
//!
//! This module builds the pivot/model hierarchy from the body table, owns the
//! registry of loaded bodies, and spawns decorative orbit rings and the
//! starfield backdrop.

use bevy::prelude::*;

pub mod bounds;
pub mod builder;
pub mod registry;
pub mod rings;
pub mod starfield;

pub use builder::{PendingBody, report_failed_loads, spawn_body_nodes, spawn_planets};
pub use registry::{
    AxialTilt, BaseScale, BodyModel, BodyRegistry, CelestialBody, OrbitPivot, RegisteredBody,
};
pub use starfield::spawn_starfield;

/// Plugin for the body hierarchy and backdrop
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyRegistry>()
            .add_systems(Startup, (spawn_planets, spawn_starfield))
            .add_systems(Update, report_failed_loads);
    }
}
