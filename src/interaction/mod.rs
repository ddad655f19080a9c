//! Pointer interaction module
//!
//! This module casts a ray through the cursor every frame, highlights the
//! body under it and shows its name in a floating label.

use bevy::prelude::*;

pub mod hover;
pub mod systems;

pub use hover::{HoverChange, HoverState};
pub use systems::{spawn_hover_label, update_hover};

use crate::frame::FrameSet;

/// Marker for the floating body-name label.
#[derive(Component)]
pub struct HoverLabel;

/// Plugin for hover highlighting
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>()
            .add_systems(Startup, spawn_hover_label)
            .add_systems(Update, update_hover.in_set(FrameSet::Interaction));
    }
}
