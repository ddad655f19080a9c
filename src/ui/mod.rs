//! User interface module
//!
//! This module spawns the body selection buttons, the two time mode buttons
//! and the time display, and turns clicks and key presses into requests.

use bevy::prelude::*;

pub mod panels;
pub mod systems;

pub use panels::spawn_controls;
pub use systems::{
    button_colors, focus_button_system, keyboard_shortcuts, time_mode_button_system,
    update_time_display,
};

use crate::frame::FrameSet;
use crate::orbital::TimeMode;

/// Button selecting the named body.
#[derive(Component)]
pub struct FocusButton(pub &'static str);

/// Button switching to a time mode.
#[derive(Component)]
pub struct TimeModeButton(pub TimeMode);

/// Marker for the time display text.
#[derive(Component)]
pub struct TimeDisplay;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_controls)
            .add_systems(
                Update,
                (
                    focus_button_system,
                    time_mode_button_system,
                    keyboard_shortcuts,
                )
                    .in_set(FrameSet::Input),
            )
            .add_systems(
                Update,
                (button_colors, update_time_display).after(FrameSet::Time),
            );
    }
}
