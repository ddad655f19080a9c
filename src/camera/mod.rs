//! Camera director module
//!
//! This module moves the orbit camera programmatically: a one-shot eased
//! transition to a selected body, and a smoothed follow of that body while
//! time runs in static mode. User drag/zoom stays with the orbit camera.

use bevy::prelude::*;

pub mod easing;
pub mod follow;
pub mod pose;
pub mod systems;
pub mod transition;

pub use pose::{CameraPose, apply_pose};
pub use systems::{follow_focus_target, handle_focus_requests, step_focus_transition};
pub use transition::FocusTransition;

use crate::frame::FrameSet;

/// Marker for the camera driven by the director and the orbit controls.
#[derive(Component)]
pub struct MainCamera;

/// Model entity of the focused body. A reference only; the registry owns
/// the body.
#[derive(Resource, Default, Debug)]
pub struct FocusTarget(pub Option<Entity>);

#[derive(Message, Clone, Debug, PartialEq)]
pub enum FocusRequest {
    /// Fly to the named body and follow it in static mode.
    Body(String),
    /// Stop following and abandon any transition.
    Clear,
}

/// Plugin for programmatic camera moves
pub struct CameraDirectorPlugin;

impl Plugin for CameraDirectorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusTarget>()
            .init_resource::<FocusTransition>()
            .add_message::<FocusRequest>()
            .add_systems(
                Update,
                (
                    handle_focus_requests,
                    step_focus_transition,
                    follow_focus_target,
                )
                    .chain()
                    .in_set(FrameSet::Camera),
            );
    }
}
