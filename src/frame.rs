//! Per-frame ordering of the simulation

use bevy::prelude::*;

/// Stages of one frame in `Update`. The orbit camera applies the resulting
/// camera state in `PostUpdate`, after which the frame is rendered.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// UI and keyboard input turned into requests.
    Input,
    /// Time mode switches and the simulated day count.
    Time,
    /// Pivot and model rotations.
    Ephemeris,
    /// Focus transitions and follow.
    Camera,
    /// Pointer hit test, hover pulse, label.
    Interaction,
}

pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Time,
                FrameSet::Ephemeris,
                FrameSet::Camera,
                FrameSet::Interaction,
            )
                .chain(),
        );
    }
}
