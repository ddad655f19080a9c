//! Camera director systems

use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::camera::follow::{focus_offset, follow_step};
use crate::camera::pose::{CameraPose, apply_pose, world_position};
use crate::camera::transition::FocusTransition;
use crate::camera::{FocusRequest, FocusTarget, MainCamera};
use crate::config::AppConfig;
use crate::orbital::{SimulationTime, TimeMode};
use crate::scene::BodyRegistry;

/// System to start focus transitions and set the follow target
pub fn handle_focus_requests(
    mut requests: MessageReader<FocusRequest>,
    registry: Res<BodyRegistry>,
    config: Res<AppConfig>,
    mut focus: ResMut<FocusTarget>,
    mut transition: ResMut<FocusTransition>,
    transforms: TransformHelper,
    camera: Query<(&Transform, &PanOrbitCamera), With<MainCamera>>,
) {
    for request in requests.read() {
        let name = match request {
            FocusRequest::Body(name) => name,
            FocusRequest::Clear => {
                focus.0 = None;
                transition.cancel();
                info!("Camera focus cleared");
                continue;
            }
        };

        let Some(body) = registry.get(name) else {
            info!("Cannot focus {}: not loaded", name);
            focus.0 = None;
            continue;
        };
        let Some(target) = world_position(body.model, &transforms) else {
            warn!("Cannot focus {}: model entity missing", name);
            continue;
        };
        let Ok((cam_transform, poc)) = camera.single() else {
            warn!("handle_focus_requests: main camera not found");
            return;
        };

        let start = CameraPose::new(cam_transform.translation, poc.focus);
        let end = CameraPose::new(target + focus_offset(&body.params, &config), target);
        let generation = transition.begin(start, end, config.transition_steps);
        focus.0 = Some(body.model);
        info!("Focusing {} (transition #{})", name, generation);
    }
}

/// System to take one step of the in-flight focus transition
pub fn step_focus_transition(
    mut transition: ResMut<FocusTransition>,
    mut camera: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    if !transition.is_active() {
        return;
    }
    let Ok(mut poc) = camera.single_mut() else {
        return;
    };
    if let Some(pose) = transition.advance() {
        apply_pose(&mut poc, pose);
    }
}

/// System to keep the camera trailing the focused body in static mode
pub fn follow_focus_target(
    sim_time: Res<SimulationTime>,
    focus: Res<FocusTarget>,
    transition: Res<FocusTransition>,
    registry: Res<BodyRegistry>,
    config: Res<AppConfig>,
    transforms: TransformHelper,
    mut camera: Query<(&Transform, &mut PanOrbitCamera), With<MainCamera>>,
) {
    if sim_time.mode != TimeMode::Static || transition.is_active() {
        return;
    }
    let Some(model) = focus.0 else {
        return;
    };
    let Some(body) = registry.by_model(model) else {
        return;
    };
    let Some(target) = world_position(model, &transforms) else {
        return;
    };
    let Ok((cam_transform, mut poc)) = camera.single_mut() else {
        return;
    };

    let current = CameraPose::new(cam_transform.translation, poc.focus);
    let next = follow_step(
        current,
        target,
        focus_offset(&body.params, &config),
        config.follow_position_blend,
        config.follow_focus_blend,
    );
    apply_pose(&mut poc, next);
}
