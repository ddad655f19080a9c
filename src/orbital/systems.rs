//! Per-frame transform updates from the ephemeris

use bevy::prelude::*;

use crate::orbital::angles::BodyAngles;
use crate::orbital::time::SimulationTime;
use crate::scene::{AxialTilt, BodyModel, BodyRegistry, OrbitPivot};

/// Model rotation: the fixed tilt applied on top of spin about local Y.
pub fn model_rotation(tilt: Option<&AxialTilt>, spin: f32) -> Quat {
    let spin = Quat::from_rotation_y(spin);
    match tilt {
        Some(tilt) => tilt.0 * spin,
        None => spin,
    }
}

/// System to revolve pivots and spin models of every registered body
pub fn update_body_transforms(
    sim_time: Res<SimulationTime>,
    registry: Res<BodyRegistry>,
    mut pivots: Query<&mut Transform, (With<OrbitPivot>, Without<BodyModel>)>,
    mut models: Query<(&mut Transform, Option<&AxialTilt>), (With<BodyModel>, Without<OrbitPivot>)>,
) {
    for body in registry.iter() {
        let angles = BodyAngles::at(&body.params, sim_time.days, sim_time.mode);

        if let Some(orbit) = angles.display_orbit()
            && let Ok(mut pivot) = pivots.get_mut(body.pivot)
        {
            pivot.rotation = Quat::from_rotation_y(orbit);
        }

        if let Some(spin) = angles.display_spin()
            && let Ok((mut model, tilt)) = models.get_mut(body.model)
        {
            model.rotation = model_rotation(tilt, spin);
        }
    }
}
