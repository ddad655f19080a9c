//! Camera poses and their mapping onto the orbit camera

use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;
use bevy_panorbit_camera::PanOrbitCamera;

/// Camera position plus the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub focus: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, focus: Vec3) -> Self {
        Self { position, focus }
    }

    pub fn lerp(&self, other: &Self, s: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, s),
            focus: self.focus.lerp(other.focus, s),
        }
    }
}

/// Spherical coordinates of a camera around its focus, as the orbit camera
/// stores them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitAngles {
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitAngles {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length().max(f32::EPSILON);
        Self {
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn offset(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        )
    }
}

/// Write `pose` into the orbit camera, forcing it to skip its own smoothing.
pub fn apply_pose(poc: &mut PanOrbitCamera, pose: CameraPose) {
    let angles = OrbitAngles::from_offset(pose.position - pose.focus);

    poc.focus = pose.focus;
    poc.target_focus = pose.focus;

    poc.target_radius = angles.radius;
    poc.target_yaw = angles.yaw;
    poc.target_pitch = angles.pitch;

    poc.radius = Some(angles.radius);
    poc.yaw = Some(angles.yaw);
    poc.pitch = Some(angles.pitch);

    poc.force_update = true;
}

/// Current world position of `entity`, composed from local transforms so it
/// reflects changes made earlier this frame.
pub fn world_position(entity: Entity, transforms: &TransformHelper) -> Option<Vec3> {
    transforms
        .compute_global_transform(entity)
        .ok()
        .map(|global| global.translation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_orbit_angles_round_trip() {
        for offset in [
            Vec3::new(0.0, 300.0, 1200.0),
            Vec3::new(600.0, 300.0, 600.0),
            Vec3::new(60.0, 120.0, 90.0),
            Vec3::new(-5.0, -2.0, 0.5),
        ] {
            let angles = OrbitAngles::from_offset(offset);
            assert!((angles.offset() - offset).length() < 1e-3, "{offset:?}");
        }
    }

    #[test]
    fn test_apply_pose_sets_targets_and_current() {
        let mut poc = PanOrbitCamera::default();
        let pose = CameraPose::new(Vec3::new(560.0, 120.0, 90.0), Vec3::new(500.0, 0.0, 0.0));
        apply_pose(&mut poc, pose);
        assert_eq!(poc.focus, pose.focus);
        assert_eq!(poc.target_focus, pose.focus);
        assert_eq!(poc.radius, Some(poc.target_radius));
        assert_eq!(poc.yaw, Some(poc.target_yaw));
        assert_eq!(poc.pitch, Some(poc.target_pitch));
        assert!(poc.force_update);
        let angles = OrbitAngles {
            radius: poc.target_radius,
            yaw: poc.target_yaw,
            pitch: poc.target_pitch,
        };
        assert!((pose.focus + angles.offset() - pose.position).length() < 1e-3);
    }

    #[test]
    fn test_world_position_composes_parents() {
        let mut world = World::new();
        let pivot = world
            .spawn(Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::PI)))
            .id();
        let model = world
            .spawn((Transform::from_xyz(500.0, 0.0, 0.0), ChildOf(pivot)))
            .id();
        let pos = world
            .run_system_once(move |transforms: TransformHelper| world_position(model, &transforms))
            .unwrap()
            .unwrap();
        assert!((pos - Vec3::new(-500.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_world_position_of_missing_entity() {
        let mut world = World::new();
        let pos = world
            .run_system_once(|transforms: TransformHelper| {
                world_position(Entity::PLACEHOLDER, &transforms)
            })
            .unwrap();
        assert!(pos.is_none());
    }
}
