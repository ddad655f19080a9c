//! Smoothed follow of the focused body in static time mode

use bevy::prelude::*;

use crate::camera::pose::CameraPose;
use crate::config::AppConfig;
use crate::orbital::BodyParams;

/// Camera offset from a focused body; the central body gets a wider view.
pub fn focus_offset(params: &BodyParams, config: &AppConfig) -> Vec3 {
    if params.is_central() {
        config.central_offset()
    } else {
        config.body_offset()
    }
}

/// Move a fixed fraction of the remaining way toward the follow pose.
pub fn follow_step(
    current: CameraPose,
    target: Vec3,
    offset: Vec3,
    position_blend: f32,
    focus_blend: f32,
) -> CameraPose {
    CameraPose {
        position: current.position.lerp(target + offset, position_blend),
        focus: current.focus.lerp(target, focus_blend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::PLANETS;

    #[test]
    fn test_offsets_by_body_kind() {
        let cfg = AppConfig::default();
        assert_eq!(focus_offset(&PLANETS[0], &cfg), Vec3::new(600.0, 300.0, 600.0));
        assert_eq!(focus_offset(&PLANETS[4], &cfg), Vec3::new(60.0, 120.0, 90.0));
    }

    #[test]
    fn test_error_shrinks_geometrically_without_overshoot() {
        let target = Vec3::new(500.0, 0.0, 0.0);
        let offset = Vec3::new(60.0, 120.0, 90.0);
        let goal = target + offset;
        let distance = 800.0;
        let mut pose = CameraPose::new(goal + Vec3::X * distance, Vec3::ZERO);

        for n in 1..=200 {
            pose = follow_step(pose, target, offset, 0.02, 0.05);
            let expected = distance * 0.98_f32.powi(n);
            let error = pose.position.x - goal.x;
            assert!(error > 0.0, "overshoot at frame {n}");
            assert!((error - expected).abs() < expected * 1e-3 + 1e-3);
        }
        // focus converges faster than position
        let focus_err = (pose.focus - target).length();
        assert!(focus_err < 500.0 * 0.95_f32.powi(200) + 1e-3);
    }

    #[test]
    fn test_at_goal_stays_put() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let offset = Vec3::ONE;
        let pose = CameraPose::new(target + offset, target);
        let next = follow_step(pose, target, offset, 0.02, 0.05);
        assert!((next.position - pose.position).length() < 1e-5);
        assert!((next.focus - pose.focus).length() < 1e-5);
    }
}
