//! One-shot eased camera transition to a focused body

use bevy::prelude::*;

use crate::camera::easing::ease_in_out_quad;
use crate::camera::pose::CameraPose;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionTask {
    pub generation: u64,
    pub start: CameraPose,
    pub end: CameraPose,
    /// Steps taken so far. One step per rendered frame.
    pub step: u32,
    pub steps: u32,
}

impl TransitionTask {
    /// Pose after `step` steps. Exactly `end` from the last step on.
    pub fn pose_at(&self, step: u32) -> CameraPose {
        if step >= self.steps {
            return self.end;
        }
        let t = step as f32 / self.steps as f32;
        self.start.lerp(&self.end, ease_in_out_quad(t))
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

/// The in-flight focus transition, if any.
///
/// Every `begin` bumps the generation; a task whose generation no longer
/// matches is dropped instead of stepped.
#[derive(Resource, Default, Debug)]
pub struct FocusTransition {
    generation: u64,
    active: Option<TransitionTask>,
}

impl FocusTransition {
    pub fn begin(&mut self, start: CameraPose, end: CameraPose, steps: u32) -> u64 {
        self.generation += 1;
        self.active = Some(TransitionTask {
            generation: self.generation,
            start,
            end,
            step: 0,
            steps: steps.max(1),
        });
        self.generation
    }

    /// Invalidate whatever is in flight.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.current().is_some()
    }

    pub fn current(&self) -> Option<&TransitionTask> {
        self.active
            .as_ref()
            .filter(|task| task.generation == self.generation)
    }

    /// Take one step and return the pose to apply this frame.
    pub fn advance(&mut self) -> Option<CameraPose> {
        if !self.is_active() {
            self.active = None;
            return None;
        }
        let task = self.active.as_mut()?;
        task.step += 1;
        let pose = task.pose_at(task.step);
        if task.is_finished() {
            self.active = None;
        }
        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 300.0, 1200.0), Vec3::ZERO)
    }

    fn run_to_end(transition: &mut FocusTransition) -> Vec<CameraPose> {
        std::iter::from_fn(|| transition.advance()).collect()
    }

    #[test]
    fn test_endpoints_exact_for_both_offsets() {
        let target = Vec3::new(-321.5, 0.0, 412.25);
        for offset in [Vec3::new(600.0, 300.0, 600.0), Vec3::new(60.0, 120.0, 90.0)] {
            let end = CameraPose::new(target + offset, target);
            let mut transition = FocusTransition::default();
            transition.begin(start(), end, 60);
            assert_eq!(transition.current().unwrap().pose_at(0), start());

            let poses = run_to_end(&mut transition);
            assert_eq!(poses.len(), 60);
            assert_eq!(*poses.last().unwrap(), end);
            assert_eq!(poses.last().unwrap().position, target + offset);
            assert!(!transition.is_active());
        }
    }

    #[test]
    fn test_midpoint_is_halfway() {
        let end = CameraPose::new(Vec3::new(100.0, 300.0, 1200.0), Vec3::new(100.0, 0.0, 0.0));
        let mut transition = FocusTransition::default();
        transition.begin(start(), end, 60);
        let poses = run_to_end(&mut transition);
        assert!((poses[29].position.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_new_request_supersedes_in_flight() {
        let mut transition = FocusTransition::default();
        let first_end = CameraPose::new(Vec3::splat(1000.0), Vec3::splat(900.0));
        let g1 = transition.begin(start(), first_end, 60);
        let mut mid = start();
        for _ in 0..20 {
            mid = transition.advance().unwrap();
        }

        let second_end = CameraPose::new(Vec3::new(-50.0, 0.0, 0.0), Vec3::ZERO);
        let g2 = transition.begin(mid, second_end, 60);
        assert!(g2 > g1);
        assert_eq!(transition.current().unwrap().start, mid);

        let poses = run_to_end(&mut transition);
        assert_eq!(poses.len(), 60);
        assert_eq!(*poses.last().unwrap(), second_end);
    }

    #[test]
    fn test_cancel_drops_task() {
        let mut transition = FocusTransition::default();
        transition.begin(start(), start(), 60);
        transition.advance();
        transition.cancel();
        assert!(!transition.is_active());
        assert!(transition.advance().is_none());
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        let mut transition = FocusTransition::default();
        let end = CameraPose::new(Vec3::X, Vec3::ZERO);
        transition.begin(start(), end, 0);
        assert_eq!(transition.advance(), Some(end));
        assert_eq!(transition.advance(), None);
    }
}
