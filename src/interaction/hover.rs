//! Hover bookkeeping

use bevy::prelude::*;

use crate::scene::BodyRegistry;

/// Model entity of the body under the pointer.
#[derive(Resource, Default, Debug)]
pub struct HoverState {
    pub hovered: Option<Entity>,
}

/// Scale changes needed to move from the old hover to the new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverChange {
    /// Back to base scale.
    pub restore: Option<Entity>,
    /// To base scale times the pulse.
    pub pulse: Option<Entity>,
}

impl HoverChange {
    pub fn is_empty(&self) -> bool {
        self.restore.is_none() && self.pulse.is_none()
    }
}

impl HoverState {
    /// Record this frame's hit. Re-hovering the same body changes nothing,
    /// so the pulse is never applied or reverted twice.
    pub fn update(&mut self, hit: Option<Entity>) -> HoverChange {
        if self.hovered == hit {
            return HoverChange::default();
        }
        let change = HoverChange {
            restore: self.hovered,
            pulse: hit,
        };
        self.hovered = hit;
        change
    }
}

/// Walk up from a ray-cast hit to the registered model that owns it.
pub fn owning_model(
    hit: Entity,
    parents: &Query<&ChildOf>,
    registry: &BodyRegistry,
) -> Option<Entity> {
    let mut current = hit;
    loop {
        if registry.by_model(current).is_some() {
            return Some(current);
        }
        current = parents.get(current).ok()?.parent();
    }
}
