//! Registry of bodies whose assets have finished loading

use bevy::prelude::*;

use crate::orbital::BodyParams;

/// Marker for a body's orbit pivot node.
#[derive(Component)]
pub struct OrbitPivot;

/// Marker for a body's model node, present from spawn (before the asset loads).
#[derive(Component)]
pub struct BodyModel;

/// Parameters of a body whose asset is ready, on its model node.
#[derive(Component, Clone, Copy, Debug)]
pub struct CelestialBody {
    pub params: BodyParams,
}

/// Normalized scale of a model before any hover pulse.
#[derive(Component, Clone, Copy, Debug, Deref)]
pub struct BaseScale(pub Vec3);

/// Fixed tilt of a model's spin axis.
#[derive(Component, Clone, Copy, Debug, Deref)]
pub struct AxialTilt(pub Quat);

#[derive(Clone, Copy, Debug)]
pub struct RegisteredBody {
    pub pivot: Entity,
    pub model: Entity,
    pub params: BodyParams,
}

/// Bodies visible to the frame loop, in load-completion order.
///
/// Written only by the scene builder when an asset becomes ready; every
/// other consumer reads it and must cope with bodies that never arrive.
#[derive(Resource, Default, Debug)]
pub struct BodyRegistry {
    bodies: Vec<RegisteredBody>,
}

impl BodyRegistry {
    /// Returns false (and changes nothing) when the name is already taken.
    pub fn register(&mut self, body: RegisteredBody) -> bool {
        if self.get(body.params.name).is_some() {
            return false;
        }
        self.bodies.push(body);
        true
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredBody> {
        self.bodies.iter().find(|b| b.params.name == name)
    }

    pub fn by_model(&self, model: Entity) -> Option<&RegisteredBody> {
        self.bodies.iter().find(|b| b.model == model)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::params::{MOON, PLANETS};

    fn entry(world: &mut World, params: BodyParams) -> RegisteredBody {
        RegisteredBody {
            pivot: world.spawn_empty().id(),
            model: world.spawn_empty().id(),
            params,
        }
    }

    #[test]
    fn test_empty_registry_lookups() {
        let registry = BodyRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get("Earth").is_none());
        assert!(registry.by_model(Entity::PLACEHOLDER).is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let mut world = World::new();
        let mut registry = BodyRegistry::default();
        let earth = entry(&mut world, PLANETS[3]);
        let moon = entry(&mut world, MOON);
        assert!(registry.register(earth));
        assert!(registry.register(moon));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Moon").unwrap().model, moon.model);
        assert_eq!(registry.by_model(earth.model).unwrap().params.name, "Earth");
        assert!(registry.by_model(earth.pivot).is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut world = World::new();
        let mut registry = BodyRegistry::default();
        let first = entry(&mut world, PLANETS[0]);
        let second = entry(&mut world, PLANETS[0]);
        assert!(registry.register(first));
        assert!(!registry.register(second));
        assert_eq!(registry.get("Sun").unwrap().model, first.model);
    }
}
