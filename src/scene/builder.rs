//! Pivot/model hierarchy for every body, finished as assets load

use std::sync::Arc;

use bevy::asset::{AssetLoadError, LoadState};
use bevy::ecs::system::SystemParam;
use bevy::gltf::Gltf;
use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::config::AppConfig;
use crate::orbital::angles::orbital_angle;
use crate::orbital::params::{EARTH_AXIAL_TILT_DEG, EARTH_NAME, MOON, MOON_NAME};
use crate::orbital::{BodyParams, PLANETS, SimulationTime};
use crate::scene::bounds::{Bounds, Normalization, extend_bounds};
use crate::scene::registry::{
    AxialTilt, BaseScale, BodyModel, BodyRegistry, CelestialBody, OrbitPivot, RegisteredBody,
};
use crate::scene::rings::{OrbitRing, orbit_ring_material, orbit_ring_mesh};

const PLANET_RING_COLOR: Color = Color::WHITE;
const MOON_RING_COLOR: Color = Color::srgb(0.667, 0.667, 0.667);

/// Asset root of a body that has not finished loading.
#[derive(Component)]
pub struct PendingBody {
    pub params: BodyParams,
    pub pivot: Entity,
    pub model: Entity,
    pub source: Handle<Gltf>,
    pub scene: Handle<Scene>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingStyle {
    pub segments: usize,
    pub color: Color,
}

/// Orbit ring drawn for `params`, if any.
pub fn ring_style(params: &BodyParams, config: &AppConfig) -> Option<RingStyle> {
    if params.is_central() {
        return None;
    }
    Some(if params.name == MOON_NAME {
        RingStyle {
            segments: config.moon_orbit_segments,
            color: MOON_RING_COLOR,
        }
    } else {
        RingStyle {
            segments: config.orbit_segments,
            color: PLANET_RING_COLOR,
        }
    })
}

/// Where the Moon's pivot goes, given Earth's pivot and orbit angle at the
/// moment Earth finished loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoonAnchor {
    /// Child of Earth's pivot at Earth's orbital offset; follows Earth.
    Live { earth_pivot: Entity, offset: Vec3 },
    /// Top-level, frozen at Earth's world position when it loaded.
    Captured(Vec3),
}

impl MoonAnchor {
    pub fn resolve(
        live: bool,
        earth_pivot: Entity,
        pivot_transform: &Transform,
        earth_distance: f32,
        earth_orbit_angle: f32,
    ) -> Self {
        let offset = Vec3::X * earth_distance;
        if live {
            Self::Live {
                earth_pivot,
                offset,
            }
        } else {
            let mut pivot = *pivot_transform;
            pivot.rotation = Quat::from_rotation_y(earth_orbit_angle);
            Self::Captured(pivot.transform_point(offset))
        }
    }

    fn parent(&self) -> Option<Entity> {
        match self {
            Self::Live { earth_pivot, .. } => Some(*earth_pivot),
            Self::Captured(_) => None,
        }
    }

    fn translation(&self) -> Vec3 {
        match self {
            Self::Live { offset, .. } => *offset,
            Self::Captured(pos) => *pos,
        }
    }
}

/// Spawn the pivot, a hidden model node and the scene root that loads the
/// body's asset. Returns the pivot.
pub fn spawn_body_nodes(
    commands: &mut Commands,
    asset_server: &AssetServer,
    config: &AppConfig,
    params: BodyParams,
    parent: Option<Entity>,
    center: Vec3,
) -> Entity {
    let path = params.asset_path(&config.asset_dir);
    let source: Handle<Gltf> = asset_server.load(path.clone());
    let scene: Handle<Scene> = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));

    let pivot = commands
        .spawn((
            Transform::from_translation(center),
            Visibility::default(),
            OrbitPivot,
            Name::new(format!("{} pivot", params.name)),
        ))
        .id();
    if let Some(parent) = parent {
        commands.entity(pivot).insert(ChildOf(parent));
    }

    let model = commands
        .spawn((
            Transform::from_xyz(params.distance, 0.0, 0.0),
            Visibility::Hidden,
            BodyModel,
            Name::new(params.name),
            ChildOf(pivot),
        ))
        .id();

    commands
        .spawn((
            SceneRoot(scene.clone()),
            Transform::default(),
            PendingBody {
                params,
                pivot,
                model,
                source,
                scene,
            },
            ChildOf(model),
        ))
        .observe(on_body_asset_ready);

    pivot
}

/// Startup system spawning every planet in the table
pub fn spawn_planets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<AppConfig>,
) {
    for params in PLANETS {
        spawn_body_nodes(
            &mut commands,
            &asset_server,
            &config,
            params,
            None,
            Vec3::ZERO,
        );
    }
    info!(
        "Requested {} body assets from '{}'",
        PLANETS.len(),
        config.asset_dir
    );
}

/// Bounds of every mesh below `root`, in `root`'s local frame.
pub fn asset_bounds(
    root: Entity,
    children: &Query<&Children>,
    nodes: &Query<(&Transform, Option<&Mesh3d>)>,
    meshes: &Assets<Mesh>,
) -> Option<Bounds> {
    let mut bounds = None;
    let mut stack = vec![(root, Affine3A::IDENTITY)];
    while let Some((entity, affine)) = stack.pop() {
        if let Ok((_, Some(mesh))) = nodes.get(entity)
            && let Some(points) = meshes
                .get(&mesh.0)
                .and_then(|m| m.attribute(Mesh::ATTRIBUTE_POSITION))
                .and_then(|attr| attr.as_float3())
        {
            extend_bounds(&mut bounds, &affine, points);
        }
        if let Ok(kids) = children.get(entity) {
            for child in kids.iter() {
                if let Ok((transform, _)) = nodes.get(child) {
                    stack.push((child, affine * transform.compute_affine()));
                }
            }
        }
    }
    bounds
}

/// Everything needed to finish a body once its scene instance is spawned.
#[derive(SystemParam)]
pub struct BodyReadyContext<'w, 's> {
    commands: Commands<'w, 's>,
    pending: Query<'w, 's, &'static PendingBody>,
    children: Query<'w, 's, &'static Children>,
    parents: Query<'w, 's, &'static ChildOf>,
    nodes: Query<'w, 's, (&'static Transform, Option<&'static Mesh3d>)>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    registry: ResMut<'w, BodyRegistry>,
    cameras: Query<'w, 's, &'static mut PanOrbitCamera>,
    asset_server: Res<'w, AssetServer>,
    config: Res<'w, AppConfig>,
    sim_time: Res<'w, SimulationTime>,
}

impl BodyReadyContext<'_, '_> {
    /// Normalize, place and register the body whose scene root is `root`.
    pub fn finish(&mut self, root: Entity) {
        let Ok(body) = self.pending.get(root) else {
            return;
        };
        let (params, pivot, model) = (body.params, body.pivot, body.model);

        let normalization = match asset_bounds(root, &self.children, &self.nodes, &self.meshes)
            .and_then(|b| Normalization::fit(&b, params.scale))
        {
            Some(n) => n,
            None => {
                warn!("{}: asset has no usable vertex data, keeping unit scale", params.name);
                Normalization::IDENTITY
            }
        };

        let tilt = (params.name == EARTH_NAME)
            .then(|| AxialTilt(Quat::from_rotation_z(EARTH_AXIAL_TILT_DEG.to_radians())));
        let base_scale = Vec3::splat(normalization.scale);

        self.commands
            .entity(root)
            .insert(Transform::from_translation(normalization.recenter))
            .remove::<PendingBody>();

        let mut model_node = self.commands.entity(model);
        model_node.insert((
            Transform {
                translation: Vec3::X * params.distance,
                rotation: tilt.map(|t| t.0).unwrap_or(Quat::IDENTITY),
                scale: base_scale,
            },
            Visibility::Inherited,
            CelestialBody { params },
            BaseScale(base_scale),
        ));
        if let Some(tilt) = tilt {
            model_node.insert(tilt);
        }

        if !self.registry.register(RegisteredBody {
            pivot,
            model,
            params,
        }) {
            warn!("{}: already registered, ignoring duplicate asset", params.name);
            return;
        }
        info!(
            "{} ready (scale {:.4}, {} bodies registered)",
            params.name,
            normalization.scale,
            self.registry.len()
        );

        let pivot_transform = self
            .nodes
            .get(pivot)
            .map(|(t, _)| *t)
            .unwrap_or_default();

        if let Some(style) = ring_style(&params, &self.config) {
            let mut ring = self.commands.spawn((
                Mesh3d(self.meshes.add(orbit_ring_mesh(params.distance, style.segments))),
                MeshMaterial3d(self.materials.add(orbit_ring_material(style.color))),
                Transform::from_translation(pivot_transform.translation),
                OrbitRing,
                Name::new(format!("{} orbit", params.name)),
            ));
            // rings sit beside their pivot so they share its orbital centre
            if let Ok(parent) = self.parents.get(pivot) {
                ring.insert(ChildOf(parent.parent()));
            }
        }

        if params.is_central() {
            let focus = pivot_transform.transform_point(Vec3::X * params.distance);
            for mut poc in self.cameras.iter_mut() {
                poc.focus = focus;
                poc.target_focus = focus;
                poc.force_update = true;
            }
        }

        if params.name == EARTH_NAME {
            let angle = params
                .orbit_period
                .map(|p| orbital_angle(self.sim_time.days, p) as f32)
                .unwrap_or(0.0);
            let anchor = MoonAnchor::resolve(
                self.config.live_moon_anchor,
                pivot,
                &pivot_transform,
                params.distance,
                angle,
            );
            spawn_body_nodes(
                &mut self.commands,
                &self.asset_server,
                &self.config,
                MOON,
                anchor.parent(),
                anchor.translation(),
            );
        }
    }
}

/// Observer finishing a body once its scene instance is spawned
pub fn on_body_asset_ready(ready: On<SceneInstanceReady>, mut ctx: BodyReadyContext) {
    ctx.finish(ready.event_target());
}

/// The first failure among a pending body's asset load states.
pub fn load_failure(
    states: impl IntoIterator<Item = Option<LoadState>>,
) -> Option<Arc<AssetLoadError>> {
    states.into_iter().flatten().find_map(|state| match state {
        LoadState::Failed(err) => Some(err),
        _ => None,
    })
}

/// System to log and drop bodies whose asset failed to load
pub fn report_failed_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    pending: Query<&PendingBody>,
) {
    for body in &pending {
        let states = [body.source.id().untyped(), body.scene.id().untyped()]
            .map(|id| asset_server.get_load_state(id));
        if let Some(err) = load_failure(states) {
            warn!("{}: asset failed to load, body skipped: {}", body.params.name, err);
            // despawns the pending scene root with it
            commands.entity(body.pivot).despawn();
        }
    }
}
