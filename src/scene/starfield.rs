//! Random starfield backdrop

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::config::AppConfig;

const STAR_COLORS: [[f32; 4]; 3] = [
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 0.3, 0.3, 1.0],
    [0.5, 0.5, 1.0, 1.0],
];

/// Marker for the starfield entity.
#[derive(Component)]
pub struct Starfield;

/// Small LCG so the backdrop is reproducible without an RNG dependency.
pub struct StarRng(u32);

impl StarRng {
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        self.0
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in `[-spread/2, spread/2)`.
    pub fn spread(&mut self, spread: f32) -> f32 {
        (self.next_f32() - 0.5) * spread
    }
}

pub fn star_points(count: usize, spread: f32, seed: u32) -> (Vec<[f32; 3]>, Vec<[f32; 4]>) {
    let mut rng = StarRng::new(seed);
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        positions.push([rng.spread(spread), rng.spread(spread), rng.spread(spread)]);
        colors.push(STAR_COLORS[(rng.next_u32() % STAR_COLORS.len() as u32) as usize]);
    }
    (positions, colors)
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<AppConfig>,
) {
    let (positions, colors) = star_points(config.star_count, config.star_spread, config.star_seed);
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Starfield,
        Name::new("Starfield"),
    ));
    info!("Spawned starfield with {} stars", config.star_count);
}
