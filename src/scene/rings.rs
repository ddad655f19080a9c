//! Decorative orbit path rings

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

/// Marker for orbit ring entities.
#[derive(Component)]
pub struct OrbitRing;

/// Closed circle of `segments` segments in the XZ plane. The first point is
/// repeated at the end.
pub fn orbit_ring_points(radius: f32, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            Vec3::new(theta.cos() * radius, 0.0, theta.sin() * radius)
        })
        .collect()
}

pub fn orbit_ring_mesh(radius: f32, segments: usize) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, orbit_ring_points(radius, segments));
    mesh
}

pub fn orbit_ring_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(0.5),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_is_closed_and_on_radius() {
        let points = orbit_ring_points(500.0, 256);
        assert_eq!(points.len(), 257);
        assert!((points[0] - points[256]).length() < 1e-2);
        for p in &points {
            assert!((p.length() - 500.0).abs() < 1e-2);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_ring_mesh_vertex_count() {
        let mesh = orbit_ring_mesh(50.0, 128);
        assert_eq!(mesh.count_vertices(), 129);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineStrip);
    }
}
