//! Axis-aligned bounds of loaded assets and the normalization they imply

use bevy::math::Affine3A;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }
}

/// Grow `bounds` by every point, transformed into the asset's frame.
pub fn extend_bounds(bounds: &mut Option<Bounds>, affine: &Affine3A, points: &[[f32; 3]]) {
    for p in points {
        let p = affine.transform_point3(Vec3::from_array(*p));
        match bounds {
            Some(b) => b.extend(p),
            None => *bounds = Some(Bounds::from_point(p)),
        }
    }
}

/// Transform that fits an asset into a cube of edge `target_scale`
/// centred on the model node's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    /// Uniform scale for the model node.
    pub scale: f32,
    /// Translation for the asset root, in unscaled asset units.
    pub recenter: Vec3,
}

impl Normalization {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        recenter: Vec3::ZERO,
    };

    /// `None` when the bounds are degenerate (empty or flat to a point).
    pub fn fit(bounds: &Bounds, target_scale: f32) -> Option<Self> {
        let max_dim = bounds.max_dimension();
        if !(max_dim.is_finite() && max_dim > f32::EPSILON) {
            return None;
        }
        Some(Self {
            scale: target_scale / max_dim,
            recenter: -bounds.center(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_extend() {
        let mut bounds = None;
        extend_bounds(
            &mut bounds,
            &Affine3A::IDENTITY,
            &[[1.0, 2.0, 3.0], [-1.0, 0.0, 5.0], [0.0, 4.0, 4.0]],
        );
        let b = bounds.unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, 0.0, 3.0));
        assert_eq!(b.max, Vec3::new(1.0, 4.0, 5.0));
        assert_eq!(b.center(), Vec3::new(0.0, 2.0, 4.0));
        assert_eq!(b.max_dimension(), 4.0);
    }

    #[test]
    fn test_bounds_through_child_transform() {
        let mut bounds = None;
        let affine = Affine3A::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::IDENTITY,
            Vec3::new(10.0, 0.0, 0.0),
        );
        extend_bounds(&mut bounds, &affine, &[[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]]);
        let b = bounds.unwrap();
        assert_eq!(b.center(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(b.max_dimension(), 4.0);
    }

    #[test]
    fn test_fit_normalizes_any_source_size() {
        for half in [0.01_f32, 1.0, 350.0] {
            let bounds = Bounds {
                min: Vec3::new(5.0 - half, -half, -half * 0.5),
                max: Vec3::new(5.0 + half, half, half * 0.5),
            };
            let n = Normalization::fit(&bounds, 20.0).unwrap();
            assert!((bounds.max_dimension() * n.scale - 20.0).abs() < 1e-3);
            assert_eq!(n.recenter, Vec3::new(-5.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_fit_rejects_degenerate_bounds() {
        let point = Bounds::from_point(Vec3::ONE);
        assert!(Normalization::fit(&point, 20.0).is_none());
    }
}
