//! Easing curve for camera transitions

/// Quadratic ease-in-ease-out over `t` in `[0, 1]`.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
    }

    #[test]
    fn test_clamped_outside_unit_interval() {
        assert_eq!(ease_in_out_quad(-2.0), 0.0);
        assert_eq!(ease_in_out_quad(3.0), 1.0);
    }

    #[test]
    fn test_monotonic_and_symmetric() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let e = ease_in_out_quad(t);
            assert!(e >= prev);
            prev = e;
            assert!((ease_in_out_quad(1.0 - t) - (1.0 - e)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_slow_at_both_ends() {
        let h = 1e-3;
        assert!(ease_in_out_quad(h) < h);
        assert!(1.0 - ease_in_out_quad(1.0 - h) < h);
    }
}
