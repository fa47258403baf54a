//! Progress remapping and interpolation

use pharmaguard_core::Vec2;

/// Exponent of the spread ease-out. Fixed for visual parity with the live page.
pub const EASE_OUT_EXPONENT: f64 = 2.5;

/// Ease-out remap `1 - (1 - t)^2.5`: fast start, gentle arrival
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powf(EASE_OUT_EXPONENT)
}

/// Linear interpolation between two floats
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation between two points
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn ease_out_midpoint() {
        // 1 - 0.5^2.5
        assert!((ease_out(0.5) - 0.823_223_304_703_363).abs() < 1e-12);
    }

    #[test]
    fn ease_out_is_monotonic_and_ahead_of_linear() {
        let mut prev = 0.0;
        for i in 1..100 {
            let t = i as f64 / 100.0;
            let e = ease_out(t);
            assert!(e > prev);
            assert!(e >= t);
            prev = e;
        }
    }

    #[test]
    fn lerp_vec2_endpoints() {
        let a = Vec2::new(100.0, 100.0);
        let b = Vec2::new(200.0, 50.0);
        assert_eq!(lerp_vec2(a, b, 0.0), a);
        assert_eq!(lerp_vec2(a, b, 1.0), b);
        assert_eq!(lerp_vec2(a, b, 0.5), Vec2::new(150.0, 75.0));
    }
}
