//! Normalization of raw trigger and stick readings.

use glam::Vec2;

/// Returns whichever of `a` and `b` has the larger magnitude, `a` on ties.
#[inline]
pub fn abs_max(a: f32, b: f32) -> f32 {
    if a.abs() >= b.abs() { a } else { b }
}

/// [`abs_max`] for two-axis readings, comparing squared lengths.
#[inline]
pub fn abs_max_vec2(a: Vec2, b: Vec2) -> Vec2 {
    if a.length_squared() >= b.length_squared() {
        a
    } else {
        b
    }
}

/// Zeroes readings inside `deadzone` and rescales the rest to keep the full output range.
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude <= deadzone {
        return 0.0;
    }

    let scaled = value.signum() * (magnitude - deadzone) / (1.0 - deadzone);
    scaled.clamp(-1.0, 1.0)
}

/// Radial version of [`apply_deadzone`].
pub fn apply_deadzone_vec2(value: Vec2, deadzone: f32) -> Vec2 {
    let magnitude = value.length();
    if magnitude <= deadzone {
        return Vec2::ZERO;
    }

    let scaled = value / magnitude * (magnitude - deadzone) / (1.0 - deadzone);
    scaled.clamp_length_max(1.0)
}

/// Value exposed for a single-axis channel.
pub fn normalize_1d(raw: f32, deadzone: Option<f32>) -> f32 {
    let value = match deadzone {
        Some(deadzone) => apply_deadzone(raw, deadzone),
        None => raw,
    };
    abs_max(0.0, value)
}

/// Value exposed for a dual-axis channel.
pub fn normalize_2d(raw: Vec2, deadzone: Option<f32>) -> Vec2 {
    let value = match deadzone {
        Some(deadzone) => apply_deadzone_vec2(raw, deadzone),
        None => raw,
    };
    abs_max_vec2(Vec2::ZERO, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_max_picks_larger_magnitude() {
        assert_eq!(abs_max(0.2, -0.7), -0.7);
        assert_eq!(abs_max(-0.9, 0.3), -0.9);
        assert_eq!(abs_max(0.0, 0.4), 0.4);
    }

    #[test]
    fn abs_max_of_opposites_keeps_magnitude() {
        for x in [0.0_f32, 0.1, 0.5, 1.0, -0.3, -1.0] {
            assert_eq!(abs_max(x, -x).abs(), x.abs());
            // Ties go to the first argument, so order decides the sign.
            assert_eq!(abs_max(x, -x), x);
        }
        assert_ne!(abs_max(0.5, -0.5), abs_max(-0.5, 0.5));
    }

    #[test]
    fn abs_max_vec2_compares_length() {
        let a = Vec2::new(0.6, 0.0);
        let b = Vec2::new(0.3, 0.3);
        assert_eq!(abs_max_vec2(a, b), a);
        assert_eq!(abs_max_vec2(Vec2::ZERO, b), b);
    }

    #[test]
    fn passthrough_without_deadzone() {
        assert_eq!(normalize_1d(0.05, None), 0.05);
        assert_eq!(normalize_1d(-0.4, None), -0.4);
        let stick = Vec2::new(-0.1, 0.05);
        assert_eq!(normalize_2d(stick, None), stick);
    }

    #[test]
    fn deadzone_zeroes_and_rescales() {
        assert_eq!(normalize_1d(0.1, Some(0.2)), 0.0);
        assert_eq!(normalize_1d(1.0, Some(0.2)), 1.0);
        assert!((normalize_1d(0.6, Some(0.2)) - 0.5).abs() < 1e-6);
        assert!((normalize_1d(-0.6, Some(0.2)) + 0.5).abs() < 1e-6);

        assert_eq!(normalize_2d(Vec2::new(0.1, 0.1), Some(0.2)), Vec2::ZERO);
        let full = normalize_2d(Vec2::new(0.0, 1.0), Some(0.2));
        assert!((full.y - 1.0).abs() < 1e-6);
        let half = normalize_2d(Vec2::new(-0.6, 0.0), Some(0.2));
        assert!((half.x + 0.5).abs() < 1e-6, "{half}");
    }
}
