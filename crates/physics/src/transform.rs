//! Angle and frame utilities
//!
//! Headings accumulate without bound inside the model and are only wrapped
//! when they leave it, so everything that reports an angle goes through
//! [`wrap_angle`].

use crate::types::Vec2;
use std::f64::consts::{PI, TAU};

/// Wrap an angle into `(-π, π]`.
///
/// Angles already inside the interval are returned untouched, which makes
/// the function exactly idempotent.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = PI - (PI - angle).rem_euclid(TAU);
    // rem_euclid may round up to TAU for tiny negative inputs
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Unit vector pointing along `angle` (radians, counter-clockwise from +x).
#[must_use]
pub fn unit_vector(angle: f64) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Vector rotated by +90°.
#[must_use]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// ℓ⁸ norm, a smooth stand-in for the max-component distance.
#[must_use]
pub fn l8_norm(v: Vec2) -> f64 {
    (v.x.abs().powi(8) + v.y.abs().powi(8)).powf(0.125)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_interval_bounds() {
        assert_eq!(wrap_angle(PI), PI);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-12);
        assert!((wrap_angle(3.0 * PI).abs() - PI).abs() < 1e-9);
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!((wrap_angle(-TAU - 0.25) + 0.25).abs() < 1e-12);
    }

    #[test]
    fn wrap_is_idempotent() {
        let mut theta = -50.0;
        while theta < 50.0 {
            let once = wrap_angle(theta);
            assert!(once > -PI && once <= PI, "theta={theta} wrapped={once}");
            assert_eq!(wrap_angle(once), once);
            theta += 0.0137;
        }
    }

    #[test]
    fn perpendicular_rotates_counter_clockwise() {
        let p = perpendicular(unit_vector(0.0));
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn l8_norm_approaches_max_component() {
        let n = l8_norm(Vec2::new(3.0, -10.0));
        assert!(n >= 10.0 && n < 10.01, "n={n}");
        assert!((l8_norm(Vec2::new(0.0, -2.0)) - 2.0).abs() < 1e-12);
        assert_eq!(l8_norm(Vec2::ZERO), 0.0);
    }
}
