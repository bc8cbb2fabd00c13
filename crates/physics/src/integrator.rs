//! # Hull integration
//!
//! The pieces of a tick that every vessel shares: rudder response, hull
//! resistance and the explicit Euler update. [`crate::vessel::Vessel::advance`]
//! strings them together around the propulsion strategy.

use crate::transform::unit_vector;
use crate::types::Vec2;

/// Per-tick decay applied to the turn rate.
pub const ANGULAR_DAMPING: f64 = 0.97;
/// Turn rate beyond which the rudder stops having an effect, radians per tick.
pub const MAX_ANGULAR_VELOCITY: f64 =
    300.0 / 360.0 * std::f64::consts::TAU * crate::vessel::TIME_STEP;
/// Rudder authority per unit of signed square-root speed.
pub const RUDDER_COEFF: f64 = 0.002;
/// Quadratic resistance along the bow.
pub const DRAG_COEFF: f64 = 100.0;
/// Quadratic resistance to sideways slip.
pub const KEEL_COEFF: f64 = 1200.0;

/// `+sqrt(|v|)` when moving ahead, `-sqrt(|v|)` otherwise. Uses the full
/// speed, not only its forward component.
#[must_use]
pub fn signed_sqrt_speed(velocity: Vec2, heading: f64) -> f64 {
    let root = velocity.length().sqrt();
    if velocity.dot(unit_vector(heading)) > 0.0 {
        root
    } else {
        -root
    }
}

/// Damp the turn rate and, unless it is saturated, add the rudder torque.
///
/// Saturation is checked on the damped value before the torque is applied;
/// the result itself may overshoot the bound.
#[must_use]
pub fn steer(heading_rate: f64, rudder: f64, speed_scale: f64) -> f64 {
    let damped = heading_rate * ANGULAR_DAMPING;
    if -MAX_ANGULAR_VELOCITY < damped && damped < MAX_ANGULAR_VELOCITY {
        damped - rudder * RUDDER_COEFF * speed_scale
    } else {
        damped
    }
}

/// Split `velocity` into its components along and across `bow`.
#[must_use]
pub fn decompose(velocity: Vec2, bow: Vec2) -> (Vec2, Vec2) {
    let forward = bow * velocity.dot(bow);
    (forward, velocity - forward)
}

/// Quadratic drag opposing forward motion.
#[must_use]
pub fn drag_force(forward: Vec2) -> Vec2 {
    -forward * (forward.length() * DRAG_COEFF)
}

/// Quadratic keel resistance opposing sideways slip.
#[must_use]
pub fn keel_force(sideways: Vec2) -> Vec2 {
    -sideways * (sideways.length() * KEEL_COEFF)
}

/// Lateral force from turning, scaled by the current speed.
#[must_use]
pub fn turning_force(beam: Vec2, centripetal: f64, speed: f64) -> Vec2 {
    beam * (centripetal * speed)
}

/// Explicit Euler update. Velocities are in meters per tick, so the position
/// advances by the whole new velocity.
pub fn integrate(position: &mut Vec2, velocity: &mut Vec2, force: Vec2, mass: f64) {
    *velocity += force / mass;
    *position += *velocity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturated_turn_rate_ignores_rudder() {
        let rate = MAX_ANGULAR_VELOCITY / ANGULAR_DAMPING + 0.01;
        assert_eq!(steer(rate, 1.0, 1.0), rate * ANGULAR_DAMPING);
        assert_eq!(steer(-rate, -1.0, 1.0), -rate * ANGULAR_DAMPING);
    }

    #[test]
    fn rudder_turns_against_its_sign_when_moving_ahead() {
        assert!(steer(0.0, 1.0, 1.0) < 0.0);
        assert!(steer(0.0, -1.0, 1.0) > 0.0);
        // going astern reverses the rudder
        assert!(steer(0.0, 1.0, -1.0) > 0.0);
    }

    #[test]
    fn just_inside_the_bound_may_overshoot() {
        let rate = (MAX_ANGULAR_VELOCITY - 1e-6) / ANGULAR_DAMPING;
        assert!(steer(rate, -1.0, 4.0) > MAX_ANGULAR_VELOCITY);
    }

    #[test]
    fn speed_scale_sign_follows_forward_motion() {
        let v = Vec2::new(4.0, 0.0);
        assert!((signed_sqrt_speed(v, 0.0) - 2.0).abs() < 1e-12);
        assert!((signed_sqrt_speed(v, std::f64::consts::PI) + 2.0).abs() < 1e-12);
        assert!(signed_sqrt_speed(Vec2::ZERO, 0.0) <= 0.0);
    }

    #[test]
    fn keel_is_stiffer_than_drag() {
        let v = Vec2::new(0.5, 0.0);
        assert!(keel_force(v).length() > drag_force(v).length());
    }
}
