//! # Drive forces
//!
//! Every vessel shares the same hull model (drag, keel, turning) and differs
//! only in what pushes it forward. That difference lives behind the
//! [`Propulsion`] trait so the integrator in [`crate::vessel`] never needs to
//! know which kind of boat it is moving.

use crate::error::PhysicsError;
use crate::transform::{unit_vector, wrap_angle};
use crate::types::Vec2;
use crate::vessel::{VesselState, TIME_STEP};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};
use std::fmt;
use std::str::FromStr;

/// Constant thrust of the outboard motor, newtons.
pub const MOTOR_THRUST: f64 = 100.0;
/// Sail force per unit of apparent wind speed and effectiveness, newtons.
pub const SAIL_COEFF: f64 = 7.0;
/// True wind, meters per tick, blowing towards −y.
pub const WIND: Vec2 = Vec2::new(0.0, -50.0 * TIME_STEP);

const TWO_THIRDS_PI: f64 = 2.0 * std::f64::consts::FRAC_PI_3;

/// Strategy producing the forward drive force of a vessel.
///
/// Called once per tick after the heading has been integrated, so
/// `state.heading` is the new heading while `state.velocity` still holds the
/// previous tick's velocity.
pub trait Propulsion: Send + Sync {
    /// Drive force in newtons, course frame.
    fn drive_force(&self, state: &VesselState) -> Vec2;

    fn kind(&self) -> VesselKind;
}

/// Outboard motor: fixed thrust along the bow regardless of wind or rudder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Motor;

impl Propulsion for Motor {
    fn drive_force(&self, state: &VesselState) -> Vec2 {
        unit_vector(state.heading) * MOTOR_THRUST
    }

    fn kind(&self) -> VesselKind {
        VesselKind::Motor
    }
}

/// Single sail driven by the apparent wind.
#[derive(Clone, Copy, Debug)]
pub struct Sail {
    pub wind: Vec2,
}

impl Default for Sail {
    fn default() -> Self {
        Self { wind: WIND }
    }
}

impl Propulsion for Sail {
    fn drive_force(&self, state: &VesselState) -> Vec2 {
        let apparent_wind_speed = (self.wind - state.velocity).length();
        let u = sail_effectiveness(state.heading - FRAC_PI_2);
        unit_vector(state.heading) * (u * apparent_wind_speed * SAIL_COEFF)
    }

    fn kind(&self) -> VesselKind {
        VesselKind::Sail
    }
}

/// Polar curve of the sail as a function of the heading measured from the
/// upwind direction.
///
/// Inside the ±30° no-go zone a parabola gives negative drive (the sail
/// luffs and the boat is pushed back). Outside it one of two phase-shifted
/// cosine lobes applies depending on which tack the boat is on. The lobes
/// are evaluated on the raw `head`, the zone test on its wrapped value.
#[must_use]
pub fn sail_effectiveness(head: f64) -> f64 {
    let n = wrap_angle(head);
    if n.abs() < FRAC_PI_6 {
        4.0 * (n + FRAC_PI_6) * (n - FRAC_PI_6)
    } else if n < FRAC_PI_6 {
        4.0 * (head + TWO_THIRDS_PI).cos()
    } else {
        4.0 * (head - TWO_THIRDS_PI).cos()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselKind {
    #[serde(rename = "sailboat")]
    Sail,
    #[serde(rename = "motorboat")]
    Motor,
}

impl VesselKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sail => "sailboat",
            Self::Motor => "motorboat",
        }
    }

    #[must_use]
    pub fn propulsion(self) -> Box<dyn Propulsion> {
        match self {
            Self::Sail => Box::new(Sail::default()),
            Self::Motor => Box::new(Motor),
        }
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for VesselKind {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sailboat" | "sail" => Ok(Self::Sail),
            "motorboat" | "motor" => Ok(Self::Motor),
            _ => Err(PhysicsError::UnknownVesselKind(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn no_go_zone_is_a_parabola() {
        assert!((sail_effectiveness(0.0) + 4.0 * FRAC_PI_6 * FRAC_PI_6).abs() < 1e-12);
        assert!(sail_effectiveness(0.1) < 0.0);
        assert!(sail_effectiveness(-0.1) < 0.0);
    }

    #[test]
    fn beam_reach_gives_full_drive() {
        // head = ±90° puts the wind on the beam
        assert!((sail_effectiveness(PI / 2.0) - 4.0 * (PI / 2.0 - TWO_THIRDS_PI).cos()).abs() < 1e-12);
        assert!((sail_effectiveness(-PI / 2.0) - 4.0 * (-PI / 2.0 + TWO_THIRDS_PI).cos()).abs() < 1e-12);
        assert!(sail_effectiveness(PI / 2.0) > 3.0);
        assert!(sail_effectiveness(-PI / 2.0) > 3.0);
    }

    #[test]
    fn lobes_use_the_unwrapped_heading() {
        let head = PI / 2.0 + 4.0 * PI;
        assert!((sail_effectiveness(head) - sail_effectiveness(PI / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn vessel_kind_round_trips_through_its_tag() {
        for kind in [VesselKind::Sail, VesselKind::Motor] {
            assert_eq!(kind.tag().parse::<VesselKind>(), Ok(kind));
            assert_eq!(kind.propulsion().kind(), kind);
        }
        assert!(matches!(
            "canoe".parse::<VesselKind>(),
            Err(PhysicsError::UnknownVesselKind(_))
        ));
    }
}
