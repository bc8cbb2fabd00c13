//! # Vessel model
//!
//! A [`Vessel`] owns its [`VesselState`] and one [`Propulsion`] strategy.
//! [`Vessel::advance`] applies a rudder command and moves the boat forward by
//! one fixed tick of [`TIME_STEP`] seconds.

use crate::integrator::{
    decompose, drag_force, integrate, keel_force, signed_sqrt_speed, steer, turning_force,
};
use crate::propulsion::{Propulsion, VesselKind};
use crate::transform::{perpendicular, unit_vector};
use crate::types::Vec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Length of one tick, seconds.
pub const TIME_STEP: f64 = 0.1;
/// Displacement of every hull, kg.
pub const MASS: f64 = 3000.0;

/// Kinematic and dynamic state of a single hull.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VesselState {
    pub position: Vec2,
    /// Radians, accumulated without wrapping. Zero points along +x.
    pub heading: f64,
    /// Radians per tick.
    pub heading_rate: f64,
    /// Meters per tick, course frame.
    pub velocity: Vec2,
    /// `|velocity|` as of the last tick. Informational only.
    pub speed: f64,
    pub mass: f64,
}

/// Starting conditions for a vessel. The hull always starts with zero
/// velocity; `speed` only seeds the informational field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialPose {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    #[serde(default)]
    pub heading_rate: f64,
    #[serde(default)]
    pub speed: f64,
}

/// Position and display heading reported after a tick.
///
/// `heading` is rotated by −90° from the model's internal heading so that
/// zero points along +y.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

pub struct Vessel {
    pub state: VesselState,
    propulsion: Box<dyn Propulsion>,
}

impl Vessel {
    #[must_use]
    pub fn new(kind: VesselKind, pose: InitialPose) -> Self {
        Self::with_propulsion(kind.propulsion(), pose)
    }

    #[must_use]
    pub fn with_propulsion(propulsion: Box<dyn Propulsion>, pose: InitialPose) -> Self {
        Self {
            state: VesselState {
                position: Vec2::new(pose.x, pose.y),
                heading: pose.heading,
                heading_rate: pose.heading_rate,
                velocity: Vec2::ZERO,
                speed: pose.speed,
                mass: MASS,
            },
            propulsion,
        }
    }

    #[must_use]
    pub fn kind(&self) -> VesselKind {
        self.propulsion.kind()
    }

    /// Current position and display heading, without advancing.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            x: self.state.position.x,
            y: self.state.position.y,
            heading: self.state.heading - FRAC_PI_2,
        }
    }

    /// Apply `rudder` (expected in `[-1, 1]`) for one tick.
    ///
    /// Non-finite values are not guarded against; a diverging hull keeps
    /// producing NaN/Inf and it is up to the caller to end the episode.
    pub fn advance(&mut self, rudder: f64) -> Pose {
        let state = &mut self.state;

        let speed_scale = signed_sqrt_speed(state.velocity, state.heading);
        state.heading_rate = steer(state.heading_rate, rudder, speed_scale);
        state.heading += state.heading_rate;
        let centripetal = state.heading_rate * state.mass;

        let bow = unit_vector(state.heading);
        let beam = perpendicular(bow);

        let drive = self.propulsion.drive_force(state);

        let (forward, sideways) = decompose(state.velocity, bow);
        let force = drive
            + drag_force(forward)
            + keel_force(sideways)
            + turning_force(beam, centripetal, state.velocity.length());

        integrate(&mut state.position, &mut state.velocity, force, state.mass);
        state.speed = state.velocity.length();

        self.pose()
    }
}

impl std::fmt::Debug for Vessel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vessel")
            .field("kind", &self.kind())
            .field("state", &self.state)
            .finish()
    }
}
