//! Observation vector and its declared bounds.
//!
//! The controller reports raw values. Clamping to [`ObservationSpace`] is the
//! caller's business, which keeps diverging hulls visible as non-finite
//! observations instead of hiding them at the bounds.

use boat_physics::{wrap_angle, Vec2, VesselState};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

pub const OBS_SIZE: usize = 5;

/// `[speed, heading, heading_rate, bearing_to_target, distance_to_target]`.
///
/// Headings and bearings are wrapped into `(-π, π]` with zero along +y;
/// the distance is normalised so that `2.0` means one course size away.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f64; OBS_SIZE]);

impl Observation {
    /// Build the observation for `state` and also return the target-relative
    /// offset `position - target` it was derived from.
    #[must_use]
    pub fn from_state(state: &VesselState, target: Vec2, course_size: f64) -> (Self, Vec2) {
        let offset = state.position - target;
        let to_target = target - state.position;
        let bearing = to_target.y.atan2(to_target.x);
        let obs = Self([
            state.speed,
            wrap_angle(state.heading - FRAC_PI_2),
            state.heading_rate,
            wrap_angle(bearing - FRAC_PI_2),
            2.0 * offset.length() / course_size,
        ]);
        (obs, offset)
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn heading(&self) -> f64 {
        self.0[1]
    }

    #[must_use]
    pub fn heading_rate(&self) -> f64 {
        self.0[2]
    }

    #[must_use]
    pub fn bearing_to_target(&self) -> f64 {
        self.0[3]
    }

    #[must_use]
    pub fn distance_to_target(&self) -> f64 {
        self.0[4]
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Per-component box bounds of the observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub low: [f64; OBS_SIZE],
    pub high: [f64; OBS_SIZE],
}

impl ObservationSpace {
    #[must_use]
    pub fn for_course(course_size: f64) -> Self {
        Self {
            low: [-10.0, -PI, -1.0, -PI, 0.0],
            high: [10.0, PI, 1.0, PI, 2.0 * course_size],
        }
    }

    #[must_use]
    pub fn contains(&self, obs: &Observation) -> bool {
        obs.0
            .iter()
            .zip(self.low.iter().zip(&self.high))
            .all(|(v, (lo, hi))| (lo..=hi).contains(&v))
    }

    /// Clamp each component into its bounds. NaN components stay NaN.
    #[must_use]
    pub fn clip(&self, obs: &Observation) -> Observation {
        let mut out = obs.0;
        for (i, v) in out.iter_mut().enumerate() {
            *v = v.clamp(self.low[i], self.high[i]);
        }
        Observation(out)
    }
}
