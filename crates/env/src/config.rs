//! Environment configuration
//!
//! [`EnvConfig`] carries the course geometry, the vessel kind and the
//! action space. The three registered environments are available as presets
//! through [`EnvId`], and any field can be overridden from JSON.

use crate::error::EnvError;
use crate::observation::ObservationSpace;
use boat_physics::{Vec2, VesselKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const BOAT_LENGTH: f64 = 4.2;
pub const BOAT_BEAM: f64 = 1.4;
pub const COURSE_SIZE: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSpace {
    /// A single rudder value in `[-1, 1]`.
    #[default]
    Continuous,
    /// `{0, 1, 2}` mapped to hard port, amidships, hard starboard.
    Discrete,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub vessel: VesselKind,
    pub action_space: ActionSpace,
    /// Side of the square course, meters. Also the out-of-bounds radius.
    pub course_size: f64,
    pub boat_length: f64,
    pub boat_beam: f64,
    /// Seed for the controller's generator. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Step cap applied by the rollout shell, not by the controller.
    pub max_episode_steps: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            vessel: VesselKind::Sail,
            action_space: ActionSpace::Continuous,
            course_size: COURSE_SIZE,
            boat_length: BOAT_LENGTH,
            boat_beam: BOAT_BEAM,
            seed: None,
            max_episode_steps: 3000,
        }
    }
}

impl EnvConfig {
    /// Fixed goal location, shared by every episode.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.course_size * 0.5, self.course_size * 0.9)
    }

    /// Distance under which the goal counts as reached.
    #[must_use]
    pub fn target_radius(&self) -> f64 {
        self.boat_length / 2.0
    }

    #[must_use]
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::for_course(self.course_size)
    }

    /// # Errors
    ///
    /// Returns [`EnvError::Config`] for non-positive or non-finite geometry.
    pub fn validate(&self) -> Result<(), EnvError> {
        for (name, value) in [
            ("course_size", self.course_size),
            ("boat_length", self.boat_length),
            ("boat_beam", self.boat_beam),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(EnvError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if self.max_episode_steps == 0 {
            return Err(EnvError::Config("max_episode_steps must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse a JSON document. Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Json`] for malformed input and
    /// [`EnvError::Config`] if the result fails [`EnvConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, EnvError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Fails if the file cannot be read or does not hold a valid config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Registered environment presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvId {
    Sailboat,
    SailboatDiscrete,
    Motorboat,
}

impl EnvId {
    pub const ALL: [Self; 3] = [Self::Sailboat, Self::SailboatDiscrete, Self::Motorboat];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sailboat => "Sailboat-v0",
            Self::SailboatDiscrete => "SailboatDiscrete-v0",
            Self::Motorboat => "Motorboat-v0",
        }
    }

    #[must_use]
    pub fn config(self) -> EnvConfig {
        match self {
            Self::Sailboat => EnvConfig::default(),
            Self::SailboatDiscrete => EnvConfig {
                action_space: ActionSpace::Discrete,
                ..EnvConfig::default()
            },
            Self::Motorboat => EnvConfig {
                vessel: VesselKind::Motor,
                max_episode_steps: 2000,
                ..EnvConfig::default()
            },
        }
    }
}

impl fmt::Display for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnvId {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                EnvError::Config(format!(
                    "unknown environment {s:?}, expected one of Sailboat-v0, SailboatDiscrete-v0, Motorboat-v0"
                ))
            })
    }
}
