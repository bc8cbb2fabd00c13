use crate::config::ActionSpace;
use crate::error::EnvError;
use serde::{Deserialize, Serialize};

/// Action handed to [`crate::EpisodeController::step`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Rudder command; clipped to `[-1, 1]`.
    Continuous(f64),
    /// Index into `{0, 1, 2}`.
    Discrete(usize),
}

impl From<f64> for Action {
    fn from(rudder: f64) -> Self {
        Self::Continuous(rudder)
    }
}

impl From<usize> for Action {
    fn from(index: usize) -> Self {
        Self::Discrete(index)
    }
}

impl Action {
    /// Translate the action into a rudder command for `space`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] if the variant does not match the
    /// space, the discrete index is out of range, or the continuous value is
    /// not finite.
    pub fn to_rudder(self, space: ActionSpace) -> Result<f64, EnvError> {
        match (space, self) {
            (ActionSpace::Continuous, Self::Continuous(rudder)) => clip_rudder(rudder),
            (ActionSpace::Discrete, Self::Discrete(index)) => discrete_to_rudder(index),
            (space, action) => Err(EnvError::InvalidAction(format!(
                "{action:?} does not belong to the {space:?} action space"
            ))),
        }
    }
}

/// Clamp a continuous rudder command into `[-1, 1]`.
///
/// # Errors
///
/// NaN and infinities are rejected rather than clipped.
pub fn clip_rudder(rudder: f64) -> Result<f64, EnvError> {
    if rudder.is_finite() {
        Ok(rudder.clamp(-1.0, 1.0))
    } else {
        Err(EnvError::InvalidAction(format!("rudder must be finite, got {rudder}")))
    }
}

/// `0 → -1`, `1 → 0`, `2 → +1`.
///
/// # Errors
///
/// Any other index is an [`EnvError::InvalidAction`].
pub fn discrete_to_rudder(index: usize) -> Result<f64, EnvError> {
    match index {
        0 => Ok(-1.0),
        1 => Ok(0.0),
        2 => Ok(1.0),
        _ => Err(EnvError::InvalidAction(format!(
            "discrete action must be 0, 1 or 2, got {index}"
        ))),
    }
}
