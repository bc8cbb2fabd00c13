use crate::action::Action;
use crate::error::EnvError;
use crate::observation::Observation;
use crate::reward::Termination;
use boat_physics::InitialPose;
use serde::{Deserialize, Serialize};

/// Reinforcement learning environment trait.
///
/// Modelled on the Gym interface: [`reset`] starts an episode and returns the
/// first observation, [`step`] applies one action and reports what happened.
/// Step caps and the resulting truncation belong to whoever drives the
/// environment, so implementations always report `truncated = false`.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    /// Start a new episode.
    ///
    /// # Errors
    ///
    /// Implementations may reject options they cannot honour.
    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<ResetOptions>,
    ) -> Result<(Observation, ResetInfo), EnvError>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Fails on actions outside the action space and when no episode is
    /// running.
    fn step(&mut self, action: Action) -> Result<Step, EnvError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space: 1 for a continuous rudder, the number of
    /// choices for a discrete one.
    fn action_size(&self) -> usize;
}

/// Optional overrides for [`Env::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetOptions {
    /// Start from this pose instead of a random one.
    pub pose: Option<InitialPose>,
}

/// Returned alongside the first observation. Currently carries nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetInfo {}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Euclidean distance between the vessel and the target.
    #[serde(rename = "distance2target")]
    pub distance_to_target: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<Termination>,
}

/// Outcome of one [`Env::step`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

impl Step {
    #[must_use]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}
