//! # Rollout runner
//!
//! Drives an [`EpisodeController`] the way an RL training loop would, without
//! any learning: a fixed [`ActionSource`] picks the actions, the runner
//! enforces the per-environment step cap (the only source of truncation) and
//! reports one [`EpisodeSummary`] per episode.

use anyhow::Result;
use boat_env::{
    Action, ActionSpace, Env, EnvConfig, EnvError, EpisodeController, ResetOptions, Termination,
};
use serde::Serialize;

/// Where actions come from during a rollout.
pub enum ActionSource {
    /// Rudder amidships every tick.
    Zero,
    /// The same rudder every tick. Rounded to the nearest discrete choice
    /// in a discrete action space.
    Constant(f64),
    /// Uniformly random actions.
    Random(fastrand::Rng),
}

impl ActionSource {
    fn next(&mut self, space: ActionSpace) -> Action {
        match (self, space) {
            (Self::Zero, ActionSpace::Continuous) => Action::Continuous(0.0),
            (Self::Zero, ActionSpace::Discrete) => Action::Discrete(1),
            (Self::Constant(rudder), ActionSpace::Continuous) => Action::Continuous(*rudder),
            (Self::Constant(rudder), ActionSpace::Discrete) => {
                Action::Discrete(if *rudder <= -0.5 {
                    0
                } else if *rudder >= 0.5 {
                    2
                } else {
                    1
                })
            }
            (Self::Random(rng), ActionSpace::Continuous) => {
                Action::Continuous(rng.f64() * 2.0 - 1.0)
            }
            (Self::Random(rng), ActionSpace::Discrete) => Action::Discrete(rng.usize(0..3)),
        }
    }
}

pub struct RunOptions {
    pub config: EnvConfig,
    pub episodes: u32,
    /// Seed for the first reset; later episodes continue the same generator.
    pub seed: Option<u64>,
    pub actions: ActionSource,
    /// Fixed start for every episode instead of the random one.
    pub start: Option<ResetOptions>,
    /// Print a text frame after every step.
    pub render: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: u32,
    pub steps: u64,
    #[serde(rename = "return")]
    pub total_reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub termination: Option<Termination>,
    pub final_distance: f64,
}

/// Run `options.episodes` episodes and return their summaries.
///
/// # Errors
///
/// Returns [`EnvError::NumericDivergence`] as soon as an observation stops
/// being finite, and propagates any other environment error.
pub fn run(mut options: RunOptions) -> Result<Vec<EpisodeSummary>> {
    let max_steps = options.config.max_episode_steps;
    let space = options.config.action_space;
    let mut env = EpisodeController::new(options.config)?;
    let mut summaries = Vec::with_capacity(options.episodes as usize);

    for episode in 0..options.episodes {
        let seed = if episode == 0 { options.seed } else { None };
        let (mut obs, _) = env.reset(seed, options.start)?;
        let mut total_reward = 0.0;
        let mut final_distance = obs.distance_to_target() * env.config().course_size / 2.0;
        let mut terminated = false;
        let mut truncated = false;

        while !terminated && !truncated {
            let mut step = env.step(options.actions.next(space))?;
            if !step.observation.is_finite() {
                tracing::error!(episode, step = env.step_count(), "observation is no longer finite");
                return Err(EnvError::NumericDivergence { step: env.step_count() }.into());
            }
            if !step.terminated && env.step_count() >= max_steps {
                step.truncated = true;
            }
            if options.render {
                if let Some(line) = env.render_text() {
                    println!("{line}");
                }
            }
            obs = step.observation;
            total_reward += step.reward;
            final_distance = step.info.distance_to_target;
            terminated = step.terminated;
            truncated = step.truncated;
        }

        let summary = EpisodeSummary {
            episode,
            steps: env.step_count(),
            total_reward,
            terminated,
            truncated,
            termination: env.termination(),
            final_distance,
        };
        tracing::info!(
            episode,
            steps = summary.steps,
            total_reward = summary.total_reward,
            termination = ?summary.termination,
            truncated,
            distance = summary.final_distance,
            heading = obs.heading(),
            "episode finished"
        );
        summaries.push(summary);
    }

    Ok(summaries)
}
