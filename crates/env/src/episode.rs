//! # Episode controller
//!
//! [`EpisodeController`] owns the vessel for the current episode together
//! with the bookkeeping the reward needs: the previous target offset, the
//! step counter and the last action/reward for rendering.
//!
//! Episodes follow `Uninitialized → Active → Terminated`. [`Env::reset`] can
//! be called from any phase; [`step_rudder`] only while `Active`.
//!
//! [`step_rudder`]: EpisodeController::step_rudder

use crate::action::{clip_rudder, Action};
use crate::config::{ActionSpace, EnvConfig, EnvId};
use crate::env::{Env, ResetInfo, ResetOptions, Step, StepInfo};
use crate::error::EnvError;
use crate::observation::{Observation, ObservationSpace, OBS_SIZE};
use crate::render::{text_summary, FrameSnapshot};
use crate::reward::{score, Termination};
use boat_physics::{InitialPose, Vec2, Vessel};
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodePhase {
    Uninitialized,
    Active,
    Terminated,
}

impl EpisodePhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Terminated => "terminated",
        }
    }
}

/// Everything that is replaced wholesale on reset.
#[derive(Debug)]
struct Episode {
    vessel: Vessel,
    step_count: u64,
    previous_offset: Vec2,
    last_action: f64,
    last_reward: f64,
    termination: Option<Termination>,
}

pub struct EpisodeController {
    config: EnvConfig,
    target: Vec2,
    rng: fastrand::Rng,
    episode: Option<Episode>,
}

impl EpisodeController {
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] if `config` fails validation.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Controller for one of the registered presets. Presets always pass
    /// [`EnvConfig::validate`].
    #[must_use]
    pub fn from_id(id: EnvId) -> Self {
        Self::build(id.config())
    }

    fn build(config: EnvConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            target: config.target(),
            config,
            rng,
            episode: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[must_use]
    pub fn observation_space(&self) -> ObservationSpace {
        self.config.observation_space()
    }

    #[must_use]
    pub fn phase(&self) -> EpisodePhase {
        match &self.episode {
            None => EpisodePhase::Uninitialized,
            Some(ep) if ep.termination.is_some() => EpisodePhase::Terminated,
            Some(_) => EpisodePhase::Active,
        }
    }

    #[must_use]
    pub fn vessel(&self) -> Option<&Vessel> {
        self.episode.as_ref().map(|ep| &ep.vessel)
    }

    /// Mutable access to the hull, for scripted scenarios.
    pub fn vessel_mut(&mut self) -> Option<&mut Vessel> {
        self.episode.as_mut().map(|ep| &mut ep.vessel)
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.episode.as_ref().map_or(0, |ep| ep.step_count)
    }

    #[must_use]
    pub fn termination(&self) -> Option<Termination> {
        self.episode.as_ref().and_then(|ep| ep.termination)
    }

    fn sample_pose(&mut self) -> InitialPose {
        let cs = self.config.course_size;
        let x = cs * (0.5 + uniform(&mut self.rng, -0.2, 0.2));
        let heading = self.rng.f64() * TAU;
        let heading_rate = uniform(&mut self.rng, -0.03, 0.03);
        let speed = uniform(&mut self.rng, -1.0, 0.5);
        InitialPose { x, y: cs * 0.1, heading, heading_rate, speed }
    }

    /// Apply a rudder command for one tick, whatever the action space.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidStateTransition`] if no episode is active and
    /// [`EnvError::InvalidAction`] for a non-finite rudder.
    pub fn step_rudder(&mut self, rudder: f64) -> Result<Step, EnvError> {
        let phase = self.phase();
        let Some(ep) = self.episode.as_mut().filter(|_| phase == EpisodePhase::Active) else {
            return Err(EnvError::InvalidStateTransition {
                operation: "step",
                phase: phase.name(),
            });
        };
        let rudder = clip_rudder(rudder)?;

        ep.step_count += 1;
        ep.last_action = rudder;
        ep.vessel.advance(rudder);

        let (observation, offset) =
            Observation::from_state(&ep.vessel.state, self.target, self.config.course_size);
        let outcome = score(
            ep.previous_offset,
            offset,
            self.config.target_radius(),
            self.config.course_size,
        );
        ep.previous_offset = offset;
        ep.last_reward = outcome.reward;
        ep.termination = outcome.termination;

        if let Some(termination) = outcome.termination {
            tracing::debug!(step = ep.step_count, ?termination, reward = outcome.reward, "episode terminated");
        } else {
            tracing::trace!(step = ep.step_count, reward = outcome.reward, "step");
        }

        Ok(Step {
            observation,
            reward: outcome.reward,
            terminated: outcome.termination.is_some(),
            truncated: false,
            info: StepInfo {
                distance_to_target: offset.length(),
                termination: outcome.termination,
            },
        })
    }

    /// State handed to a renderer. `None` before the first reset.
    #[must_use]
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        let ep = self.episode.as_ref()?;
        let pose = ep.vessel.pose();
        Some(FrameSnapshot {
            x: pose.x,
            y: pose.y,
            heading: pose.heading,
            rudder: ep.last_action,
            kind: ep.vessel.kind(),
            step: ep.step_count,
            reward: ep.last_reward,
            target: self.target,
        })
    }

    /// One-line text rendering of the current episode.
    #[must_use]
    pub fn render_text(&self) -> Option<String> {
        let snapshot = self.snapshot()?;
        let vessel = self.vessel()?;
        let (obs, offset) =
            Observation::from_state(&vessel.state, self.target, self.config.course_size);
        Some(text_summary(&snapshot, &obs, offset.length()))
    }
}

impl Env for EpisodeController {
    /// `Some(seed)` reseeds the generator; `None` keeps drawing from it. A
    /// pose in `options` is used as given and consumes no random draws.
    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<ResetOptions>,
    ) -> Result<(Observation, ResetInfo), EnvError> {
        if let Some(seed) = seed {
            self.rng.seed(seed);
        }
        let pose = match options.and_then(|o| o.pose) {
            Some(pose) => pose,
            None => self.sample_pose(),
        };
        tracing::debug!(
            kind = %self.config.vessel,
            ?seed,
            x = pose.x,
            y = pose.y,
            heading = pose.heading,
            "episode reset"
        );

        let vessel = Vessel::new(self.config.vessel, pose);
        let previous_offset = vessel.state.position - self.target;
        let (obs, _) = Observation::from_state(&vessel.state, self.target, self.config.course_size);
        self.episode = Some(Episode {
            vessel,
            step_count: 0,
            previous_offset,
            last_action: 0.0,
            last_reward: 0.0,
            termination: None,
        });
        Ok((obs, ResetInfo::default()))
    }

    fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        let rudder = action.to_rudder(self.config.action_space)?;
        self.step_rudder(rudder)
    }

    fn obs_size(&self) -> usize {
        OBS_SIZE
    }

    fn action_size(&self) -> usize {
        match self.config.action_space {
            ActionSpace::Continuous => 1,
            ActionSpace::Discrete => 3,
        }
    }
}

fn uniform(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.f64()
}
