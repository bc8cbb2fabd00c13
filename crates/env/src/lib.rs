#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Boat Environments
//!
//! Episodic navigation tasks on top of [`boat_physics`]: steer a sailboat or
//! a motorboat from the bottom of a square course to a fixed target near the
//! top.
//!
//! [`EpisodeController`] is the environment. Each [`Env::step`] advances the
//! hull by one tick, returns a five-component [`Observation`], and scores the
//! tick with a −0.1 alive penalty, a ±100 terminal reward (goal reached or
//! left the course) and a potential-based shaping term on the ℓ⁸ distance to
//! the target.
//!
//! ```rust
//! use boat_env::{Action, Env, EnvId, EpisodeController};
//!
//! let mut env = EpisodeController::from_id(EnvId::Motorboat);
//! let (obs, _) = env.reset(Some(42), None).unwrap();
//! assert!(obs.is_finite());
//! let step = env.step(Action::Continuous(0.0)).unwrap();
//! assert!(!step.truncated);
//! ```

pub mod action;
pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod observation;
pub mod render;
pub mod reward;

pub use action::{clip_rudder, discrete_to_rudder, Action};
pub use config::{ActionSpace, EnvConfig, EnvId, BOAT_BEAM, BOAT_LENGTH, COURSE_SIZE};
pub use env::{Env, ResetInfo, ResetOptions, Step, StepInfo};
pub use episode::{EpisodeController, EpisodePhase};
pub use error::EnvError;
pub use observation::{Observation, ObservationSpace, OBS_SIZE};
pub use render::{text_summary, FrameSnapshot};
pub use reward::{Termination, ALIVE_PENALTY, GOAL_REWARD, OUT_OF_BOUNDS_REWARD};
