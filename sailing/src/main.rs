//! # Sailing Runtime
//!
//! Plays episodes of one of the boat environments headlessly and logs how
//! each one ended. Pass `--render` to print a text frame per step and
//! `--json` to emit one JSON summary line per episode.

use anyhow::{Context, Result};
use boat_env::{EnvConfig, EnvId};
use clap::{Parser, ValueEnum};
use sailing::rollout::{self, ActionSource, RunOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sailing", version, about = "Headless rollouts of the boat navigation environments")]
struct Cli {
    /// Registered environment to run.
    #[arg(long, default_value = "Sailboat-v0")]
    env: EnvId,

    /// JSON config; overrides the preset selected with --env.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1)]
    episodes: u32,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Policy::Random)]
    policy: Policy,

    /// Rudder used by the constant policy.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rudder: f64,

    /// Override the environment's step cap.
    #[arg(long)]
    max_steps: Option<u64>,

    #[arg(long)]
    render: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Zero,
    Constant,
    Random,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EnvConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => cli.env.config(),
    };
    if let Some(max_steps) = cli.max_steps {
        config.max_episode_steps = max_steps;
    }

    let actions = match cli.policy {
        Policy::Zero => ActionSource::Zero,
        Policy::Constant => ActionSource::Constant(cli.rudder),
        Policy::Random => ActionSource::Random(match cli.seed {
            Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(1)),
            None => fastrand::Rng::new(),
        }),
    };

    tracing::info!(
        vessel = %config.vessel,
        action_space = ?config.action_space,
        episodes = cli.episodes,
        max_steps = config.max_episode_steps,
        "starting rollouts"
    );

    let summaries = rollout::run(RunOptions {
        config,
        episodes: cli.episodes,
        seed: cli.seed,
        actions,
        start: None,
        render: cli.render,
    })?;

    if cli.json {
        for summary in &summaries {
            println!("{}", serde_json::to_string(summary)?);
        }
    }

    let goals = summaries
        .iter()
        .filter(|s| s.termination == Some(boat_env::Termination::GoalReached))
        .count();
    tracing::info!(goals, episodes = summaries.len(), "done");
    Ok(())
}
