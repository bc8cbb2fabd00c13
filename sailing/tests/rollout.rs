use sailing::env::{EnvError, EnvId, ResetOptions, Termination};
use sailing::physics::InitialPose;
use sailing::rollout::{run, ActionSource, RunOptions};

#[test]
fn step_cap_truncates_long_episodes() -> anyhow::Result<()> {
    let mut config = EnvId::Sailboat.config();
    config.max_episode_steps = 5;
    let summaries = run(RunOptions {
        config,
        episodes: 3,
        seed: Some(42),
        actions: ActionSource::Zero,
        start: None,
        render: false,
    })?;
    assert_eq!(summaries.len(), 3);
    for (i, summary) in summaries.iter().enumerate() {
        assert_eq!(summary.episode as usize, i);
        assert_eq!(summary.steps, 5);
        assert!(summary.truncated);
        assert!(!summary.terminated);
        assert!(summary.total_reward.is_finite());
    }
    Ok(())
}

#[test]
fn seeded_rollouts_are_reproducible() -> anyhow::Result<()> {
    let play = || {
        run(RunOptions {
            config: EnvId::SailboatDiscrete.config(),
            episodes: 2,
            seed: Some(7),
            actions: ActionSource::Random(fastrand::Rng::with_seed(99)),
            start: None,
        render: false,
        })
    };
    assert_eq!(play()?, play()?);
    Ok(())
}

#[test]
fn motorboat_with_rudder_amidships_always_terminates() -> anyhow::Result<()> {
    // without rudder the initial turn decays and the course is nearly
    // straight, so the boat either reaches the target or leaves the course
    let summaries = run(RunOptions {
        config: EnvId::Motorboat.config(),
        episodes: 4,
        seed: Some(1),
        actions: ActionSource::Constant(0.0),
        start: None,
        render: false,
    })?;
    for summary in &summaries {
        assert!(summary.terminated, "{summary:?}");
        assert!(matches!(
            summary.termination,
            Some(Termination::GoalReached | Termination::OutOfBounds)
        ));
        assert!(summary.steps < 2000);
    }
    Ok(())
}

#[test]
fn non_finite_observation_stops_the_rollout() {
    let start = ResetOptions {
        pose: Some(InitialPose { x: 25.0, y: 5.0, heading: f64::NAN, heading_rate: 0.0, speed: 0.0 }),
    };
    let err = run(RunOptions {
        config: EnvId::Motorboat.config(),
        episodes: 2,
        seed: Some(3),
        actions: ActionSource::Zero,
        start: Some(start),
        render: false,
    })
    .unwrap_err();
    assert!(
        matches!(err.downcast_ref::<EnvError>(), Some(EnvError::NumericDivergence { step: 1 })),
        "{err:?}"
    );
}
