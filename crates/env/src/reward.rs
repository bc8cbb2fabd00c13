use boat_physics::{l8_norm, Vec2};
use serde::{Deserialize, Serialize};

pub const ALIVE_PENALTY: f64 = -0.1;
pub const GOAL_REWARD: f64 = 100.0;
pub const OUT_OF_BOUNDS_REWARD: f64 = -100.0;
pub const SHAPING_SCALE: f64 = 10.0;

/// Why an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    GoalReached,
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardOutcome {
    pub reward: f64,
    pub termination: Option<Termination>,
}

/// Potential-based shaping: positive when the ℓ⁸ distance to the target
/// shrank since the previous tick.
#[must_use]
pub fn shaping(previous: Vec2, current: Vec2) -> f64 {
    SHAPING_SCALE * (l8_norm(previous) - l8_norm(current))
}

/// Score one tick given the target-relative offset before and after it.
///
/// The terminal rewards replace the alive penalty; the shaping term is added
/// on every tick, terminal ones included.
#[must_use]
pub fn score(previous: Vec2, current: Vec2, target_radius: f64, course_size: f64) -> RewardOutcome {
    let distance = current.length();
    let (base, termination) = if distance < target_radius {
        (GOAL_REWARD, Some(Termination::GoalReached))
    } else if distance >= course_size {
        (OUT_OF_BOUNDS_REWARD, Some(Termination::OutOfBounds))
    } else {
        (ALIVE_PENALTY, None)
    };
    RewardOutcome {
        reward: base + shaping(previous, current),
        termination,
    }
}
