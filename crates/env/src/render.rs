//! Render collaborator interface.
//!
//! The controller never draws anything itself. It hands a [`FrameSnapshot`]
//! to whatever renderer is attached, or produces a one-line text summary for
//! terminal output.

use crate::observation::Observation;
use boat_physics::{Vec2, VesselKind};
use serde::{Deserialize, Serialize};

/// What a renderer needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub x: f64,
    pub y: f64,
    /// Display heading, zero along +y.
    pub heading: f64,
    /// Last rudder command applied.
    pub rudder: f64,
    pub kind: VesselKind,
    pub step: u64,
    pub reward: f64,
    pub target: Vec2,
}

#[must_use]
pub fn text_summary(snapshot: &FrameSnapshot, obs: &Observation, distance: f64) -> String {
    format!(
        "[{kind} #{step}] Speed: {speed:.2}, Heading: {heading:.2}, Heading Dot: {rate:.2}, \
         Heading to Target: {bearing:.2}, Distance to Target: {distance:.2}, Rudder: {rudder:+.2}, Reward: {reward:.2}",
        kind = snapshot.kind,
        step = snapshot.step,
        speed = obs.speed(),
        heading = obs.heading(),
        rate = obs.heading_rate(),
        bearing = obs.bearing_to_target(),
        rudder = snapshot.rudder,
        reward = snapshot.reward,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_every_field() {
        let snapshot = FrameSnapshot {
            x: 1.0,
            y: 2.0,
            heading: 0.0,
            rudder: -1.0,
            kind: VesselKind::Motor,
            step: 7,
            reward: -0.1,
            target: Vec2::new(25.0, 45.0),
        };
        let obs = Observation([0.5, 0.25, 0.01, -1.0, 1.2]);
        let line = text_summary(&snapshot, &obs, 30.0);
        assert!(line.starts_with("[motorboat #7]"));
        assert!(line.contains("Speed: 0.50"));
        assert!(line.contains("Heading to Target: -1.00"));
        assert!(line.contains("Distance to Target: 30.00"));
        assert!(line.contains("Rudder: -1.00"));
    }
}
