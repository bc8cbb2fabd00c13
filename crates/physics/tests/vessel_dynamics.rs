use boat_physics::integrator::{ANGULAR_DAMPING, RUDDER_COEFF};
use boat_physics::{
    InitialPose, Vec2, Vessel, VesselKind, MAX_ANGULAR_VELOCITY,
};
use std::f64::consts::FRAC_PI_2;

fn at_rest(kind: VesselKind, heading: f64) -> Vessel {
    Vessel::new(
        kind,
        InitialPose { x: 25.0, y: 5.0, heading, heading_rate: 0.0, speed: 0.0 },
    )
}

#[test]
fn stays_finite_for_a_thousand_ticks() {
    for kind in [VesselKind::Sail, VesselKind::Motor] {
        for rudder in [-1.0, -0.5, 0.0, 0.3, 1.0] {
            for heading in [0.0, 1.0, 2.5, 4.0, 5.5] {
                let mut boat = at_rest(kind, heading);
                for tick in 0..1000 {
                    let pose = boat.advance(rudder);
                    assert!(
                        pose.x.is_finite() && pose.y.is_finite() && pose.heading.is_finite(),
                        "{kind} rudder={rudder} heading={heading} diverged at tick {tick}"
                    );
                    assert!(boat.state.velocity.is_finite());
                    assert!(boat.state.heading_rate.is_finite());
                }
            }
        }
    }
}

#[test]
fn motor_reaches_drive_drag_balance() {
    let mut boat = at_rest(VesselKind::Motor, 0.3);
    for _ in 0..200 {
        boat.advance(0.0);
    }
    // 100 N of thrust against 100·v² of drag settles at 1 m/tick
    let bow = boat_physics::unit_vector(boat.state.heading);
    let forward = boat.state.velocity.dot(bow);
    assert!((forward - 1.0).abs() < 1e-3, "forward={forward}");
    assert!((boat.state.speed - 1.0).abs() < 1e-3);
    // no rudder and no initial turn: the course is a straight line
    assert!((boat.state.heading - 0.3).abs() < 1e-12);
}

#[test]
fn first_tick_from_rest_is_pure_thrust() {
    let mut boat = at_rest(VesselKind::Motor, 0.0);
    let pose = boat.advance(1.0);
    let dv = 100.0 / 3000.0;
    assert!((boat.state.velocity.x - dv).abs() < 1e-12);
    assert!(boat.state.velocity.y.abs() < 1e-12);
    assert!((pose.x - (25.0 + dv)).abs() < 1e-12);
    // rudder has no grip without speed
    assert_eq!(boat.state.heading_rate, 0.0);
}

#[test]
fn reported_heading_is_rotated_by_a_quarter_turn() {
    let mut boat = at_rest(VesselKind::Motor, 1.25);
    let pose = boat.advance(0.0);
    assert!((pose.heading - (boat.state.heading - FRAC_PI_2)).abs() < 1e-12);
    assert_eq!(boat.pose(), pose);
}

#[test]
fn rudder_turns_a_moving_boat() {
    let mut port = at_rest(VesselKind::Motor, 0.0);
    let mut starboard = at_rest(VesselKind::Motor, 0.0);
    for _ in 0..50 {
        port.advance(-1.0);
        starboard.advance(1.0);
    }
    assert!(port.state.heading > 0.0);
    assert!(starboard.state.heading < 0.0);
    assert!((port.state.heading + starboard.state.heading).abs() < 1e-9);
}

#[test]
fn saturated_turn_rate_decays_without_rudder_effect() {
    let rate = MAX_ANGULAR_VELOCITY / ANGULAR_DAMPING + 0.05;
    let mut boat = Vessel::new(
        VesselKind::Motor,
        InitialPose { x: 0.0, y: 0.0, heading: 0.0, heading_rate: rate, speed: 0.0 },
    );
    boat.state.velocity = Vec2::new(4.0, 0.0);
    boat.advance(-1.0);
    assert_eq!(boat.state.heading_rate, rate * ANGULAR_DAMPING);

    let mut inside = Vessel::new(
        VesselKind::Motor,
        InitialPose { x: 0.0, y: 0.0, heading: 0.0, heading_rate: 0.1, speed: 0.0 },
    );
    inside.state.velocity = Vec2::new(4.0, 0.0);
    inside.advance(-1.0);
    let expected = 0.1 * ANGULAR_DAMPING + RUDDER_COEFF * 2.0;
    assert!((inside.state.heading_rate - expected).abs() < 1e-12);
}

#[test]
fn keel_kills_sideways_drift_faster_than_drag_slows_forward_motion() {
    let mut drifting = at_rest(VesselKind::Motor, 0.0);
    drifting.state.velocity = Vec2::new(0.0, 0.5);
    let mut coasting = at_rest(VesselKind::Motor, FRAC_PI_2);
    coasting.state.velocity = Vec2::new(0.0, 0.5);
    drifting.advance(0.0);
    coasting.advance(0.0);
    assert!(drifting.state.velocity.y < coasting.state.velocity.y);
}

#[test]
fn initial_speed_is_informational_only() {
    let mut boat = Vessel::new(
        VesselKind::Motor,
        InitialPose { x: 0.0, y: 0.0, heading: 0.0, heading_rate: 0.0, speed: -0.7 },
    );
    assert_eq!(boat.state.speed, -0.7);
    assert_eq!(boat.state.velocity, Vec2::ZERO);
    boat.advance(0.0);
    assert!((boat.state.speed - boat.state.velocity.length()).abs() < 1e-15);
}
