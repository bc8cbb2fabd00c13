#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Boat Physics
//!
//! Planar rigid-body dynamics for small sail and motor boats.
//!
//! The model is deliberately simple: one hull, one rudder, quadratic drag
//! along the bow, a much stiffer quadratic keel resistance across it, and a
//! lateral coupling force while turning. Time advances in fixed ticks of
//! [`TIME_STEP`] seconds and velocities are expressed in meters per tick.
//!
//! ## Key Components
//!
//! -   **[`Vessel`]** owns a [`VesselState`] and advances it with
//!     [`Vessel::advance`].
//! -   **[`Propulsion`]** is the only part that differs between boats:
//!     [`Motor`] pushes with constant thrust, [`Sail`] turns apparent wind
//!     into drive through [`sail_effectiveness`].
//! -   **[`transform`]** holds the angle helpers shared with the episode
//!     layer ([`wrap_angle`], [`l8_norm`]).
//!
//! ## Usage
//!
//! ```rust
//! use boat_physics::{InitialPose, Vessel, VesselKind};
//!
//! let mut boat = Vessel::new(
//!     VesselKind::Motor,
//!     InitialPose { x: 0.0, y: 0.0, heading: 0.0, heading_rate: 0.0, speed: 0.0 },
//! );
//! for _ in 0..100 {
//!     boat.advance(0.0);
//! }
//! assert!(boat.state.position.x > 0.0);
//! ```

pub mod error;
pub mod integrator;
pub mod propulsion;
pub mod transform;
pub mod types;
pub mod vessel;

pub use error::PhysicsError;
pub use integrator::MAX_ANGULAR_VELOCITY;
pub use propulsion::{sail_effectiveness, Motor, Propulsion, Sail, VesselKind};
pub use transform::{l8_norm, perpendicular, unit_vector, wrap_angle};
pub use types::Vec2;
pub use vessel::{InitialPose, Pose, Vessel, VesselState, MASS, TIME_STEP};
