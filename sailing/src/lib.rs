//! # Sailing
//!
//! Entry point for the boat navigation environments.
//!
//! ## Overview
//!
//! A small sailboat or motorboat starts near the bottom of a square course
//! and has to reach a target near the top using nothing but its rudder. The
//! workspace is split the same way the problem is:
//!
//! -   **[`physics`]** (`boat-physics`): the hull model. One shared
//!     integrator for drag, keel resistance and turning, with the drive
//!     force supplied by a pluggable propulsion strategy (sail or motor).
//! -   **[`env`]** (`boat-env`): the episodic control loop. Reset/step
//!     semantics, the observation vector, the shaped reward and the
//!     discrete-rudder adapter, plus configuration presets for the three
//!     registered environments.
//! -   **[`rollout`]**: a headless runner that plays episodes with fixed
//!     action sources, applies the step cap and logs the outcome. It backs
//!     the `sailing` binary.
//!
//! ## Getting Started
//!
//! ```text
//! RUST_LOG=debug sailing --env Motorboat-v0 --episodes 3 --seed 42 --policy constant --rudder 0.2
//! ```

pub mod rollout;

pub use boat_env as env;
pub use boat_physics as physics;
