#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::float_cmp)]
//! # Cubebox Physics Engine
//!
//! A small real-time rigid-body engine for uniform cubes inside a fixed
//! arena.
//!
//! Cubes move freely, collide with each other and with the arena walls, and
//! bounce and spin in response to impulses applied at estimated contact
//! points. There is no gravity, friction, or sleeping; every pair of cubes is
//! tested every step.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`RigidCube`] holds pose, velocity, and three accumulated
//!     rotation angles, and derives the eight world-space corners of its
//!     oriented bounding box on demand.
//! -   **Collision:** the [`collision`] module runs a separating-axis test
//!     between cube pairs, checks cubes against the arena walls, estimates
//!     contact points, and resolves contacts with impulses.
//! -   **Simulation:** [`PhysicsSim`] owns the cubes and advances them one
//!     step at a time: integrate, resolve walls, then resolve pairs in
//!     ascending index order.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{PhysicsSim, Vec3};
//!
//! let mut sim = PhysicsSim::demo_scene();
//! sim.cubes[0].velocity = Vec3::new(-2.0, 0.0, 0.0);
//!
//! let report = sim.run(1.0 / 60.0, 120)?;
//! assert!(sim.cubes[0].velocity.x.is_finite());
//! # let _ = report;
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod builder;
pub mod collision;
pub mod cube;
pub mod error;
pub mod input;
pub mod integrator;
pub mod simulation;
pub mod transform;
pub mod types;

pub use collision::{Contact, Penetration, ARENA_HALF_EXTENT};
pub use cube::RigidCube;
pub use error::PhysicsError;
pub use input::{nudge_z, DragGesture};
pub use integrator::DAMPING_FACTOR;
pub use simulation::{PhysicsSim, StepReport};
pub use types::Vec3;
