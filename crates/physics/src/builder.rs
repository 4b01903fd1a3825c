//! # Physics Simulation Builder
//!
//! Builder functions for adding cubes to the simulation and the stock
//! two-cube scene the runtime starts from.

use crate::cube::RigidCube;
use crate::types::Vec3;
use crate::PhysicsSim;

/// Edge length of cubes in the demo scene
pub const DEMO_CUBE_SIZE: f64 = 3.0;
/// Mass of cubes in the demo scene
pub const DEMO_CUBE_MASS: f64 = 3.0;
/// Restitution of cubes in the demo scene
pub const DEMO_CUBE_BOUNCE: f64 = 0.9;

impl PhysicsSim {
    /// Add a cube at rest and return its index.
    pub fn add_cube(&mut self, center: Vec3, size: f64, mass: f64, bounce: f64) -> usize {
        self.cubes.push(RigidCube::new(center, size, mass, bounce));
        self.cubes.len() - 1
    }

    /// Two resting cubes at `(0, 0, 0)` and `(3, 1, 0)`, face to face along x.
    #[must_use]
    pub fn demo_scene() -> Self {
        let mut sim = Self::new();
        for center in [Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 0.0)] {
            sim.add_cube(center, DEMO_CUBE_SIZE, DEMO_CUBE_MASS, DEMO_CUBE_BOUNCE);
        }
        sim
    }
}
