//! # Physics Simulation Core
//!
//! This module provides the main physics simulation structure and high-level
//! execution methods. One step integrates every cube, resolves arena wall
//! contacts cube by cube, then runs a single ordered pass over all cube
//! pairs. Pairs are resolved sequentially, so pair `(i, j)` sees the
//! velocities left by every earlier pair.

use crate::collision::{
    all_collision_pairs, check_wall_collisions, contact_points, detect_box_box_collision,
    pair_mut, resolve_pair_collision, Contact,
};
use crate::cube::RigidCube;
use crate::error::PhysicsError;
use crate::integrator::integrate_cubes;
use crate::types::Vec3;

/// Counters for the most recent step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Cubes that touched or crossed an arena wall
    pub wall_contacts: usize,
    /// Pairs the separating-axis test found overlapping
    pub overlapping_pairs: usize,
    /// Overlapping pairs that received an impulse
    pub resolved_pairs: usize,
}

/// Main physics simulation container
#[derive(Clone, Debug, Default)]
pub struct PhysicsSim {
    pub cubes: Vec<RigidCube>,
    last_report: StepReport,
}

impl PhysicsSim {
    /// Create a new empty simulation
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checked access to a cube.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyIndex`] when `index` is out of range.
    pub fn cube(&self, index: usize) -> Result<&RigidCube, PhysicsError> {
        let len = self.cubes.len();
        self.cubes.get(index).ok_or(PhysicsError::BodyIndex { index, len })
    }

    /// Checked mutable access to a cube, for input handlers.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyIndex`] when `index` is out of range.
    pub fn cube_mut(&mut self, index: usize) -> Result<&mut RigidCube, PhysicsError> {
        let len = self.cubes.len();
        self.cubes.get_mut(index).ok_or(PhysicsError::BodyIndex { index, len })
    }

    /// Counters from the most recent step.
    #[must_use]
    pub fn last_report(&self) -> StepReport {
        self.last_report
    }

    /// Every cube's 8 vertices, flattened in cube order, for wireframe upload.
    #[must_use]
    pub fn vertex_buffer(&self) -> Vec<[f32; 3]> {
        self.cubes
            .iter()
            .flat_map(|cube| cube.vertices().map(Vec3::to_f32_array))
            .collect()
    }

    /// Raw bytes of [`Self::vertex_buffer`].
    #[must_use]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice::<[f32; 3], u8>(&self.vertex_buffer()).to_vec()
    }

    /// Advance the simulation by one step of `dt` seconds.
    pub fn step(&mut self, dt: f64) -> StepReport {
        integrate_cubes(&mut self.cubes, dt);

        let mut report = StepReport::default();
        for (index, cube) in self.cubes.iter_mut().enumerate() {
            if let Some(contact) = check_wall_collisions(cube) {
                tracing::debug!(
                    cube = index,
                    depth = contact.depth,
                    normal = %contact.normal,
                    "wall contact"
                );
                report.wall_contacts += 1;
            }
        }

        for (i, j) in all_collision_pairs(self.cubes.len()) {
            let Some(contact) = self.pair_contact(i, j) else {
                continue;
            };
            report.overlapping_pairs += 1;

            let (a, b) = pair_mut(&mut self.cubes, i, j);
            if resolve_pair_collision(a, b, contact.point, contact.normal) {
                report.resolved_pairs += 1;
            }
            tracing::debug!(a = i, b = j, depth = contact.depth, point = %contact.point, "cube contact");
        }

        self.last_report = report;
        report
    }

    /// Run `steps` steps of `dt` seconds and return the final report.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::NoBodies`] for an empty scene and
    /// [`PhysicsError::InvalidTimeStep`] for a negative or non-finite `dt`.
    pub fn run(&mut self, dt: f64, steps: usize) -> Result<StepReport, PhysicsError> {
        if self.cubes.is_empty() {
            return Err(PhysicsError::NoBodies);
        }
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }

        tracing::debug!(steps, dt, cubes = self.cubes.len(), "running simulation");
        for _ in 0..steps {
            self.step(dt);
        }
        tracing::debug!(report = ?self.last_report, "simulation finished");
        Ok(self.last_report)
    }

    /// Contact for pair `(i, j)`, or `None` when they don't overlap or no
    /// contact point could be estimated.
    fn pair_contact(&self, i: usize, j: usize) -> Option<Contact> {
        let (a, b) = (&self.cubes[i], &self.cubes[j]);
        let penetration = detect_box_box_collision(a, b)?;

        let points = contact_points(a, b);
        let Some(point) = Vec3::centroid(&points) else {
            tracing::trace!(a = i, b = j, "overlap without contact points");
            return None;
        };

        Some(Contact {
            point,
            normal: penetration.normal,
            depth: penetration.depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_rejects_empty_scene() {
        let mut sim = PhysicsSim::new();
        assert_eq!(sim.run(0.01, 1), Err(PhysicsError::NoBodies));
    }

    #[test]
    fn run_rejects_bad_time_step() {
        let mut sim = PhysicsSim::new();
        sim.add_cube(Vec3::ZERO, 1.0, 1.0, 0.5);
        assert_eq!(sim.run(-0.1, 1), Err(PhysicsError::InvalidTimeStep(-0.1)));
        assert!(matches!(sim.run(f64::NAN, 1), Err(PhysicsError::InvalidTimeStep(_))));
    }

    #[test]
    fn checked_access_reports_range() {
        let mut sim = PhysicsSim::new();
        sim.add_cube(Vec3::ZERO, 1.0, 1.0, 0.5);
        assert!(sim.cube(0).is_ok());
        assert_eq!(sim.cube_mut(3).err(), Some(PhysicsError::BodyIndex { index: 3, len: 1 }));
    }

    #[test]
    fn vertex_buffer_has_eight_vertices_per_cube() {
        let sim = PhysicsSim::demo_scene();
        let buffer = sim.vertex_buffer();
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer[0], [-1.5, -1.5, -1.5]);
        assert_eq!(sim.vertex_bytes().len(), 16 * 3 * std::mem::size_of::<f32>());
    }

    #[test]
    fn overlapping_approach_gets_resolved() {
        let mut sim = PhysicsSim::new();
        let a = sim.add_cube(Vec3::new(-1.2, 0.0, 0.0), 3.0, 3.0, 0.9);
        let b = sim.add_cube(Vec3::new(1.2, 0.3, 0.0), 3.0, 3.0, 0.9);
        sim.cubes[a].velocity = Vec3::new(1.0, 0.0, 0.0);
        sim.cubes[b].velocity = Vec3::new(-1.0, 0.0, 0.0);

        let report = sim.step(0.0);
        assert_eq!(report.overlapping_pairs, 1);
        assert_eq!(report.resolved_pairs, 1);
        assert!(sim.cubes[a].velocity.x < 0.0);
        assert!(sim.cubes[b].velocity.x > 0.0);
        assert_eq!(sim.last_report(), report);
    }
}
