//! # Rigid Cube
//!
//! Per-body state for a uniform cube and the oriented-bounding-box geometry
//! derived from it. Orientation is three accumulated angles about the fixed
//! world axes, applied in axis order every time geometry is queried.

use crate::integrator::integrate_cube;
use crate::transform::{rotate_about_axis, rotate_sequential, to_transform_matrix};
use crate::types::Vec3;

/// Vertex index pairs forming the 12 edges of the cube wireframe.
#[rustfmt::skip]
pub const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidCube {
    /// World-space centroid
    pub center: Vec3,
    /// Edge length
    pub size: f64,
    pub mass: f64,
    /// Coefficient of restitution
    pub bounce: f64,
    pub velocity: Vec3,
    /// Angular rate about each of the three rotation axes
    pub angular_velocity: Vec3,
    pub rotation_axes: [Vec3; 3],
    pub rotation_angles: [f64; 3],
    /// Scalar moment of inertia, `mass * size^2 / 6`
    pub inertia: f64,
}

impl RigidCube {
    #[must_use]
    pub fn new(center: Vec3, size: f64, mass: f64, bounce: f64) -> Self {
        Self {
            center,
            size,
            mass,
            bounce,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            rotation_axes: [Vec3::X, Vec3::Y, Vec3::Z],
            rotation_angles: [0.0; 3],
            inertia: mass * size * size / 6.0,
        }
    }

    /// Inverse mass, zero for a massless (immovable) cube.
    #[must_use]
    pub fn inverse_mass(&self) -> f64 {
        if self.mass == 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// The 8 world-space corners, ordered by corner sign with x outermost
    /// and z innermost.
    #[must_use]
    pub fn vertices(&self) -> [Vec3; 8] {
        let h = self.size / 2.0;
        std::array::from_fn(|i| {
            let sign = |bit: usize| if i & bit == 0 { -h } else { h };
            let local = Vec3::new(sign(4), sign(2), sign(1));
            self.center + rotate_sequential(local, &self.rotation_axes, &self.rotation_angles)
        })
    }

    /// Each local axis rotated about itself by its own accumulated angle.
    #[must_use]
    pub fn rotated_axes(&self) -> [Vec3; 3] {
        std::array::from_fn(|i| {
            let axis = self.rotation_axes[i];
            rotate_about_axis(axis, axis, self.rotation_angles[i])
        })
    }

    /// Wireframe segments between vertices, in [`EDGES`] order.
    #[must_use]
    pub fn wireframe(&self) -> [(Vec3, Vec3); 12] {
        let v = self.vertices();
        EDGES.map(|(a, b)| (v[a], v[b]))
    }

    #[must_use]
    pub fn transform_matrix(&self) -> [[f32; 4]; 4] {
        to_transform_matrix(self.center, &self.rotation_axes, &self.rotation_angles)
    }

    /// Advance free motion by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        integrate_cube(self, dt);
    }
}
