//! Rotation utilities for cube orientation
//!
//! Orientation is stored as three angles about the fixed world axes and
//! applied one axis at a time with Rodrigues' rotation formula. This module
//! also composes that sequence into a 4x4 matrix for renderers.

use crate::types::Vec3;

/// Rotate `v` about the unit direction of `axis` by `theta` radians.
#[must_use]
pub fn rotate_about_axis(v: Vec3, axis: Vec3, theta: f64) -> Vec3 {
    let k = axis.normalize();
    let (sin, cos) = theta.sin_cos();
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}

/// Apply each `(axis, angle)` rotation in order: axis 0, then 1, then 2.
#[must_use]
pub fn rotate_sequential(v: Vec3, axes: &[Vec3; 3], angles: &[f64; 3]) -> Vec3 {
    axes.iter()
        .zip(angles)
        .fold(v, |acc, (&axis, &angle)| rotate_about_axis(acc, axis, angle))
}

/// Column-major 4x4 transform equivalent to `rotate_sequential` followed by a
/// translation to `position`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_transform_matrix(position: Vec3, axes: &[Vec3; 3], angles: &[f64; 3]) -> [[f32; 4]; 4] {
    let cols = [Vec3::X, Vec3::Y, Vec3::Z].map(|basis| rotate_sequential(basis, axes, angles));

    [
        [cols[0].x as f32, cols[0].y as f32, cols[0].z as f32, 0.0],
        [cols[1].x as f32, cols[1].y as f32, cols[1].z as f32, 0.0],
        [cols[2].x as f32, cols[2].y as f32, cols[2].z as f32, 0.0],
        [position.x as f32, position.y as f32, position.z as f32, 1.0],
    ]
}
