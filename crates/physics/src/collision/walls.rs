//! Arena wall collision detection
//!
//! The arena is the fixed axis-aligned box `[-5, 5]` on every axis. Each cube
//! vertex outside it is attributed to the first violated face in the order
//! x-low, x-high, y-low, y-high, z-low, z-high.

use super::{resolve_wall_collision, Contact};
use crate::cube::RigidCube;
use crate::types::Vec3;

/// Half extent of the arena along every axis.
pub const ARENA_HALF_EXTENT: f64 = 5.0;

/// First arena face the point lies outside of, as `(inward normal, clamped
/// point, penetration)`.
fn violated_face(vertex: Vec3) -> Option<(Vec3, Vec3, f64)> {
    const LIMIT: f64 = ARENA_HALF_EXTENT;

    for axis in 0..3 {
        let value = vertex[axis];
        let (wall, inward) = if value < -LIMIT {
            (-LIMIT, 1.0)
        } else if value > LIMIT {
            (LIMIT, -1.0)
        } else {
            continue;
        };

        let mut normal = [0.0; 3];
        normal[axis] = inward;
        let mut clamped = vertex.to_array();
        clamped[axis] = wall;
        return Some((Vec3::from(normal), Vec3::from(clamped), (value - wall).abs()));
    }
    None
}

/// Detect penetration of the arena walls.
///
/// Contact point and normal are the arithmetic means over all offending
/// vertices, with the normal renormalized. Depth is the deepest violation.
#[must_use]
pub fn detect_wall_collision(cube: &RigidCube) -> Option<Contact> {
    let mut points = Vec::new();
    let mut normal_sum = Vec3::ZERO;
    let mut depth: f64 = 0.0;

    for vertex in cube.vertices() {
        if let Some((normal, point, penetration)) = violated_face(vertex) {
            points.push(point);
            normal_sum += normal;
            depth = depth.max(penetration);
        }
    }

    let point = Vec3::centroid(&points)?;
    Some(Contact {
        point,
        normal: normal_sum.normalize(),
        depth,
    })
}

/// Detect and resolve a wall collision for one cube, returning the contact
/// when there was one.
pub fn check_wall_collisions(cube: &mut RigidCube) -> Option<Contact> {
    let contact = detect_wall_collision(cube)?;
    resolve_wall_collision(cube, contact.point, contact.normal);
    Some(contact)
}
