//! Impulse-based collision response

use crate::cube::RigidCube;
use crate::types::Vec3;

/// Trait for objects that can respond to collisions
pub trait CollisionResponder {
    /// Get current velocity
    fn velocity(&self) -> Vec3;

    /// Centre the lever arm of an impulse is measured from
    fn center(&self) -> Vec3;

    /// Inverse mass, zero for immovable objects
    fn inverse_mass(&self) -> f64;

    /// Coefficient of restitution
    fn restitution(&self) -> f64;

    /// Inverse of the scalar moment of inertia
    fn inverse_inertia(&self) -> f64;

    /// Change linear velocity by `delta`
    fn add_velocity(&mut self, delta: Vec3);

    /// Change angular velocity by `delta`
    fn add_angular_velocity(&mut self, delta: Vec3);

    /// Apply the rotational part of `impulse` acting at `point`
    fn apply_angular_impulse(&mut self, point: Vec3, impulse: Vec3) {
        let r = point - self.center();
        let delta = r.cross(impulse) * self.inverse_inertia();
        self.add_angular_velocity(delta);
    }
}

impl CollisionResponder for RigidCube {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn inverse_mass(&self) -> f64 {
        RigidCube::inverse_mass(self)
    }

    fn restitution(&self) -> f64 {
        self.bounce
    }

    fn inverse_inertia(&self) -> f64 {
        if self.inertia == 0.0 {
            0.0
        } else {
            1.0 / self.inertia
        }
    }

    fn add_velocity(&mut self, delta: Vec3) {
        self.velocity += delta;
    }

    fn add_angular_velocity(&mut self, delta: Vec3) {
        self.angular_velocity += delta;
    }
}

/// Resolve a collision between a body and a static wall.
///
/// Returns `false` without touching the body when it is already separating
/// along `normal` or has no finite mass.
pub fn resolve_wall_collision<B: CollisionResponder>(body: &mut B, point: Vec3, normal: Vec3) -> bool {
    let velocity_along_normal = body.velocity().dot(normal);

    // Don't resolve if velocities are separating
    if velocity_along_normal > 0.0 {
        return false;
    }

    let inverse_mass = body.inverse_mass();
    if inverse_mass == 0.0 {
        return false;
    }

    // The wall is immovable, so only this body's inverse mass enters.
    let impulse_magnitude = -(1.0 + body.restitution()) * velocity_along_normal / inverse_mass;
    let impulse = normal * impulse_magnitude;

    body.add_velocity(impulse * inverse_mass);
    body.apply_angular_impulse(point, impulse);
    true
}

/// Resolve a collision between two dynamic bodies.
///
/// `normal` points in the direction `a` is pushed. Returns `false` without
/// touching either body when they are already separating or both immovable.
pub fn resolve_pair_collision<A: CollisionResponder, B: CollisionResponder>(
    a: &mut A,
    b: &mut B,
    point: Vec3,
    normal: Vec3,
) -> bool {
    let relative_velocity = a.velocity() - b.velocity();
    let velocity_along_normal = relative_velocity.dot(normal);

    // Don't resolve if velocities are separating
    if velocity_along_normal > 0.0 {
        return false;
    }

    let inverse_mass_a = a.inverse_mass();
    let inverse_mass_b = b.inverse_mass();
    let mass_sum = inverse_mass_a + inverse_mass_b;
    if mass_sum == 0.0 {
        return false;
    }

    let restitution = a.restitution().min(b.restitution());
    let impulse_magnitude = -(1.0 + restitution) * velocity_along_normal / mass_sum;
    let impulse = normal * impulse_magnitude;

    a.add_velocity(impulse * inverse_mass_a);
    b.add_velocity(-impulse * inverse_mass_b);

    a.apply_angular_impulse(point, impulse);
    b.apply_angular_impulse(point, -impulse);
    true
}
