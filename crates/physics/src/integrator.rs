//! # Physics Integration
//!
//! Free-motion update for cubes: accumulate rotation angles, damp the angular
//! rate, then translate.

use crate::cube::RigidCube;

/// Angular velocity is scaled by this once per update, independent of `dt`.
pub const DAMPING_FACTOR: f64 = 0.98;

/// Integrate a single cube's orientation and position.
pub fn integrate_cube(cube: &mut RigidCube, dt: f64) {
    for (i, angle) in cube.rotation_angles.iter_mut().enumerate() {
        *angle += cube.angular_velocity[i] * dt;
    }

    cube.angular_velocity *= DAMPING_FACTOR;

    cube.center += cube.velocity * dt;
}

/// Integrate every cube in the slice.
pub fn integrate_cubes(cubes: &mut [RigidCube], dt: f64) {
    for cube in cubes.iter_mut() {
        integrate_cube(cube, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    #[test]
    fn translates_and_rotates() {
        let mut cube = RigidCube::new(Vec3::ZERO, 1.0, 1.0, 0.5);
        cube.velocity = Vec3::new(1.0, -2.0, 0.5);
        cube.angular_velocity = Vec3::new(0.5, 0.0, -1.0);

        integrate_cube(&mut cube, 0.1);

        assert!(cube.center.distance(Vec3::new(0.1, -0.2, 0.05)) < 1e-12);
        assert!((cube.rotation_angles[0] - 0.05).abs() < 1e-12);
        assert_eq!(cube.rotation_angles[1], 0.0);
        assert!((cube.rotation_angles[2] + 0.1).abs() < 1e-12);
        assert!(cube.angular_velocity.distance(Vec3::new(0.49, 0.0, -0.98)) < 1e-12);
    }

    #[test]
    fn damping_ignores_time_step() {
        let mut a = RigidCube::new(Vec3::ZERO, 1.0, 1.0, 0.5);
        a.angular_velocity = Vec3::new(1.0, 1.0, 1.0);
        let mut b = a;

        integrate_cube(&mut a, 0.001);
        integrate_cube(&mut b, 0.5);

        assert_eq!(a.angular_velocity, b.angular_velocity);
        assert_eq!(a.angular_velocity, Vec3::new(1.0, 1.0, 1.0) * DAMPING_FACTOR);
    }

    #[test]
    fn zero_dt_only_damps() {
        let mut cube = RigidCube::new(Vec3::new(1.0, 2.0, 3.0), 1.0, 1.0, 0.5);
        cube.velocity = Vec3::new(5.0, 5.0, 5.0);
        integrate_cube(&mut cube, 0.0);
        assert_eq!(cube.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cube.rotation_angles, [0.0; 3]);
    }
}
