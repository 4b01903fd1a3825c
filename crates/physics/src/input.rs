//! Input-driven velocity injection
//!
//! Converts user gestures into velocity changes on a cube. The windowing
//! layer supplies raw screen coordinates; nothing here is clamped.

use crate::cube::RigidCube;
use crate::types::Vec3;

/// Scale applied to drag distance before dividing by the viewport size.
pub const THROW_FORCE: f64 = 10.0;
/// Velocity added per keyboard nudge.
pub const NUDGE_SPEED: f64 = 1.0;

/// A mouse drag in screen pixels, used to throw a cube
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragGesture {
    pub start: (f64, f64),
    pub end: (f64, f64),
    /// Viewport width and height in pixels
    pub viewport: (f64, f64),
}

impl DragGesture {
    /// Drag in an 800x600 viewport.
    #[must_use]
    pub const fn new(start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            start,
            end,
            viewport: (800.0, 600.0),
        }
    }

    /// Linear and angular velocity added by this drag. Screen y grows
    /// downwards, so vertical drag is negated for linear motion.
    #[must_use]
    pub fn impulse(&self) -> (Vec3, Vec3) {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        let (width, height) = self.viewport;

        let linear = Vec3::new(dx * THROW_FORCE / width, -dy * THROW_FORCE / height, 0.0);
        let angular = Vec3::new(dy * THROW_FORCE / width, dx * THROW_FORCE / height, 0.0);
        (linear, angular)
    }

    pub fn apply(&self, cube: &mut RigidCube) {
        let (linear, angular) = self.impulse();
        cube.velocity += linear;
        cube.angular_velocity += angular;
    }
}

/// Push a cube along z by one `NUDGE_SPEED` toward the sign of `direction`.
/// A zero or NaN direction does nothing.
pub fn nudge_z(cube: &mut RigidCube, direction: f64) {
    if direction == 0.0 || direction.is_nan() {
        return;
    }
    cube.velocity.z += direction.signum() * NUDGE_SPEED;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_right_and_up_throws_right_and_up() {
        let mut cube = RigidCube::new(Vec3::ZERO, 1.0, 1.0, 0.5);
        DragGesture::new((100.0, 300.0), (180.0, 240.0)).apply(&mut cube);
        assert!((cube.velocity.x - 1.0).abs() < 1e-12);
        assert!((cube.velocity.y - 1.0).abs() < 1e-12);
        assert!((cube.angular_velocity.x + 0.75).abs() < 1e-12);
        assert!((cube.angular_velocity.y - 80.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn nudges_accumulate() {
        let mut cube = RigidCube::new(Vec3::ZERO, 1.0, 1.0, 0.5);
        nudge_z(&mut cube, 1.0);
        nudge_z(&mut cube, 1.0);
        nudge_z(&mut cube, -1.0);
        assert_eq!(cube.velocity.z, 1.0);
    }

    #[test]
    fn nudge_uses_sign_only() {
        let mut cube = RigidCube::new(Vec3::ZERO, 1.0, 1.0, 0.5);
        nudge_z(&mut cube, 0.0);
        nudge_z(&mut cube, -0.0);
        assert_eq!(cube.velocity.z, 0.0);
        nudge_z(&mut cube, 0.5);
        assert_eq!(cube.velocity.z, 1.0);
    }
}
