//! # Collision Detection and Response
//!
//! This module handles collision detection between cubes and against the
//! arena walls, estimates contact points, and computes collision response
//! using impulse-based methods.

mod box_box;
mod broad_phase;
mod contact;
mod response;
mod walls;

pub use box_box::*;
pub use broad_phase::*;
pub use contact::*;
pub use response::*;
pub use walls::*;

use crate::types::Vec3;

/// Axes and cross products shorter than this carry no direction.
pub const AXIS_EPSILON: f64 = 1e-6;
/// Slack allowed when comparing projected intervals.
pub const OVERLAP_TOLERANCE: f64 = 1e-6;
/// Minimum penetration reported as a collision.
pub const MIN_PENETRATION: f64 = 1e-4;
/// Distance below which two contact candidates are considered equal.
pub const CONTACT_EPSILON: f64 = 1e-12;

/// Separating-axis result for an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit axis of least overlap, pointing from body B towards body A
    pub normal: Vec3,
    /// Overlap along `normal`
    pub depth: f64,
}

/// Contact information for collision response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point in world space
    pub point: Vec3,
    /// Contact normal, the direction the first body is pushed
    pub normal: Vec3,
    /// Penetration depth
    pub depth: f64,
}
