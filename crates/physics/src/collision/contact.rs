//! Contact point estimation between two interpenetrating cubes
//!
//! Every vertex of one cube is projected onto each segment between
//! consecutive vertices (cyclically, in vertex order) of the other. The
//! closest projection becomes the primary contact; an equally close but
//! distinct projection becomes the secondary one.

use super::CONTACT_EPSILON;
use crate::cube::RigidCube;
use crate::types::Vec3;

/// Closest point to `point` on the segment `a`-`b`, and its distance.
#[must_use]
pub fn point_to_segment_projection(point: Vec3, a: Vec3, b: Vec3) -> (Vec3, f64) {
    let ab = b - a;
    let length_sq = ab.dot(ab);
    let t = if length_sq == 0.0 {
        0.0
    } else {
        ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0)
    };
    let closest = a + ab * t;
    (closest, point.distance(closest))
}

/// Running closest-pair search shared across both projection passes.
#[derive(Debug)]
struct ContactSearch {
    min_distance: f64,
    primary: Option<Vec3>,
    secondary: Option<Vec3>,
}

impl ContactSearch {
    fn new() -> Self {
        Self {
            min_distance: f64::INFINITY,
            primary: None,
            secondary: None,
        }
    }

    fn consider(&mut self, candidate: Vec3, distance: f64) {
        if let Some(primary) = self.primary {
            if (distance - self.min_distance).abs() < CONTACT_EPSILON
                && candidate.distance(primary) >= CONTACT_EPSILON
            {
                self.secondary = Some(candidate);
                return;
            }
        }
        if distance < self.min_distance {
            self.min_distance = distance;
            self.primary = Some(candidate);
            self.secondary = None;
        }
    }

    fn project_vertices(&mut self, vertices: &[Vec3; 8], edges_of: &[Vec3; 8]) {
        for &vertex in vertices {
            for i in 0..edges_of.len() {
                let a = edges_of[i];
                let b = edges_of[(i + 1) % edges_of.len()];
                let (closest, distance) = point_to_segment_projection(vertex, a, b);
                self.consider(closest, distance);
            }
        }
    }

    fn into_points(self) -> Vec<Vec3> {
        self.primary.into_iter().chain(self.secondary).collect()
    }
}

/// Estimate up to two contact points between `a` and `b`.
#[must_use]
pub fn contact_points(a: &RigidCube, b: &RigidCube) -> Vec<Vec3> {
    let vertices_a = a.vertices();
    let vertices_b = b.vertices();

    let mut search = ContactSearch::new();
    search.project_vertices(&vertices_a, &vertices_b);
    search.project_vertices(&vertices_b, &vertices_a);
    search.into_points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_clamps_to_segment() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 0.0, 0.0);

        let (p, d) = point_to_segment_projection(Vec3::new(1.0, 1.0, 0.0), a, b);
        assert_eq!(p, Vec3::new(1.0, 0.0, 0.0));
        assert!((d - 1.0).abs() < 1e-12);

        let (p, d) = point_to_segment_projection(Vec3::new(-3.0, 4.0, 0.0), a, b);
        assert_eq!(p, a);
        assert!((d - 5.0).abs() < 1e-12);

        let (p, _) = point_to_segment_projection(Vec3::new(9.0, 0.0, 0.0), a, b);
        assert_eq!(p, b);
    }

    #[test]
    fn degenerate_segment_projects_to_endpoint() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let (p, d) = point_to_segment_projection(Vec3::new(1.0, 1.0, 2.0), a, a);
        assert_eq!(p, a);
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn equal_distance_candidate_becomes_secondary() {
        let mut search = ContactSearch::new();
        search.consider(Vec3::new(0.0, 0.0, 0.0), 1.0);
        search.consider(Vec3::new(1.0, 0.0, 0.0), 1.0);
        assert_eq!(search.secondary, Some(Vec3::new(1.0, 0.0, 0.0)));

        // Same point again is not a distinct contact.
        let mut search = ContactSearch::new();
        search.consider(Vec3::new(0.0, 0.0, 0.0), 1.0);
        search.consider(Vec3::new(0.0, 0.0, 0.0), 1.0);
        assert_eq!(search.secondary, None);

        // A closer candidate resets the secondary.
        let mut search = ContactSearch::new();
        search.consider(Vec3::new(0.0, 0.0, 0.0), 1.0);
        search.consider(Vec3::new(1.0, 0.0, 0.0), 1.0);
        search.consider(Vec3::new(2.0, 0.0, 0.0), 0.5);
        assert_eq!(search.into_points(), vec![Vec3::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn overlapping_cubes_yield_one_or_two_points() {
        let a = RigidCube::new(Vec3::ZERO, 3.0, 3.0, 0.9);
        let b = RigidCube::new(Vec3::new(2.5, 1.0, 0.0), 3.0, 3.0, 0.9);
        let points = contact_points(&a, &b);
        assert!(!points.is_empty() && points.len() <= 2);
    }

    #[test]
    fn second_pass_can_beat_first() {
        // Two of b's vertices sit on a's z edge at x = y = -2, while every
        // vertex of a is at least 1.5 from b's segments.
        let a = RigidCube::new(Vec3::ZERO, 4.0, 1.0, 0.5);
        let b = RigidCube::new(Vec3::new(-1.5, -1.5, 0.0), 1.0, 1.0, 0.5);
        let expected = vec![Vec3::new(-2.0, -2.0, -0.5), Vec3::new(-2.0, -2.0, 0.5)];

        assert_eq!(contact_points(&a, &b), expected);
        assert_eq!(contact_points(&b, &a), expected);
    }
}
