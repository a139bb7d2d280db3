//! Collision tests
//!
//! Circle-circle for every entity pair the game cares about, plus a
//! polygon-circle test kept for terrain shapes.

use glam::Vec2;

use crate::wrapped_distance;

/// Two circles collide iff the distance between centers is strictly less
/// than the sum of radii. Touching is not a collision.
#[inline]
pub fn circle_collision(pos1: Vec2, radius1: f32, pos2: Vec2, radius2: f32) -> bool {
    pos1.distance(pos2) < radius1 + radius2
}

/// [`circle_collision`] on an arena that wraps horizontally at `width`
#[inline]
pub fn wrapped_circle_collision(
    pos1: Vec2,
    radius1: f32,
    pos2: Vec2,
    radius2: f32,
    width: f32,
) -> bool {
    wrapped_distance(pos1, pos2, width) < radius1 + radius2
}

/// Distance from `point` to the segment `start..end`
///
/// Projects the point onto the segment and clamps the projection to the
/// segment length.
pub fn point_segment_distance(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let line_vec = end - start;
    let line_len = line_vec.length();
    if line_len <= f32::EPSILON {
        // Degenerate segment
        return point.distance(start);
    }
    let unit = line_vec / line_len;
    let projection = (point - start).dot(unit).clamp(0.0, line_len);
    let nearest = start + unit * projection;
    nearest.distance(point)
}

/// Check whether a circle overlaps any edge of a closed polygon
///
/// Only edge proximity is tested; a circle entirely inside a large polygon
/// without touching an edge does not collide.
pub fn polygon_circle_collision(points: &[Vec2], center: Vec2, radius: f32) -> bool {
    if points.is_empty() {
        return false;
    }
    let min_distance = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&start, &end)| point_segment_distance(center, start, end))
        .fold(f32::INFINITY, f32::min);
    min_distance < radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_overlap() {
        assert!(circle_collision(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!circle_collision(Vec2::ZERO, 5.0, Vec2::new(11.0, 0.0), 5.0));
    }

    #[test]
    fn test_wrapped_overlap_across_seam() {
        assert!(!circle_collision(Vec2::new(795.0, 0.0), 5.0, Vec2::new(2.0, 0.0), 5.0));
        assert!(wrapped_circle_collision(
            Vec2::new(795.0, 0.0),
            5.0,
            Vec2::new(2.0, 0.0),
            5.0,
            800.0
        ));
        assert!(!wrapped_circle_collision(
            Vec2::new(400.0, 0.0),
            5.0,
            Vec2::new(2.0, 0.0),
            5.0,
            800.0
        ));
    }

    #[test]
    fn test_touching_is_not_collision() {
        assert!(!circle_collision(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn test_point_segment_distance_clamps() {
        let start = Vec2::ZERO;
        let end = Vec2::new(10.0, 0.0);
        // Perpendicular from the middle
        assert!((point_segment_distance(Vec2::new(5.0, 3.0), start, end) - 3.0).abs() < 1e-6);
        // Beyond the end clamps to the endpoint
        assert!((point_segment_distance(Vec2::new(13.0, 4.0), start, end) - 5.0).abs() < 1e-6);
        // Before the start clamps to the start
        assert!((point_segment_distance(Vec2::new(-3.0, 0.0), start, end) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_polygon_circle() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ];
        // Near the closing edge (0,100) -> (0,0)
        assert!(polygon_circle_collision(&square, Vec2::new(-4.0, 50.0), 5.0));
        // Far outside
        assert!(!polygon_circle_collision(&square, Vec2::new(-20.0, 50.0), 5.0));
        // Deep inside, away from every edge
        assert!(!polygon_circle_collision(&square, Vec2::new(50.0, 50.0), 5.0));
        assert!(!polygon_circle_collision(&[], Vec2::ZERO, 5.0));
    }

    proptest! {
        #[test]
        fn prop_circle_collision_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0, ar in 0.0f32..100.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0, br in 0.0f32..100.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(circle_collision(a, ar, b, br), circle_collision(b, br, a, ar));
        }

        #[test]
        fn prop_segment_distance_never_exceeds_endpoints(
            px in -500.0f32..500.0, py in -500.0f32..500.0,
            sx in -500.0f32..500.0, sy in -500.0f32..500.0,
            ex in -500.0f32..500.0, ey in -500.0f32..500.0,
        ) {
            let p = Vec2::new(px, py);
            let s = Vec2::new(sx, sy);
            let e = Vec2::new(ex, ey);
            let d = point_segment_distance(p, s, e);
            prop_assert!(d <= p.distance(s) + 1e-3);
            prop_assert!(d <= p.distance(e) + 1e-3);
        }
    }
}
