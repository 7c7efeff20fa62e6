//! Collision detection between outlines and bounding boxes
//!
//! Collisions are one-sided: one object's full outline is tested against only
//! the axis-aligned bounding box of the other, so `a` hitting `b` does not
//! imply `b` hitting `a`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point (empty input gives an empty box at the origin)
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Vec2::ZERO, Vec2::ZERO);
        };
        let (min, max) = points
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// A box with no area never intersects anything
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Strict interior containment
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// Even-odd point-in-polygon test
pub fn polygon_contains_point(polygon: &[Vec2], p: Vec2) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Signed area of the triangle (a, b, c), doubled
#[inline]
fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

#[inline]
fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed-segment intersection test (touching counts)
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

/// Check whether a closed outline overlaps a rectangle
///
/// True when any outline vertex lies inside the rectangle, any rectangle
/// corner lies inside the outline, or any outline edge crosses a rectangle
/// edge. Empty rectangles never intersect.
pub fn outline_intersects_rect(outline: &[Vec2], rect: &Aabb) -> bool {
    if outline.is_empty() || rect.is_empty() {
        return false;
    }

    if outline.iter().any(|p| rect.contains_point(*p)) {
        return true;
    }

    let corners = rect.corners();
    if corners.iter().any(|c| polygon_contains_point(outline, *c)) {
        return true;
    }

    let n = outline.len();
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        for k in 0..4 {
            if segments_intersect(a, b, corners[k], corners[(k + 1) % 4]) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(center: Vec2, half: f32) -> Vec<Vec2> {
        vec![
            center + Vec2::new(-half, -half),
            center + Vec2::new(half, -half),
            center + Vec2::new(half, half),
            center + Vec2::new(-half, half),
        ]
    }

    #[test]
    fn test_aabb_from_points() {
        let rect = Aabb::from_points(&[Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0)]);
        assert_eq!(rect.min, Vec2::new(-2.0, -1.0));
        assert_eq!(rect.max, Vec2::new(3.0, 4.0));
        assert_eq!(rect.width(), 5.0);
    }

    #[test]
    fn test_point_in_polygon() {
        let poly = square(Vec2::ZERO, 10.0);
        assert!(polygon_contains_point(&poly, Vec2::new(1.0, 1.0)));
        assert!(!polygon_contains_point(&poly, Vec2::new(11.0, 0.0)));
    }

    #[test]
    fn test_outline_inside_rect() {
        let rect = Aabb::new(Vec2::splat(-50.0), Vec2::splat(50.0));
        assert!(outline_intersects_rect(&square(Vec2::ZERO, 5.0), &rect));
    }

    #[test]
    fn test_rect_inside_outline() {
        let rect = Aabb::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        assert!(outline_intersects_rect(&square(Vec2::ZERO, 20.0), &rect));
    }

    #[test]
    fn test_crossing_without_contained_vertices() {
        // Thin horizontal bar crossing a thin vertical rectangle
        let bar = vec![
            Vec2::new(-20.0, -1.0),
            Vec2::new(20.0, -1.0),
            Vec2::new(20.0, 1.0),
            Vec2::new(-20.0, 1.0),
        ];
        let rect = Aabb::new(Vec2::new(-1.0, -20.0), Vec2::new(1.0, 20.0));
        assert!(outline_intersects_rect(&bar, &rect));
    }

    #[test]
    fn test_disjoint() {
        let rect = Aabb::new(Vec2::splat(100.0), Vec2::splat(120.0));
        assert!(!outline_intersects_rect(&square(Vec2::ZERO, 10.0), &rect));
    }

    #[test]
    fn test_empty_rect_never_hits() {
        let rect = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!(!outline_intersects_rect(&square(Vec2::ZERO, 10.0), &rect));
    }
}
