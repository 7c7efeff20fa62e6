//! Object-space shapes and their placement on screen
//!
//! Shapes are defined around the object's own origin. Placing one on screen
//! translates it to the object position and then rotates it in place by the
//! object's visual rotation.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Number of segments used when flattening an ellipse
pub const ELLIPSE_SEGMENTS: usize = 16;

/// A shape in object space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Closed polygon through the given vertices
    Polygon(Vec<Vec2>),
    /// Ellipse inscribed in the box starting at `origin` with extent `size`
    Ellipse { origin: Vec2, size: Vec2 },
}

impl Shape {
    pub fn polygon(xs: &[f32], ys: &[f32]) -> Self {
        Shape::Polygon(xs.iter().zip(ys).map(|(x, y)| Vec2::new(*x, *y)).collect())
    }

    /// Vertices in object space (ellipses are flattened)
    pub fn outline(&self) -> Vec<Vec2> {
        match self {
            Shape::Polygon(points) => points.clone(),
            Shape::Ellipse { origin, size } => {
                let radii = *size * 0.5;
                let center = *origin + radii;
                (0..ELLIPSE_SEGMENTS)
                    .map(|i| {
                        let t = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                        center + Vec2::new(radii.x * t.cos(), radii.y * t.sin())
                    })
                    .collect()
            }
        }
    }

    /// Outline after translating to `position` and rotating by `rotation` degrees
    pub fn placed(&self, position: Vec2, rotation: f32) -> Vec<Vec2> {
        let transform = placement(position, rotation);
        self.outline()
            .into_iter()
            .map(|p| transform.transform_point2(p))
            .collect()
    }
}

/// Translate-then-rotate transform used for every on-screen shape
pub fn placement(position: Vec2, rotation: f32) -> Affine2 {
    Affine2::from_translation(position) * Affine2::from_angle(rotation.to_radians())
}

/// Bounding box of a placed outline
pub fn bounds(outline: &[Vec2]) -> Aabb {
    Aabb::from_points(outline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_translates_then_rotates() {
        let shape = Shape::Polygon(vec![Vec2::new(0.0, -10.0)]);
        // 90° clockwise on a y-down screen takes "up" to "right"
        let placed = shape.placed(Vec2::new(100.0, 50.0), 90.0);
        assert!((placed[0] - Vec2::new(110.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_ellipse_outline_bounds() {
        let shape = Shape::Ellipse {
            origin: Vec2::ZERO,
            size: Vec2::splat(3.0),
        };
        let outline = shape.outline();
        assert_eq!(outline.len(), ELLIPSE_SEGMENTS);
        let rect = bounds(&outline);
        assert!((rect.min.x - 0.0).abs() < 1e-4);
        assert!((rect.max.x - 3.0).abs() < 1e-4);
        assert!((rect.max.y - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_polygon_constructor() {
        let shape = Shape::polygon(&[1.0, 2.0], &[3.0, 4.0]);
        assert_eq!(shape.outline(), vec![Vec2::new(1.0, 3.0), Vec2::new(2.0, 4.0)]);
    }
}
