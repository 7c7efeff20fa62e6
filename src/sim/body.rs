//! Kinematic bodies shared by every on-screen object
//!
//! A body moves along `direction` at `speed`; `rotation` only changes how
//! its shape is drawn and collided.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, outline_intersects_rect};
use super::shape::{Shape, bounds};
use super::state::Bounds;
use crate::{heading_vector, normalize_degrees};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    /// Visual rotation (degrees, [0, 360))
    pub rotation: f32,
    /// Direction of travel (degrees, [0, 360))
    pub direction: f32,
    /// Negative only after reverse thrust
    pub speed: f32,
    pub shape: Shape,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, rotation: f32, shape: Shape) -> Self {
        Self {
            id,
            pos,
            rotation: normalize_degrees(rotation),
            direction: 0.0,
            speed: 0.0,
            shape,
        }
    }

    pub fn set_velocity(&mut self, speed: f32, direction: f32) {
        self.speed = speed;
        self.direction = normalize_degrees(direction);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Rotate the visual heading; positive is clockwise
    pub fn rotate_by(&mut self, delta: f32) {
        self.rotation = normalize_degrees(self.rotation + delta);
    }

    /// Move one tick's worth (`speed / fps`) along the direction of travel
    pub fn advance(&mut self, fps: u32) {
        self.pos += heading_vector(self.direction) * (self.speed / fps as f32);
    }

    /// Fold the position back onto the screen (toroidal wrap)
    pub fn wrap(&mut self, bounds: &Bounds) {
        if self.pos.x < 0.0 {
            self.pos.x += bounds.width;
        } else if self.pos.x > bounds.width {
            self.pos.x -= bounds.width;
        }

        if self.pos.y < 0.0 {
            self.pos.y += bounds.height;
        } else if self.pos.y > bounds.height {
            self.pos.y -= bounds.height;
        }
    }

    pub fn is_on_screen(&self, bounds: &Bounds) -> bool {
        self.pos.x >= 0.0
            && self.pos.x <= bounds.width
            && self.pos.y >= 0.0
            && self.pos.y <= bounds.height
    }

    /// Shape as it appears on screen
    pub fn outline_with(&self, shape: &Shape) -> Vec<Vec2> {
        shape.placed(self.pos, self.rotation)
    }

    pub fn outline(&self) -> Vec<Vec2> {
        self.outline_with(&self.shape)
    }

    pub fn bounding_box(&self) -> Aabb {
        bounds(&self.outline())
    }
}

/// Test one object's outline against the other's bounding box
pub fn outline_hits(outline: &[Vec2], other: &Body) -> bool {
    outline_intersects_rect(outline, &other.bounding_box())
}
