//! Bullets fired by the ship
//!
//! Bullets never wrap. Once a bullet leaves the screen it is marked invisible
//! for good and dropped at the start of the next tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::shape::Shape;
use super::state::Bounds;

fn bullet_shape() -> Shape {
    Shape::Ellipse {
        origin: Vec2::ZERO,
        size: Vec2::splat(3.0),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Body,
    /// Cleared once the bullet leaves the screen; never set again
    pub visible: bool,
    /// Marked when the bullet hits an asteroid this tick
    #[serde(skip)]
    pub spent: bool,
}

impl Bullet {
    /// Bullets inherit half the ship's speed, and never travel slower than `base_speed`
    pub fn new(id: u32, pos: Vec2, direction: f32, ship_speed: f32, base_speed: f32) -> Self {
        let mut body = Body::new(id, pos, 0.0, bullet_shape());
        body.set_velocity(base_speed.max(base_speed + ship_speed / 2.0), direction);
        Self {
            body,
            visible: true,
            spent: false,
        }
    }

    pub fn next_frame(&mut self, bounds: &Bounds, fps: u32) {
        self.body.advance(fps);
        if !self.body.is_on_screen(bounds) {
            self.visible = false;
        }
    }
}
