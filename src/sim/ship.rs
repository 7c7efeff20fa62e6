//! The player's ship
//!
//! Thrust and hyperspace are timed effects stored as tick deadlines. An
//! effect is active on every tick strictly before its deadline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::bullet::Bullet;
use super::shape::Shape;
use super::state::Bounds;
use crate::ms_to_ticks;
use crate::settings::Tuning;

/// "A" shaped hull
fn hull_shape() -> Shape {
    Shape::polygon(
        &[-10.0, -10.0, 0.0, 10.0, 10.0, 10.0, -10.0],
        &[27.0, 20.0, -15.0, 20.0, 27.0, 20.0, 20.0],
    )
}

/// Hull plus a V shaped flame
fn thrust_shape() -> Shape {
    Shape::polygon(
        &[-10.0, -10.0, 0.0, 10.0, 10.0, 10.0, -5.0, 0.0, 5.0, -10.0],
        &[27.0, 20.0, -15.0, 20.0, 27.0, 20.0, 20.0, 35.0, 20.0, 20.0],
    )
}

/// Ship movement constants, resolved against the frame rate once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipParams {
    pub thrust_speed: f32,
    pub rotation_speed: f32,
    pub acceleration_rate: f32,
    pub deceleration_rate: f32,
    pub bullet_speed: f32,
    pub thrust_ticks: u64,
    pub hyperspace_ticks: u64,
}

impl ShipParams {
    pub fn new(tuning: &Tuning, fps: u32) -> Self {
        Self {
            thrust_speed: tuning.thrust_speed,
            rotation_speed: tuning.rotation_speed,
            acceleration_rate: tuning.acceleration_rate,
            deceleration_rate: tuning.deceleration_rate,
            bullet_speed: tuning.bullet_speed,
            thrust_ticks: ms_to_ticks(tuning.thrust_window_ms, fps),
            hyperspace_ticks: ms_to_ticks(tuning.hyperspace_window_ms, fps),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    pub params: ShipParams,
    /// Thrust is active while `now < thrust_until`
    pub thrust_until: Option<u64>,
    /// Hyperspace is active while `now < hyperspace_until`
    pub hyperspace_until: Option<u64>,
}

impl Ship {
    pub fn new(id: u32, pos: Vec2, rotation: f32, params: ShipParams) -> Self {
        Self {
            body: Body::new(id, pos, rotation, hull_shape()),
            params,
            thrust_until: None,
            hyperspace_until: None,
        }
    }

    pub fn thrust_active(&self, now: u64) -> bool {
        self.thrust_until.is_some_and(|until| now < until)
    }

    pub fn hyperspace_active(&self, now: u64) -> bool {
        self.hyperspace_until.is_some_and(|until| now < until)
    }

    /// Start (or restart) the thrust window
    pub fn enable_thrust(&mut self, now: u64) {
        self.thrust_until = Some(now + self.params.thrust_ticks);
    }

    /// Double-speed burst along the current facing; ignored while already active
    ///
    /// Returns whether the burst started.
    pub fn enter_hyperspace(&mut self, now: u64) -> bool {
        if self.hyperspace_active(now) {
            return false;
        }
        self.body
            .set_velocity(self.params.thrust_speed * 2.0, self.body.rotation);
        self.hyperspace_until = Some(now + self.params.hyperspace_ticks);
        true
    }

    /// Full reverse along the current facing
    pub fn reverse(&mut self) {
        self.body
            .set_velocity(-self.params.thrust_speed, self.body.rotation);
    }

    pub fn rotate_left(&mut self, fps: u32) {
        self.body.rotate_by(-self.params.rotation_speed / fps as f32);
    }

    pub fn rotate_right(&mut self, fps: u32) {
        self.body.rotate_by(self.params.rotation_speed / fps as f32);
    }

    /// Fire from the current position along the current facing
    pub fn shoot_bullet(&self, id: u32) -> Bullet {
        Bullet::new(
            id,
            self.body.pos,
            self.body.rotation,
            self.body.speed,
            self.params.bullet_speed,
        )
    }

    /// Speed cap for the current tick
    pub fn speed_cap(&self, now: u64) -> f32 {
        if self.hyperspace_active(now) {
            self.params.thrust_speed * 2.0
        } else {
            self.params.thrust_speed
        }
    }

    /// Move, wrap, then accelerate or decelerate for the next tick
    pub fn next_frame(&mut self, now: u64, bounds: &Bounds, fps: u32) {
        self.body.advance(fps);
        self.body.wrap(bounds);

        let fps = fps as f32;
        if self.thrust_active(now) {
            // Thrust steers travel onto the current facing
            let speed = ((self.body.speed + 1.0) * (1.0 + self.params.acceleration_rate / fps))
                .min(self.speed_cap(now));
            self.body.set_velocity(speed, self.body.rotation);
        } else {
            let speed = (self.body.speed * (1.0 - self.params.deceleration_rate / fps)).max(0.0);
            self.body.set_speed(speed);
        }
    }

    /// The flame variant is drawn while thrust or hyperspace is active
    pub fn flame_visible(&self, now: u64) -> bool {
        self.thrust_active(now) || self.hyperspace_active(now)
    }

    pub fn outline(&self, now: u64) -> Vec<Vec2> {
        if self.flame_visible(now) {
            self.body.outline_with(&thrust_shape())
        } else {
            self.body.outline()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FPS: u32 = 60;

    fn ship() -> Ship {
        Ship::new(
            1,
            Vec2::new(300.0, 300.0),
            0.0,
            ShipParams::new(&Tuning::default(), FPS),
        )
    }

    fn bounds() -> Bounds {
        Bounds::new(600.0, 600.0)
    }

    #[test]
    fn test_thrust_accelerates_to_cap() {
        let mut ship = ship();
        for now in 0..600 {
            ship.enable_thrust(now);
            ship.next_frame(now, &bounds(), FPS);
            assert!(ship.body.speed <= ship.params.thrust_speed);
        }
        assert!((ship.body.speed - ship.params.thrust_speed).abs() < 1e-3);
    }

    #[test]
    fn test_first_thrust_tick_speed() {
        let mut ship = ship();
        ship.enable_thrust(0);
        ship.next_frame(0, &bounds(), FPS);
        let expected = 1.0 * (1.0 + 2.0 / 60.0);
        assert!((ship.body.speed - expected).abs() < 1e-5);
    }

    #[test]
    fn test_thrust_window_expires() {
        let mut ship = ship();
        ship.enable_thrust(10);
        assert!(ship.thrust_active(10));
        assert!(ship.thrust_active(12));
        assert!(!ship.thrust_active(13));
    }

    #[test]
    fn test_decelerates_toward_zero_keeping_direction() {
        let mut ship = ship();
        ship.body.set_velocity(100.0, 45.0);
        ship.body.rotate_by(90.0);
        ship.next_frame(0, &bounds(), FPS);
        assert!((ship.body.speed - 100.0 * (1.0 - 0.5 / 60.0)).abs() < 1e-4);
        assert_eq!(ship.body.direction, 45.0);
    }

    #[test]
    fn test_rotate_only_changes_rotation() {
        let mut ship = ship();
        ship.body.set_velocity(50.0, 0.0);
        ship.rotate_left(FPS);
        assert!((ship.body.rotation - 357.5).abs() < 1e-4);
        ship.rotate_right(FPS);
        ship.rotate_right(FPS);
        assert!((ship.body.rotation - 2.5).abs() < 1e-4);
        assert_eq!(ship.body.direction, 0.0);
    }

    #[test]
    fn test_hyperspace_is_not_retriggerable() {
        let mut ship = ship();
        ship.body.rotate_by(90.0);
        assert!(ship.enter_hyperspace(0));
        assert_eq!(ship.body.speed, 300.0);
        assert_eq!(ship.body.direction, 90.0);
        assert_eq!(ship.hyperspace_until, Some(180));

        ship.body.set_speed(123.0);
        ship.body.rotate_by(90.0);
        assert!(!ship.enter_hyperspace(60));
        assert_eq!(ship.body.speed, 123.0);
        assert_eq!(ship.body.direction, 90.0);
        assert_eq!(ship.hyperspace_until, Some(180));

        // Once the window closes it can fire again
        assert!(ship.enter_hyperspace(180));
        assert_eq!(ship.hyperspace_until, Some(360));
    }

    #[test]
    fn test_hyperspace_doubles_thrust_cap() {
        let mut ship = ship();
        ship.enter_hyperspace(0);
        ship.enable_thrust(0);
        ship.next_frame(0, &bounds(), FPS);
        assert!(ship.body.speed > ship.params.thrust_speed);
        assert!(ship.body.speed <= ship.params.thrust_speed * 2.0);
    }

    #[test]
    fn test_hyperspace_expiry_leaves_speed_to_deceleration() {
        let mut ship = ship();
        ship.enter_hyperspace(0);
        for now in 0..180 {
            ship.next_frame(now, &bounds(), FPS);
        }
        let before = ship.body.speed;
        assert!(!ship.hyperspace_active(180));
        ship.next_frame(180, &bounds(), FPS);
        assert!(ship.body.speed < before);
    }

    #[test]
    fn test_flame_shape_while_effect_active() {
        let mut ship = ship();
        assert!(!ship.flame_visible(0));
        assert_eq!(ship.outline(0).len(), 7);
        ship.enable_thrust(0);
        assert!(ship.flame_visible(0));
        assert_eq!(ship.outline(0).len(), 10);
        assert!(!ship.flame_visible(5));
        ship.enter_hyperspace(5);
        assert!(ship.flame_visible(100));
    }

    #[test]
    fn test_reverse_then_clamped() {
        let mut ship = ship();
        ship.reverse();
        assert_eq!(ship.body.speed, -150.0);
        ship.next_frame(0, &bounds(), FPS);
        assert_eq!(ship.body.speed, 0.0);
    }

    #[test]
    fn test_shoot_does_not_mutate_ship() {
        let mut ship = ship();
        ship.body.set_velocity(40.0, 10.0);
        ship.body.rotate_by(30.0);
        let bullet = ship.shoot_bullet(9);
        assert_eq!(bullet.body.pos, ship.body.pos);
        assert_eq!(bullet.body.direction, 30.0);
        assert_eq!(bullet.body.speed, 120.0);
        assert_eq!(ship.body.speed, 40.0);
    }
}
