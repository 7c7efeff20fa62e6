//! Drift Asteroids - A wrap-around Asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, spawn policy)
//! - `platform`: Input held-state registry and fixed-step clock
//! - `session`: Frame-update interface and observer dispatch
//! - `renderer`: Read-only snapshot and drawing-surface contract
//! - `highscores`: Append-only score store

pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use highscores::{HighScores, Scoreboard};
pub use session::{GameObserver, Session};
pub use settings::{Settings, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default target frame rate (ticks per second)
    pub const DEFAULT_FPS: u32 = 60;
    /// Frame rate must stay below this (exclusive)
    pub const MAX_FPS: u32 = 1000;
    /// Maximum substeps per render frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions
    pub const DEFAULT_WIDTH: f32 = 600.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const THRUST_SPEED: f32 = 150.0;
    /// Degrees per second
    pub const ROTATION_SPEED: f32 = 150.0;
    pub const ACCELERATION_RATE: f32 = 2.0;
    pub const DECELERATION_RATE: f32 = 0.5;
    pub const THRUST_WINDOW_MS: u32 = 50;
    pub const HYPERSPACE_WINDOW_MS: u32 = 3000;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 100.0;

    /// Asteroid defaults
    pub const ASTEROID_SPEED: f32 = 50.0;
    /// Distance beyond the window edge where asteroids appear
    pub const SPAWN_BUFFER: f32 = 50.0;
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 40.0;
    pub const ASTEROID_MIN_VERTICES: usize = 5;
    pub const ASTEROID_MAX_VERTICES: usize = 10;

    /// Session rules
    pub const STARTING_LIVES: u8 = 3;
    pub const INITIAL_ASTEROIDS: usize = 2;
    pub const POINTS_PER_ASTEROID: u64 = 100;
    pub const MAX_SPAWN_PER_KILL: usize = 2;
    pub const TOTAL_MAX_ASTEROIDS: usize = 10;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Unit vector for a heading in degrees (0° is up / screen -y, clockwise positive)
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Convert a millisecond duration to a whole number of ticks (at least one)
#[inline]
pub fn ms_to_ticks(ms: u32, fps: u32) -> u64 {
    let ticks = (u64::from(ms) * u64::from(fps)).div_ceil(1000);
    ticks.max(1)
}
