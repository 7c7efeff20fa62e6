//! Game state and core simulation types
//!
//! One `GameState` is one session: a ship, the live asteroids and bullets,
//! score and lives, and the seeded RNG every spawn draws from.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::ship::{Ship, ShipParams};
use crate::error::{GameError, validate_frame_rate};
use crate::settings::{Settings, Tuning};

/// Screen size; origin top-left, x right, y down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validated(width: f32, height: f32) -> Result<Self, GameError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(GameError::InvalidBounds { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Lives remain; every tick moves the world
    Playing,
    /// Lives reached zero; terminal
    GameOver,
}

/// Change notifications raised during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u64),
    LivesChanged(u8),
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub bounds: Bounds,
    /// Ticks per second; every per-tick displacement divides by this
    pub fps: u32,
    pub tuning: Tuning,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub ship: Ship,
    /// Live asteroids (bounded by `tuning.total_max_asteroids`)
    pub asteroids: Vec<Asteroid>,
    /// Live bullets
    pub bullets: Vec<Bullet>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session; rejects unusable frame rates and window sizes
    pub fn new(bounds: Bounds, fps: u32, tuning: Tuning, seed: u64) -> Result<Self, GameError> {
        let fps = validate_frame_rate(fps)?;
        let bounds = Bounds::validated(bounds.width, bounds.height)?;
        tuning.validate()?;
        let params = ShipParams::new(&tuning, fps);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            fps,
            lives: tuning.starting_lives,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship: Ship::new(0, bounds.center(), 0.0, params),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            events: Vec::new(),
            next_id: 1,
            tuning,
        };

        state.reset();
        log::info!(
            "Session started: {}x{} @ {} fps, seed {}",
            bounds.width,
            bounds.height,
            fps,
            seed
        );
        Ok(state)
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Result<Self, GameError> {
        Self::new(
            Bounds::new(settings.width, settings.height),
            settings.frames_per_second,
            settings.tuning.clone(),
            seed,
        )
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Fresh ship at the center, no bullets, and the opening asteroids
    pub fn reset(&mut self) {
        let id = self.next_entity_id();
        let params = ShipParams::new(&self.tuning, self.fps);
        self.ship = Ship::new(id, self.bounds.center(), 0.0, params);
        self.asteroids.clear();
        self.bullets.clear();
        self.spawn_asteroids(self.tuning.initial_asteroids);
    }

    /// Asteroids still in play this tick
    pub fn live_asteroid_count(&self) -> usize {
        self.asteroids.iter().filter(|a| !a.destroyed).count()
    }

    /// Add up to `count` asteroids without exceeding the live cap
    ///
    /// Returns how many were added.
    pub fn spawn_asteroids(&mut self, count: usize) -> usize {
        let available = self
            .tuning
            .total_max_asteroids
            .saturating_sub(self.live_asteroid_count());
        let to_add = count.min(available);
        if to_add == 0 {
            return 0;
        }

        for _ in 0..to_add {
            let id = self.next_entity_id();
            let asteroid = Asteroid::spawn(id, &mut self.rng, &self.bounds, &self.tuning);
            self.asteroids.push(asteroid);
        }
        log::debug!(
            "Spawned {} asteroid(s), {} live",
            to_add,
            self.live_asteroid_count()
        );
        to_add
    }

    /// Fire a bullet from the ship (ignored once the game is over)
    pub fn shoot_bullet(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        let id = self.next_entity_id();
        let bullet = self.ship.shoot_bullet(id);
        self.bullets.push(bullet);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
