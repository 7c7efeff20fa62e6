//! Game settings and gameplay tuning
//!
//! Persisted as JSON next to the score store. Every field has a default so a
//! partial file overrides only what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, validate_frame_rate};

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Top speed under thrust (doubled during hyperspace)
    pub thrust_speed: f32,
    /// Degrees per second while a rotate action is held
    pub rotation_speed: f32,
    pub acceleration_rate: f32,
    pub deceleration_rate: f32,
    pub thrust_window_ms: u32,
    pub hyperspace_window_ms: u32,

    // === Bullets ===
    pub bullet_speed: f32,

    // === Asteroids ===
    pub asteroid_speed: f32,
    pub spawn_buffer: f32,
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
    pub asteroid_min_vertices: usize,
    pub asteroid_max_vertices: usize,

    // === Session rules ===
    pub starting_lives: u8,
    pub initial_asteroids: usize,
    pub points_per_asteroid: u64,
    pub max_spawn_per_kill: usize,
    pub total_max_asteroids: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            thrust_speed: THRUST_SPEED,
            rotation_speed: ROTATION_SPEED,
            acceleration_rate: ACCELERATION_RATE,
            deceleration_rate: DECELERATION_RATE,
            thrust_window_ms: THRUST_WINDOW_MS,
            hyperspace_window_ms: HYPERSPACE_WINDOW_MS,

            bullet_speed: BULLET_SPEED,

            asteroid_speed: ASTEROID_SPEED,
            spawn_buffer: SPAWN_BUFFER,
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            asteroid_min_vertices: ASTEROID_MIN_VERTICES,
            asteroid_max_vertices: ASTEROID_MAX_VERTICES,

            starting_lives: STARTING_LIVES,
            initial_asteroids: INITIAL_ASTEROIDS,
            points_per_asteroid: POINTS_PER_ASTEROID,
            max_spawn_per_kill: MAX_SPAWN_PER_KILL,
            total_max_asteroids: TOTAL_MAX_ASTEROIDS,
        }
    }
}

impl Tuning {
    /// Reject values that would stall spawning or start a game already lost
    pub fn validate(&self) -> Result<(), GameError> {
        let rates = [
            self.thrust_speed,
            self.rotation_speed,
            self.acceleration_rate,
            self.deceleration_rate,
            self.bullet_speed,
            self.asteroid_speed,
            self.spawn_buffer,
        ];
        if rates.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(GameError::InvalidTuning {
                reason: "speeds, rates and spawn buffer must be finite and non-negative",
            });
        }
        if !(self.asteroid_min_radius.is_finite() && self.asteroid_max_radius.is_finite())
            || self.asteroid_min_radius < 0.0
            || self.asteroid_min_radius >= self.asteroid_max_radius
        {
            return Err(GameError::InvalidTuning {
                reason: "asteroid radius range must satisfy 0 <= min < max",
            });
        }
        if self.asteroid_min_vertices < 3 || self.asteroid_min_vertices > self.asteroid_max_vertices
        {
            return Err(GameError::InvalidTuning {
                reason: "asteroid vertex range must satisfy 3 <= min <= max",
            });
        }
        if self.starting_lives == 0 {
            return Err(GameError::InvalidTuning {
                reason: "starting lives must be at least 1",
            });
        }
        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window width (fixed for the session)
    pub width: f32,
    /// Window height (fixed for the session)
    pub height: f32,
    /// Target ticks per second for input, simulation and render
    pub frames_per_second: u32,
    /// Append-only `"<name> <score>"` store
    pub score_file: PathBuf,
    /// Name written to the score store at game over
    pub player_name: String,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames_per_second: DEFAULT_FPS,
            score_file: PathBuf::from("gamedata/scores.txt"),
            player_name: "player".to_string(),
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Check the values the simulation divides by or scales with
    pub fn validate(&self) -> Result<(), GameError> {
        validate_frame_rate(self.frames_per_second)?;
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(GameError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        self.tuning.validate()
    }

    /// Load settings from a JSON file, falling back to defaults when it is missing
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(GameError::io(path, e)),
        };

        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| GameError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;
        if let Err(e) = settings.validate() {
            log::warn!("Rejected settings from {}: {}", path.display(), e);
            return Err(e);
        }

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| GameError::io(dir, e))?;
        }
        // Serializing plain data cannot fail
        let json = serde_json::to_string_pretty(self).unwrap_or_default();
        std::fs::write(path, json).map_err(|e| GameError::io(path, e))?;
        log::info!("Settings saved");
        Ok(())
    }
}
