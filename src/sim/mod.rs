//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod body;
pub mod bullet;
pub mod collision;
pub mod shape;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, Edge};
pub use body::Body;
pub use bullet::Bullet;
pub use collision::Aabb;
pub use shape::Shape;
pub use ship::{Ship, ShipParams};
pub use state::{Bounds, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
