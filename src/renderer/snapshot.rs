//! Read-only view of a tick's objects
//!
//! Everything a renderer needs, already placed in screen space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::colors;
use crate::sim::{Bounds, GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Ship,
    Asteroid,
    Bullet,
}

impl ObjectKind {
    pub fn color(&self) -> [f32; 4] {
        match self {
            ObjectKind::Ship => colors::SHIP,
            ObjectKind::Asteroid => colors::ASTEROID,
            ObjectKind::Bullet => colors::BULLET,
        }
    }
}

/// One object as it should appear on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectView {
    pub id: u32,
    pub kind: ObjectKind,
    pub pos: Vec2,
    pub rotation: f32,
    /// Closed outline in screen coordinates
    pub outline: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub bounds: Bounds,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    pub ship: ObjectView,
    /// Thrust or hyperspace flame is showing
    pub ship_flame: bool,
    pub asteroids: Vec<ObjectView>,
    pub bullets: Vec<ObjectView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        // Effects set during tick `t` are judged against the tick just run
        let now = state.time_ticks.saturating_sub(1);
        let ship = &state.ship;

        Self {
            tick: state.time_ticks,
            bounds: state.bounds,
            score: state.score,
            lives: state.lives,
            phase: state.phase,
            ship: ObjectView {
                id: ship.body.id,
                kind: ObjectKind::Ship,
                pos: ship.body.pos,
                rotation: ship.body.rotation,
                outline: ship.outline(now),
            },
            ship_flame: ship.flame_visible(now),
            asteroids: state
                .asteroids
                .iter()
                .map(|a| ObjectView {
                    id: a.body.id,
                    kind: ObjectKind::Asteroid,
                    pos: a.body.pos,
                    rotation: a.body.rotation,
                    outline: a.body.outline(),
                })
                .collect(),
            bullets: state
                .bullets
                .iter()
                .map(|b| ObjectView {
                    id: b.body.id,
                    kind: ObjectKind::Bullet,
                    pos: b.body.pos,
                    rotation: b.body.rotation,
                    outline: b.body.outline(),
                })
                .collect(),
        }
    }

    /// Objects in paint order: ship, asteroids, bullets
    pub fn objects(&self) -> impl Iterator<Item = &ObjectView> {
        std::iter::once(&self.ship)
            .chain(self.asteroids.iter())
            .chain(self.bullets.iter())
    }
}
