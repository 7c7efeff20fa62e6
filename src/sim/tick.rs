//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::body::outline_hits;
use super::state::{GameEvent, GamePhase, GameState};

/// Actions that fire on this tick (already filtered for repeatability)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub hyperspace: bool,
    pub shoot: bool,
}

/// Advance the game state by one tick
///
/// Order within a tick: input, ship motion, expired-bullet sweep, then one
/// pass over the asteroids that resolves bullet hits, ship hits and asteroid
/// motion. Nothing moves once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    apply_input(state, input);

    let now = state.time_ticks;
    let bounds = state.bounds;
    let fps = state.fps;

    state.ship.next_frame(now, &bounds, fps);

    // Bullets that left the screen last tick
    state.bullets.retain(|b| b.visible);

    let mut moved = vec![false; state.bullets.len()];
    let mut reset = false;

    // Asteroids spawned by a kill are appended and picked up by this same pass
    let mut ai = 0;
    while ai < state.asteroids.len() {
        for bi in 0..state.bullets.len() {
            if state.bullets[bi].spent {
                continue;
            }
            let outline = state.bullets[bi].body.outline();
            if outline_hits(&outline, &state.asteroids[ai].body) {
                // Score (and any spawns) before removal
                award_points(state);
                state.asteroids[ai].destroyed = true;
                state.bullets[bi].spent = true;
                break;
            } else if !moved[bi] {
                state.bullets[bi].next_frame(&bounds, fps);
                moved[bi] = true;
            }
        }

        if !state.asteroids[ai].destroyed {
            let ship_outline = state.ship.outline(now);
            if outline_hits(&ship_outline, &state.asteroids[ai].body) {
                state.asteroids[ai].destroyed = true;
                lose_life(state);
                // The field was rebuilt; nothing from this pass carries over
                reset = true;
                break;
            }
        }

        if !state.asteroids[ai].destroyed {
            state.asteroids[ai].next_frame(&bounds, fps);
        }
        ai += 1;
    }

    if !reset {
        // With no asteroids to scan against, bullets still move once
        for (bullet, moved) in state.bullets.iter_mut().zip(&moved) {
            if !*moved && !bullet.spent {
                bullet.next_frame(&bounds, fps);
            }
        }
        state.asteroids.retain(|a| !a.destroyed);
        state.bullets.retain(|b| !b.spent);
    }

    state.time_ticks += 1;
}

/// Fire the actions sampled for this tick, in registration order
fn apply_input(state: &mut GameState, input: &TickInput) {
    let now = state.time_ticks;
    let fps = state.fps;

    if input.thrust {
        state.ship.enable_thrust(now);
    }
    if input.rotate_left {
        state.ship.rotate_left(fps);
    }
    if input.rotate_right {
        state.ship.rotate_right(fps);
    }
    if input.hyperspace && !state.ship.enter_hyperspace(now) {
        log::trace!("Hyperspace already active");
    }
    if input.shoot {
        state.shoot_bullet();
    }
}

/// Number of asteroids a kill adds: `floor(sqrt(kills))`, capped per kill and by the live cap
pub fn asteroids_for_score(state: &GameState) -> usize {
    let step = state.tuning.points_per_asteroid.max(1);
    let kills = state.score / step;
    let wanted = (kills as f64).sqrt().floor() as usize;
    let room = state
        .tuning
        .total_max_asteroids
        .saturating_sub(state.live_asteroid_count());
    wanted.min(state.tuning.max_spawn_per_kill).min(room)
}

/// Add points for one destroyed asteroid and scale difficulty with the new score
pub fn award_points(state: &mut GameState) {
    state.score += state.tuning.points_per_asteroid;
    let to_add = asteroids_for_score(state);
    if to_add > 0 {
        state.spawn_asteroids(to_add);
    }
    log::debug!("Score {} (+{} asteroids)", state.score, to_add);
    state.events.push(GameEvent::ScoreChanged(state.score));
}

/// Take a life and rebuild the field, even when it was the last one
pub fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.reset();
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", state.score);
    } else {
        log::info!("Ship destroyed, {} lives left", state.lives);
    }
    state.events.push(GameEvent::LivesChanged(state.lives));
}
