//! One game session as seen by the shell
//!
//! The shell feeds key edges in, calls [`Session::frame`] at the target
//! rate, and reads a [`Snapshot`] back out. Score and lives changes reach
//! subscribed observers synchronously, in subscription order, before
//! `frame` returns.

use crate::error::GameError;
use crate::platform::{Action, InputState, KeyEdge};
use crate::renderer::{Snapshot, Surface, paint};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Receives score and lives changes
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

pub struct Session {
    state: GameState,
    input: InputState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Session {
    /// New session, seeded from settings or randomly
    pub fn new(settings: &Settings) -> Result<Self, GameError> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: &Settings, seed: u64) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self {
            state: GameState::from_settings(settings, seed)?,
            input: InputState::new(),
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Report a key edge for one action
    pub fn handle(&mut self, action: Action, edge: KeyEdge) {
        self.input.handle(action, edge);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.input.set_paused(paused);
    }

    /// Run one tick: sample input, simulate, then notify observers
    pub fn frame(&mut self) {
        let input = self.input.sample();
        tick(&mut self.state, &input);

        for event in self.state.drain_events() {
            for observer in &mut self.observers {
                observer.notify(&event);
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        paint(&self.snapshot(), surface);
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
