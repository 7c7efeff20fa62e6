//! Held-state input registry
//!
//! The shell reports discrete press/release edges. Once per tick the
//! registry decides which actions fire: repeatable actions fire every tick
//! while held, the others fire once per press.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// The fixed set of player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Thrust,
    RotateLeft,
    RotateRight,
    Shoot,
    Hyperspace,
}

impl Action {
    /// Actions in the order they are applied within a tick
    pub const ALL: [Action; 5] = [
        Action::Thrust,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Hyperspace,
        Action::Shoot,
    ];

    /// Whether holding the key keeps firing the action every tick
    pub fn repeatable(&self) -> bool {
        matches!(self, Action::Thrust | Action::RotateLeft | Action::RotateRight)
    }
}

/// A key transition reported by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEdge {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy)]
struct ActionState {
    action: Action,
    repeatable: bool,
    held: bool,
    /// Set once a non-repeatable action has fired for the current press
    fired: bool,
}

impl ActionState {
    fn new(action: Action) -> Self {
        Self {
            action,
            repeatable: action.repeatable(),
            held: false,
            fired: false,
        }
    }

    fn update(&mut self) -> bool {
        if !self.held {
            self.fired = false;
            return false;
        }
        if self.repeatable {
            return true;
        }
        if !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Per-session input registry
#[derive(Debug, Clone)]
pub struct InputState {
    actions: Vec<ActionState>,
    paused: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Registry with every action registered in application order
    pub fn new() -> Self {
        Self {
            actions: Action::ALL.iter().map(|a| ActionState::new(*a)).collect(),
            paused: false,
        }
    }

    pub fn handle(&mut self, action: Action, edge: KeyEdge) {
        if let Some(state) = self.actions.iter_mut().find(|s| s.action == action) {
            state.held = edge == KeyEdge::Pressed;
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.actions.iter().any(|s| s.action == action && s.held)
    }

    /// While paused nothing fires; held-state tracking continues
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Sample once per tick: the actions that fire now, in application order
    pub fn update(&mut self) -> Vec<Action> {
        let paused = self.paused;
        self.actions
            .iter_mut()
            .filter_map(|s| (s.update() && !paused).then_some(s.action))
            .collect()
    }

    /// Sample once per tick as a [`TickInput`]
    pub fn sample(&mut self) -> TickInput {
        let mut input = TickInput::default();
        for action in self.update() {
            match action {
                Action::Thrust => input.thrust = true,
                Action::RotateLeft => input.rotate_left = true,
                Action::RotateRight => input.rotate_right = true,
                Action::Shoot => input.shoot = true,
                Action::Hyperspace => input.hyperspace = true,
            }
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeatable_fires_every_tick() {
        let mut input = InputState::new();
        input.handle(Action::Thrust, KeyEdge::Pressed);
        for _ in 0..5 {
            assert_eq!(input.update(), vec![Action::Thrust]);
        }
        input.handle(Action::Thrust, KeyEdge::Released);
        assert!(input.update().is_empty());
    }

    #[test]
    fn test_non_repeatable_fires_once_per_press() {
        let mut input = InputState::new();
        input.handle(Action::Shoot, KeyEdge::Pressed);
        assert_eq!(input.update(), vec![Action::Shoot]);
        assert!(input.update().is_empty());
        assert!(input.update().is_empty());

        input.handle(Action::Shoot, KeyEdge::Released);
        assert!(input.update().is_empty());
        input.handle(Action::Shoot, KeyEdge::Pressed);
        assert_eq!(input.update(), vec![Action::Shoot]);
    }

    #[test]
    fn test_press_release_within_one_tick_is_lost() {
        let mut input = InputState::new();
        input.handle(Action::Hyperspace, KeyEdge::Pressed);
        input.handle(Action::Hyperspace, KeyEdge::Released);
        assert!(input.update().is_empty());
    }

    #[test]
    fn test_application_order() {
        let mut input = InputState::new();
        for action in [Action::Shoot, Action::RotateRight, Action::Thrust, Action::Hyperspace] {
            input.handle(action, KeyEdge::Pressed);
        }
        assert_eq!(
            input.update(),
            vec![
                Action::Thrust,
                Action::RotateRight,
                Action::Hyperspace,
                Action::Shoot
            ]
        );
    }

    #[test]
    fn test_paused_suppresses_triggering() {
        let mut input = InputState::new();
        input.set_paused(true);
        input.handle(Action::Shoot, KeyEdge::Pressed);
        input.handle(Action::Thrust, KeyEdge::Pressed);
        assert!(input.update().is_empty());
        assert!(input.is_held(Action::Thrust));

        // The press was consumed while paused; only repeatables resume
        input.set_paused(false);
        assert_eq!(input.update(), vec![Action::Thrust]);
    }

    #[test]
    fn test_sample_maps_to_tick_input() {
        let mut input = InputState::new();
        input.handle(Action::RotateLeft, KeyEdge::Pressed);
        input.handle(Action::Shoot, KeyEdge::Pressed);
        let tick = input.sample();
        assert!(tick.rotate_left && tick.shoot);
        assert!(!tick.thrust && !tick.hyperspace && !tick.rotate_right);
    }
}
