//! High-level game state resources.
//!
//! These resources track the authoritative current state of the run and any
//! pending transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied.
//!
//! ```text
//! Setup ──> Playing ──> Lost
//!              │
//!              └──────> Won
//! ```
//!
//! `Lost` and `Won` are terminal: no transition leaves them.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Setup,
    Playing,
    Lost,
    Won,
}

impl GameStates {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStates::Lost | GameStates::Won)
    }

    /// Whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(&self, next: GameStates) -> bool {
        match (self, next) {
            (GameStates::Setup, GameStates::Playing) => true,
            (GameStates::Playing, GameStates::Lost | GameStates::Won) => true,
            _ => false,
        }
    }
}

/// Representation of a requested next state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Setup`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Setup,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Move to `next` if the transition is allowed.
    ///
    /// Returns the previous state on success. Transitions out of a terminal
    /// state are always rejected.
    pub fn transition(&mut self, next: GameStates) -> Result<GameStates, String> {
        if !self.current.can_transition_to(next) {
            return Err(format!(
                "Invalid transition from {:?} to {:?}",
                self.current, next
            ));
        }
        let previous = self.current;
        self.current = next;
        Ok(previous)
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
