//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`].
//!
//! This decouples the intent to change state from the mechanics of applying
//! it and avoids borrowing conflicts between gameplay systems.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, asks [`GameState`] to move to the new value. Rejected
///   transitions (anything out of a terminal state) are logged and dropped.
/// - Always resets [`NextGameState`] to [`Unchanged`].
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
) {
    match *next_game_state.get() {
        Pending(new_state) => {
            match game_state.transition(new_state) {
                Ok(old_state) => {
                    info!("Transitioning from {:?} to {:?}", old_state, new_state);
                    on_state_enter(&new_state);
                }
                Err(e) => warn!("{}", e),
            }
            next_game_state.reset();
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: announce the new state.
fn on_state_enter(state: &GameStates) {
    match state {
        GameStates::Setup => debug!("Entered Setup state"),
        GameStates::Playing => debug!("Entered Playing state"),
        GameStates::Lost => info!("Game Over!"),
        GameStates::Won => info!("You Win!"),
    }
}
