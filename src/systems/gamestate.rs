//! Outcome evaluation and state transition plumbing.
//!
//! - [`outcome_system`] derives the run's outcome from the runner and the
//!   finish line and requests a transition when the run ends.
//! - [`check_pending_state`] turns a pending request into a
//!   [`GameStateChangedEvent`].
//! - [`state_is_playing`] gates the gameplay systems, so everything but the
//!   background freezes once the run ends.
use crate::components::mapposition::MapPosition;
use crate::components::runner::{FinishLine, Runner};
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

/// Outcome for one frame. A collision always wins over reaching the finish line.
pub fn evaluate_outcome(collided: bool, runner_x: f32, finish_line_x: f32) -> GameStates {
    if collided {
        GameStates::Lost
    } else if runner_x >= finish_line_x {
        GameStates::Won
    } else {
        GameStates::Playing
    }
}

pub fn outcome_system(
    runners: Query<(&Runner, &MapPosition)>,
    finish_lines: Query<&MapPosition, With<FinishLine>>,
    mut next_state: ResMut<NextGameState>,
) {
    let Ok((runner, runner_pos)) = runners.single() else {
        return;
    };
    let Ok(finish_line) = finish_lines.single() else {
        return;
    };
    let outcome = evaluate_outcome(runner.collided, runner_pos.pos.x, finish_line.pos.x);
    if outcome.is_terminal() {
        next_state.set(outcome);
    }
}

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}
