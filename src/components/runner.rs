//! Marker components for the gameplay entities.

use bevy_ecs::prelude::Component;

/// The player-controlled sprite.
///
/// `airborne` is refreshed every frame by the ground test. `collided` is
/// sticky: once a nebula has been hit it stays set for the rest of the run.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Runner {
    pub airborne: bool,
    pub collided: bool,
}

/// An obstacle drifting toward the runner.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Nebula;

/// Invisible line trailing the last nebula. Reaching it wins the run.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FinishLine;
