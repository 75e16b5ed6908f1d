//! Animation system.
//!
//! [`animation`] advances every [`Animation`] by the frame delta using
//! [`advance_animation`]. An airborne runner keeps its current frame, so it
//! appears frozen mid-jump.

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, advance_animation};
use crate::components::runner::Runner;
use crate::resources::worldtime::WorldTime;

/// Advance sprite-sheet animations.
pub fn animation(mut query: Query<(&mut Animation, Option<&Runner>)>, time: Res<WorldTime>) {
    for (mut anim, runner) in query.iter_mut() {
        if runner.is_some_and(|r| r.airborne) {
            continue;
        }
        *anim = advance_animation(*anim, time.delta);
    }
}
