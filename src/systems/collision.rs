//! Collision systems.
//!
//! - [`collision_detector`] tests the runner's box against every nebula's
//!   padded box and triggers a [`CollisionEvent`] for each overlap.
//! - [`collision_observer`] marks the runner as hit. The flag is never
//!   cleared.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::runner::{Nebula, Runner};
use crate::events::collision::CollisionEvent;

pub fn collision_detector(
    mut commands: Commands,
    runners: Query<(Entity, &MapPosition, &BoxCollider), With<Runner>>,
    nebulae: Query<(Entity, &MapPosition, &BoxCollider), With<Nebula>>,
) {
    for (runner, runner_pos, runner_box) in runners.iter() {
        for (nebula, nebula_pos, nebula_box) in nebulae.iter() {
            if nebula_box.overlaps(nebula_pos.pos, runner_box, runner_pos.pos) {
                commands.trigger(CollisionEvent { runner, nebula });
            }
        }
    }
}

pub fn collision_observer(trigger: On<CollisionEvent>, mut runners: Query<&mut Runner>) {
    let event = trigger.event();
    let Ok(mut runner) = runners.get_mut(event.runner) else {
        return;
    };
    if !runner.collided {
        debug!(
            "Runner {:?} hit nebula {:?}",
            event.runner, event.nebula
        );
        runner.collided = true;
    }
}
