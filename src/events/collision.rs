//! Collision event between the runner and a nebula.
//!
//! The collision detector emits [`CollisionEvent`] for every frame in which
//! the runner's box overlaps a nebula's padded box.
//! [`collision_observer`](crate::systems::collision::collision_observer)
//! reacts by marking the runner as hit.
use bevy_ecs::prelude::*;

/// Event fired when the runner overlaps a nebula.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub runner: Entity,
    pub nebula: Entity,
}
