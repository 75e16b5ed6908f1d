//! Kinematic body storing a velocity.
//!
//! The [`movement`](crate::systems::movement::movement) system integrates
//! [`RigidBody::velocity`] into [`MapPosition`](super::mapposition::MapPosition)
//! every frame. The runner's vertical velocity is driven by
//! [`runner_physics`](crate::systems::physics::runner_physics); nebulae and the
//! finish line keep a constant horizontal velocity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in pixels per second. Positive `y` points down.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Create a RigidBody with a constant horizontal velocity.
    pub fn with_horizontal(vx: f32) -> Self {
        Self {
            velocity: Vector2 { x: vx, y: 0.0 },
        }
    }
}
