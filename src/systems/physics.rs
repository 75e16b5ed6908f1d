//! Runner physics.
//!
//! Applies the ground test, gravity and the jump impulse to the runner's
//! vertical velocity. Position integration happens afterwards in
//! [`movement`](super::movement::movement).

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::runner::Runner;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// An entity is grounded when its bottom edge is at or below the window floor.
pub fn is_on_ground(y: f32, frame_height: f32, window_height: f32) -> bool {
    y >= window_height - frame_height
}

/// Next vertical velocity and airborne flag for one frame.
///
/// Grounded bodies stop; airborne ones accelerate downward. A jump press
/// while not airborne sets the velocity to `-jump_impulse`.
pub fn step_vertical(
    velocity: f32,
    grounded: bool,
    jump_pressed: bool,
    gravity: f32,
    jump_impulse: f32,
    delta: f32,
) -> (f32, bool) {
    let (mut velocity, airborne) = if grounded {
        (0.0, false)
    } else {
        (velocity + gravity * delta, true)
    };
    if jump_pressed && !airborne {
        velocity = -jump_impulse;
    }
    (velocity, airborne)
}

/// Update the runner's vertical velocity and airborne flag.
///
/// A grounded runner that sank below the floor is put back on it.
pub fn runner_physics(
    mut query: Query<(&mut Runner, &mut RigidBody, &mut MapPosition, &Animation)>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
) {
    let window_height = screen.h as f32;
    for (mut runner, mut body, mut position, anim) in query.iter_mut() {
        let height = anim.frame_rect.height;
        let grounded = is_on_ground(position.pos.y, height, window_height);
        if grounded && position.pos.y > window_height - height {
            position.pos.y = window_height - height;
        }
        let (velocity, airborne) = step_vertical(
            body.velocity.y,
            grounded,
            input.jump.just_pressed,
            config.gravity,
            config.jump_impulse,
            time.delta,
        );
        body.velocity.y = velocity;
        runner.airborne = airborne;
    }
}
