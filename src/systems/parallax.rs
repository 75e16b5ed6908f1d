use bevy_ecs::prelude::*;

use crate::components::parallax::ParallaxLayer;
use crate::resources::worldtime::WorldTime;

/// Scroll every background layer. Runs in every state, so the scenery keeps
/// moving behind the end messages.
pub fn parallax_scroll(mut query: Query<&mut ParallaxLayer>, time: Res<WorldTime>) {
    for mut layer in query.iter_mut() {
        layer.scroll(time.delta);
    }
}
