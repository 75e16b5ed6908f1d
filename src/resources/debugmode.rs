//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug overlays should
//! be drawn. Remove it to disable them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws colliders, the finish line and FPS.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
