//! Screen size resource.
//!
//! Stores the window dimensions in pixels. The bottom edge is the floor the
//! runner stands on.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
