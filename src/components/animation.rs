//! Sprite-sheet animation state.
//!
//! An [`Animation`] selects one cell of a horizontally laid out sprite sheet
//! and advances it on a fixed cadence. Together with
//! [`MapPosition`](super::mapposition::MapPosition) it forms the full
//! animation state of an entity (which cell, and where it is drawn).
//!
//! Advancing is done by the pure [`advance_animation`] function so it can be
//! tested without a world; the [`animation`](crate::systems::animation::animation)
//! system applies it once per frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Rectangle;

/// Frame index limit for the runner sheet (six cells).
pub const RUNNER_MAX_FRAME: usize = 5;
/// Frame index limit for the nebula sheet (eight cells per row).
pub const NEBULA_MAX_FRAME: usize = 7;

#[derive(Debug, Clone, Copy, Component)]
pub struct Animation {
    /// Current cell of the sprite sheet. Only `x` changes after creation.
    pub frame_rect: Rectangle,
    /// Current frame, always in `[0, max_frame]`.
    pub frame_index: usize,
    /// Last valid frame index before wrapping to 0.
    pub max_frame: usize,
    /// Seconds each frame is held. Must be strictly positive.
    pub frame_duration: f32,
    /// Seconds accumulated since the last advance.
    pub elapsed: f32,
}

impl Animation {
    /// Start at frame 0 of a sheet whose cells are `width` x `height`.
    pub fn new(width: f32, height: f32, max_frame: usize, frame_duration: f32) -> Self {
        Self {
            frame_rect: Rectangle {
                x: 0.0,
                y: 0.0,
                width,
                height,
            },
            frame_index: 0,
            max_frame,
            frame_duration,
            elapsed: 0.0,
        }
    }

    /// Cell size of a sheet split into `columns` x `rows` equal cells.
    pub fn cell_size(sheet_width: i32, sheet_height: i32, columns: i32, rows: i32) -> (f32, f32) {
        (
            sheet_width as f32 / columns.max(1) as f32,
            sheet_height as f32 / rows.max(1) as f32,
        )
    }
}

/// Advance `anim` by `delta` seconds and return the updated state.
///
/// When the accumulator reaches `frame_duration` the accumulator resets,
/// the source rectangle moves to the cell of the current index, and only
/// then does the index step forward (wrapping after `max_frame`). The drawn
/// cell therefore lags the index by one advance.
pub fn advance_animation(mut anim: Animation, delta: f32) -> Animation {
    anim.elapsed += delta;
    if anim.elapsed >= anim.frame_duration {
        anim.elapsed = 0.0;
        anim.frame_rect.x = anim.frame_index as f32 * anim.frame_rect.width;
        anim.frame_index += 1;
        if anim.frame_index > anim.max_frame {
            anim.frame_index = 0;
        }
    }
    anim
}
