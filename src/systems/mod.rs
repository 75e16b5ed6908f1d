//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite-sheet animations
//! - [`collision`] – runner/nebula overlap checks and the sticky hit flag
//! - [`gamestate`] – outcome evaluation and pending state transitions
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`parallax`] – scroll background layers
//! - [`physics`] – ground test, gravity and jump for the runner
//! - [`render`] – draw the world and debug overlays using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod parallax;
pub mod physics;
pub mod render;
pub mod time;
