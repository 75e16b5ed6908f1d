//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window, physics, level and asset settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of the keys the game uses
//! - `screensize` – window dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
