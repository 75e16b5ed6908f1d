//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`collision`] – runner/nebula overlap notifications
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod collision;
pub mod gamestate;
pub mod switchdebug;
