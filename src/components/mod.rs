//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – sprite-sheet frame selection and the pure frame advance
//! - [`boxcollider`] – axis-aligned rectangular collider, optionally padded
//! - [`mapposition`] – world-space position (top-left) for an entity
//! - [`parallax`] – scrolling background layer state
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`runner`] – runner, nebula and finish line markers
//! - [`sprite`] – texture key used to draw an entity
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod mapposition;
pub mod parallax;
pub mod rigidbody;
pub mod runner;
pub mod sprite;
pub mod zindex;
