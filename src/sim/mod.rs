//! Simulation module
//!
//! Physics for a single body bouncing inside a rectangle. This module must
//! stay host-agnostic:
//! - Time only enters through the `dt` passed to `advance`
//! - Drawing only goes through the `Surface` trait
//! - No process-wide state; the game context is owned by the runner

pub mod body;
pub mod bounds;
pub mod scene;

pub use body::{Body, DIRECTION_TOLERANCE, is_unit_direction};
pub use bounds::Bounds;
pub use scene::BouncingBall;
