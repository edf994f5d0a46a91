//! Bounce - a ball bouncing inside the screen
//!
//! Core modules:
//! - `sim`: Body physics, bounds and the bouncing ball program
//! - `game`: Typed lifecycle hooks and the frame loop
//! - `platform`: Host backends (headless, browser canvas)
//! - `renderer`: Drawing seam and software framebuffer
//! - `settings`: Startup configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{Hooks, Runner};
pub use settings::Settings;

/// Simulation and window defaults
pub mod consts {
    /// Ball travel speed along each axis (pixels/s)
    pub const BALL_SPEED: f32 = 256.0;
    pub const BALL_RADIUS: f32 = 16.0;

    /// Frames with a delta at or above this (seconds) skip the update
    pub const MAX_FRAME_DELTA: f32 = 1.0;

    /// Simulated frame length of the headless backend
    pub const HEADLESS_FRAME_DT: f32 = 1.0 / 60.0;
    /// Frames run by the native binary when none are requested
    pub const DEFAULT_HEADLESS_FRAMES: u64 = 600;

    pub const DEFAULT_SCREEN_WIDTH: u32 = 640;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 480;
    pub const DEFAULT_WINDOW_TITLE: &str = "Bouncing Ball";
}
