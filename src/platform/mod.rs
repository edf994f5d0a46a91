//! Platform abstraction layer
//!
//! A [`Backend`] owns the window, the frame clock and event processing.
//! Implementations:
//! - `headless`: software framebuffer with a simulated clock (native, tests)
//! - `web`: HTML canvas driven by `requestAnimationFrame` (wasm32)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessBackend;
#[cfg(target_arch = "wasm32")]
pub use web::WebBackend;

use crate::error::Result;
use crate::renderer::Surface;
use crate::settings::Settings;

/// Host environment driving the simulation
pub trait Backend: Surface {
    /// Initialize host libraries
    fn init(&mut self) -> Result<()>;

    /// Create the main window and render target
    fn create_window(&mut self, settings: &Settings) -> Result<()>;

    /// Monotonic timestamp in seconds
    fn timestamp(&self) -> f32;

    /// Process pending events. Returns false to stop the frame loop.
    fn process_events(&mut self) -> bool;

    /// Whether another frame may run, checked before each frame
    fn is_running(&self) -> bool {
        true
    }

    fn pre_frame_update(&mut self, _dt: f32) {}

    fn post_frame_update(&mut self, _dt: f32) {}

    /// Clear the frame before any drawing
    fn pre_frame_render(&mut self);

    /// Present the finished frame
    fn post_frame_render(&mut self);

    /// Release host resources
    fn shutdown(&mut self);
}
