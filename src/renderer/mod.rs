//! Drawing seam between the simulation and the host
//!
//! The simulation only ever asks the host for its screen size and to draw
//! circles. `raster` provides a software implementation for headless hosts.

pub mod raster;

pub use raster::Framebuffer;

/// Host-provided drawing target
pub trait Surface {
    /// Width and height of the drawable area in pixels
    fn screen_size(&self) -> (u32, u32);

    /// Draw a filled circle centred on `(x, y)`
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32);
}
