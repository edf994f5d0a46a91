//! Headless backend: renders into a [`Framebuffer`] on a simulated clock

use super::Backend;
use crate::consts::HEADLESS_FRAME_DT;
use crate::error::{Error, Result};
use crate::renderer::{Framebuffer, Surface};
use crate::settings::Settings;

/// Offscreen host that runs a fixed number of frames
#[derive(Debug)]
pub struct HeadlessBackend {
    framebuffer: Option<Framebuffer>,
    title: String,
    clock: f32,
    frame_dt: f32,
    frames_left: u64,
    frames_presented: u64,
    initialized: bool,
}

impl HeadlessBackend {
    /// Backend that stops after `frames` frames of `1/60` s each
    pub fn new(frames: u64) -> Self {
        Self::with_frame_dt(frames, HEADLESS_FRAME_DT)
    }

    pub fn with_frame_dt(frames: u64, frame_dt: f32) -> Self {
        Self {
            framebuffer: None,
            title: String::new(),
            clock: 0.0,
            frame_dt,
            frames_left: frames,
            frames_presented: 0,
            initialized: false,
        }
    }

    /// Last presented frame, `None` before the window exists
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for HeadlessBackend {
    fn screen_size(&self) -> (u32, u32) {
        self.framebuffer
            .as_ref()
            .map(|fb| (fb.width(), fb.height()))
            .unwrap_or((0, 0))
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.fill_circle(x, y, radius);
        }
    }
}

impl Backend for HeadlessBackend {
    fn init(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn create_window(&mut self, settings: &Settings) -> Result<()> {
        if !self.initialized {
            return Err(Error::Platform(
                "create_window called before init".into(),
            ));
        }
        self.framebuffer = Some(Framebuffer::new(
            settings.screen_width,
            settings.screen_height,
        ));
        self.title = settings.window_title.clone();
        log::info!(
            "Headless window '{}' {}x{}",
            self.title,
            settings.screen_width,
            settings.screen_height
        );
        Ok(())
    }

    fn timestamp(&self) -> f32 {
        self.clock
    }

    fn process_events(&mut self) -> bool {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left > 0
    }

    fn is_running(&self) -> bool {
        self.frames_left > 0
    }

    fn pre_frame_render(&mut self) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.clear(0);
            fb.set_color(255);
        }
    }

    fn post_frame_render(&mut self) {
        self.frames_presented += 1;
        self.clock += self.frame_dt;
    }

    fn shutdown(&mut self) {
        log::info!(
            "Headless backend shut down after {} frames",
            self.frames_presented
        );
        self.initialized = false;
    }
}
