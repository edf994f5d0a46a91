//! Browser backend drawing into an HTML canvas with the 2D context

use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Performance};

use super::Backend;
use crate::error::{Error, Result};
use crate::renderer::Surface;
use crate::settings::Settings;

/// Canvas-backed host. Frames are pumped from `requestAnimationFrame`.
pub struct WebBackend {
    canvas_id: String,
    canvas: Option<HtmlCanvasElement>,
    context: Option<CanvasRenderingContext2d>,
    performance: Option<Performance>,
    quit: Rc<Cell<bool>>,
}

impl WebBackend {
    /// Backend for the `<canvas>` element with the given id
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            canvas: None,
            context: None,
            performance: None,
            quit: Rc::new(Cell::new(false)),
        }
    }

    fn platform_err(what: &str, e: JsValue) -> Error {
        Error::Platform(format!("{}: {:?}", what, e))
    }
}

impl Surface for WebBackend {
    fn screen_size(&self) -> (u32, u32) {
        self.canvas
            .as_ref()
            .map(|c| (c.width(), c.height()))
            .unwrap_or((0, 0))
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
        if let Some(ctx) = &self.context {
            ctx.begin_path();
            if let Err(e) = ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
                log::warn!("Canvas arc failed: {:?}", e);
                return;
            }
            ctx.fill();
        }
    }
}

impl Backend for WebBackend {
    fn init(&mut self) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Platform("no window".into()))?;
        self.performance = window.performance();

        let quit = self.quit.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                log::info!("Escape pressed, stopping");
                quit.set(true);
            }
        });
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|e| Self::platform_err("keydown listener", e))?;
        closure.forget();
        Ok(())
    }

    fn create_window(&mut self, settings: &Settings) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Platform("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Platform("no document".into()))?;
        document.set_title(&settings.window_title);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| Error::Platform(format!("no element #{}", self.canvas_id)))?
            .dyn_into()
            .map_err(|_| Error::Platform(format!("#{} is not a canvas", self.canvas_id)))?;

        // Fullscreen fills the browser viewport instead of the configured size
        let (width, height) = if settings.use_fullscreen {
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(settings.screen_width as f64);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(settings.screen_height as f64);
            (w as u32, h as u32)
        } else {
            (settings.screen_width, settings.screen_height)
        };
        canvas.set_width(width);
        canvas.set_height(height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| Self::platform_err("get_context", e))?
            .ok_or_else(|| Error::Platform("2d context unavailable".into()))?
            .dyn_into()
            .map_err(|_| Error::Platform("unexpected 2d context type".into()))?;

        log::info!("Canvas '{}' {}x{}", settings.window_title, width, height);
        self.canvas = Some(canvas);
        self.context = Some(context);
        Ok(())
    }

    fn timestamp(&self) -> f32 {
        self.performance
            .as_ref()
            .map(|p| (p.now() / 1000.0) as f32)
            .unwrap_or(0.0)
    }

    fn process_events(&mut self) -> bool {
        !self.quit.get()
    }

    fn is_running(&self) -> bool {
        !self.quit.get()
    }

    fn pre_frame_render(&mut self) {
        let (width, height) = self.screen_size();
        if let Some(ctx) = &self.context {
            ctx.set_fill_style_str("#000000");
            ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
            // Things drawn on the screen are white
            ctx.set_fill_style_str("#ffffff");
        }
    }

    fn post_frame_render(&mut self) {
        // The browser presents the canvas after the animation frame callback
    }

    fn shutdown(&mut self) {
        self.context = None;
        self.canvas = None;
        log::info!("Web backend shut down");
    }
}
