//! Lifecycle hooks and the frame loop that drives them
//!
//! A game is four plain functions over a context value `S` that the
//! [`Runner`] owns for the lifetime of the window.

use crate::consts::MAX_FRAME_DELTA;
use crate::error::{Error, Result};
use crate::platform::Backend;
use crate::renderer::Surface;
use crate::settings::Settings;

/// The four lifecycle entry points of a game
pub struct Hooks<S> {
    /// Build the game context once the window exists
    pub create: fn(&dyn Surface) -> Result<S>,
    /// Tear down before the host shuts down
    pub destroy: fn(&mut S),
    /// Advance by `dt` seconds
    pub update: fn(&mut S, f32) -> Result<()>,
    /// Draw the current state
    pub render: fn(&S, &mut dyn Surface),
}

// Derives would require `S: Clone`
impl<S> Clone for Hooks<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Hooks<S> {}

/// Drives [`Hooks`] against a [`Backend`]: create, then update and render
/// once per frame, then destroy.
pub struct Runner<S> {
    settings: Settings,
    hooks: Hooks<S>,
    context: Option<S>,
    last_time: f32,
    frames: u64,
}

impl<S> Runner<S> {
    pub fn new(settings: Settings, hooks: Hooks<S>) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            hooks,
            context: None,
            last_time: 0.0,
            frames: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Game context, `None` before `start` and after `finish`
    pub fn context(&self) -> Option<&S> {
        self.context.as_ref()
    }

    /// Frames run since `start`
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Open the window and create the game context. Single use until `finish`.
    pub fn start<B: Backend>(&mut self, backend: &mut B) -> Result<()> {
        if self.context.is_some() {
            return Err(Error::AlreadyStarted);
        }
        if self.settings.debug {
            self.settings.log_summary();
        }

        backend.init()?;
        backend.create_window(&self.settings)?;

        if self.settings.debug {
            log::debug!("create()");
        }
        self.context = Some((self.hooks.create)(&*backend)?);
        self.last_time = backend.timestamp();
        self.frames = 0;
        Ok(())
    }

    /// Run one host frame. Returns false once the host asks to stop.
    ///
    /// Update is skipped for frames whose delta is negative or at least
    /// [`MAX_FRAME_DELTA`] (clock stalls, debugger pauses); render always runs.
    pub fn frame<B: Backend>(&mut self, backend: &mut B) -> Result<bool> {
        let context = self.context.as_mut().ok_or(Error::NotStarted)?;

        let now = backend.timestamp();
        let dt = now - self.last_time;
        if (0.0..MAX_FRAME_DELTA).contains(&dt) {
            backend.pre_frame_update(dt);
            if self.settings.debug {
                log::debug!("update({})", dt);
            }
            (self.hooks.update)(context, dt)?;
            backend.post_frame_update(dt);
        } else {
            log::warn!("Skipping update for frame delta {:.3}s", dt);
        }
        self.last_time = now;

        backend.pre_frame_render();
        if self.settings.debug {
            log::debug!("render()");
        }
        (self.hooks.render)(context, backend);
        backend.post_frame_render();

        self.frames += 1;
        Ok(backend.process_events())
    }

    /// Destroy the game context and shut the host down
    pub fn finish<B: Backend>(&mut self, backend: &mut B) -> Option<S> {
        let mut context = self.context.take();
        if let Some(ctx) = context.as_mut() {
            if self.settings.debug {
                log::debug!("destroy()");
            }
            (self.hooks.destroy)(ctx);
        }
        backend.shutdown();
        context
    }

    /// Run the full lifecycle until the backend stops it.
    ///
    /// No frame runs if the backend is not running after `start`.
    /// Returns the destroyed context for inspection.
    pub fn run<B: Backend>(mut self, backend: &mut B) -> Result<Option<S>> {
        self.start(backend)?;
        let outcome = loop {
            if !backend.is_running() {
                break Ok(());
            }
            match self.frame(backend) {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        let context = self.finish(backend);
        outcome.map(|_| context)
    }
}
