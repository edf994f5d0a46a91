//! The bouncing ball program
//!
//! One ball starts at the centre of the screen heading up and to the right,
//! and bounces off the screen edges forever.

use glam::Vec2;

use super::body::Body;
use super::bounds::Bounds;
use crate::consts::{BALL_RADIUS, BALL_SPEED};
use crate::error::Result;
use crate::game::Hooks;
use crate::renderer::Surface;

/// Game context owned by the runner
#[derive(Debug, Clone)]
pub struct BouncingBall {
    pub ball: Body,
}

impl BouncingBall {
    /// Ball centred on a `width` x `height` screen
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (width, height) = (width as f32, height as f32);
        let center = Vec2::new(width / 2.0, height / 2.0);

        // Screen y grows downwards: -1 is up
        let mut ball = Body::new(center, Vec2::new(1.0, -1.0), BALL_SPEED, BALL_RADIUS)?;

        // Pre-shrink by the radius so the ball edge, not its centre, meets the wall
        let b = Bounds::inset(width, height, ball.radius());
        ball.bind(b.left, b.top, b.right, b.bottom)?;

        Ok(Self { ball })
    }
}

pub fn create(surface: &dyn Surface) -> Result<BouncingBall> {
    let (width, height) = surface.screen_size();
    let scene = BouncingBall::new(width, height)?;
    log::info!(
        "Ball created at ({}, {}) on {}x{} screen",
        scene.ball.position().x,
        scene.ball.position().y,
        width,
        height
    );
    Ok(scene)
}

pub fn destroy(scene: &mut BouncingBall) {
    log::info!(
        "Ball destroyed at ({:.1}, {:.1})",
        scene.ball.position().x,
        scene.ball.position().y
    );
}

pub fn update(scene: &mut BouncingBall, dt: f32) -> Result<()> {
    scene.ball.advance(dt)
}

pub fn render(scene: &BouncingBall, surface: &mut dyn Surface) {
    scene.ball.render(surface);
}

pub fn hooks() -> Hooks<BouncingBall> {
    Hooks {
        create,
        destroy,
        update,
        render,
    }
}
