//! Axis-aligned rectangle constraining body movement

use glam::Vec2;
use serde::Serialize;

/// Playable region, in the same coordinate space as the body.
///
/// A passive value: nothing is checked on construction. [`Body::bind`]
/// rejects rectangles that are not [well formed](Bounds::is_well_formed).
///
/// [`Body::bind`]: super::Body::bind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Screen rectangle `[0, 0, width, height]` shrunk by `margin` on every side.
    ///
    /// Passing the body radius as margin lets the body collide on its centre
    /// while its edge visually touches the screen border.
    pub fn inset(width: f32, height: f32, margin: f32) -> Self {
        Self::new(margin, margin, width - margin, height - margin)
    }

    pub fn is_well_formed(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite())
            && self.left < self.right
            && self.top < self.bottom
    }

    /// Inclusive containment
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }
}
