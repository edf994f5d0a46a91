//! The moving circular body and its per-frame update

use glam::Vec2;
use serde::Serialize;

use super::bounds::Bounds;
use crate::error::{Error, Result};
use crate::renderer::Surface;

/// Allowed deviation from unit length for a direction vector
pub const DIRECTION_TOLERANCE: f32 = 1e-4;

/// A direction counts as unit length under either the euclidean norm
/// (`(0.6, 0.8)`) or the per-axis max norm (`(1, -1)`).
///
/// Reflection only ever negates components, so both norms are preserved
/// for the lifetime of the body and no renormalization is needed.
pub fn is_unit_direction(dir: Vec2) -> bool {
    dir.is_finite()
        && ((dir.length() - 1.0).abs() <= DIRECTION_TOLERANCE
            || (dir.abs().max_element() - 1.0).abs() <= DIRECTION_TOLERANCE)
}

/// A circle moving at constant speed, bouncing off the edges of its bounds.
///
/// Collision is tested on the centre point only; callers shrink the bounds by
/// the radius (see [`Bounds::inset`]) so the circle edge meets the wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    position: Vec2,
    direction: Vec2,
    /// Pixels per second
    speed: f32,
    radius: f32,
    bounds: Option<Bounds>,
}

impl Body {
    /// Create an unbound body. [`Body::bind`] must be called before the first
    /// [`Body::advance`].
    pub fn new(position: Vec2, direction: Vec2, speed: f32, radius: f32) -> Result<Self> {
        if !position.is_finite() {
            return Err(Error::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }
        if !is_unit_direction(direction) {
            return Err(Error::InvalidDirection {
                x: direction.x,
                y: direction.y,
            });
        }
        if !(speed.is_finite() && speed > 0.0) {
            return Err(Error::InvalidSpeed(speed));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius(radius));
        }

        Ok(Self {
            position,
            direction,
            speed,
            radius,
            bounds: None,
        })
    }

    /// Attach the bounds the body bounces within. Single use.
    pub fn bind(&mut self, left: f32, top: f32, right: f32, bottom: f32) -> Result<()> {
        if self.bounds.is_some() {
            return Err(Error::AlreadyBound);
        }

        let bounds = Bounds::new(left, top, right, bottom);
        if !bounds.is_well_formed() {
            return Err(Error::MalformedBounds {
                left,
                top,
                right,
                bottom,
            });
        }
        if !bounds.contains(self.position) {
            return Err(Error::OutsideBounds {
                x: self.position.x,
                y: self.position.y,
            });
        }

        log::debug!(
            "Body bound to [{}, {}, {}, {}] at ({}, {})",
            left,
            top,
            right,
            bottom,
            self.position.x,
            self.position.y
        );
        self.bounds = Some(bounds);
        Ok(())
    }

    /// Move the body by `dt` seconds of travel.
    ///
    /// An axis whose next coordinate would reach or pass its bounds edge has
    /// its direction negated and its displacement for this frame dropped.
    /// Both axes are tested independently, so a corner hit reverses both.
    pub fn advance(&mut self, dt: f32) -> Result<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(Error::InvalidDeltaTime(dt));
        }
        let bounds = self.bounds.ok_or(Error::Unbound)?;
        if dt == 0.0 {
            return Ok(());
        }

        let displacement = self.direction * self.speed * dt;
        let mut next = self.position + displacement;

        if next.x <= bounds.left || next.x >= bounds.right {
            self.direction.x = -self.direction.x;
            next.x = self.position.x;
        }

        if next.y <= bounds.top || next.y >= bounds.bottom {
            self.direction.y = -self.direction.y;
            next.y = self.position.y;
        }

        self.position = next;
        Ok(())
    }

    /// Draw the body as a circle. Never mutates the body.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_circle(self.position.x, self.position.y, self.radius);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.bounds.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    /// Surface that only counts draw calls
    #[derive(Default)]
    struct RecordingSurface {
        circles: Vec<(f32, f32, f32)>,
    }

    impl Surface for RecordingSurface {
        fn screen_size(&self) -> (u32, u32) {
            (100, 100)
        }

        fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
            self.circles.push((x, y, radius));
        }
    }

    fn bound_body(pos: Vec2, dir: Vec2, speed: f32) -> Body {
        let mut body = Body::new(pos, dir, speed, 4.0).unwrap();
        body.bind(0.0, 0.0, 100.0, 100.0).unwrap();
        body
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut body = bound_body(Vec2::new(50.0, 50.0), Vec2::new(1.0, -1.0), 10.0);
        let before = body.clone();
        body.advance(0.0).unwrap();
        assert_eq!(body, before);

        // Even sitting exactly on an edge
        let mut edge = Body::new(Vec2::new(100.0, 0.0), Vec2::X, 10.0, 4.0).unwrap();
        edge.bind(0.0, 0.0, 100.0, 100.0).unwrap();
        let before = edge.clone();
        edge.advance(0.0).unwrap();
        assert_eq!(edge, before);
    }

    #[test]
    fn test_interior_motion() {
        let mut body = bound_body(Vec2::new(50.0, 50.0), Vec2::X, 10.0);
        body.advance(1.0).unwrap();
        assert_eq!(body.position(), Vec2::new(60.0, 50.0));
        assert_eq!(body.direction(), Vec2::X);
    }

    #[test]
    fn test_reflection_discards_displacement() {
        let mut body = bound_body(Vec2::new(95.0, 50.0), Vec2::X, 10.0);
        body.advance(1.0).unwrap();
        assert_eq!(body.direction(), Vec2::new(-1.0, 0.0));
        assert_eq!(body.position(), Vec2::new(95.0, 50.0));

        // Next frame travels away from the wall
        body.advance(1.0).unwrap();
        assert_eq!(body.position(), Vec2::new(85.0, 50.0));
    }

    #[test]
    fn test_reaching_edge_exactly_triggers_reflection() {
        let mut body = bound_body(Vec2::new(90.0, 50.0), Vec2::X, 10.0);
        body.advance(1.0).unwrap();
        assert_eq!(body.direction(), Vec2::new(-1.0, 0.0));
        assert_eq!(body.position(), Vec2::new(90.0, 50.0));

        let mut body = bound_body(Vec2::new(50.0, 10.0), Vec2::new(0.0, -1.0), 10.0);
        body.advance(1.0).unwrap();
        assert_eq!(body.direction(), Vec2::Y);
        assert_eq!(body.position(), Vec2::new(50.0, 10.0));
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut body = bound_body(Vec2::new(95.0, 95.0), Vec2::ONE, 10.0);
        body.advance(1.0).unwrap();
        assert_eq!(body.direction(), Vec2::new(-1.0, -1.0));
        assert_eq!(body.position(), Vec2::new(95.0, 95.0));
    }

    #[test]
    fn test_single_axis_hit_keeps_other_axis_moving() {
        let mut body = bound_body(Vec2::new(95.0, 50.0), Vec2::new(1.0, -1.0), 10.0);
        body.advance(1.0).unwrap();
        assert_eq!(body.direction(), Vec2::new(-1.0, -1.0));
        assert_eq!(body.position(), Vec2::new(95.0, 40.0));
    }

    #[test]
    fn test_small_steps_sum_to_large_step() {
        let dir = Vec2::new(0.6, 0.8);
        let mut stepped = bound_body(Vec2::new(20.0, 20.0), dir, 10.0);
        let mut single = stepped.clone();

        for _ in 0..10 {
            stepped.advance(0.1).unwrap();
        }
        single.advance(1.0).unwrap();

        assert_eq!(stepped.direction(), dir);
        assert!((stepped.position() - single.position()).length() < 1e-4);
        assert!((single.position() - Vec2::new(26.0, 28.0)).length() < 1e-4);
    }

    #[test]
    fn test_render_is_pure() {
        let mut plain = bound_body(Vec2::new(70.0, 30.0), Vec2::new(1.0, 1.0), 40.0);
        let mut rendered = plain.clone();
        let mut surface = RecordingSurface::default();

        for _ in 0..50 {
            plain.advance(0.25).unwrap();
            rendered.render(&mut surface);
            rendered.render(&mut surface);
            rendered.advance(0.25).unwrap();
            assert_eq!(plain, rendered);
        }

        assert_eq!(surface.circles.len(), 100);
    }

    #[test]
    fn test_render_draws_at_position() {
        let body = bound_body(Vec2::new(12.5, 80.0), Vec2::X, 1.0);
        let mut surface = RecordingSurface::default();
        body.render(&mut surface);
        assert_eq!(surface.circles, vec![(12.5, 80.0, 4.0)]);
    }

    #[test]
    fn test_advance_before_bind_fails() {
        let mut body = Body::new(Vec2::new(50.0, 50.0), Vec2::X, 10.0, 4.0).unwrap();
        assert!(matches!(body.advance(0.1), Err(Error::Unbound)));
        assert!(matches!(body.advance(0.0), Err(Error::Unbound)));
        assert_eq!(body.position(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_invalid_delta_time_rejected() {
        let mut body = bound_body(Vec2::new(50.0, 50.0), Vec2::X, 10.0);
        assert!(matches!(body.advance(-0.016), Err(Error::InvalidDeltaTime(_))));
        assert!(matches!(body.advance(f32::NAN), Err(Error::InvalidDeltaTime(_))));
        assert!(matches!(body.advance(f32::INFINITY), Err(Error::InvalidDeltaTime(_))));
        assert_eq!(body.position(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_bind_preconditions() {
        let mut body = Body::new(Vec2::new(50.0, 50.0), Vec2::X, 10.0, 4.0).unwrap();
        assert!(matches!(
            body.bind(100.0, 0.0, 0.0, 100.0),
            Err(Error::MalformedBounds { .. })
        ));
        assert!(matches!(
            body.bind(60.0, 0.0, 100.0, 100.0),
            Err(Error::OutsideBounds { .. })
        ));
        assert!(!body.is_bound());

        body.bind(0.0, 0.0, 100.0, 100.0).unwrap();
        assert!(body.is_bound());
        assert_eq!(body.bounds(), Some(&Bounds::new(0.0, 0.0, 100.0, 100.0)));
        assert!(matches!(
            body.bind(0.0, 0.0, 200.0, 200.0),
            Err(Error::AlreadyBound)
        ));
    }

    #[test]
    fn test_construction_preconditions() {
        let p = Vec2::new(1.0, 1.0);
        assert!(Body::new(p, Vec2::new(0.6, 0.8), 1.0, 1.0).is_ok());
        assert!(Body::new(p, Vec2::new(1.0, -1.0), 1.0, 1.0).is_ok());
        assert!(matches!(
            Body::new(p, Vec2::new(0.5, 0.5), 1.0, 1.0),
            Err(Error::InvalidDirection { .. })
        ));
        assert!(matches!(
            Body::new(p, Vec2::ZERO, 1.0, 1.0),
            Err(Error::InvalidDirection { .. })
        ));
        assert!(matches!(
            Body::new(Vec2::new(f32::NAN, 1.0), Vec2::X, 1.0, 1.0),
            Err(Error::InvalidPosition { .. })
        ));
        assert!(matches!(
            Body::new(Vec2::new(1.0, f32::INFINITY), Vec2::X, 1.0, 1.0),
            Err(Error::InvalidPosition { .. })
        ));
        assert!(matches!(
            Body::new(p, Vec2::X, 0.0, 1.0),
            Err(Error::InvalidSpeed(_))
        ));
        assert!(matches!(
            Body::new(p, Vec2::X, 1.0, -2.0),
            Err(Error::InvalidRadius(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_zero_dt_never_changes_state(
            left in -500.0f32..500.0,
            top in -500.0f32..500.0,
            width in 10.0f32..1000.0,
            height in 10.0f32..1000.0,
            // Inclusive, so edge and corner positions are covered
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
            angle in 0.0f32..TAU,
            axis_signs in (any::<bool>(), any::<bool>()),
            use_axis_form in any::<bool>(),
            speed in 1.0f32..2000.0,
            warmup in prop::collection::vec(0.0f32..0.1, 0..50),
        ) {
            let (right, bottom) = (left + width, top + height);
            let start = Vec2::new(
                (left + width * fx).clamp(left, right),
                (top + height * fy).clamp(top, bottom),
            );
            let dir = if use_axis_form {
                Vec2::new(
                    if axis_signs.0 { 1.0 } else { -1.0 },
                    if axis_signs.1 { 1.0 } else { -1.0 },
                )
            } else {
                Vec2::new(angle.cos(), angle.sin())
            };
            let mut body = Body::new(start, dir, speed, 8.0).unwrap();
            body.bind(left, top, right, bottom).unwrap();

            // Reach an arbitrary later state first
            for dt in warmup {
                body.advance(dt).unwrap();
            }

            let before = body.clone();
            for _ in 0..3 {
                body.advance(0.0).unwrap();
                prop_assert_eq!(&body, &before);
            }
        }

        #[test]
        fn prop_position_stays_within_bounds(
            left in -500.0f32..500.0,
            top in -500.0f32..500.0,
            width in 10.0f32..1000.0,
            height in 10.0f32..1000.0,
            fx in 0.01f32..0.99,
            fy in 0.01f32..0.99,
            angle in 0.0f32..TAU,
            speed in 1.0f32..2000.0,
            dts in prop::collection::vec(0.0f32..0.1, 1..200),
        ) {
            let (right, bottom) = (left + width, top + height);
            let start = Vec2::new(left + width * fx, top + height * fy);
            let dir = Vec2::new(angle.cos(), angle.sin());
            let mut body = Body::new(start, dir, speed, 8.0).unwrap();
            body.bind(left, top, right, bottom).unwrap();

            for dt in dts {
                body.advance(dt).unwrap();
                let p = body.position();
                prop_assert!(p.x >= left && p.x <= right, "x {} outside [{}, {}]", p.x, left, right);
                prop_assert!(p.y >= top && p.y <= bottom, "y {} outside [{}, {}]", p.y, top, bottom);
                prop_assert!(is_unit_direction(body.direction()));
            }
        }

        #[test]
        fn prop_interior_steps_never_reflect(
            angle in 0.0f32..TAU,
            speed in 1.0f32..50.0,
            dts in prop::collection::vec(0.001f32..0.05, 1..50),
        ) {
            // Far walls: at most 50 * 0.05 * 50 = 125 px of travel
            let dir = Vec2::new(angle.cos(), angle.sin());
            let mut body = Body::new(Vec2::ZERO, dir, speed, 1.0).unwrap();
            body.bind(-1000.0, -1000.0, 1000.0, 1000.0).unwrap();

            let total: f32 = dts.iter().sum();
            for dt in &dts {
                body.advance(*dt).unwrap();
                prop_assert_eq!(body.direction(), dir);
            }

            let expected = dir * speed * total;
            prop_assert!((body.position() - expected).length() < 1e-2);
        }
    }
}
