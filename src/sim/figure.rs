//! Figure motion model
//!
//! A figure is one moving shape. Positions are the top-left anchor in
//! pixels; each axis bounces independently between 0 and its limit.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Figure shape kind (used for color lookup)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Ball,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Ball, ShapeKind::Rectangle, ShapeKind::Triangle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Ball => "ball",
            ShapeKind::Rectangle => "rect",
            ShapeKind::Triangle => "tri",
        }
    }
}

/// Shape of a figure with its kind-specific size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Ball { size: i32 },
    Rectangle { width: i32, height: i32 },
    Triangle { width: i32, height: i32 },
}

impl Shape {
    /// Default-sized shape of the given kind
    pub fn of_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Ball => Shape::Ball { size: BALL_SIZE },
            ShapeKind::Rectangle => Shape::Rectangle {
                width: RECT_WIDTH,
                height: RECT_HEIGHT,
            },
            ShapeKind::Triangle => Shape::Triangle {
                width: TRI_WIDTH,
                height: TRI_HEIGHT,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Ball { .. } => ShapeKind::Ball,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Bounding box size (width, height)
    pub fn size(&self) -> IVec2 {
        match *self {
            Shape::Ball { size } => IVec2::splat(size),
            Shape::Rectangle { width, height } | Shape::Triangle { width, height } => {
                IVec2::new(width, height)
            }
        }
    }
}

/// One moving shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Top-left anchor
    pub pos: IVec2,
    /// Pixels per tick
    pub vel: IVec2,
    /// Velocity at creation; speed rescaling is relative to this
    pub initial_vel: IVec2,
    /// Largest anchor coordinate before a bounce (viewport minus size)
    pub limit: IVec2,
    pub shape: Shape,
}

impl Figure {
    /// Create a figure. Limits start at zero until `set_bounds` is called.
    pub fn new(shape: Shape, pos: IVec2, vel: IVec2) -> Self {
        Self {
            pos,
            vel,
            initial_vel: vel,
            limit: IVec2::ZERO,
            shape,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn size(&self) -> IVec2 {
        self.shape.size()
    }

    /// Advance one step, bouncing off the walls.
    ///
    /// An axis that leaves [0, limit) has its velocity negated and re-applied
    /// in the same step, so the figure may overshoot a wall by less than one
    /// velocity step. The bounce happens at most once per axis per step.
    pub fn step(&mut self) {
        let (x, dx) = bounce_axis(self.pos.x, self.vel.x, self.limit.x);
        let (y, dy) = bounce_axis(self.pos.y, self.vel.y, self.limit.y);
        self.pos = IVec2::new(x, y);
        self.vel = IVec2::new(dx, dy);
    }

    /// Recompute limits for a new viewport and pull the figure back inside.
    ///
    /// The position is only ever lowered, never raised.
    pub fn set_bounds(&mut self, viewport_width: i32, viewport_height: i32) {
        let size = self.size();
        self.limit = IVec2::new(
            viewport_width.saturating_sub(size.x),
            viewport_height.saturating_sub(size.y),
        );
        self.pos = self.pos.min(self.limit);
    }

    /// Set speed to `ceil(factor * |initial velocity|)` per axis, keeping the
    /// current direction. Callers must pass a positive factor.
    pub fn rescale_velocity(&mut self, factor: f32) {
        self.vel = IVec2::new(
            rescale_axis(self.vel.x, self.initial_vel.x, factor),
            rescale_axis(self.vel.y, self.initial_vel.y, factor),
        );
    }
}

#[inline]
fn bounce_axis(pos: i32, vel: i32, limit: i32) -> (i32, i32) {
    let pos = pos.saturating_add(vel);
    if pos < 0 || pos >= limit {
        let vel = vel.saturating_neg();
        (pos.saturating_add(vel), vel)
    } else {
        (pos, vel)
    }
}

#[inline]
fn rescale_axis(current: i32, initial: i32, factor: f32) -> i32 {
    // Float to int casts saturate
    let magnitude = (factor * initial.unsigned_abs() as f32).ceil() as i32;
    let negative = current < 0 || (current == 0 && initial < 0);
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(x: i32, y: i32, dx: i32, dy: i32) -> Figure {
        let mut fig = Figure::new(Shape::Ball { size: 20 }, IVec2::new(x, y), IVec2::new(dx, dy));
        fig.set_bounds(600, 700);
        fig
    }

    #[test]
    fn test_limits_from_viewport() {
        let fig = ball_at(0, 0, 6, 4);
        assert_eq!(fig.limit, IVec2::new(580, 680));

        let mut rect = Figure::new(Shape::of_kind(ShapeKind::Rectangle), IVec2::ZERO, IVec2::ONE);
        rect.set_bounds(600, 700);
        assert_eq!(rect.limit, IVec2::new(600 - RECT_WIDTH, 700 - RECT_HEIGHT));
    }

    #[test]
    fn test_step_free_motion() {
        let mut fig = ball_at(0, 0, 6, 4);
        fig.step();
        assert_eq!(fig.pos, IVec2::new(6, 4));
        assert_eq!(fig.vel, IVec2::new(6, 4));
    }

    #[test]
    fn test_step_bounces_off_right_wall() {
        let mut fig = ball_at(579, 0, 6, 4);
        fig.step();
        assert_eq!(fig.pos.x, 579);
        assert_eq!(fig.vel.x, -6);
        // The other axis is unaffected
        assert_eq!(fig.pos.y, 4);
        assert_eq!(fig.vel.y, 4);
    }

    #[test]
    fn test_step_bounces_off_top_wall() {
        let mut fig = ball_at(100, 2, 3, -5);
        fig.step();
        assert_eq!(fig.pos.y, 2);
        assert_eq!(fig.vel.y, 5);
    }

    #[test]
    fn test_step_zero_velocity_out_of_bounds_terminates() {
        let mut fig = ball_at(0, 0, 0, 0);
        fig.pos = IVec2::new(-10, 900);
        fig.step();
        assert_eq!(fig.pos, IVec2::new(-10, 900));
        assert_eq!(fig.vel, IVec2::ZERO);
    }

    #[test]
    fn test_set_bounds_clamps_down_only() {
        let mut fig = ball_at(500, 600, 1, 1);
        fig.set_bounds(300, 300);
        assert_eq!(fig.pos, IVec2::new(280, 280));

        // Growing the viewport never moves the figure
        fig.set_bounds(1000, 1000);
        assert_eq!(fig.pos, IVec2::new(280, 280));
    }

    #[test]
    fn test_rescale_velocity_keeps_direction() {
        let mut fig = ball_at(10, 10, 3, 4);
        fig.vel = IVec2::new(-3, 4);
        fig.rescale_velocity(2.0);
        assert_eq!(fig.vel, IVec2::new(-6, 8));

        // Rounds up
        fig.rescale_velocity(0.2);
        assert_eq!(fig.vel, IVec2::new(-1, 1));

        // Back to the original speed
        fig.rescale_velocity(1.0);
        assert_eq!(fig.vel, IVec2::new(-3, 4));
    }

    #[test]
    fn test_rescale_zero_component_uses_initial_sign() {
        let mut fig = Figure::new(Shape::of_kind(ShapeKind::Triangle), IVec2::ZERO, IVec2::new(-2, 0));
        fig.vel = IVec2::ZERO;
        fig.rescale_velocity(1.5);
        assert_eq!(fig.vel, IVec2::new(-3, 0));
    }

    proptest! {
        #[test]
        fn prop_set_bounds_keeps_figure_inside(
            x in -1000i32..2000, y in -1000i32..2000,
            w in 50i32..1500, h in 50i32..1500,
        ) {
            let mut fig = Figure::new(Shape::of_kind(ShapeKind::Rectangle), IVec2::new(x, y), IVec2::ONE);
            fig.set_bounds(w, h);
            prop_assert!(fig.pos.x <= w - RECT_WIDTH);
            prop_assert!(fig.pos.y <= h - RECT_HEIGHT);
            prop_assert!(fig.pos.x <= x && fig.pos.y <= y);

            let before = fig.pos;
            fig.set_bounds(w, h);
            prop_assert_eq!(fig.pos, before);
        }

        #[test]
        fn prop_steps_preserve_speed(
            x in 0i32..580, y in 0i32..680,
            dx in -10i32..=10, dy in -10i32..=10,
            steps in 1usize..200,
        ) {
            let mut fig = ball_at(x, y, dx, dy);
            for _ in 0..steps {
                let before = fig.vel;
                fig.step();
                prop_assert_eq!(fig.vel.abs(), before.abs());
                // A sign flip only happens at a wall
                if fig.vel.x != before.x {
                    let raw = fig.pos.x - fig.vel.x;
                    prop_assert!(raw < 0 || raw >= fig.limit.x);
                }
                if fig.vel.y != before.y {
                    let raw = fig.pos.y - fig.vel.y;
                    prop_assert!(raw < 0 || raw >= fig.limit.y);
                }
            }
        }

        #[test]
        fn prop_steps_stay_within_limits(
            x in 0i32..=580, y in 0i32..=680,
            dx in -10i32..=10, dy in -10i32..=10,
            steps in 1usize..500,
        ) {
            let mut fig = ball_at(x, y, dx, dy);
            for _ in 0..steps {
                fig.step();
                prop_assert!(fig.pos.x >= 0 && fig.pos.x <= fig.limit.x);
                prop_assert!(fig.pos.y >= 0 && fig.pos.y <= fig.limit.y);
            }
        }
    }
}
