#![forbid(unsafe_code)]

//! The spot state machine.
//!
//! A [`Spot`] owns an immutable target rectangle and the rectangle drawn on
//! the previous frame. Each call to [`Spot::advance`] moves every edge by the
//! shape's per-axis step, clipped so that an expanding spot never leaves its
//! target and a collapsing spot never crosses its center, and returns the
//! frame to draw as a value.

use coach_core::animation::Velocity;
use coach_core::geometry::{Point, Rect};

use crate::shape::{AxisSteps, SpotShape};

/// Direction of a spot transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpotDirection {
    /// Grow from the center point to the full bounds.
    #[default]
    Expand,
    /// Shrink from the current bounds to the center point.
    Collapse,
}

/// Animation state of a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpotState {
    /// Edges still move on every frame.
    #[default]
    Animating,
    /// Fully expanded; every frame draws the same bounds.
    Idle,
}

/// One drawn frame of a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpotFrame {
    /// Area to clear from the dim layer.
    pub bounds: Rect,
    /// Corner radius, never larger than half the shorter side of `bounds`.
    pub corner_radius: i32,
    /// Whether another frame is needed to finish the transition.
    pub continuing: bool,
}

/// A highlighted region animating towards (or away from) its target bounds.
#[derive(Debug, Clone)]
pub struct Spot {
    shape: SpotShape,
    focus: Rect,
    target: Rect,
    center: Point,
    animate: bool,
    steps: AxisSteps,
    direction: SpotDirection,
    state: SpotState,
    current: Option<Rect>,
}

impl Spot {
    /// Create an expanding spot for `focus`.
    ///
    /// The spot is centered on the focus rectangle and sized by `shape`.
    /// With `animate == false` the first frame is already the idle frame.
    pub fn new(shape: SpotShape, focus: Rect, animate: bool, velocity: Velocity) -> Self {
        let center = focus.center();
        Self {
            shape,
            focus,
            target: shape.bounds(center),
            center,
            animate,
            steps: shape.axis_steps(velocity),
            direction: SpotDirection::Expand,
            state: SpotState::Animating,
            current: None,
        }
    }

    /// Create a spot that is idle from the start.
    ///
    /// Used when the focus moved or resized: the spot jumps to the new bounds
    /// instead of animating again.
    pub fn snapped(shape: SpotShape, focus: Rect, animate: bool, velocity: Velocity) -> Self {
        let mut spot = Self::new(shape, focus, animate, velocity);
        spot.current = Some(spot.target);
        spot.state = SpotState::Idle;
        spot
    }

    /// Resolved shape.
    #[inline]
    pub fn shape(&self) -> SpotShape {
        self.shape
    }

    /// Raw bounds of the highlighted element.
    #[inline]
    pub fn focus(&self) -> Rect {
        self.focus
    }

    /// Fully expanded bounds.
    #[inline]
    pub fn target(&self) -> Rect {
        self.target
    }

    /// Bounds drawn on the last frame, if any frame has been drawn.
    #[inline]
    pub fn current(&self) -> Option<Rect> {
        self.current
    }

    #[inline]
    pub fn direction(&self) -> SpotDirection {
        self.direction
    }

    #[inline]
    pub fn state(&self) -> SpotState {
        self.state
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == SpotState::Idle
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animate
    }

    /// Per-frame edge displacement.
    #[inline]
    pub fn axis_steps(&self) -> AxisSteps {
        self.steps
    }

    /// Compute and return the next frame.
    pub fn advance(&mut self) -> SpotFrame {
        if self.state == SpotState::Idle {
            return self.idle_frame();
        }

        if !self.animate {
            return match self.direction {
                SpotDirection::Expand => {
                    self.state = SpotState::Idle;
                    self.current = Some(self.target);
                    self.idle_frame()
                }
                SpotDirection::Collapse => {
                    let point = Rect::point(self.center);
                    self.current = Some(point);
                    self.frame(point, false)
                }
            };
        }

        let Some(current) = self.current else {
            let first = match self.direction {
                SpotDirection::Expand => Rect::point(self.center),
                SpotDirection::Collapse => self.target,
            };
            self.current = Some(first);
            return self.frame(first, true);
        };

        match self.direction {
            SpotDirection::Expand => {
                let next = self.grow(current);
                self.current = Some(next);
                if next == self.target {
                    self.state = SpotState::Idle;
                    self.frame(next, false)
                } else {
                    self.frame(next, true)
                }
            }
            SpotDirection::Collapse => {
                let next = self.shrink(current);
                self.current = Some(next);
                self.frame(next, !next.is_point())
            }
        }
    }

    /// The static fully expanded frame. Does not mutate the spot.
    pub fn idle_frame(&self) -> SpotFrame {
        self.frame(self.target, false)
    }

    /// The frame drawn last, without advancing.
    pub fn last_frame(&self) -> Option<SpotFrame> {
        if self.is_idle() {
            return Some(self.idle_frame());
        }
        self.current
            .map(|bounds| self.frame(bounds, !self.is_collapsed()))
    }

    /// Reverse the spot: the next frame starts from the current bounds (or
    /// the full bounds if nothing was drawn) and shrinks towards the center.
    pub fn start_collapse(&mut self) {
        self.direction = SpotDirection::Collapse;
        self.state = SpotState::Animating;
    }

    /// Whether the spot finished collapsing.
    pub fn is_collapsed(&self) -> bool {
        self.direction == SpotDirection::Collapse
            && self.current.is_some_and(|rect| rect.is_point())
    }

    fn grow(&self, rect: Rect) -> Rect {
        let AxisSteps { x, y } = self.steps;
        let target = self.target;
        Rect::new(
            rect.left.saturating_sub(x).max(target.left),
            rect.top.saturating_sub(y).max(target.top),
            rect.right.saturating_add(x).min(target.right),
            rect.bottom.saturating_add(y).min(target.bottom),
        )
    }

    fn shrink(&self, rect: Rect) -> Rect {
        let AxisSteps { x, y } = self.steps;
        let c = self.center;
        Rect::new(
            rect.left.saturating_add(x).min(c.x),
            rect.top.saturating_add(y).min(c.y),
            rect.right.saturating_sub(x).max(c.x),
            rect.bottom.saturating_sub(y).max(c.y),
        )
    }

    fn frame(&self, bounds: Rect, continuing: bool) -> SpotFrame {
        let limit = bounds.width().min(bounds.height()) / 2;
        SpotFrame {
            bounds,
            corner_radius: self.shape.corner_radius().min(limit).max(0),
            continuing,
        }
    }
}
