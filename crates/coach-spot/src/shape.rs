#![forbid(unsafe_code)]

//! Spot shapes.
//!
//! A [`ShapeKind`] is what the host asks for; a [`SpotShape`] is the resolved
//! shape with concrete extents, derived once from the focus rectangle and the
//! step's size percentage.

use coach_core::animation::{AnimationVelocity, Velocity};
use coach_core::geometry::{Point, Rect, Size};

/// Requested spot shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    /// Circle whose diameter follows the focus width.
    #[default]
    Circle,
    /// Rounded rectangle following both focus extents.
    RoundedRect,
}

/// A spot shape with resolved extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotShape {
    /// Circle of the given radius.
    Circle { radius: i32 },
    /// Rounded rectangle described by half extents and a corner radius.
    RoundedRect {
        half_width: i32,
        half_height: i32,
        corner_radius: i32,
    },
}

/// Per-frame edge displacement on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisSteps {
    pub x: i32,
    pub y: i32,
}

impl SpotShape {
    /// Resolve a shape for `focus`.
    ///
    /// A `size_percentage` of zero or less (or a non-finite value) keeps the
    /// focus extents; otherwise both extents are scaled by
    /// `size_percentage / 100`. `corner_radius` only matters for
    /// [`ShapeKind::RoundedRect`].
    pub fn from_focus(kind: ShapeKind, focus: Rect, size_percentage: f64, corner_radius: i32) -> Self {
        let width = scaled(focus.width(), size_percentage);
        let height = scaled(focus.height(), size_percentage);
        match kind {
            ShapeKind::Circle => Self::Circle { radius: width / 2 },
            ShapeKind::RoundedRect => Self::RoundedRect {
                half_width: width / 2,
                half_height: height / 2,
                corner_radius: corner_radius.max(0),
            },
        }
    }

    /// Half of the horizontal and vertical extents.
    #[inline]
    pub const fn half_extents(&self) -> Size {
        match *self {
            Self::Circle { radius } => Size::new(radius, radius),
            Self::RoundedRect {
                half_width,
                half_height,
                ..
            } => Size::new(half_width, half_height),
        }
    }

    /// Full horizontal and vertical extents.
    #[inline]
    pub const fn size(&self) -> Size {
        let half = self.half_extents();
        Size::new(half.width * 2, half.height * 2)
    }

    /// Corner radius used when drawing. Circles are drawn as a rounded
    /// rectangle whose corners equal the radius.
    #[inline]
    pub const fn corner_radius(&self) -> i32 {
        match *self {
            Self::Circle { radius } => radius,
            Self::RoundedRect { corner_radius, .. } => corner_radius,
        }
    }

    /// Bounds of the fully expanded spot centered on `center`.
    #[inline]
    pub const fn bounds(&self, center: Point) -> Rect {
        let half = self.half_extents();
        Rect::from_center(center, half.width, half.height)
    }

    /// Extent that paces the animation: the full width of the spot.
    #[inline]
    pub const fn pacing_extent(&self) -> i32 {
        self.size().width
    }

    /// Per-frame velocity that completes a transition in about `preset`'s
    /// duration.
    pub fn velocity(&self, preset: AnimationVelocity) -> Velocity {
        Velocity::for_extent(self.pacing_extent(), preset)
    }

    /// Edge displacement per frame for `velocity`.
    ///
    /// Circles move every edge by the full velocity. Rounded rectangles keep
    /// the longer axis at full velocity and scale the shorter one by the
    /// aspect ratio, rounding up, so both axes finish at about the same frame.
    pub fn axis_steps(&self, velocity: Velocity) -> AxisSteps {
        let v = velocity.as_delta();
        match *self {
            Self::Circle { .. } => AxisSteps { x: v, y: v },
            Self::RoundedRect {
                half_width,
                half_height,
                ..
            } => {
                if half_width > half_height {
                    AxisSteps {
                        x: v,
                        y: proportional_step(v, half_height, half_width),
                    }
                } else if half_height > half_width {
                    AxisSteps {
                        x: proportional_step(v, half_width, half_height),
                        y: v,
                    }
                } else {
                    AxisSteps { x: v, y: v }
                }
            }
        }
    }
}

fn scaled(extent: i32, size_percentage: f64) -> i32 {
    if !size_percentage.is_finite() || size_percentage <= 0.0 {
        return extent;
    }
    (f64::from(extent) * size_percentage / 100.0) as i32
}

/// `ceil(velocity * minor / major)` in integer arithmetic.
fn proportional_step(velocity: i32, minor: i32, major: i32) -> i32 {
    let minor = i64::from(minor.max(0));
    let major = i64::from(major.max(1));
    let step = (i64::from(velocity) * minor + major - 1) / major;
    i32::try_from(step).unwrap_or(i32::MAX)
}
