#![forbid(unsafe_code)]

//! Position, alignment and deviation placement.
//!
//! A [`PositionSpec`] places the secondary content on one side of the spot
//! with an alignment along that side, shifted by a fixed deviation. It is
//! resolved by expanding it into [`Connection`]s against a zero-sized anchor
//! frame located at [`PositionSpec::anchor_point`], so it shares the
//! connection resolver and its max-width rule.
//!
//! `Left` and `Right` are physical sides: in RTL they map to `End` and
//! `Start` respectively.

use coach_core::direction::LayoutDirection;
use coach_core::geometry::{Point, Rect, Size};
use coach_core::metrics::ScreenMetrics;

use crate::connection::{Connection, Edge};

/// Side of the spot the content is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Position {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Position {
    #[inline]
    const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Alignment of the content relative to the anchor point.
///
/// An alignment on the same axis as the position (for example `Top` with
/// [`Position::Bottom`]) would pin the same edge twice and is treated as
/// `Center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alignment {
    /// Content ends at the anchor point, above it.
    Top,
    /// Content starts at the anchor point, below it.
    Bottom,
    /// Content ends at the anchor point, to its left.
    Left,
    /// Content starts at the anchor point, to its right.
    Right,
    /// Content is centered on the anchor point.
    #[default]
    Center,
}

/// Extra offset of the anchor point, in density-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deviation {
    pub dx: i32,
    pub dy: i32,
}

impl Deviation {
    pub const NONE: Self = Self { dx: 0, dy: 0 };

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Single relative placement of the secondary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSpec {
    pub position: Position,
    pub alignment: Alignment,
    pub deviation: Deviation,
}

impl PositionSpec {
    pub const fn new(position: Position, alignment: Alignment) -> Self {
        Self {
            position,
            alignment,
            deviation: Deviation::NONE,
        }
    }

    #[must_use]
    pub const fn with_deviation(mut self, dx: i32, dy: i32) -> Self {
        self.deviation = Deviation::new(dx, dy);
        self
    }

    /// Point the content is anchored to.
    ///
    /// Starts at `center`, moves to the edge of the spot on the side named
    /// by the position (`half_extents` away), then shifts by the deviation
    /// converted to pixels.
    pub fn anchor_point(&self, center: Point, half_extents: Size, metrics: &ScreenMetrics) -> Point {
        let side = match self.position {
            Position::Top => center.offset(0, -half_extents.height),
            Position::Bottom => center.offset(0, half_extents.height),
            Position::Left => center.offset(-half_extents.width, 0),
            Position::Right => center.offset(half_extents.width, 0),
        };
        side.offset(
            metrics.dp_to_px(self.deviation.dx),
            metrics.dp_to_px(self.deviation.dy),
        )
    }

    /// Zero-sized anchor frame for the spot bounds `spot`.
    pub fn anchor_frame(&self, spot: Rect, metrics: &ScreenMetrics) -> Rect {
        let half = Size::new(spot.width() / 2, spot.height() / 2);
        Rect::point(self.anchor_point(spot.center(), half, metrics))
    }

    /// Equivalent connections against the frame from
    /// [`PositionSpec::anchor_frame`].
    pub fn to_connections(&self, direction: LayoutDirection) -> Vec<Connection> {
        let physical_left = if direction.is_rtl() { Edge::End } else { Edge::Start };
        let physical_right = if direction.is_rtl() { Edge::Start } else { Edge::End };

        let mut out = Vec::with_capacity(3);
        out.push(match self.position {
            Position::Top => Connection::to_target(Edge::Bottom, Edge::Top),
            Position::Bottom => Connection::to_target(Edge::Top, Edge::Bottom),
            Position::Left => Connection::to_target(physical_right, physical_left),
            Position::Right => Connection::to_target(physical_left, physical_right),
        });

        let vertical = self.position.is_vertical();
        match self.alignment {
            Alignment::Top if !vertical => {
                out.push(Connection::to_target(Edge::Bottom, Edge::Top));
            }
            Alignment::Bottom if !vertical => {
                out.push(Connection::to_target(Edge::Top, Edge::Bottom));
            }
            Alignment::Left if vertical => {
                out.push(Connection::to_target(physical_right, physical_left));
            }
            Alignment::Right if vertical => {
                out.push(Connection::to_target(physical_left, physical_right));
            }
            _ if vertical => {
                out.push(Connection::to_target(Edge::Start, Edge::Start));
                out.push(Connection::to_target(Edge::End, Edge::End));
            }
            _ => {
                out.push(Connection::to_target(Edge::Top, Edge::Top));
                out.push(Connection::to_target(Edge::Bottom, Edge::Bottom));
            }
        }
        out
    }
}
