#![forbid(unsafe_code)]

//! Edge-to-edge connections between the secondary content and an anchor.

use coach_core::direction::LayoutDirection;
use coach_core::geometry::{Rect, Size};

/// Coordinate axis an edge is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// x coordinates (`Start`, `End`).
    Horizontal,
    /// y coordinates (`Top`, `Bottom`).
    Vertical,
}

/// A side of a rectangle. `Start` and `End` follow the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Edge {
    Top,
    Bottom,
    Start,
    End,
}

impl Edge {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Start, Self::End];

    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Start | Self::End => Axis::Horizontal,
        }
    }

    /// Whether the edge is the leading side of its axis (`Top` or `Start`).
    #[inline]
    pub const fn is_leading(self) -> bool {
        matches!(self, Self::Top | Self::Start)
    }

    /// Coordinate of this edge of `rect`.
    ///
    /// Vertical edges return a y coordinate. Horizontal edges return an
    /// offset from the start side of a container `container_width` wide:
    /// the left side in LTR, the right side in RTL.
    pub fn offset_in(self, rect: Rect, direction: LayoutDirection, container_width: i32) -> i32 {
        match self {
            Self::Top => rect.top,
            Self::Bottom => rect.bottom,
            Self::Start => {
                let x = if direction.is_rtl() { rect.right } else { rect.left };
                direction.start_relative(x, container_width)
            }
            Self::End => {
                let x = if direction.is_rtl() { rect.left } else { rect.right };
                direction.start_relative(x, container_width)
            }
        }
    }

    /// Coordinate of this edge of a container of `size` anchored at the
    /// origin, in the same convention as [`Edge::offset_in`].
    pub const fn offset_in_parent(self, size: Size) -> i32 {
        match self {
            Self::Top | Self::Start => 0,
            Self::Bottom => size.height,
            Self::End => size.width,
        }
    }
}

/// What a connection is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Anchor {
    /// The screen (the overlay's container).
    Parent,
    /// The highlighted spot.
    #[default]
    Target,
}

/// Pins `from` of the secondary content to `to` of `anchor`, `margin`
/// density-independent units away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub from: Edge,
    pub anchor: Anchor,
    pub to: Edge,
    pub margin: i32,
}

impl Connection {
    #[inline]
    pub const fn new(from: Edge, anchor: Anchor, to: Edge, margin: i32) -> Self {
        Self {
            from,
            anchor,
            to,
            margin,
        }
    }

    /// Connection to the spot with no margin.
    #[inline]
    pub const fn to_target(from: Edge, to: Edge) -> Self {
        Self::new(from, Anchor::Target, to, 0)
    }

    /// Connection to the screen with no margin.
    #[inline]
    pub const fn to_parent(from: Edge, to: Edge) -> Self {
        Self::new(from, Anchor::Parent, to, 0)
    }

    /// Set the margin.
    #[inline]
    #[must_use]
    pub const fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    /// Both edges lie on the same axis. Connections that fail this pin
    /// nothing.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(
            (self.from.axis(), self.to.axis()),
            (Axis::Horizontal, Axis::Horizontal) | (Axis::Vertical, Axis::Vertical)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 400;

    #[test]
    fn horizontal_offsets_follow_direction() {
        let r = Rect::new(40, 10, 100, 30);
        assert_eq!(Edge::Start.offset_in(r, LayoutDirection::Ltr, W), 40);
        assert_eq!(Edge::End.offset_in(r, LayoutDirection::Ltr, W), 100);
        assert_eq!(Edge::Start.offset_in(r, LayoutDirection::Rtl, W), 300);
        assert_eq!(Edge::End.offset_in(r, LayoutDirection::Rtl, W), 360);
    }

    #[test]
    fn vertical_offsets_ignore_direction() {
        let r = Rect::new(40, 10, 100, 30);
        for dir in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            assert_eq!(Edge::Top.offset_in(r, dir, W), 10);
            assert_eq!(Edge::Bottom.offset_in(r, dir, W), 30);
        }
    }

    #[test]
    fn parent_offsets() {
        let size = Size::new(400, 800);
        assert_eq!(Edge::Top.offset_in_parent(size), 0);
        assert_eq!(Edge::Start.offset_in_parent(size), 0);
        assert_eq!(Edge::Bottom.offset_in_parent(size), 800);
        assert_eq!(Edge::End.offset_in_parent(size), 400);
    }

    #[test]
    fn validity_requires_matching_axes() {
        assert!(Connection::to_target(Edge::Top, Edge::Bottom).is_valid());
        assert!(Connection::to_parent(Edge::Start, Edge::End).is_valid());
        assert!(!Connection::to_target(Edge::Top, Edge::Start).is_valid());
        assert_eq!(
            Connection::to_target(Edge::Top, Edge::Bottom).with_margin(12).margin,
            12
        );
    }
}
