#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are signed device pixels in window space (origin at the
//! top-left of the host window). Rectangles store their four edges rather
//! than an origin and size, because spot animation moves each edge
//! independently and transiently collapses a rectangle to a single point.

/// A point in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset the point by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Clamp the width to at most `max_width`, leaving the height untouched.
    #[inline]
    #[must_use]
    pub fn clamp_width(self, max_width: i32) -> Self {
        Self::new(self.width.min(max_width), self.height)
    }
}

/// An axis-aligned rectangle described by its four edges.
///
/// `left <= right` and `top <= bottom` hold for every rectangle produced by
/// this crate; a rectangle whose opposite edges coincide is degenerate (a
/// line or a point) but still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(x: i32, y: i32, size: Size) -> Self {
        Self::new(
            x,
            y,
            x.saturating_add(size.width),
            y.saturating_add(size.height),
        )
    }

    /// Create a rectangle extending `half_width`/`half_height` on each side
    /// of `center`.
    #[inline]
    pub const fn from_center(center: Point, half_width: i32, half_height: i32) -> Self {
        Self::new(
            center.x.saturating_sub(half_width),
            center.y.saturating_sub(half_height),
            center.x.saturating_add(half_width),
            center.y.saturating_add(half_height),
        )
    }

    /// A degenerate rectangle located at a single point.
    #[inline]
    pub const fn point(at: Point) -> Self {
        Self::new(at.x, at.y, at.x, at.y)
    }

    /// Horizontal extent.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Center point, rounded towards the top-left for odd extents.
    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(
            self.left.saturating_add(self.width() / 2),
            self.top.saturating_add(self.height() / 2),
        )
    }

    /// Whether the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Whether all four edges meet at a single point.
    #[inline]
    pub const fn is_point(&self) -> bool {
        self.left == self.right && self.top == self.bottom
    }

    /// Check if a point is inside the rectangle (right/bottom exclusive).
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Check if `other` lies entirely within this rectangle (edges inclusive).
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }

    /// Reflect horizontally inside a container of width `container_width`.
    ///
    /// Vertical edges are left untouched.
    #[inline]
    #[must_use]
    pub const fn mirror_x(&self, container_width: i32) -> Self {
        Self::new(
            container_width.saturating_sub(self.right),
            self.top,
            container_width.saturating_sub(self.left),
            self.bottom,
        )
    }
}

/// Per-side insets (system bars, margins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: i32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<i32> for Sides {
    fn from(val: i32) -> Self {
        Self::all(val)
    }
}
