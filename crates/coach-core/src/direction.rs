#![forbid(unsafe_code)]

//! Horizontal layout direction.

/// Reading direction of the host window.
///
/// Only the horizontal axis is affected: in [`LayoutDirection::Rtl`] the
/// logical start edge is the physical right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    /// Pick a direction from an RTL flag.
    #[inline]
    pub const fn from_rtl(rtl: bool) -> Self {
        if rtl { Self::Rtl } else { Self::Ltr }
    }

    /// Whether this is right-to-left.
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Convert a physical x coordinate into a distance from the start edge
    /// of a container of width `container_width`.
    ///
    /// The conversion is its own inverse, so the same function maps a
    /// start-relative offset back to a physical coordinate.
    #[inline]
    pub const fn start_relative(self, x: i32, container_width: i32) -> i32 {
        match self {
            Self::Ltr => x,
            Self::Rtl => container_width.saturating_sub(x),
        }
    }
}
