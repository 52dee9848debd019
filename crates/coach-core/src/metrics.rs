#![forbid(unsafe_code)]

//! Screen metrics supplied by the host.

use crate::geometry::{Rect, Sides, Size};

/// Size, pixel density, and system-bar insets of the screen the overlay
/// covers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenMetrics {
    /// Full screen size in device pixels.
    pub size: Size,
    /// Device pixels per density-independent pixel.
    pub density: f32,
    /// Space taken by system bars (status bar on top, navigation bar at the
    /// bottom), in device pixels.
    pub insets: Sides,
}

impl ScreenMetrics {
    /// Metrics for a screen of `width` x `height` pixels at density 1.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            density: 1.0,
            insets: Sides::all(0),
        }
    }

    /// Set the pixel density.
    #[must_use]
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        self
    }

    /// Set the system-bar insets.
    #[must_use]
    pub fn with_insets(mut self, insets: Sides) -> Self {
        self.insets = insets;
        self
    }

    /// Screen width in pixels.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.size.width
    }

    /// Screen height in pixels.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.size.height
    }

    /// The whole screen as a rectangle anchored at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_origin_size(0, 0, self.size)
    }

    /// Convert density-independent pixels to device pixels, truncating.
    #[inline]
    pub fn dp_to_px(&self, dp: i32) -> i32 {
        (dp as f32 * self.density) as i32
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
