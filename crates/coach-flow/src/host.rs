#![forbid(unsafe_code)]

//! The view-tree collaborator.
//!
//! The flow never touches platform views. Everything it needs from the
//! running application goes through [`Host`]: where a target currently is,
//! how big the screen is, and how large a piece of secondary content wants
//! to be at a given width.

use std::fmt;

use coach_core::direction::LayoutDirection;
use coach_core::geometry::{Rect, Size};
use coach_core::metrics::ScreenMetrics;

/// Opaque handle to a view the host already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewKey(pub u64);

/// Identifier looked up in the view tree when the step is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetId(pub u32);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Secondary window (dialog, popup) hosting the targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowId(pub u64);

/// What a step highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Target {
    View(ViewKey),
    Id(TargetId),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(key) => write!(f, "view {}", key.0),
            Self::Id(id) => write!(f, "id {id}"),
        }
    }
}

/// Application side of a flow, generic over the secondary content type `C`.
pub trait Host<C> {
    /// Current bounds of `target` in screen coordinates, or `None` when it
    /// is not part of the view tree of `window` (the main window if `None`).
    fn resolve(&self, target: Target, window: Option<WindowId>) -> Option<Rect>;

    /// Metrics of the screen covered by the overlay.
    fn screen(&self, window: Option<WindowId>) -> ScreenMetrics;

    /// Layout direction of the window.
    fn layout_direction(&self, window: Option<WindowId>) -> LayoutDirection {
        let _ = window;
        LayoutDirection::Ltr
    }

    /// Natural size of `content` when it may be at most `max_width` wide.
    fn measure(&self, content: &C, max_width: i32) -> Size;
}
