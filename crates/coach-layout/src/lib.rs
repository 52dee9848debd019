#![forbid(unsafe_code)]

//! Placement of secondary content around a coach-mark spot.
//!
//! - [`Connection`] pins one edge of the content to an edge of the spot or
//!   of the screen, optionally through a [`Guide`] line.
//! - [`PositionSpec`] is the simpler position/alignment/deviation model; it
//!   expands into connections.
//! - [`LayoutSolver`] resolves either model into a [`Resolution`], which
//!   yields the width cap and the final [`Placement`] of measured content.
//!
//! ```
//! use coach_core::direction::LayoutDirection;
//! use coach_core::geometry::{Rect, Size};
//! use coach_core::metrics::ScreenMetrics;
//! use coach_layout::{Connection, Edge, LayoutSolver};
//!
//! let mut solver = LayoutSolver::new(ScreenMetrics::new(400, 800), LayoutDirection::Ltr);
//! let spot = Rect::new(150, 50, 250, 90);
//! let resolution = solver.resolve(
//!     spot,
//!     &[Connection::to_target(Edge::Top, Edge::Bottom).with_margin(12)],
//! );
//! let placement = resolution.place(Size::new(200, 40));
//! assert_eq!(placement.frame.top, 102);
//! ```

pub mod connection;
pub mod guide;
pub mod position;
pub mod solver;

pub use connection::{Anchor, Axis, Connection, Edge};
pub use guide::{Guide, GuideId, GuideIds};
pub use position::{Alignment, Deviation, Position, PositionSpec};
pub use solver::{
    Anchoring, DEFAULT_SCREEN_MARGIN_DP, LayoutSolver, Placement, Resolution, ResolvedEdge,
};
