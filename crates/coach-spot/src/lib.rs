#![forbid(unsafe_code)]

//! Spot engine for coach-mark overlays.
//!
//! - [`SpotShape`] resolves a [`ShapeKind`] against the focus rectangle.
//! - [`Spot`] is the expand/collapse state machine: every call to
//!   [`Spot::advance`] returns the [`SpotFrame`] to draw.
//! - [`SpotLayer`] drives the on-screen spots once per frame, reports
//!   [`SpotEvent`]s and hit-tests taps.
//!
//! ```
//! use coach_core::animation::AnimationVelocity;
//! use coach_core::geometry::Rect;
//! use coach_spot::{ShapeKind, Spot, SpotShape};
//!
//! let focus = Rect::new(100, 100, 200, 200);
//! let shape = SpotShape::from_focus(ShapeKind::Circle, focus, 100.0, 0);
//! let mut spot = Spot::new(shape, focus, true, shape.velocity(AnimationVelocity::Fast));
//!
//! let mut frames = 0;
//! while spot.advance().continuing {
//!     frames += 1;
//! }
//! assert!(spot.is_idle());
//! assert!(frames > 1);
//! ```

pub mod layer;
pub mod shape;
pub mod spot;

pub use layer::{Hit, LayerFrame, SpotEvent, SpotLayer};
pub use shape::{AxisSteps, ShapeKind, SpotShape};
pub use spot::{Spot, SpotDirection, SpotFrame, SpotState};
