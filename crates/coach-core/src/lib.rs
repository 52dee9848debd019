#![forbid(unsafe_code)]

//! Core: geometry, layout direction, screen metrics, and animation pacing
//! shared by the coach-mark engines.

pub mod animation;
pub mod direction;
pub mod geometry;
pub mod logging;
pub mod metrics;

pub use animation::{AnimationVelocity, Fade, Velocity};
pub use direction::LayoutDirection;
pub use geometry::{Point, Rect, Sides, Size};
pub use metrics::ScreenMetrics;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};
