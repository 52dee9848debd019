#![forbid(unsafe_code)]

//! Coach-mark overlays.
//!
//! This crate is the public surface of the coach-mark engines. It re-exports
//! the commonly used types and offers a prelude for host integrations.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use coach_core::{
    AnimationVelocity, Fade, LayoutDirection, Point, Rect, ScreenMetrics, Sides, Size, Velocity,
};

// --- Spot re-exports -------------------------------------------------------

pub use coach_spot::{Hit, ShapeKind, Spot, SpotFrame, SpotLayer, SpotShape};

// --- Layout re-exports -----------------------------------------------------

pub use coach_layout::{
    Alignment, Anchor, Anchoring, Connection, Deviation, Edge, LayoutSolver, Placement, Position,
    PositionSpec, Resolution,
};

// --- Flow re-exports -------------------------------------------------------

pub use coach_flow::{
    CloseButton, CloseButtonPosition, CloseReason, ConfigError, ContentFrame, Flow, FlowConfig,
    FlowError, FlowEvent, FlowState, Host, Overlay, Step, StepBuilder, StepState, Target,
    TargetId, ViewKey, WindowId,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for coach-mark hosts.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A step was defined incorrectly.
    Config(ConfigError),
    /// A flow operation was misused.
    Flow(FlowError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Flow(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Flow(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<FlowError> for Error {
    fn from(err: FlowError) -> Self {
        Self::Flow(err)
    }
}

/// Standard result type for coach APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, AnimationVelocity, CloseButton, CloseReason, Connection, Edge, Error, Flow,
        FlowConfig, FlowEvent, Host, Position, PositionSpec, Rect, Result, ScreenMetrics,
        ShapeKind, Size, Step, StepState, Target, TargetId, ViewKey,
    };

    pub use crate::{core, flow, layout, spot};
}

pub use coach_core as core;
pub use coach_flow as flow;
pub use coach_layout as layout;
pub use coach_spot as spot;
