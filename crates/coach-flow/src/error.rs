#![forbid(unsafe_code)]

//! Errors reported to the host.
//!
//! Both enums describe programmer mistakes: an invalid step definition or a
//! call that makes no sense for the configured steps. A target that cannot
//! be found at draw time is not an error; the flow closes with
//! [`CloseReason::Dismissed`](crate::CloseReason::Dismissed) instead.

use std::fmt;

use coach_layout::Edge;

/// Invalid step definition, reported by [`StepBuilder::build`](crate::StepBuilder::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Both a view key and a target identifier were given.
    BothTargets,
    /// Neither a view key nor a target identifier was given.
    MissingTarget,
    /// The size percentage is NaN or infinite.
    InvalidSizePercentage { value: f64 },
    /// A connection joins edges of different axes.
    MismatchedEdges { from: Edge, to: Edge },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothTargets => {
                write!(f, "step has both a target view and a target identifier")
            }
            Self::MissingTarget => write!(f, "step has no target"),
            Self::InvalidSizePercentage { value } => {
                write!(f, "size percentage must be finite, got {value}")
            }
            Self::MismatchedEdges { from, to } => {
                write!(f, "cannot connect {from:?} edge to {to:?} edge")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Flow operation that cannot be honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// The flow was built without steps.
    NoSteps,
    /// A step index past the end of the step list.
    StepOutOfRange { index: usize, len: usize },
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSteps => write!(f, "flow has no steps"),
            Self::StepOutOfRange { index, len } => {
                write!(f, "step {index} out of range (flow has {len} steps)")
            }
        }
    }
}

impl std::error::Error for FlowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ConfigError::MissingTarget.to_string(), "step has no target");
        assert_eq!(
            ConfigError::MismatchedEdges {
                from: Edge::Top,
                to: Edge::Start
            }
            .to_string(),
            "cannot connect Top edge to Start edge"
        );
        assert_eq!(
            FlowError::StepOutOfRange { index: 4, len: 2 }.to_string(),
            "step 4 out of range (flow has 2 steps)"
        );
    }
}
