#![forbid(unsafe_code)]

//! Lifecycle notifications drained by the host.

/// Why a flow closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The close button was tapped.
    CloseButton,
    /// The overlay was tapped outside the spot with overlaid interaction on.
    OverlayTap,
    /// [`Flow::advance`](crate::Flow::advance) was called on the last step.
    FlowEnded,
    /// The host closed the flow, or a target could not be found.
    Dismissed,
}

/// Per-step lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepState {
    /// The spot of the step started expanding.
    Opening,
    /// The spot of the step is fully expanded.
    Opened,
    /// The spot of the step started collapsing.
    Closing,
    /// The spot of the step is gone.
    Closed,
}

/// Notification emitted by a [`Flow`](crate::Flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowEvent {
    /// The overlay attached and started fading in.
    Shown,
    /// The overlay detached.
    Closed(CloseReason),
    StepStateChanged { state: StepState, index: usize },
    /// The highlighted element of an opened step was tapped.
    TargetClicked(usize),
}

impl FlowEvent {
    pub(crate) const fn step(state: StepState, index: usize) -> Self {
        Self::StepStateChanged { state, index }
    }
}
