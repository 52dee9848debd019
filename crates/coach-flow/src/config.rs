#![forbid(unsafe_code)]

//! Flow configuration.

use std::time::Duration;

use coach_core::animation::AnimationVelocity;
use coach_core::direction::LayoutDirection;
use coach_core::geometry::{Rect, Size};
use coach_core::metrics::ScreenMetrics;

use crate::host::WindowId;

/// Distance between the close button and the screen sides, before insets.
pub const CLOSE_BUTTON_MARGIN_DP: i32 = 16;

/// Corner of the screen holding the close button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CloseButtonPosition {
    TopStart,
    #[default]
    TopEnd,
    BottomStart,
    BottomEnd,
}

/// Close button drawn by the host on top of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloseButton {
    /// Size of the button in pixels.
    pub size: Size,
    pub position: CloseButtonPosition,
}

impl CloseButton {
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            position: CloseButtonPosition::TopEnd,
        }
    }

    #[must_use]
    pub const fn with_position(mut self, position: CloseButtonPosition) -> Self {
        self.position = position;
        self
    }

    /// Frame of the button on `screen`.
    ///
    /// The button keeps [`CLOSE_BUTTON_MARGIN_DP`] from the two screen sides
    /// of its corner, plus the status-bar inset at the top or the
    /// navigation-bar inset at the bottom. `Start` and `End` follow
    /// `direction`.
    pub fn frame(&self, screen: &ScreenMetrics, direction: LayoutDirection) -> Rect {
        let margin = screen.dp_to_px(CLOSE_BUTTON_MARGIN_DP);
        let Size { width, height } = self.size;
        let (at_top, at_start) = match self.position {
            CloseButtonPosition::TopStart => (true, true),
            CloseButtonPosition::TopEnd => (true, false),
            CloseButtonPosition::BottomStart => (false, true),
            CloseButtonPosition::BottomEnd => (false, false),
        };
        let top = if at_top {
            margin + screen.insets.top
        } else {
            screen.height() - margin - screen.insets.bottom - height
        };
        let at_left = at_start != direction.is_rtl();
        let left = if at_left {
            margin
        } else {
            screen.width() - margin - width
        };
        Rect::from_origin_size(left, top, self.size)
    }
}

/// Options for a [`Flow`](crate::Flow).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowConfig {
    /// Delay between `show()` and the overlay attaching.
    pub initial_delay: Duration,
    /// Animate spots and content changes.
    pub animate: bool,
    /// Pace of spot transitions.
    pub velocity: AnimationVelocity,
    /// Taps outside the spot reach the app underneath and close the flow.
    pub allow_overlaid_interaction: bool,
    /// Lay out right-to-left regardless of the host direction.
    pub force_rtl: bool,
    pub close_button: Option<CloseButton>,
    /// Window whose content is highlighted; `None` for the main window.
    pub window: Option<WindowId>,
    /// Free space kept between content and screen sides, in
    /// density-independent units.
    pub screen_margin_dp: i32,
    /// Duration of the overlay fade-out and of content fades.
    pub fade_duration: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(200),
            animate: true,
            velocity: AnimationVelocity::Normal,
            allow_overlaid_interaction: false,
            force_rtl: false,
            close_button: None,
            window: None,
            screen_margin_dp: coach_layout::DEFAULT_SCREEN_MARGIN_DP,
            fade_duration: Duration::from_millis(300),
        }
    }
}

impl FlowConfig {
    /// Set the delay before the overlay attaches.
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Enable or disable animations.
    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Set the spot velocity preset.
    #[must_use]
    pub fn with_velocity(mut self, velocity: AnimationVelocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Let taps outside the spot through to the app (closing the flow).
    #[must_use]
    pub fn with_overlaid_interaction(mut self, allow: bool) -> Self {
        self.allow_overlaid_interaction = allow;
        self
    }

    /// Force right-to-left layout.
    #[must_use]
    pub fn with_force_rtl(mut self, force: bool) -> Self {
        self.force_rtl = force;
        self
    }

    /// Show a close button.
    #[must_use]
    pub fn with_close_button(mut self, button: CloseButton) -> Self {
        self.close_button = Some(button);
        self
    }

    /// Highlight content of a secondary window.
    #[must_use]
    pub fn with_window(mut self, window: WindowId) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the screen margin in density-independent units.
    #[must_use]
    pub fn with_screen_margin(mut self, dp: i32) -> Self {
        self.screen_margin_dp = dp;
        self
    }

    /// Set the fade duration.
    #[must_use]
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Direction used for layout given the host's own direction.
    pub fn direction(&self, host: LayoutDirection) -> LayoutDirection {
        if self.force_rtl {
            LayoutDirection::Rtl
        } else {
            host
        }
    }
}
