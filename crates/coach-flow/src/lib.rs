#![forbid(unsafe_code)]

//! Coach-mark flows.
//!
//! A [`Flow`] shows a sequence of [`Step`]s over a host application: each
//! step highlights one target with an animated spot and places secondary
//! content next to it. The host implements [`Host`] to resolve targets and
//! measure content, drives the flow from its frame clock and paints the
//! [`Overlay`] snapshot.
//!
//! ```
//! use std::time::Duration;
//!
//! use coach_core::geometry::{Rect, Size};
//! use coach_core::metrics::ScreenMetrics;
//! use coach_flow::{Flow, FlowConfig, FlowState, Host, Step, Target, ViewKey, WindowId};
//!
//! struct App;
//!
//! impl Host<String> for App {
//!     fn resolve(&self, _target: Target, _window: Option<WindowId>) -> Option<Rect> {
//!         Some(Rect::new(100, 100, 200, 200))
//!     }
//!     fn screen(&self, _window: Option<WindowId>) -> ScreenMetrics {
//!         ScreenMetrics::new(400, 800)
//!     }
//!     fn measure(&self, content: &String, max_width: i32) -> Size {
//!         Size::new((content.len() as i32 * 8).min(max_width), 24)
//!     }
//! }
//!
//! let step = Step::builder("Tap here to start".to_string())
//!     .target_view(ViewKey(1))
//!     .build()?;
//! let mut flow = Flow::new(FlowConfig::default(), vec![step]);
//! flow.show();
//! while flow.tick(&App, Duration::from_millis(16)) {
//!     if flow.state() == (FlowState::Showing { step: 0 }) && flow.overlay().is_some() {
//!         break;
//!     }
//! }
//! assert_eq!(flow.state(), FlowState::Showing { step: 0 });
//! # Ok::<(), coach_flow::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod flow;
pub mod host;
pub mod overlay;
pub mod step;

pub use config::{CLOSE_BUTTON_MARGIN_DP, CloseButton, CloseButtonPosition, FlowConfig};
pub use error::{ConfigError, FlowError};
pub use event::{CloseReason, FlowEvent, StepState};
pub use flow::{ATTACH_FADE, Flow, FlowState};
pub use host::{Host, Target, TargetId, ViewKey, WindowId};
pub use overlay::{ContentFrame, Overlay};
pub use step::{Step, StepBuilder};
