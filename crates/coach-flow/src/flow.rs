#![forbid(unsafe_code)]

//! The flow controller.
//!
//! A [`Flow`] walks an ordered list of [`Step`]s. The host drives it from its
//! frame clock with [`Flow::tick`], forwards taps through
//! [`Flow::handle_tap`], paints [`Flow::overlay`] and drains
//! [`Flow::drain_events`] after each frame.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted ─show()─▶ Pending ─delay─▶ Showing(0) ─advance()─▶ Showing(1) …
//!                         │                  │
//!                      close()            close()
//!                         ▼                  ▼
//!                  Closed(None) ◀─fade─ Closing(reason) ─fade─▶ Closed(reason)
//! ```
//!
//! # Event order
//!
//! Moving from step `n - 1` to step `n` emits `Closing(n - 1)` (animated) or
//! `Closed(n - 1)` (instant), then `Opening(n)` when animated. `Opened(n)`
//! follows once the spot is fully expanded and `Closed(n - 1)` once the old
//! spot finished collapsing. When the target moves, the step is redrawn at
//! the new bounds without any transition events.

use std::time::Duration;

use coach_core::Fade;
use coach_core::direction::LayoutDirection;
use coach_core::geometry::{Point, Rect};
use coach_core::metrics::ScreenMetrics;
use coach_layout::{Anchoring, LayoutSolver};
use coach_spot::{Hit, Spot, SpotEvent, SpotLayer};

use crate::config::FlowConfig;
use crate::error::FlowError;
use crate::event::{CloseReason, FlowEvent, StepState};
use crate::host::Host;
use crate::overlay::{ContentFrame, Overlay};
use crate::step::Step;

/// Duration of the overlay fade-in when it attaches.
pub const ATTACH_FADE: Duration = Duration::from_millis(1);

/// Where a flow is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowState {
    /// `show()` was never called.
    #[default]
    NotStarted,
    /// Waiting out the initial delay.
    Pending,
    /// Attached, displaying a step.
    Showing { step: usize },
    /// Fading out before detaching.
    Closing { reason: CloseReason },
    /// Detached. `None` when the flow was cancelled before it attached.
    Closed { reason: Option<CloseReason> },
}

impl FlowState {
    /// Whether the overlay is on screen.
    pub const fn is_attached(self) -> bool {
        matches!(self, Self::Showing { .. } | Self::Closing { .. })
    }
}

#[derive(Debug, Clone, Copy)]
enum DrawMode {
    /// Regular step change with transition events.
    Transition,
    /// Same step at new bounds, no animation and no events.
    Snap,
}

#[derive(Debug, Clone, Copy)]
struct ContentLayout {
    frame: Rect,
    fade: Option<Fade>,
}

/// Content being faded out before its replacement is laid out.
#[derive(Debug)]
struct Swap<C> {
    old: C,
    frame: Rect,
    fade: Fade,
}

/// Sequences steps over a host application.
#[derive(Debug)]
pub struct Flow<C> {
    config: FlowConfig,
    steps: Vec<Step<C>>,
    state: FlowState,
    current: usize,
    delay_left: Duration,
    layer: SpotLayer,
    solver: LayoutSolver,
    focus: Option<Rect>,
    overlay_fade: Fade,
    content: Option<ContentLayout>,
    swap: Option<Swap<C>>,
    events: Vec<FlowEvent>,
}

impl<C> Flow<C> {
    pub fn new(config: FlowConfig, steps: Vec<Step<C>>) -> Self {
        let solver = LayoutSolver::new(ScreenMetrics::default(), LayoutDirection::Ltr)
            .with_screen_margin(config.screen_margin_dp);
        Self {
            delay_left: config.initial_delay,
            config,
            steps,
            state: FlowState::NotStarted,
            current: 0,
            layer: SpotLayer::new(),
            solver,
            focus: None,
            overlay_fade: Fade::fade_in(ATTACH_FADE),
            content: None,
            swap: None,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> FlowState {
        self.state
    }

    #[inline]
    pub fn steps(&self) -> &[Step<C>] {
        &self.steps
    }

    /// Index of the current step, `None` without steps.
    pub fn current_index(&self) -> Option<usize> {
        (self.current < self.steps.len()).then_some(self.current)
    }

    /// The current step, `None` without steps.
    pub fn current_step(&self) -> Option<&Step<C>> {
        self.steps.get(self.current)
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<FlowEvent> {
        std::mem::take(&mut self.events)
    }

    /// Schedule the overlay. It attaches on the first tick after the
    /// initial delay. Calling it again has no effect.
    pub fn show(&mut self) {
        if self.state != FlowState::NotStarted {
            coach_core::debug!(state = ?self.state, "show ignored, flow already started");
            return;
        }
        self.delay_left = self.config.initial_delay;
        self.state = FlowState::Pending;
    }

    /// Close the flow.
    ///
    /// The spot of the current step collapses (or disappears when not
    /// animated) while the overlay fades out; `Closed(reason)` is emitted
    /// once it detached. A pending flow is cancelled silently. Closing a
    /// flow that never started or already closes does nothing.
    pub fn close(&mut self, reason: CloseReason) {
        match self.state {
            FlowState::Pending => {
                coach_core::debug!("flow cancelled before attaching");
                self.state = FlowState::Closed { reason: None };
            }
            FlowState::Showing { .. } => {
                if let Some(index) = self.layer.current().map(|(_, step)| step) {
                    let state = if self.config.animate {
                        StepState::Closing
                    } else {
                        StepState::Closed
                    };
                    self.events.push(FlowEvent::step(state, index));
                    self.layer.remove_last();
                }
                self.swap = None;
                self.overlay_fade = Fade::fade_out(self.config.fade_duration);
                self.state = FlowState::Closing { reason };
            }
            FlowState::NotStarted | FlowState::Closing { .. } | FlowState::Closed { .. } => {}
        }
    }

    /// Move to the next step, or close with [`CloseReason::FlowEnded`] on
    /// the last one. Does nothing unless a step is showing.
    pub fn advance<H: Host<C>>(&mut self, host: &H) -> Result<(), FlowError> {
        if self.steps.is_empty() {
            return Err(FlowError::NoSteps);
        }
        let FlowState::Showing { step } = self.state else {
            coach_core::debug!(state = ?self.state, "advance ignored, no step showing");
            return Ok(());
        };
        if step + 1 >= self.steps.len() {
            self.close(CloseReason::FlowEnded);
        } else {
            self.show_step(host, step + 1);
        }
        Ok(())
    }

    /// Swap the secondary content of step `index`.
    ///
    /// When `anchoring` is given it replaces the step's placement too. If the
    /// step is showing, its content is laid out again: the old content fades
    /// out first when `animate` is set, otherwise the swap is immediate.
    pub fn replace_content<H: Host<C>>(
        &mut self,
        host: &H,
        index: usize,
        content: C,
        anchoring: Option<Anchoring>,
        animate: bool,
    ) -> Result<(), FlowError> {
        let len = self.steps.len();
        let step = self
            .steps
            .get_mut(index)
            .ok_or(FlowError::StepOutOfRange { index, len })?;
        let old = step.replace(content, anchoring);
        coach_core::debug!(index, animate, "step content replaced");

        if self.state != (FlowState::Showing { step: index }) {
            return Ok(());
        }
        if !animate {
            self.swap = None;
            self.place_content(host, index, None);
            return Ok(());
        }
        if self.swap.is_none() {
            let frame = self.content.map_or_else(Rect::default, |layout| layout.frame);
            self.swap = Some(Swap {
                old,
                frame,
                fade: Fade::fade_out(self.config.fade_duration),
            });
        }
        Ok(())
    }

    /// Advance timers and animations by `dt` and update the overlay.
    ///
    /// Returns whether something is still in motion, in which case the host
    /// should tick again on its next frame.
    pub fn tick<H: Host<C>>(&mut self, host: &H, dt: Duration) -> bool {
        match self.state {
            FlowState::NotStarted | FlowState::Closed { .. } => false,
            FlowState::Pending => {
                self.delay_left = self.delay_left.saturating_sub(dt);
                if self.delay_left.is_zero() {
                    self.attach(host);
                }
                true
            }
            FlowState::Showing { step } => {
                self.track_target(host, step);
                let moving = self.draw_layer();
                self.overlay_fade.tick(dt);
                let fading = self.tick_content(host, dt);
                moving || fading || !self.overlay_fade.is_complete()
            }
            FlowState::Closing { reason } => {
                self.draw_layer();
                self.overlay_fade.tick(dt);
                if self.overlay_fade.is_complete() {
                    self.detach(reason);
                    return false;
                }
                true
            }
        }
    }

    /// Route a tap on the overlay. Returns `true` when the overlay consumed
    /// it, `false` when it should reach the app underneath.
    pub fn handle_tap(&mut self, point: Point) -> bool {
        match self.state {
            FlowState::Showing { .. } => {}
            FlowState::Closing { .. } => return !self.config.allow_overlaid_interaction,
            _ => return false,
        }

        if let Some(frame) = self.close_button_frame()
            && frame.contains(point)
        {
            self.close(CloseReason::CloseButton);
            return true;
        }

        match self.layer.hit_test(point) {
            Hit::Target { step } => {
                self.events.push(FlowEvent::TargetClicked(step));
                false
            }
            Hit::Overlay if self.config.allow_overlaid_interaction => {
                self.close(CloseReason::OverlayTap);
                false
            }
            Hit::Overlay => true,
        }
    }

    /// What to paint, `None` while the overlay is not attached.
    pub fn overlay(&self) -> Option<Overlay<'_, C>> {
        if !self.state.is_attached() {
            return None;
        }
        let content = match &self.swap {
            Some(swap) => Some(ContentFrame {
                content: &swap.old,
                frame: swap.frame,
                opacity: swap.fade.opacity(),
            }),
            None => self.content.and_then(|layout| {
                self.steps.get(self.current).map(|step| ContentFrame {
                    content: step.content(),
                    frame: layout.frame,
                    opacity: layout.fade.map_or(1.0, |fade| fade.opacity()),
                })
            }),
        };
        Some(Overlay {
            opacity: self.overlay_fade.opacity(),
            spots: self.layer.frames(),
            content,
            close_button: self.close_button_frame(),
        })
    }

    fn close_button_frame(&self) -> Option<Rect> {
        self.config
            .close_button
            .map(|button| button.frame(self.solver.metrics(), self.solver.direction()))
    }

    fn attach<H: Host<C>>(&mut self, host: &H) {
        coach_core::debug!(steps = self.steps.len(), "coach-mark overlay attached");
        self.state = FlowState::Showing { step: 0 };
        self.overlay_fade = Fade::fade_in(ATTACH_FADE);
        self.events.push(FlowEvent::Shown);
        if self.steps.is_empty() {
            coach_core::warn!("flow shown without steps, dismissing");
            self.close(CloseReason::Dismissed);
            return;
        }
        self.show_step(host, 0);
    }

    fn detach(&mut self, reason: CloseReason) {
        let remaining: Vec<usize> = self.layer.steps().collect();
        for index in remaining {
            self.events.push(FlowEvent::step(StepState::Closed, index));
        }
        self.layer.clear();
        self.content = None;
        self.swap = None;
        self.focus = None;
        self.state = FlowState::Closed {
            reason: Some(reason),
        };
        self.events.push(FlowEvent::Closed(reason));
        coach_core::debug!(?reason, "coach-mark overlay detached");
    }

    /// Resolve the target of step `index` and draw it, or dismiss the flow
    /// when the target cannot be found.
    fn show_step<H: Host<C>>(&mut self, host: &H, index: usize) {
        let Some(step) = self.steps.get(index) else {
            return;
        };
        let target = step.target();
        let Some(focus) = host.resolve(target, self.config.window) else {
            coach_core::warn!(
                index,
                step_target = %target,
                "coach-mark target not found, dismissing flow"
            );
            self.close(CloseReason::Dismissed);
            return;
        };
        self.draw_step(host, index, focus, DrawMode::Transition);
    }

    fn draw_step<H: Host<C>>(&mut self, host: &H, index: usize, focus: Rect, mode: DrawMode) {
        let Some(step) = self.steps.get(index) else {
            return;
        };
        let _span = coach_core::debug_span!("coach_flow.draw_step", index).entered();
        let window = self.config.window;
        let direction = self.config.direction(host.layout_direction(window));
        self.solver.set_screen(host.screen(window), direction);

        let animate = self.config.animate;
        let shape = step.spot_shape(focus);
        let velocity = shape.velocity(self.config.velocity);

        match mode {
            DrawMode::Transition => {
                coach_core::debug!(index, ?focus, "drawing step");
                if let Some(previous) = self.layer.current().map(|(_, step)| step) {
                    let state = if animate {
                        StepState::Closing
                    } else {
                        StepState::Closed
                    };
                    self.events.push(FlowEvent::step(state, previous));
                }
                if animate {
                    self.events.push(FlowEvent::step(StepState::Opening, index));
                }
                self.layer.remove_last();
                self.layer.push(Spot::new(shape, focus, animate, velocity), index);
                self.swap = None;
            }
            DrawMode::Snap => {
                coach_core::debug!(index, ?focus, "target moved, redrawing step");
                if let Some(old) = self.layer.destroy_last()
                    && !old.is_idle()
                {
                    self.events.push(FlowEvent::step(StepState::Opened, index));
                }
                self.layer.push(Spot::snapped(shape, focus, animate, velocity), index);
            }
        }

        self.current = index;
        self.focus = Some(focus);
        self.state = FlowState::Showing { step: index };

        if self.swap.is_none() {
            let fade = match mode {
                DrawMode::Transition => None,
                DrawMode::Snap => self.content.and_then(|layout| layout.fade),
            };
            self.place_content(host, index, fade);
        }
    }

    /// Redraw the current step if its target or the screen changed.
    fn track_target<H: Host<C>>(&mut self, host: &H, index: usize) {
        let Some(step) = self.steps.get(index) else {
            return;
        };
        let window = self.config.window;
        let Some(focus) = host.resolve(step.target(), window) else {
            coach_core::debug!(index, "target left the view tree, keeping last bounds");
            return;
        };
        let direction = self.config.direction(host.layout_direction(window));
        let screen_changed =
            host.screen(window) != *self.solver.metrics() || direction != self.solver.direction();
        if self.focus != Some(focus) || screen_changed {
            self.draw_step(host, index, focus, DrawMode::Snap);
        }
    }

    /// Lay out the content of step `index` around the current spot.
    ///
    /// Content is measured at the screen width first and measured again at
    /// the width cap when it did not fit.
    fn place_content<H: Host<C>>(&mut self, host: &H, index: usize, fade: Option<Fade>) {
        let Some(spot) = self.layer.current().map(|(spot, _)| spot.target()) else {
            self.content = None;
            return;
        };
        let Some(step) = self.steps.get(index) else {
            return;
        };
        let resolution = self.solver.solve(spot, step.anchoring());
        let screen_width = self.solver.metrics().width();
        let mut placement = resolution.place(host.measure(step.content(), screen_width));
        if placement.clamped {
            placement = resolution.place(host.measure(step.content(), placement.max_width));
        }
        self.content = Some(ContentLayout {
            frame: placement.frame,
            fade,
        });
    }

    fn draw_layer(&mut self) -> bool {
        let frame = self.layer.draw();
        for event in frame.events {
            let (state, index) = match event {
                SpotEvent::Opened(index) => (StepState::Opened, index),
                SpotEvent::Closed(index) => (StepState::Closed, index),
            };
            self.events.push(FlowEvent::step(state, index));
        }
        frame.needs_redraw
    }

    fn tick_content<H: Host<C>>(&mut self, host: &H, dt: Duration) -> bool {
        if let Some(swap) = &mut self.swap {
            swap.fade.tick(dt);
            if !swap.fade.is_complete() {
                return true;
            }
            self.swap = None;
            let fade_in = Fade::fade_in(self.config.fade_duration);
            self.place_content(host, self.current, Some(fade_in));
            return true;
        }
        match self.content.as_mut().and_then(|layout| layout.fade.as_mut()) {
            Some(fade) => {
                fade.tick(dt);
                !fade.is_complete()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Target, TargetId, ViewKey, WindowId};
    use coach_core::geometry::Size;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const FRAME: Duration = Duration::from_millis(16);

    struct FakeHost {
        views: RefCell<HashMap<Target, Rect>>,
    }

    impl FakeHost {
        fn new(views: &[(Target, Rect)]) -> Self {
            Self {
                views: RefCell::new(views.iter().copied().collect()),
            }
        }
    }

    impl Host<&'static str> for FakeHost {
        fn resolve(&self, target: Target, _window: Option<WindowId>) -> Option<Rect> {
            self.views.borrow().get(&target).copied()
        }

        fn screen(&self, _window: Option<WindowId>) -> ScreenMetrics {
            ScreenMetrics::new(400, 800)
        }

        fn measure(&self, content: &&'static str, max_width: i32) -> Size {
            Size::new((content.len() as i32 * 10).min(max_width), 20)
        }
    }

    fn step(key: ViewKey) -> Step<&'static str> {
        Step::builder("hint").target_view(key).build().unwrap()
    }

    fn instant() -> FlowConfig {
        FlowConfig::default()
            .with_initial_delay(Duration::ZERO)
            .with_animation(false)
    }

    #[test]
    fn pending_close_is_silent() {
        let mut flow = Flow::new(instant(), vec![step(ViewKey(1))]);
        flow.show();
        assert_eq!(flow.state(), FlowState::Pending);
        flow.close(CloseReason::Dismissed);
        assert_eq!(flow.state(), FlowState::Closed { reason: None });
        assert!(flow.drain_events().is_empty());
    }

    #[test]
    fn snap_redraw_emits_opened_for_interrupted_spot() {
        let key = Target::View(ViewKey(1));
        let host = FakeHost::new(&[(key, Rect::new(100, 100, 200, 200))]);
        let config = FlowConfig::default().with_initial_delay(Duration::ZERO);
        let mut flow = Flow::new(config, vec![step(ViewKey(1))]);
        flow.show();
        flow.tick(&host, FRAME);
        flow.tick(&host, FRAME);
        flow.drain_events();

        host.views
            .borrow_mut()
            .insert(key, Rect::new(100, 300, 200, 400));
        flow.tick(&host, FRAME);
        assert_eq!(
            flow.drain_events(),
            vec![FlowEvent::step(StepState::Opened, 0)]
        );
        let overlay = flow.overlay().unwrap();
        assert_eq!(overlay.spots[0].bounds, Rect::new(100, 300, 200, 400));
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn unknown_target_dismisses_flow_with_warning() {
        let host = FakeHost::new(&[]);
        let missing = Step::builder("hint")
            .target_id(TargetId(999))
            .build()
            .unwrap();
        let mut flow = Flow::new(instant(), vec![missing]);
        flow.show();
        flow.tick(&host, FRAME);
        assert_eq!(
            flow.state(),
            FlowState::Closing {
                reason: CloseReason::Dismissed
            }
        );
        while flow.tick(&host, FRAME) {}
        assert_eq!(
            flow.drain_events(),
            vec![
                FlowEvent::Shown,
                FlowEvent::Closed(CloseReason::Dismissed)
            ]
        );
        assert!(logs_contain("coach-mark target not found"));
        assert!(logs_contain("id #999"));
    }
}
