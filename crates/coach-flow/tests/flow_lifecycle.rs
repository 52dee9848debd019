//! End-to-end flow behavior against a scripted host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use coach_core::animation::AnimationVelocity;
use coach_core::geometry::{Point, Rect, Size};
use coach_core::metrics::ScreenMetrics;
use coach_flow::{
    CloseButton, CloseReason, Flow, FlowConfig, FlowError, FlowEvent, FlowState, Host, Step,
    StepState, Target, TargetId, ViewKey, WindowId,
};
use coach_layout::{Alignment, Anchoring, Connection, Edge, Position, PositionSpec};

const FRAME: Duration = Duration::from_millis(16);

// ── Helpers ─────────────────────────────────────────────────────────────

/// Host with movable targets and wrapping text content: every character is
/// 10 px wide and every line 20 px tall.
#[derive(Default)]
struct ScriptedHost {
    views: RefCell<HashMap<Target, Rect>>,
    measured: RefCell<Vec<i32>>,
}

impl ScriptedHost {
    fn with(views: &[(Target, Rect)]) -> Self {
        let host = Self::default();
        host.views.borrow_mut().extend(views.iter().copied());
        host
    }

    fn move_target(&self, target: Target, to: Rect) {
        self.views.borrow_mut().insert(target, to);
    }
}

impl Host<String> for ScriptedHost {
    fn resolve(&self, target: Target, _window: Option<WindowId>) -> Option<Rect> {
        self.views.borrow().get(&target).copied()
    }

    fn screen(&self, _window: Option<WindowId>) -> ScreenMetrics {
        ScreenMetrics::new(400, 800)
    }

    fn measure(&self, content: &String, max_width: i32) -> Size {
        self.measured.borrow_mut().push(max_width);
        let natural = content.len() as i32 * 10;
        let width = natural.min(max_width).max(1);
        let lines = (natural + width - 1) / width;
        Size::new(width, lines.max(1) * 20)
    }
}

const FIRST: Target = Target::View(ViewKey(1));
const SECOND: Target = Target::View(ViewKey(2));

fn host() -> ScriptedHost {
    ScriptedHost::with(&[
        (FIRST, Rect::new(100, 100, 200, 200)),
        (SECOND, Rect::new(0, 500, 40, 540)),
    ])
}

fn step_on(key: ViewKey, text: &str) -> Step<String> {
    Step::builder(text.to_string())
        .target_view(key)
        .position(PositionSpec::new(Position::Bottom, Alignment::Center))
        .build()
        .unwrap()
}

fn two_steps() -> Vec<Step<String>> {
    vec![step_on(ViewKey(1), "hint"), step_on(ViewKey(2), "next")]
}

fn animated() -> FlowConfig {
    FlowConfig::default()
        .with_initial_delay(Duration::ZERO)
        .with_velocity(AnimationVelocity::LightSpeed)
}

fn instant() -> FlowConfig {
    animated().with_animation(false)
}

/// Tick until the flow stops moving and return the events emitted.
fn settle(flow: &mut Flow<String>, host: &ScriptedHost) -> Vec<FlowEvent> {
    for _ in 0..1_000 {
        if !flow.tick(host, FRAME) {
            return flow.drain_events();
        }
    }
    panic!("flow never settled");
}

fn step_event(state: StepState, index: usize) -> FlowEvent {
    FlowEvent::StepStateChanged { state, index }
}

// ═════════════════════════════════════════════════════════════════════════
// Sequencing
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn animated_flow_emits_ordered_lifecycle() {
    let host = host();
    let mut flow = Flow::new(animated(), two_steps());
    flow.show();
    assert_eq!(flow.state(), FlowState::Pending);

    assert!(flow.tick(&host, FRAME));
    assert_eq!(
        flow.drain_events(),
        vec![FlowEvent::Shown, step_event(StepState::Opening, 0)]
    );
    assert_eq!(settle(&mut flow, &host), vec![step_event(StepState::Opened, 0)]);

    flow.advance(&host).unwrap();
    assert_eq!(flow.state(), FlowState::Showing { step: 1 });
    assert_eq!(
        flow.drain_events(),
        vec![
            step_event(StepState::Closing, 0),
            step_event(StepState::Opening, 1)
        ]
    );
    assert_eq!(
        settle(&mut flow, &host),
        vec![
            step_event(StepState::Closed, 0),
            step_event(StepState::Opened, 1)
        ]
    );

    flow.advance(&host).unwrap();
    assert_eq!(
        flow.state(),
        FlowState::Closing {
            reason: CloseReason::FlowEnded
        }
    );
    assert_eq!(flow.drain_events(), vec![step_event(StepState::Closing, 1)]);
    assert_eq!(
        settle(&mut flow, &host),
        vec![
            step_event(StepState::Closed, 1),
            FlowEvent::Closed(CloseReason::FlowEnded)
        ]
    );
    assert_eq!(
        flow.state(),
        FlowState::Closed {
            reason: Some(CloseReason::FlowEnded)
        }
    );
    assert!(flow.overlay().is_none());
}

#[test]
fn instant_flow_reports_closed_before_next_opened() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.show();
    flow.tick(&host, FRAME);
    assert_eq!(flow.drain_events(), vec![FlowEvent::Shown]);
    assert_eq!(settle(&mut flow, &host), vec![step_event(StepState::Opened, 0)]);

    flow.advance(&host).unwrap();
    assert_eq!(flow.drain_events(), vec![step_event(StepState::Closed, 0)]);
    assert_eq!(settle(&mut flow, &host), vec![step_event(StepState::Opened, 1)]);

    flow.advance(&host).unwrap();
    assert_eq!(flow.drain_events(), vec![step_event(StepState::Closed, 1)]);
    assert_eq!(
        settle(&mut flow, &host),
        vec![FlowEvent::Closed(CloseReason::FlowEnded)]
    );
}

#[test]
fn initial_delay_is_honored() {
    let host = host();
    let config = instant().with_initial_delay(Duration::from_millis(40));
    let mut flow = Flow::new(config, two_steps());
    flow.show();
    flow.tick(&host, FRAME);
    flow.tick(&host, FRAME);
    assert_eq!(flow.state(), FlowState::Pending);
    assert!(flow.overlay().is_none());
    flow.tick(&host, FRAME);
    assert_eq!(flow.state(), FlowState::Showing { step: 0 });
}

#[test]
fn show_is_idempotent() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.show();
    flow.show();
    settle(&mut flow, &host);
    flow.show();
    assert_eq!(flow.state(), FlowState::Showing { step: 0 });
    assert!(flow.drain_events().is_empty());
}

#[test]
fn advance_without_steps_is_an_error() {
    let host = host();
    let mut flow: Flow<String> = Flow::new(instant(), Vec::new());
    assert_eq!(flow.advance(&host), Err(FlowError::NoSteps));
    assert!(flow.current_step().is_none());
    assert_eq!(flow.current_index(), None);
}

#[test]
fn advance_before_show_does_nothing() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    assert_eq!(flow.advance(&host), Ok(()));
    assert_eq!(flow.state(), FlowState::NotStarted);
    assert_eq!(flow.current_index(), Some(0));
    assert_eq!(flow.current_step().map(|s| s.content().as_str()), Some("hint"));
}

#[test]
fn close_is_a_no_op_when_unattached_or_closed() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.close(CloseReason::Dismissed);
    assert_eq!(flow.state(), FlowState::NotStarted);

    flow.show();
    settle(&mut flow, &host);
    flow.close(CloseReason::Dismissed);
    flow.close(CloseReason::CloseButton);
    let events = settle(&mut flow, &host);
    let closed: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, FlowEvent::Closed(_)))
        .collect();
    assert_eq!(closed, vec![&FlowEvent::Closed(CloseReason::Dismissed)]);
    flow.close(CloseReason::Dismissed);
    assert!(flow.drain_events().is_empty());
}

#[test]
fn missing_target_mid_flow_dismisses() {
    let host = ScriptedHost::with(&[(FIRST, Rect::new(100, 100, 200, 200))]);
    let steps = vec![
        step_on(ViewKey(1), "hint"),
        Step::builder("gone".to_string())
            .target_id(TargetId(999))
            .build()
            .unwrap(),
    ];
    let mut flow = Flow::new(instant(), steps);
    flow.show();
    settle(&mut flow, &host);

    assert_eq!(flow.advance(&host), Ok(()));
    assert_eq!(flow.current_index(), Some(0));
    assert_eq!(
        settle(&mut flow, &host),
        vec![
            step_event(StepState::Closed, 0),
            FlowEvent::Closed(CloseReason::Dismissed)
        ]
    );
}

// ═════════════════════════════════════════════════════════════════════════
// Layout
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn content_sits_below_the_spot() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.show();
    settle(&mut flow, &host);

    let overlay = flow.overlay().unwrap();
    assert_eq!(overlay.opacity, 1.0);
    assert_eq!(overlay.spots.len(), 1);
    assert_eq!(overlay.spots[0].bounds, Rect::new(100, 100, 200, 200));
    assert_eq!(overlay.spots[0].corner_radius, 50);
    let content = overlay.content.unwrap();
    assert_eq!(content.content, "hint");
    assert_eq!(content.frame, Rect::new(130, 200, 170, 220));
    assert_eq!(content.opacity, 1.0);
}

#[test]
fn wide_content_is_measured_again_at_the_cap() {
    let host = host();
    let steps = vec![step_on(ViewKey(1), &"x".repeat(60))];
    let mut flow = Flow::new(instant(), steps);
    flow.show();
    flow.tick(&host, FRAME);

    // Anchor at x = 150 with a 16 px margin caps the width at 268.
    assert_eq!(*host.measured.borrow(), vec![400, 268]);
    let content = flow.overlay().unwrap().content.unwrap();
    assert_eq!(content.frame, Rect::new(16, 200, 284, 260));
}

#[test]
fn target_move_snaps_without_transition_events() {
    let host = host();
    let mut flow = Flow::new(animated(), two_steps());
    flow.show();
    settle(&mut flow, &host);

    host.move_target(FIRST, Rect::new(200, 400, 300, 500));
    let events = settle(&mut flow, &host);
    assert!(events.is_empty(), "unexpected events {events:?}");

    let overlay = flow.overlay().unwrap();
    assert_eq!(overlay.spots.len(), 1);
    assert_eq!(overlay.spots[0].bounds, Rect::new(200, 400, 300, 500));
    assert_eq!(
        overlay.content.unwrap().frame,
        Rect::new(230, 500, 270, 520)
    );
}

#[test]
fn forced_rtl_mirrors_connections() {
    let host = host();
    let step = Step::builder("hint".to_string())
        .target_view(ViewKey(1))
        .connections(vec![
            Connection::to_target(Edge::Top, Edge::Bottom),
            Connection::to_target(Edge::Start, Edge::End).with_margin(8),
        ])
        .build()
        .unwrap();
    let mut flow = Flow::new(instant().with_force_rtl(true), vec![step]);
    flow.show();
    settle(&mut flow, &host);

    // In RTL the spot's end edge is its left side; the content's start
    // (right) edge sits 8 px further left.
    let frame = flow.overlay().unwrap().content.unwrap().frame;
    assert_eq!(frame, Rect::new(52, 200, 92, 220));
}

// ═════════════════════════════════════════════════════════════════════════
// Content replacement
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn replacing_a_hidden_step_is_stored() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.show();
    settle(&mut flow, &host);

    flow.replace_content(&host, 1, "later".to_string(), None, true)
        .unwrap();
    assert_eq!(flow.overlay().unwrap().content.unwrap().content, "hint");
    assert_eq!(flow.steps()[1].content(), "later");

    assert_eq!(
        flow.replace_content(&host, 5, String::new(), None, false),
        Err(FlowError::StepOutOfRange { index: 5, len: 2 })
    );
}

#[test]
fn instant_replace_relayouts_immediately() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.show();
    settle(&mut flow, &host);

    let anchoring = Anchoring::from(PositionSpec::new(Position::Top, Alignment::Center));
    flow.replace_content(&host, 0, "longer".to_string(), Some(anchoring), false)
        .unwrap();
    let content = flow.overlay().unwrap().content.unwrap();
    assert_eq!(content.content, "longer");
    assert_eq!(content.frame, Rect::new(120, 80, 180, 100));
    assert_eq!(flow.state(), FlowState::Showing { step: 0 });
}

#[test]
fn animated_replace_fades_old_content_out_then_new_in() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.show();
    settle(&mut flow, &host);

    flow.replace_content(&host, 0, "fresh".to_string(), None, true)
        .unwrap();
    let first = flow.overlay().unwrap().content.unwrap();
    assert_eq!(first.content, "hint");
    assert_eq!(first.opacity, 1.0);

    assert!(flow.tick(&host, FRAME));
    let fading = flow.overlay().unwrap().content.unwrap();
    assert_eq!(fading.content, "hint");
    assert!(fading.opacity < 1.0);

    let mut saw_new_fading_in = false;
    while flow.tick(&host, FRAME) {
        let content = flow.overlay().unwrap().content.unwrap();
        if content.content == "fresh" && content.opacity < 1.0 {
            saw_new_fading_in = true;
        }
    }
    assert!(saw_new_fading_in);
    let settled = flow.overlay().unwrap().content.unwrap();
    assert_eq!(settled.content, "fresh");
    assert_eq!(settled.opacity, 1.0);
    assert_eq!(settled.frame, Rect::new(125, 200, 175, 220));
}

// ═════════════════════════════════════════════════════════════════════════
// Taps
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn tap_on_idle_target_reports_click_and_passes_through() {
    let host = host();
    let mut flow = Flow::new(animated(), two_steps());
    flow.show();
    flow.tick(&host, FRAME);
    flow.drain_events();

    // Not yet expanded.
    assert!(flow.handle_tap(Point::new(150, 150)));
    settle(&mut flow, &host);

    assert!(!flow.handle_tap(Point::new(150, 150)));
    assert_eq!(flow.drain_events(), vec![FlowEvent::TargetClicked(0)]);
}

#[test]
fn overlay_tap_is_swallowed_by_default() {
    let host = host();
    let mut flow = Flow::new(instant(), two_steps());
    flow.show();
    settle(&mut flow, &host);

    assert!(flow.handle_tap(Point::new(10, 700)));
    assert_eq!(flow.state(), FlowState::Showing { step: 0 });
}

#[test]
fn overlay_tap_closes_with_overlaid_interaction() {
    let host = host();
    let mut flow = Flow::new(instant().with_overlaid_interaction(true), two_steps());
    flow.show();
    settle(&mut flow, &host);

    assert!(!flow.handle_tap(Point::new(10, 700)));
    assert_eq!(
        flow.state(),
        FlowState::Closing {
            reason: CloseReason::OverlayTap
        }
    );
}

#[test]
fn close_button_closes_the_flow() {
    let host = host();
    let config = instant().with_close_button(CloseButton::new(Size::new(24, 24)));
    let mut flow = Flow::new(config, two_steps());
    flow.show();
    settle(&mut flow, &host);

    let button = flow.overlay().unwrap().close_button.unwrap();
    assert_eq!(button, Rect::new(360, 16, 384, 40));
    assert!(flow.handle_tap(Point::new(370, 20)));
    assert_eq!(
        settle(&mut flow, &host).last(),
        Some(&FlowEvent::Closed(CloseReason::CloseButton))
    );
}

#[test]
fn taps_before_attach_pass_through() {
    let mut flow = Flow::new(instant(), two_steps());
    assert!(!flow.handle_tap(Point::new(150, 150)));
    flow.show();
    assert!(!flow.handle_tap(Point::new(150, 150)));
}
