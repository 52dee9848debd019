#![forbid(unsafe_code)]

//! The active spot list.
//!
//! [`SpotLayer`] holds every spot still on screen: the spot of the current
//! step plus, while a step change is animating, the collapsing spot of the
//! previous step. [`SpotLayer::draw`] advances all of them once and reports
//! the frames to clear from the dim layer together with the lifecycle events
//! that completed on this frame.
//!
//! # Invariants
//!
//! 1. `Opened(i)` is emitted once, on the frame the spot of step `i` becomes
//!    idle (the first frame for a non-animated spot).
//! 2. `Closed(i)` is emitted once, on the frame the spot of step `i` finishes
//!    collapsing; the spot is removed in the same call.
//! 3. Spots dropped through [`SpotLayer::destroy_last`] or
//!    [`SpotLayer::clear`] emit nothing.

use coach_core::geometry::Point;

use crate::spot::{Spot, SpotDirection, SpotFrame};

/// Lifecycle event completed during a [`SpotLayer::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotEvent {
    /// Expansion finished for the given step.
    Opened(usize),
    /// Collapse finished for the given step.
    Closed(usize),
}

/// Result of hit-testing a tap against the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hit {
    /// The tap landed on the highlighted element of an idle spot.
    Target { step: usize },
    /// The tap landed anywhere else on the overlay.
    Overlay,
}

/// Everything produced by one [`SpotLayer::draw`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerFrame {
    /// Frames to clear, in insertion order.
    pub spots: Vec<SpotFrame>,
    /// Events completed on this frame, in insertion order.
    pub events: Vec<SpotEvent>,
    /// Whether any spot still moves.
    pub needs_redraw: bool,
}

#[derive(Debug, Clone)]
struct Entry {
    spot: Spot,
    step: usize,
}

/// Ordered collection of on-screen spots.
#[derive(Debug, Clone, Default)]
pub struct SpotLayer {
    entries: Vec<Entry>,
}

impl SpotLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the spot for `step`. It becomes the current spot.
    pub fn push(&mut self, spot: Spot, step: usize) {
        self.entries.push(Entry { spot, step });
    }

    /// Start removing the last spot: collapse it when animated, drop it
    /// immediately otherwise.
    pub fn remove_last(&mut self) {
        let Some(last) = self.entries.last_mut() else {
            return;
        };
        if last.spot.is_animated() {
            last.spot.start_collapse();
        } else {
            self.entries.pop();
        }
    }

    /// Drop the last spot without a collapse or any event.
    pub fn destroy_last(&mut self) -> Option<Spot> {
        self.entries.pop().map(|entry| entry.spot)
    }

    /// Drop every spot without events.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Steps whose spots are still on screen, in insertion order.
    pub fn steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|entry| entry.step)
    }

    /// The most recently pushed spot that is not collapsing.
    pub fn current(&self) -> Option<(&Spot, usize)> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.spot.direction() == SpotDirection::Expand)
            .map(|entry| (&entry.spot, entry.step))
    }

    /// Frames to draw without advancing anything.
    pub fn frames(&self) -> Vec<SpotFrame> {
        self.entries
            .iter()
            .filter_map(|entry| entry.spot.last_frame())
            .collect()
    }

    /// Advance every spot by one frame.
    pub fn draw(&mut self) -> LayerFrame {
        let mut out = LayerFrame::default();
        self.entries.retain_mut(|entry| {
            let was_idle = entry.spot.is_idle();
            let frame = entry.spot.advance();
            out.needs_redraw |= frame.continuing;
            match entry.spot.direction() {
                SpotDirection::Expand => {
                    if !was_idle && entry.spot.is_idle() {
                        out.events.push(SpotEvent::Opened(entry.step));
                    }
                    out.spots.push(frame);
                    true
                }
                SpotDirection::Collapse if frame.continuing => {
                    out.spots.push(frame);
                    true
                }
                SpotDirection::Collapse => {
                    out.events.push(SpotEvent::Closed(entry.step));
                    false
                }
            }
        });
        out
    }

    /// Classify a tap at `point`.
    pub fn hit_test(&self, point: Point) -> Hit {
        match self.current() {
            Some((spot, step)) if spot.is_idle() && spot.focus().contains(point) => {
                Hit::Target { step }
            }
            _ => Hit::Overlay,
        }
    }
}
