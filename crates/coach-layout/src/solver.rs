#![forbid(unsafe_code)]

//! Per-edge resolution of connections.
//!
//! Every connection pins one edge of the secondary content independently.
//! The content's own measured size fills the rest, as in a box model:
//!
//! - both edges of an axis pinned: the content is centered between them;
//! - one edge pinned: the content grows away from it;
//! - nothing pinned: the content sits at the start of the screen margin
//!   (horizontally) or at the top of the screen (vertically).
//!
//! Horizontal positions are kept in two forms: `offset`, measured from the
//! start side (left in LTR, right in RTL), and `absolute`, measured from the
//! left of the screen.
//!
//! # Max width
//!
//! The width cap leaves `margin` pixels free on every screen side the
//! content can grow towards:
//!
//! | pinned        | cap                                  |
//! |---------------|--------------------------------------|
//! | left + right  | `2 * min(mid - margin, W - margin - mid)` |
//! | left only     | `W - margin - left`                  |
//! | right only    | `right - margin`                     |
//! | none          | `W - 2 * margin`                     |
//!
//! The result is clamped to `[0, W]`.

use coach_core::direction::LayoutDirection;
use coach_core::geometry::{Rect, Size};
use coach_core::metrics::ScreenMetrics;

use crate::connection::{Anchor, Axis, Connection, Edge};
use crate::guide::{Guide, GuideId, GuideIds};
use crate::position::PositionSpec;

/// Default free space kept between the content and the screen sides.
pub const DEFAULT_SCREEN_MARGIN_DP: i32 = 16;

/// How a step places its secondary content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Anchoring {
    /// Independent edge-to-edge connections.
    Connections(Vec<Connection>),
    /// Position, alignment and deviation relative to the spot.
    Position(PositionSpec),
}

impl Default for Anchoring {
    fn default() -> Self {
        Self::Connections(Vec::new())
    }
}

impl From<Vec<Connection>> for Anchoring {
    fn from(connections: Vec<Connection>) -> Self {
        Self::Connections(connections)
    }
}

impl From<PositionSpec> for Anchoring {
    fn from(spec: PositionSpec) -> Self {
        Self::Position(spec)
    }
}

/// A pinned edge of the secondary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedEdge {
    pub edge: Edge,
    /// y for vertical edges, distance from the start side for horizontal ones.
    pub offset: i32,
    /// y for vertical edges, x from the left of the screen for horizontal ones.
    pub absolute: i32,
    /// Guide line the edge is pinned to, if the connection needed one.
    pub guide: Option<GuideId>,
}

/// Final frame of the secondary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub frame: Rect,
    pub max_width: i32,
    /// The measured width exceeded `max_width` and was cut down. The content
    /// should be measured again at `max_width`.
    pub clamped: bool,
}

/// Pinned edges and guides for one draw of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    screen: Size,
    direction: LayoutDirection,
    margin: i32,
    anchor: Rect,
    edges: [Option<ResolvedEdge>; 4],
    guides: Vec<Guide>,
}

const fn slot(edge: Edge) -> usize {
    match edge {
        Edge::Top => 0,
        Edge::Bottom => 1,
        Edge::Start => 2,
        Edge::End => 3,
    }
}

impl Resolution {
    /// Frame `Target` connections were resolved against.
    #[inline]
    pub fn anchor_frame(&self) -> Rect {
        self.anchor
    }

    #[inline]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Screen margin in pixels.
    #[inline]
    pub fn margin(&self) -> i32 {
        self.margin
    }

    #[inline]
    pub fn edge(&self, edge: Edge) -> Option<ResolvedEdge> {
        self.edges[slot(edge)]
    }

    /// Pinned edges in `Top, Bottom, Start, End` order.
    pub fn edges(&self) -> impl Iterator<Item = ResolvedEdge> + '_ {
        self.edges.iter().flatten().copied()
    }

    /// Guides created for this resolution, in connection order.
    #[inline]
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Absolute x of the pinned left and right edges.
    fn physical_pins(&self) -> (Option<i32>, Option<i32>) {
        let start = self.edge(Edge::Start).map(|e| e.absolute);
        let end = self.edge(Edge::End).map(|e| e.absolute);
        if self.direction.is_rtl() {
            (end, start)
        } else {
            (start, end)
        }
    }

    /// Widest the content may be without crossing the screen margin.
    pub fn max_width(&self) -> i32 {
        let w = self.screen.width;
        let m = self.margin;
        let raw = match self.physical_pins() {
            (Some(left), Some(right)) => {
                // Twice the midpoint, kept exact so mirrored scenes agree.
                let sum = i64::from(left) + i64::from(right);
                let (w, m) = (i64::from(w), i64::from(m));
                let cap = (sum - 2 * m).min(2 * w - 2 * m - sum);
                i32::try_from(cap.clamp(0, w.max(0))).unwrap_or(0)
            }
            (Some(left), None) => w.saturating_sub(m).saturating_sub(left),
            (None, Some(right)) => right.saturating_sub(m),
            (None, None) => w.saturating_sub(m.saturating_mul(2)),
        };
        raw.clamp(0, w.max(0))
    }

    /// Place content of the `measured` size.
    pub fn place(&self, measured: Size) -> Placement {
        let max_width = self.max_width();
        let clamped = measured.width > max_width;
        let width = measured.width.clamp(0, max_width);
        let height = measured.height.max(0);

        let left = match self.physical_pins() {
            (Some(l), Some(r)) => midpoint(l, r).saturating_sub(width / 2),
            (Some(l), None) => l,
            (None, Some(r)) => r.saturating_sub(width),
            (None, None) if self.direction.is_rtl() => {
                self.screen.width.saturating_sub(self.margin).saturating_sub(width)
            }
            (None, None) => self.margin,
        };
        let top_pin = self.edge(Edge::Top).map(|e| e.absolute);
        let bottom_pin = self.edge(Edge::Bottom).map(|e| e.absolute);
        let top = match (top_pin, bottom_pin) {
            (Some(t), Some(b)) => midpoint(t, b).saturating_sub(height / 2),
            (Some(t), None) => t,
            (None, Some(b)) => b.saturating_sub(height),
            (None, None) => 0,
        };

        Placement {
            frame: Rect::from_origin_size(left, top, Size::new(width, height)),
            max_width,
            clamped,
        }
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    let mid = (i64::from(a) + i64::from(b)) / 2;
    i32::try_from(mid).unwrap_or(if mid < 0 { i32::MIN } else { i32::MAX })
}

/// Resolves connections against spot bounds for a given screen.
///
/// The solver owns the guide namespace, so identifiers stay unique across
/// every step it resolves.
#[derive(Debug, Clone)]
pub struct LayoutSolver {
    metrics: ScreenMetrics,
    direction: LayoutDirection,
    screen_margin_dp: i32,
    guides: GuideIds,
}

impl LayoutSolver {
    pub fn new(metrics: ScreenMetrics, direction: LayoutDirection) -> Self {
        Self {
            metrics,
            direction,
            screen_margin_dp: DEFAULT_SCREEN_MARGIN_DP,
            guides: GuideIds::new(),
        }
    }

    /// Set the screen margin in density-independent units.
    #[must_use]
    pub fn with_screen_margin(mut self, dp: i32) -> Self {
        self.screen_margin_dp = dp.max(0);
        self
    }

    /// Update the screen after a rotation or window change.
    pub fn set_screen(&mut self, metrics: ScreenMetrics, direction: LayoutDirection) {
        self.metrics = metrics;
        self.direction = direction;
    }

    #[inline]
    pub fn metrics(&self) -> &ScreenMetrics {
        &self.metrics
    }

    #[inline]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Resolve `anchoring` for a spot drawn at `spot`.
    pub fn solve(&mut self, spot: Rect, anchoring: &Anchoring) -> Resolution {
        match anchoring {
            Anchoring::Connections(connections) => self.resolve(spot, connections),
            Anchoring::Position(spec) => self.resolve_position(spot, spec),
        }
    }

    /// Resolve a position placement for a spot drawn at `spot`.
    pub fn resolve_position(&mut self, spot: Rect, spec: &PositionSpec) -> Resolution {
        let frame = spec.anchor_frame(spot, &self.metrics);
        let connections = spec.to_connections(self.direction);
        self.resolve(frame, &connections)
    }

    /// Resolve `connections` against `anchor` for `Target` anchors.
    ///
    /// Later connections on the same edge replace earlier ones. Connections
    /// between edges of different axes are skipped.
    pub fn resolve(&mut self, anchor: Rect, connections: &[Connection]) -> Resolution {
        let screen = self.metrics.size;
        let direction = self.direction;
        let mut edges = [None; 4];
        let mut guides = Vec::new();

        for connection in connections.iter().filter(|c| c.is_valid()) {
            let margin = self.metrics.dp_to_px(connection.margin);
            let (offset, guide) = match connection.anchor {
                Anchor::Parent => {
                    let base = connection.to.offset_in_parent(screen);
                    let offset = if connection.from.is_leading() {
                        base.saturating_add(margin)
                    } else {
                        base.saturating_sub(margin)
                    };
                    (offset, None)
                }
                Anchor::Target => {
                    let base = connection.to.offset_in(anchor, direction, screen.width);
                    if margin == 0 {
                        (base, None)
                    } else {
                        let begin = base.saturating_add(margin);
                        let id = self.guides.allocate();
                        guides.push(Guide {
                            id,
                            axis: connection.to.axis(),
                            begin,
                        });
                        (begin, Some(id))
                    }
                }
            };
            let absolute = match connection.from.axis() {
                Axis::Vertical => offset,
                Axis::Horizontal => direction.start_relative(offset, screen.width),
            };
            edges[slot(connection.from)] = Some(ResolvedEdge {
                edge: connection.from,
                offset,
                absolute,
                guide,
            });
        }

        Resolution {
            screen,
            direction,
            margin: self.metrics.dp_to_px(self.screen_margin_dp),
            anchor,
            edges,
            guides,
        }
    }
}
