#![forbid(unsafe_code)]

//! Steps of a flow.

use coach_core::geometry::Rect;
use coach_layout::{Anchoring, Connection, PositionSpec};
use coach_spot::{ShapeKind, SpotShape};

use crate::error::ConfigError;
use crate::host::{Target, TargetId, ViewKey};

/// One stage of a flow: what to highlight, how, and what to show next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<C> {
    target: Target,
    shape: ShapeKind,
    size_percentage: f64,
    corner_radius: i32,
    anchoring: Anchoring,
    content: C,
}

impl<C> Step<C> {
    /// Start building a step showing `content`.
    pub fn builder(content: C) -> StepBuilder<C> {
        StepBuilder::new(content)
    }

    #[inline]
    pub fn target(&self) -> Target {
        self.target
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn size_percentage(&self) -> f64 {
        self.size_percentage
    }

    #[inline]
    pub fn corner_radius(&self) -> i32 {
        self.corner_radius
    }

    #[inline]
    pub fn anchoring(&self) -> &Anchoring {
        &self.anchoring
    }

    /// Secondary content.
    #[inline]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Spot shape for the target currently at `focus`.
    pub fn spot_shape(&self, focus: Rect) -> SpotShape {
        SpotShape::from_focus(self.shape, focus, self.size_percentage, self.corner_radius)
    }

    pub(crate) fn replace(&mut self, content: C, anchoring: Option<Anchoring>) -> C {
        if let Some(anchoring) = anchoring {
            self.anchoring = anchoring;
        }
        std::mem::replace(&mut self.content, content)
    }
}

/// Builder for [`Step`].
#[derive(Debug, Clone)]
pub struct StepBuilder<C> {
    content: C,
    view: Option<ViewKey>,
    id: Option<TargetId>,
    shape: ShapeKind,
    size_percentage: f64,
    corner_radius: i32,
    anchoring: Anchoring,
}

impl<C> StepBuilder<C> {
    fn new(content: C) -> Self {
        Self {
            content,
            view: None,
            id: None,
            shape: ShapeKind::default(),
            size_percentage: 100.0,
            corner_radius: 0,
            anchoring: Anchoring::default(),
        }
    }

    /// Highlight a view the host already holds.
    #[must_use]
    pub fn target_view(mut self, key: ViewKey) -> Self {
        self.view = Some(key);
        self
    }

    /// Highlight the view found under `id` when the step is drawn.
    #[must_use]
    pub fn target_id(mut self, id: TargetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    /// Spot size relative to the target, in percent. Zero or less keeps the
    /// target's own size.
    #[must_use]
    pub fn size_percentage(mut self, percentage: f64) -> Self {
        self.size_percentage = percentage;
        self
    }

    /// Corner radius in pixels, used by rounded rectangles only.
    #[must_use]
    pub fn corner_radius(mut self, radius: i32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Place the content with edge connections.
    #[must_use]
    pub fn connections(mut self, connections: Vec<Connection>) -> Self {
        self.anchoring = Anchoring::Connections(connections);
        self
    }

    /// Place the content with a position, alignment and deviation.
    #[must_use]
    pub fn position(mut self, spec: PositionSpec) -> Self {
        self.anchoring = Anchoring::Position(spec);
        self
    }

    #[must_use]
    pub fn anchoring(mut self, anchoring: Anchoring) -> Self {
        self.anchoring = anchoring;
        self
    }

    pub fn build(self) -> Result<Step<C>, ConfigError> {
        let target = match (self.view, self.id) {
            (Some(_), Some(_)) => return Err(ConfigError::BothTargets),
            (None, None) => return Err(ConfigError::MissingTarget),
            (Some(key), None) => Target::View(key),
            (None, Some(id)) => Target::Id(id),
        };
        if !self.size_percentage.is_finite() {
            return Err(ConfigError::InvalidSizePercentage {
                value: self.size_percentage,
            });
        }
        if let Anchoring::Connections(connections) = &self.anchoring
            && let Some(bad) = connections.iter().find(|c| !c.is_valid())
        {
            return Err(ConfigError::MismatchedEdges {
                from: bad.from,
                to: bad.to,
            });
        }
        Ok(Step {
            target,
            shape: self.shape,
            size_percentage: self.size_percentage,
            corner_radius: self.corner_radius,
            anchoring: self.anchoring,
            content: self.content,
        })
    }
}
