#![forbid(unsafe_code)]

//! What the host paints for one frame.

use coach_core::geometry::Rect;
use coach_spot::SpotFrame;

/// Secondary content and where to put it.
#[derive(Debug)]
pub struct ContentFrame<'a, C> {
    pub content: &'a C,
    pub frame: Rect,
    /// Opacity of the content alone, in [0.0, 1.0].
    pub opacity: f32,
}

impl<C> Clone for ContentFrame<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ContentFrame<'_, C> {}

/// Snapshot of the attached overlay.
///
/// Paint the dim layer at `opacity`, clear every rectangle of `spots` with
/// its corner radius, then draw `content` and the close button on top.
#[derive(Debug)]
pub struct Overlay<'a, C> {
    /// Opacity of the whole overlay, in [0.0, 1.0].
    pub opacity: f32,
    pub spots: Vec<SpotFrame>,
    pub content: Option<ContentFrame<'a, C>>,
    pub close_button: Option<Rect>,
}
