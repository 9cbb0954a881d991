//! Type-erased widget wrapper

use crate::event::Event;
use crate::layout::Bounds;
use crate::widget::{EventResult, Widget};

/// A type-erased widget that can hold any widget type.
///
/// The element owns the widget's position and size. Containers scroll and
/// resize by translating these bounds; the widget itself only ever sees the
/// bounds it currently occupies.
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
    bounds: Bounds,
}

impl<M> Element<M> {
    /// Create a new element from a widget placed at the given bounds
    pub fn new<W: Widget<M> + 'static>(widget: W, bounds: Bounds) -> Self {
        Self {
            widget: Box::new(widget),
            bounds,
        }
    }

    /// Current position and size of this element
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Move the element to an absolute position, keeping its size.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    /// Shift the element by (dx, dy).
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.bounds = self.bounds.translated(dx, dy);
    }

    /// Deliver an event to the wrapped widget at its current bounds
    pub fn on_event(&mut self, event: &Event) -> EventResult<M> {
        self.widget.on_event(event, self.bounds)
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
