//! Widget trait and event-handling result type

use crate::event::Event;
use crate::layout::Bounds;

/// The core widget trait that child elements implement.
///
/// Widgets are retained: they keep their own interaction state between
/// events. Position and size live on the wrapping [`crate::Element`], which
/// passes them in on every event so containers can reposition children
/// without the widgets noticing.
pub trait Widget<M> {
    /// Handle an event, optionally producing a message and/or redraw request
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }
}

/// Outcome of delivering an event to a widget.
#[derive(Debug)]
pub enum EventResult<M> {
    /// Event ignored or handled without visible effect
    None,
    /// Visual state changed, a redraw is needed
    Redraw,
    /// A message for the embedding application
    Message(M),
    /// Both a message and a redraw request
    RedrawWithMessage(M),
}

impl<M> EventResult<M> {
    /// Whether this result asks for a redraw.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, EventResult::Redraw | EventResult::RedrawWithMessage(_))
    }

    /// Extract the message, if any.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(m) | EventResult::RedrawWithMessage(m) => Some(m),
            _ => None,
        }
    }

    /// Add a redraw request to this result.
    pub fn with_redraw(self) -> Self {
        match self {
            EventResult::None | EventResult::Redraw => EventResult::Redraw,
            EventResult::Message(m) | EventResult::RedrawWithMessage(m) => {
                EventResult::RedrawWithMessage(m)
            }
        }
    }

    /// Combine two results: the first message wins, redraw requests are OR-ed.
    pub fn merge(self, other: Self) -> Self {
        let redraw = self.needs_redraw() || other.needs_redraw();
        let message = self.into_message().or(other.into_message());
        match (message, redraw) {
            (Some(m), true) => EventResult::RedrawWithMessage(m),
            (Some(m), false) => EventResult::Message(m),
            (None, true) => EventResult::Redraw,
            (None, false) => EventResult::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_first_message() {
        let merged = EventResult::Message(1).merge(EventResult::Message(2));
        assert_eq!(merged.into_message(), Some(1));
    }

    #[test]
    fn test_merge_carries_redraw() {
        let merged: EventResult<()> = EventResult::Redraw.merge(EventResult::None);
        assert!(merged.needs_redraw());
        let merged = EventResult::None.merge(EventResult::RedrawWithMessage(7));
        assert!(merged.needs_redraw());
        assert_eq!(merged.into_message(), Some(7));
    }

    #[test]
    fn test_with_redraw_upgrades() {
        assert!(EventResult::<()>::None.with_redraw().needs_redraw());
        let r = EventResult::Message(3).with_redraw();
        assert!(r.needs_redraw());
        assert_eq!(r.into_message(), Some(3));
    }
}
