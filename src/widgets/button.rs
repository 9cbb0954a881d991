//! Button widget

use crate::event::{Event, MouseButton};
use crate::layout::Bounds;
use crate::widget::{EventResult, Widget};

/// Button interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

/// A clickable button widget.
///
/// The click message fires on release, not on press: inside a kinetic
/// scroll container a press may still turn into a scroll gesture, and a
/// button that fired on press could not be backed out of. A move outside
/// the button while pressed (including the container's synthetic drag-away
/// move) drops the pressed highlight and disarms the click.
pub struct Button<M> {
    label: String,
    on_click: Option<M>,
    state: ButtonState,
}

impl<M> Button<M> {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            state: ButtonState::Normal,
        }
    }

    /// Set the click handler
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button currently shows the pressed highlight.
    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }
}

impl<M: Clone> Widget<M> for Button<M> {
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        match event {
            Event::MouseMove { position, .. } => {
                let inside = bounds.contains(position.x, position.y);
                let old_state = self.state;

                self.state = match (self.state, inside) {
                    (ButtonState::Pressed, true) => ButtonState::Pressed,
                    // Leaving while pressed cancels the pending click
                    (ButtonState::Pressed, false) => ButtonState::Normal,
                    (_, true) => ButtonState::Hovered,
                    (_, false) => ButtonState::Normal,
                };

                if self.state != old_state {
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }

            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                if bounds.contains(position.x, position.y) {
                    self.state = ButtonState::Pressed;
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }

            Event::MouseRelease {
                button: MouseButton::Left,
                position,
                ..
            } => {
                let was_pressed = self.state == ButtonState::Pressed;
                let inside = bounds.contains(position.x, position.y);

                self.state = if inside {
                    ButtonState::Hovered
                } else {
                    ButtonState::Normal
                };

                if was_pressed && inside {
                    match self.on_click.clone() {
                        Some(msg) => EventResult::RedrawWithMessage(msg),
                        None => EventResult::Redraw,
                    }
                } else if was_pressed {
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }

            Event::CursorLeft => {
                if self.state != ButtonState::Normal {
                    self.state = ButtonState::Normal;
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }

            _ => EventResult::None,
        }
    }
}

/// Helper function to create a button.
pub fn button<M>(label: impl Into<String>) -> Button<M> {
    Button::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    const BOUNDS: Bounds = Bounds {
        x: 10.0,
        y: 10.0,
        width: 80.0,
        height: 30.0,
    };

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: Point::new(x, y),
            time_ms: 0,
        }
    }

    fn release(x: f32, y: f32) -> Event {
        Event::MouseRelease {
            button: MouseButton::Left,
            position: Point::new(x, y),
            time_ms: 0,
        }
    }

    fn mv(x: f32, y: f32) -> Event {
        Event::MouseMove {
            position: Point::new(x, y),
            time_ms: 0,
        }
    }

    #[test]
    fn test_click_fires_on_release_inside() {
        let mut b = Button::new("ok").on_click(42);
        assert!(b.on_event(&press(20.0, 20.0), BOUNDS).into_message().is_none());
        assert!(b.is_pressed());
        let result = b.on_event(&release(20.0, 20.0), BOUNDS);
        assert_eq!(result.into_message(), Some(42));
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_move_outside_while_pressed_disarms() {
        let mut b = Button::new("ok").on_click(42);
        b.on_event(&press(20.0, 20.0), BOUNDS);
        // Synthetic drag-away from a scroll container lands just outside
        let result = b.on_event(&mv(BOUNDS.x - 1.0, BOUNDS.y - 1.0), BOUNDS);
        assert!(result.needs_redraw());
        assert!(!b.is_pressed());
        let result = b.on_event(&release(20.0, 20.0), BOUNDS);
        assert!(result.into_message().is_none());
    }

    #[test]
    fn test_press_outside_ignored() {
        let mut b: Button<u32> = Button::new("ok");
        let result = b.on_event(&press(0.0, 0.0), BOUNDS);
        assert!(!result.needs_redraw());
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_hover_state_tracks_cursor() {
        let mut b: Button<u32> = Button::new("ok");
        assert!(b.on_event(&mv(20.0, 20.0), BOUNDS).needs_redraw());
        assert!(b.on_event(&mv(200.0, 200.0), BOUNDS).needs_redraw());
        assert!(!b.on_event(&mv(201.0, 200.0), BOUNDS).needs_redraw());
    }
}
