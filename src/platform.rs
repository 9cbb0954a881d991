//! Translation from winit window events to widget [`Event`]s.
//!
//! winit does not timestamp its events, so the translator synthesizes the
//! monotonic millisecond clock the gesture tracker needs from a fixed epoch.
//! It also remembers the cursor position, since winit reports button changes
//! without coordinates.

use web_time::Instant;
use winit::event::{ElementState, WindowEvent};

use crate::event::{Event, MouseButton};
use crate::layout::Point;

/// Stateful winit-to-widget event converter. One per window.
pub struct EventTranslator {
    cursor: Point,
    epoch: Instant,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self {
            cursor: Point::zero(),
            epoch: Instant::now(),
        }
    }

    /// Last cursor position seen, in window coordinates.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Convert a window event. Returns `None` for event kinds the widget
    /// model does not consume.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                Some(Event::MouseMove {
                    position: self.cursor,
                    time_ms: self.now_ms(),
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Other(n) => MouseButton::Other(*n),
                    _ => return None,
                };
                let event = match state {
                    ElementState::Pressed => Event::MousePress {
                        button,
                        position: self.cursor,
                        time_ms: self.now_ms(),
                    },
                    ElementState::Released => Event::MouseRelease {
                        button,
                        position: self.cursor,
                        time_ms: self.now_ms(),
                    },
                };
                Some(event)
            }
            WindowEvent::CursorLeft { .. } => Some(Event::CursorLeft),
            _ => None,
        }
    }
}

impl Default for EventTranslator {
    fn default() -> Self {
        Self::new()
    }
}
