use crate::layout::Point;
use crate::timer::TimerToken;

/// Events that widgets can respond to.
///
/// Pointer events carry `time_ms`, a monotonic millisecond timestamp taken
/// from the host event stream. Velocity estimation divides pointer deltas by
/// deltas of this clock, so it only has to be monotonic and consistent
/// across one gesture, not wall-accurate.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: Point,
        time_ms: u64,
    },
    /// Mouse button released.
    MouseRelease {
        button: MouseButton,
        position: Point,
        time_ms: u64,
    },
    /// Mouse moved.
    MouseMove { position: Point, time_ms: u64 },
    /// Cursor left the window.
    CursorLeft,
    /// A timer scheduled through [`crate::timer::TimerService`] expired.
    Timer { token: TimerToken },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
