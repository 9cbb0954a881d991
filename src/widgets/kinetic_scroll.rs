//! Kinetic scrolling container widget.
//!
//! A child-bearing panel that keeps scrolling after a drag-release gesture,
//! with touch-style momentum. The container intercepts pointer events,
//! disambiguates clicks on children from scroll gestures with a small
//! movement threshold, estimates release velocity from consecutive pointer
//! samples, and then coasts under linear friction on a fixed-rate timer
//! until it hits the scroll limits or the velocity decays to zero.
//!
//! # Example
//!
//! ```rust,ignore
//! use flick_ui::prelude::*;
//!
//! let mut timers = TimerQueue::new();
//! let mut panel = KineticScroll::new(0.0, 0.0, 320.0, 480.0)
//!     .label("inbox")
//!     .child(Element::new(button("Reply").on_click(Msg::Reply),
//!                         Bounds::new(8.0, 8.0, 120.0, 32.0)));
//!
//! // Host event loop: feed pointer events and expired timers.
//! let result = panel.handle(&event, &mut timers);
//! for token in timers.due() {
//!     panel.handle(&Event::Timer { token }, &mut timers);
//! }
//! ```

use log::{debug, trace};

use crate::config::ScrollConfig;
use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Point};
use crate::timer::{TimerService, TimerToken};
use crate::widget::EventResult;

/// Gesture/animation state of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// No gesture and no animation in progress
    #[default]
    Idle,
    /// Pointer is down, displacement still below the drag threshold
    Pressed,
    /// Pointer is down and the gesture has been claimed as a scroll
    Dragging,
    /// Pointer is up, coasting under friction on the tick timer
    Decelerating,
}

/// A container whose children can be scrolled by dragging anywhere inside
/// it, with inertial follow-through on release.
///
/// Children keep absolute positions on their [`Element`] wrappers; scrolling
/// translates those positions, so hit testing and event forwarding always
/// work on current coordinates. All state transitions happen on the host's
/// event-dispatch thread through [`KineticScroll::handle`]; `&mut self`
/// makes pointer handlers and timer ticks structurally mutually exclusive.
pub struct KineticScroll<M> {
    bounds: Bounds,
    label: Option<String>,
    config: ScrollConfig,
    children: Vec<Element<M>>,

    /// Current scroll offset; `0 <= offset <= max_offset` after every
    /// gesture or tick mutation.
    offset: (f32, f32),
    /// Scroll limits, cached once per gesture at press time. Children are
    /// assumed not to change layout while a gesture is in progress.
    max_offset: (f32, f32),

    phase: ScrollPhase,
    /// Scroll offset when the current gesture started
    start_offset: (f32, f32),
    /// Pointer position when the current gesture started
    start_event: Point,
    /// Most recent pointer sample, for velocity estimation
    last_event: Point,
    last_time_ms: u64,
    /// Estimated pointer velocity in px/ms
    velocity: (f32, f32),

    /// Child that received the initial press. `None` when the press only
    /// stopped a fling, and cleared whenever the container returns to
    /// `Idle`, so a forward can never address a stale capture.
    captured: Option<usize>,
    /// Pending deceleration tick registration
    timer: Option<TimerToken>,
}

impl<M> KineticScroll<M> {
    /// Create an empty container at the given position and viewport size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::new(x, y, width, height),
            label: None,
            config: ScrollConfig::default(),
            children: Vec::new(),
            offset: (0.0, 0.0),
            max_offset: (0.0, 0.0),
            phase: ScrollPhase::Idle,
            start_offset: (0.0, 0.0),
            start_event: Point::zero(),
            last_event: Point::zero(),
            last_time_ms: 0,
            velocity: (0.0, 0.0),
            captured: None,
            timer: None,
        }
    }

    /// Set an identifying label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the scroll configuration.
    pub fn config(mut self, config: ScrollConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a child element (builder form).
    pub fn child(mut self, element: Element<M>) -> Self {
        self.children.push(element);
        self
    }

    /// Add a child element.
    pub fn push(&mut self, element: Element<M>) {
        self.children.push(element);
    }

    pub fn label_str(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current scroll offset `(x, y)`.
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn offset_x(&self) -> f32 {
        self.offset.0
    }

    pub fn offset_y(&self) -> f32 {
        self.offset.1
    }

    /// Estimated gesture velocity in px/ms.
    pub fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn children(&self) -> &[Element<M>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element<M>] {
        &mut self.children
    }

    /// Maximum scroll offset per axis, derived from the bounding box of all
    /// children minus the viewport size. Empty containers have a `(0, 0)`
    /// range and scrolling is a no-op.
    pub fn scroll_range(&self) -> (f32, f32) {
        let mut iter = self.children.iter();
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        let bbox = iter.fold(first.bounds(), |acc, child| acc.union(&child.bounds()));
        (
            (bbox.width - self.bounds.width).max(0.0),
            (bbox.height - self.bounds.height).max(0.0),
        )
    }

    /// Scroll to an absolute offset, repositioning every child by the
    /// delta. Returns `true` if anything moved (the caller should redraw).
    ///
    /// This is the single mutation path for the scroll position. It does
    /// not clamp; gesture and tick handlers clamp to [`Self::scroll_range`]
    /// before calling, and programmatic callers are expected to do the
    /// same.
    pub fn scroll_to(&mut self, x: f32, y: f32) -> bool {
        let dx = self.offset.0 - x;
        let dy = self.offset.1 - y;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.offset = (x, y);
        for child in &mut self.children {
            child.translate(dx, dy);
        }
        true
    }

    /// Apply new container geometry, then shift children by the origin
    /// delta (in that order: the shift is relative to the old position).
    /// Children keep their own sizes.
    pub fn resize(&mut self, new_bounds: Bounds) {
        let dx = new_bounds.x - self.bounds.x;
        let dy = new_bounds.y - self.bounds.y;
        self.bounds = new_bounds;
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    /// Handle an event from the host, driving the gesture state machine.
    ///
    /// Pointer events belonging to an active gesture are consumed; events
    /// the container does not recognize fall through to child dispatch.
    pub fn handle(&mut self, event: &Event, timers: &mut dyn TimerService) -> EventResult<M> {
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
                time_ms,
            } => {
                if !self.bounds.contains(position.x, position.y) {
                    return EventResult::None;
                }
                self.on_press(event, *position, *time_ms, timers)
            }
            Event::MouseMove { position, time_ms }
                if matches!(self.phase, ScrollPhase::Pressed | ScrollPhase::Dragging) =>
            {
                self.on_gesture_move(event, *position, *time_ms)
            }
            Event::MouseRelease {
                button: MouseButton::Left,
                ..
            } if matches!(self.phase, ScrollPhase::Pressed | ScrollPhase::Dragging) => {
                self.on_release(event, timers)
            }
            Event::Timer { token } if self.timer == Some(*token) => self.on_tick(timers),
            // Hover moves, other buttons, stale timers, cursor-left: default
            // child dispatch.
            _ => self.forward_to_children(event),
        }
    }

    fn on_press(
        &mut self,
        event: &Event,
        position: Point,
        time_ms: u64,
        timers: &mut dyn TimerService,
    ) -> EventResult<M> {
        // A fresh press must deterministically cancel a pending tick before
        // new gesture state is established.
        if let Some(token) = self.timer.take() {
            timers.cancel(token);
        }

        let interrupted_fling = self.phase == ScrollPhase::Decelerating;

        self.max_offset = self.scroll_range();
        self.start_offset = self.offset;
        self.start_event = position;
        self.last_event = position;
        self.last_time_ms = time_ms;
        self.velocity = (0.0, 0.0);

        let mut result = EventResult::None;
        if interrupted_fling {
            // The press only stops the fling; no child gets it.
            self.captured = None;
        } else {
            self.captured = self.hit_child(position);
            if let Some(index) = self.captured {
                trace!("press captured child {index} at ({:.1}, {:.1})", position.x, position.y);
                result = self.children[index].on_event(event);
            }
        }

        self.phase = ScrollPhase::Pressed;
        result
    }

    fn on_gesture_move(&mut self, event: &Event, position: Point, time_ms: u64) -> EventResult<M> {
        if self.phase == ScrollPhase::Pressed {
            let direction = self.config.direction;
            let disp_x = if direction.has_horizontal() {
                position.x - self.start_event.x
            } else {
                0.0
            };
            let disp_y = if direction.has_vertical() {
                position.y - self.start_event.y
            } else {
                0.0
            };

            // Unclamped pointer displacement decides click vs. scroll.
            if disp_x.abs() <= self.config.press_threshold
                && disp_y.abs() <= self.config.press_threshold
            {
                // Still a potential click on the child; no offset change.
                return match self.captured {
                    Some(index) => self.children[index].on_event(event),
                    None => EventResult::None,
                };
            }

            // The gesture is a scroll: steal it from the captured child by
            // delivering a move just outside its bounds, so its pressed
            // highlight drops and its click disarms.
            let mut result = EventResult::None;
            if let Some(index) = self.captured {
                let child_bounds = self.children[index].bounds();
                let synthetic = Event::MouseMove {
                    position: Point::new(child_bounds.x - 1.0, child_bounds.y - 1.0),
                    time_ms,
                };
                result = self.children[index].on_event(&synthetic);
            }
            self.phase = ScrollPhase::Dragging;
            debug!(
                "drag start: displacement ({disp_x:.1}, {disp_y:.1}) px, offset ({:.1}, {:.1})",
                self.offset.0, self.offset.1
            );
            return result.merge(self.drag_update(position, time_ms)).with_redraw();
        }

        self.drag_update(position, time_ms)
    }

    /// Apply a drag sample: move to the clamped target offset and update
    /// the velocity estimate.
    fn drag_update(&mut self, position: Point, time_ms: u64) -> EventResult<M> {
        let direction = self.config.direction;
        let target_x = if direction.has_horizontal() {
            (self.start_offset.0 + self.start_event.x - position.x).clamp(0.0, self.max_offset.0)
        } else {
            self.offset.0
        };
        let target_y = if direction.has_vertical() {
            (self.start_offset.1 + self.start_event.y - position.y).clamp(0.0, self.max_offset.1)
        } else {
            self.offset.1
        };
        let moved = self.scroll_to(target_x, target_y);

        // Instantaneous velocity from consecutive samples; a zero elapsed
        // time would divide to infinity, so that sample keeps the previous
        // estimate.
        let elapsed = time_ms.saturating_sub(self.last_time_ms);
        if elapsed > 0 {
            let dt = elapsed as f32;
            self.velocity = (
                if direction.has_horizontal() {
                    (position.x - self.last_event.x) / dt
                } else {
                    0.0
                },
                if direction.has_vertical() {
                    (position.y - self.last_event.y) / dt
                } else {
                    0.0
                },
            );
            trace!(
                "drag sample: v = ({:.3}, {:.3}) px/ms over {elapsed} ms",
                self.velocity.0,
                self.velocity.1
            );
        }
        self.last_event = position;
        self.last_time_ms = time_ms;

        if moved {
            EventResult::Redraw
        } else {
            EventResult::None
        }
    }

    fn on_release(&mut self, event: &Event, timers: &mut dyn TimerService) -> EventResult<M> {
        let mut result = EventResult::None;
        if self.phase == ScrollPhase::Pressed {
            // The gesture never became a scroll: complete the click.
            if let Some(index) = self.captured {
                result = self.children[index].on_event(event);
            }
        }

        let (vx, vy) = self.velocity;
        if vx.abs() > self.config.static_friction || vy.abs() > self.config.static_friction {
            self.timer = Some(timers.schedule(self.config.tick_interval()));
            self.phase = ScrollPhase::Decelerating;
            debug!("fling armed: v = ({vx:.3}, {vy:.3}) px/ms");
        } else {
            self.phase = ScrollPhase::Idle;
            self.velocity = (0.0, 0.0);
            self.captured = None;
        }
        result
    }

    /// One deceleration step: advance the offset by the current velocity,
    /// clamp at the scroll limits (zeroing the velocity of any axis that
    /// hits one), then decay the velocity toward zero and re-arm unless
    /// both axes have stopped.
    fn on_tick(&mut self, timers: &mut dyn TimerService) -> EventResult<M> {
        let step_ms = 1000.0 / self.config.update_rate;
        let (mut vx, mut vy) = self.velocity;
        let (max_x, max_y) = self.max_offset;

        let mut x = self.offset.0 - step_ms * vx;
        if x < 0.0 {
            x = 0.0;
            vx = 0.0;
        } else if x > max_x {
            x = max_x;
            vx = 0.0;
        }

        let mut y = self.offset.1 - step_ms * vy;
        if y < 0.0 {
            y = 0.0;
            vy = 0.0;
        } else if y > max_y {
            y = max_y;
            vy = 0.0;
        }

        let moved = self.scroll_to(x, y);

        let decay = self.config.decay_per_tick();
        vx = toward_zero(vx, decay);
        vy = toward_zero(vy, decay);
        self.velocity = (vx, vy);

        if vx == 0.0 && vy == 0.0 {
            self.phase = ScrollPhase::Idle;
            self.timer = None;
            self.captured = None;
            debug!("fling settled at ({:.1}, {:.1})", self.offset.0, self.offset.1);
        } else {
            self.timer = Some(timers.schedule(self.config.tick_interval()));
            trace!("tick: offset ({x:.1}, {y:.1}), v = ({vx:.3}, {vy:.3})");
        }

        if moved {
            EventResult::Redraw
        } else {
            EventResult::None
        }
    }

    /// Topmost child (last added wins) containing the point.
    fn hit_child(&self, position: Point) -> Option<usize> {
        self.children
            .iter()
            .enumerate()
            .rev()
            .find(|(_, child)| child.bounds().contains(position.x, position.y))
            .map(|(index, _)| index)
    }

    fn forward_to_children(&mut self, event: &Event) -> EventResult<M> {
        let mut result = EventResult::None;
        for child in &mut self.children {
            result = result.merge(child.on_event(event));
        }
        result
    }
}

/// Reduce `v` toward zero by `decay` without crossing it.
fn toward_zero(v: f32, decay: f32) -> f32 {
    if v > 0.0 {
        (v - decay).max(0.0)
    } else if v < 0.0 {
        (v + decay).min(0.0)
    } else {
        0.0
    }
}

/// Helper function to create a kinetic scroll container.
pub fn kinetic_scroll<M>(x: f32, y: f32, width: f32, height: f32) -> KineticScroll<M> {
    KineticScroll::new(x, y, width, height)
}
