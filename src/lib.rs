//! flick_ui: a kinetic scrolling widget library.
//!
//! The centerpiece is [`KineticScroll`], a container whose children can be
//! scrolled by dragging anywhere inside it. A quick drag followed by a
//! release launches the content into an inertial fling that coasts under
//! friction on a fixed-rate timer; a small movement threshold keeps clicks
//! on child widgets working as clicks.
//!
//! The library is renderer-agnostic: widgets report visual changes through
//! [`EventResult::Redraw`] and the host draws them however it likes. The
//! only services a host must supply are an event stream (see
//! [`platform::EventTranslator`] for winit windows) and a [`TimerService`]
//! for deceleration ticks ([`TimerQueue`] works for hosts that poll).
//!
//! ```rust,ignore
//! use flick_ui::prelude::*;
//!
//! enum Msg { Open(u32) }
//!
//! let mut timers = TimerQueue::new();
//! let mut list = KineticScroll::new(0.0, 0.0, 320.0, 480.0)
//!     .config(ScrollConfig::default().direction(ScrollDirection::Vertical));
//! for i in 0..50 {
//!     list.push(Element::new(
//!         button(format!("row {i}")).on_click(Msg::Open(i)),
//!         Bounds::new(0.0, i as f32 * 40.0, 320.0, 40.0),
//!     ));
//! }
//!
//! // In the event loop:
//! // let result = list.handle(&event, &mut timers);
//! // for token in timers.due() { list.handle(&Event::Timer { token }, &mut timers); }
//! ```

pub mod config;
pub mod constants;
pub mod element;
pub mod event;
pub mod layout;
pub mod platform;
pub mod timer;
pub mod widget;
pub mod widgets;

pub use config::{ConfigError, ScrollConfig, ScrollDirection};
pub use element::Element;
pub use event::{Event, MouseButton};
pub use layout::{Bounds, Point, Size};
pub use timer::{TimerQueue, TimerService, TimerToken};
pub use widget::{EventResult, Widget};
pub use widgets::{button, kinetic_scroll, Button, KineticScroll, ScrollPhase};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::config::{ScrollConfig, ScrollDirection};
    pub use crate::element::Element;
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::timer::{TimerQueue, TimerService, TimerToken};
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::{button, kinetic_scroll, Button, KineticScroll, ScrollPhase};
}
