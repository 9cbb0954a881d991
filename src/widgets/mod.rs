//! Built-in widgets.

pub mod button;
pub mod kinetic_scroll;

pub use button::{button, Button};
pub use kinetic_scroll::{kinetic_scroll, KineticScroll, ScrollPhase};
