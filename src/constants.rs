//! Centralized tuning constants for the gesture pipeline.
//!
//! These are the defaults behind [`crate::ScrollConfig`]; widgets read them
//! through the config so embedders can retune without touching this file.

// =============================================================================
// Gesture classification
// =============================================================================

/// Pointer displacement (px, per axis) past which a press becomes a drag.
/// Below this, jitter during an intended click stays a click.
pub const PRESS_THRESHOLD: f32 = 2.0;

// =============================================================================
// Deceleration physics
// =============================================================================

/// Deceleration tick rate in Hz.
pub const UPDATE_RATE: f32 = 60.0;

/// Linear friction applied while coasting, in px/ms per second.
/// Each tick removes `DECELERATION / UPDATE_RATE` from the velocity.
pub const DECELERATION: f32 = 5.0;

/// Minimum release velocity magnitude (px/ms, per axis) that starts a fling.
pub const STATIC_FRICTION: f32 = 0.25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_positive() {
        assert!(PRESS_THRESHOLD > 0.0);
        assert!(UPDATE_RATE > 0.0);
        assert!(DECELERATION > 0.0);
        assert!(STATIC_FRICTION > 0.0);
    }

    #[test]
    fn test_friction_below_one_tick_of_decay() {
        // A fling that barely starts must survive at least one tick.
        assert!(STATIC_FRICTION > DECELERATION / UPDATE_RATE);
    }
}
