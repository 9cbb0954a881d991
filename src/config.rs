//! Scroll behavior configuration.
//!
//! Centralizes the gesture/physics tuning values and validates them once at
//! configuration time, so the deceleration integrator never runs with a
//! degenerate rate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DECELERATION, PRESS_THRESHOLD, STATIC_FRICTION, UPDATE_RATE};

/// Scroll direction for the kinetic container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollDirection {
    /// Only vertical scrolling
    Vertical,
    /// Only horizontal scrolling
    Horizontal,
    /// Both vertical and horizontal scrolling (default)
    #[default]
    Both,
}

impl ScrollDirection {
    /// Check if vertical scrolling is enabled.
    pub fn has_vertical(&self) -> bool {
        matches!(self, ScrollDirection::Vertical | ScrollDirection::Both)
    }

    /// Check if horizontal scrolling is enabled.
    pub fn has_horizontal(&self) -> bool {
        matches!(self, ScrollDirection::Horizontal | ScrollDirection::Both)
    }
}

/// Errors from [`ScrollConfig::validate`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("update rate must be positive and finite, got {0}")]
    InvalidUpdateRate(f32),
    #[error("deceleration must be positive and finite, got {0}")]
    InvalidDeceleration(f32),
    #[error("static friction must be non-negative and finite, got {0}")]
    InvalidStaticFriction(f32),
    #[error("press threshold must be non-negative and finite, got {0}")]
    InvalidPressThreshold(f32),
}

/// Configuration for kinetic scrolling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Pointer displacement (px, per axis) past which a press becomes a drag
    pub press_threshold: f32,
    /// Deceleration tick rate in Hz
    pub update_rate: f32,
    /// Linear friction while coasting, px/ms removed per second
    pub deceleration: f32,
    /// Minimum release velocity (px/ms, per axis) that starts a fling
    pub static_friction: f32,
    /// Which axes the gesture may scroll
    pub direction: ScrollDirection,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            press_threshold: PRESS_THRESHOLD,
            update_rate: UPDATE_RATE,
            deceleration: DECELERATION,
            static_friction: STATIC_FRICTION,
            direction: ScrollDirection::default(),
        }
    }
}

impl ScrollConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the press-to-drag threshold.
    pub fn press_threshold(mut self, threshold: f32) -> Self {
        self.press_threshold = threshold;
        self
    }

    /// Set the deceleration tick rate in Hz.
    pub fn update_rate(mut self, rate: f32) -> Self {
        self.update_rate = rate;
        self
    }

    /// Set the coasting friction.
    pub fn deceleration(mut self, deceleration: f32) -> Self {
        self.deceleration = deceleration;
        self
    }

    /// Set the minimum fling velocity.
    pub fn static_friction(mut self, friction: f32) -> Self {
        self.static_friction = friction;
        self
    }

    /// Set the scroll direction.
    pub fn direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Delay between deceleration ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.update_rate)
    }

    /// Velocity removed per deceleration tick (px/ms).
    pub fn decay_per_tick(&self) -> f32 {
        self.deceleration / self.update_rate
    }

    /// Reject degenerate tuning values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.update_rate.is_finite() && self.update_rate > 0.0) {
            return Err(ConfigError::InvalidUpdateRate(self.update_rate));
        }
        if !(self.deceleration.is_finite() && self.deceleration > 0.0) {
            return Err(ConfigError::InvalidDeceleration(self.deceleration));
        }
        if !(self.static_friction.is_finite() && self.static_friction >= 0.0) {
            return Err(ConfigError::InvalidStaticFriction(self.static_friction));
        }
        if !(self.press_threshold.is_finite() && self.press_threshold >= 0.0) {
            return Err(ConfigError::InvalidPressThreshold(self.press_threshold));
        }
        Ok(())
    }
}
