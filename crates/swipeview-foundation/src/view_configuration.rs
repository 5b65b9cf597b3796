//! Density-aware timing and slop values.

use crate::gesture_constants::{
    EDGE_SLOP_DP, LONG_PRESS_TIMEOUT_MS, MAX_FLING_VELOCITY, PRESSED_STATE_DURATION_MS,
    TAP_TIMEOUT_MS, TOUCH_SLOP,
};

/// Platform interaction constants resolved for one display density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfiguration {
    /// Pixels of travel before movement counts as intentional.
    pub touch_slop: f32,
    /// Pixels near the left/right edge in which a touch cannot start a swipe.
    pub edge_slop: f32,
    pub tap_timeout_millis: u64,
    /// Measured after the tap timeout, not from pointer down.
    pub long_press_timeout_millis: u64,
    pub pressed_state_duration_millis: u64,
    /// Upper bound for tracked velocity, pixels per second.
    pub max_velocity: f32,
}

impl ViewConfiguration {
    /// Values for a display with the given density (pixels per dp).
    pub fn for_density(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            log::warn!("invalid display density {density}, falling back to 1.0");
            1.0
        };
        Self {
            touch_slop: TOUCH_SLOP * density,
            edge_slop: (EDGE_SLOP_DP * density + 0.5).floor(),
            tap_timeout_millis: TAP_TIMEOUT_MS,
            long_press_timeout_millis: LONG_PRESS_TIMEOUT_MS,
            pressed_state_duration_millis: PRESSED_STATE_DURATION_MS,
            max_velocity: MAX_FLING_VELOCITY * density,
        }
    }

    /// Delay from pointer down until the long press fires.
    pub fn long_press_delay_millis(&self) -> u64 {
        self.tap_timeout_millis + self.long_press_timeout_millis
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::for_density(1.0)
    }
}
