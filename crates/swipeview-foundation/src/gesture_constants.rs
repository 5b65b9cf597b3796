//! Shared gesture constants for consistent touch handling.
//!
//! These values are in logical pixels and milliseconds at a density of 1.0.
//! [`crate::ViewConfiguration::for_density`] scales the pixel values.

/// Distance a pointer must travel before movement counts as intentional.
///
/// Matches the platform touch slop (8dp). Vertical travel beyond it hands the
/// gesture to an ancestor scroll container; horizontal travel beyond it may
/// start a swipe.
pub const TOUCH_SLOP: f32 = 8.0;

/// Margin near the horizontal edges in which a touch may not start a swipe.
///
/// Edge gestures (navigation drawers) use a 20dp band, larger than the
/// platform's own edge slop, so the widget uses the same value.
pub const EDGE_SLOP_DP: f32 = 20.0;

/// How long to wait before a touch shows the pressed state.
pub const TAP_TIMEOUT_MS: u64 = 100;

/// How long after the tap timeout a touch becomes a long press.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 400;

/// How long the pressed state stays visible after a tap.
pub const PRESSED_STATE_DURATION_MS: u64 = 64;

/// Time window, in milliseconds, that velocity is expressed in.
///
/// Swipe velocities are "pixels per 100ms" so that the activation speed
/// threshold stays a small human-readable number.
pub const VELOCITY_UNITS_MS: u64 = 100;

/// Maximum tracked velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
