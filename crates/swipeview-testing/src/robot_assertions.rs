//! Assertion utilities for robot testing

use swipeview_foundation::SwipeDirection;
use swipeview_ui::SwipeActionView;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the container offset respects the enabled-direction limits.
pub fn assert_offset_within_limits(view: &SwipeActionView, msg: &str) {
    let offset = view.container_offset();
    let max_left = if view.has_enabled_direction(SwipeDirection::Left) {
        view.max_swipe_distance(SwipeDirection::Left).unwrap_or(0.0)
    } else {
        0.0
    };
    let max_right = if view.has_enabled_direction(SwipeDirection::Right) {
        view.max_swipe_distance(SwipeDirection::Right).unwrap_or(0.0)
    } else {
        0.0
    };
    assert!(
        offset >= -max_left && offset <= max_right,
        "{}: offset {} outside [{}, {}]",
        msg,
        offset,
        -max_left,
        max_right
    );
}

/// Assert that the container is at rest and no animation is pending.
pub fn assert_at_rest(view: &SwipeActionView, msg: &str) {
    assert!(
        view.container_offset() == 0.0 && !view.is_animating(),
        "{}: expected rest, got offset {} (animating: {})",
        msg,
        view.container_offset(),
        view.is_animating()
    );
}
