use swipeview_ui_graphics::Point;

use crate::direction::{SwipeEdge, SwipeEdges};
use crate::pointer::PointerEvent;
use crate::velocity_tracker::VelocityTracker1D;

/// Whether a touch at local `x` may start a swipe or a tap.
///
/// Touches within `edge_slop` of an edge are rejected unless that edge is in
/// `enabled_edges`.
pub fn is_touch_in_swipe_area(x: f32, width: f32, edge_slop: f32, enabled_edges: SwipeEdges) -> bool {
    let clear_of_left = enabled_edges.contains(SwipeEdge::Left) || x > edge_slop;
    let clear_of_right = enabled_edges.contains(SwipeEdge::Right) || x < width - edge_slop;
    clear_of_left && clear_of_right
}

/// State of one pointer-down..up/cancel sequence.
#[derive(Clone, Debug, Default)]
pub struct TouchSession {
    initial_raw: Point,
    last_raw_x: f32,
    hotspot: Point,
    touch_valid: bool,
    dragging: bool,
    in_long_press: bool,
    deferred_to_ancestor: bool,
    velocity: VelocityTracker1D,
}

impl TouchSession {
    /// Starts a session at a pointer-down event.
    pub fn begin(event: &PointerEvent, touch_valid: bool) -> Self {
        let mut velocity = VelocityTracker1D::new();
        velocity.add_data_point(event.time_millis as i64, event.raw_position.x);
        Self {
            initial_raw: event.raw_position,
            last_raw_x: event.raw_position.x,
            hotspot: event.position,
            touch_valid,
            dragging: false,
            in_long_press: false,
            deferred_to_ancestor: false,
            velocity,
        }
    }

    pub fn touch_valid(&self) -> bool {
        self.touch_valid
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn in_long_press(&self) -> bool {
        self.in_long_press
    }

    pub fn set_in_long_press(&mut self, in_long_press: bool) {
        self.in_long_press = in_long_press;
    }

    /// Set once the gesture was handed to an ancestor scroll; stays set until
    /// the next pointer down.
    pub fn is_deferred_to_ancestor(&self) -> bool {
        self.deferred_to_ancestor
    }

    pub fn defer_to_ancestor(&mut self) {
        self.deferred_to_ancestor = true;
    }

    /// Local position of the pointer down, used as the pressed hotspot.
    pub fn hotspot(&self) -> Point {
        self.hotspot
    }

    pub fn last_raw_x(&self) -> f32 {
        self.last_raw_x
    }

    pub fn set_last_raw_x(&mut self, raw_x: f32) {
        self.last_raw_x = raw_x;
    }

    /// Vertical travel from the pointer down reached `touch_slop`.
    pub fn has_moved_vertically(&self, raw: Point, touch_slop: f32) -> bool {
        (raw.y - self.initial_raw.y).abs() >= touch_slop
    }

    /// Horizontal travel from the pointer down exceeds `touch_slop`.
    pub fn is_past_horizontal_slop(&self, raw_x: f32, touch_slop: f32) -> bool {
        (raw_x - self.initial_raw.x).abs() > touch_slop
    }

    /// Horizontal movement since the previous event of this gesture.
    pub fn frame_delta(&self, raw_x: f32) -> f32 {
        raw_x - self.last_raw_x
    }

    pub fn track(&mut self, event: &PointerEvent) {
        self.velocity
            .add_data_point(event.time_millis as i64, event.raw_position.x);
    }

    /// Horizontal release velocity in pixels per `units_millis`.
    pub fn release_velocity(&self, units_millis: u64, max_velocity: f32) -> f32 {
        self.velocity
            .calculate_velocity_in_units(units_millis, max_velocity)
    }
}

#[cfg(test)]
#[path = "../tests/touch_session_tests.rs"]
mod tests;
