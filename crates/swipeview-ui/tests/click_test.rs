//! Taps, long presses and the pressed state.

use std::cell::Cell;
use std::rc::Rc;

use swipeview_testing::prelude::*;
use swipeview_ui::prelude::*;

struct ClickCounters {
    clicks: Rc<Cell<usize>>,
    long_clicks: Rc<Cell<usize>>,
}

fn clickable_robot(long_clickable: bool) -> (SwipeRobot, ClickCounters) {
    let mut robot = SwipeRobot::new(SwipeConfig::default());
    robot
        .layout(ROW_SIZE, &two_sided_layout(ROW_SIZE, 100.0))
        .expect("valid layout");

    let counters = ClickCounters {
        clicks: Rc::new(Cell::new(0)),
        long_clicks: Rc::new(Cell::new(0)),
    };
    let clicks = Rc::clone(&counters.clicks);
    robot
        .view_mut()
        .set_on_click_listener(Some(Box::new(move || clicks.set(clicks.get() + 1))));
    if long_clickable {
        let long_clicks = Rc::clone(&counters.long_clicks);
        robot.view_mut().set_on_long_click_listener(Some(Box::new(move || {
            long_clicks.set(long_clicks.get() + 1);
            true
        })));
    }
    (robot, counters)
}

#[test]
fn quick_tap_clicks_once_and_unpresses() {
    let (mut robot, counters) = clickable_robot(false);

    robot.down(150.0, 40.0);
    assert!(robot.host().has_pending(PressMessage::Tap));
    robot.up();

    assert_eq!(counters.clicks.get(), 1);
    assert_eq!(robot.host().clicks(ClickKind::Click), 1);
    assert!(robot.host().is_pressed());
    assert!(!robot.host().has_pending(PressMessage::Tap));
    assert!(robot.host().has_pending(PressMessage::Unpress));

    robot.advance_time(70);
    assert!(!robot.host().is_pressed());
    assert!(!robot.view().is_pressed());
    assert_eq!(counters.clicks.get(), 1);
}

#[test]
fn press_shows_after_tap_timeout_at_touch_point() {
    let (mut robot, counters) = clickable_robot(false);

    robot.down(150.0, 30.0);
    robot.advance_time(90);
    assert!(!robot.view().is_pressed());
    robot.advance_time(30);
    assert!(robot.view().is_pressed());
    assert_eq!(
        robot.host().count_events(|event| matches!(
            event,
            HostEvent::Pressed { pressed: true, hotspot } if *hotspot == Point::new(150.0, 30.0)
        )),
        1
    );

    robot.up();
    assert_eq!(counters.clicks.get(), 1);
    robot.wait_for_idle();
    assert!(!robot.host().is_pressed());
}

#[test]
fn tap_in_edge_slop_is_ignored() {
    let (mut robot, counters) = clickable_robot(false);

    robot.down(10.0, 40.0);
    robot.up();
    robot.down(295.0, 40.0);
    robot.up();
    robot.wait_for_idle();

    assert_eq!(counters.clicks.get(), 0);
    assert_eq!(robot.host().clicks(ClickKind::Click), 0);
}

#[test]
fn tap_in_enabled_edge_clicks() {
    let (mut robot, counters) = clickable_robot(false);
    robot.view_mut().enable_edge(SwipeEdge::Left);

    robot.down(10.0, 40.0);
    robot.up();

    assert_eq!(counters.clicks.get(), 1);
}

#[test]
fn long_press_clicks_long_and_suppresses_tap_and_drag() {
    let (mut robot, counters) = clickable_robot(true);

    robot.down(150.0, 40.0);
    assert!(robot.host().has_pending(PressMessage::LongPress));
    robot.advance_time(520);
    assert_eq!(counters.long_clicks.get(), 1);
    assert_eq!(robot.host().clicks(ClickKind::LongClick), 1);
    assert!(robot.view().is_pressed());

    assert!(!robot.move_to(250.0, 40.0));
    assert_eq!(robot.view().container_offset(), 0.0);
    robot.up();

    assert_eq!(counters.clicks.get(), 0);
    robot.wait_for_idle();
    assert!(!robot.view().is_pressed());
}

#[test]
fn released_before_long_press_timeout_is_a_click() {
    let (mut robot, counters) = clickable_robot(true);

    robot.down(150.0, 40.0);
    robot.advance_time(300);
    robot.up();

    assert_eq!(counters.clicks.get(), 1);
    assert_eq!(counters.long_clicks.get(), 0);
    assert!(!robot.host().has_pending(PressMessage::LongPress));
    robot.advance_time(600);
    assert_eq!(counters.long_clicks.get(), 0);
}

#[test]
fn drag_clears_press_and_skips_click() {
    let (mut robot, counters) = clickable_robot(true);

    robot.down(150.0, 40.0);
    robot.advance_time(120);
    assert!(robot.view().is_pressed());

    assert!(robot.drag_to(200.0, 40.0, 3));
    assert!(!robot.view().is_pressed());
    assert!(!robot.host().has_pending(PressMessage::LongPress));
    robot.up();
    robot.wait_for_idle();

    assert_eq!(counters.clicks.get(), 0);
    assert_eq!(counters.long_clicks.get(), 0);
}

#[test]
fn vertical_movement_cancels_the_tap() {
    let (mut robot, counters) = clickable_robot(false);

    robot.down(150.0, 40.0);
    robot.move_to(150.0, 52.0);
    assert!(!robot.host().has_pending(PressMessage::Tap));
    robot.up();
    robot.wait_for_idle();

    assert_eq!(counters.clicks.get(), 0);
}

#[test]
fn unpress_is_immediate_when_scheduling_fails() {
    let (mut robot, counters) = clickable_robot(false);
    robot.host().set_fail_scheduling(true);

    robot.down(150.0, 40.0);
    robot.up();

    assert_eq!(counters.clicks.get(), 1);
    assert!(!robot.host().is_pressed());
    assert_eq!(
        robot.host().count_events(|event| matches!(event, HostEvent::Pressed { .. })),
        2
    );
}

#[test]
fn without_listeners_nothing_is_posted() {
    let mut robot = SwipeRobot::new(SwipeConfig::default());
    robot
        .layout(ROW_SIZE, &two_sided_layout(ROW_SIZE, 100.0))
        .expect("valid layout");

    robot.down(150.0, 40.0);
    robot.up();

    assert!(!robot.view().is_clickable());
    assert_eq!(
        robot.host().count_events(|event| matches!(event, HostEvent::Posted { .. })),
        0
    );
    assert_eq!(robot.host().clicks(ClickKind::Click), 0);
}

#[test]
fn programmatic_click_reaches_host_and_listener() {
    let (mut robot, counters) = clickable_robot(true);
    robot.host().set_click_result(false);

    assert!(robot.view_mut().perform_click());
    assert!(robot.view_mut().perform_long_click());
    assert_eq!(counters.clicks.get(), 1);
    assert_eq!(counters.long_clicks.get(), 1);
    assert_eq!(robot.host().clicks(ClickKind::Click), 1);
    assert_eq!(robot.host().clicks(ClickKind::LongClick), 1);

    robot.view_mut().set_on_click_listener(None);
    assert!(!robot.view_mut().perform_click());
    assert_eq!(robot.host().clicks(ClickKind::Click), 2);
}
