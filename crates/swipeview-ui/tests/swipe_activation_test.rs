//! Release decisions, activation and the return to rest.

use std::cell::Cell;
use std::rc::Rc;

use swipeview_testing::prelude::*;
use swipeview_ui::prelude::*;

fn robot_with_listener(layout: Vec<ChildLayout>) -> (SwipeRobot, RecordingListener) {
    let listener = RecordingListener::new();
    robot_with(layout, listener)
}

fn robot_with(layout: Vec<ChildLayout>, listener: RecordingListener) -> (SwipeRobot, RecordingListener) {
    let mut robot = SwipeRobot::new(SwipeConfig::default());
    robot.layout(ROW_SIZE, &layout).expect("valid layout");
    robot.view_mut().set_swipe_gesture_listener(listener.boxed());
    (robot, listener)
}

/// Drags from x=100 so the container ends at `(to - 100) / 3` and releases
/// after the pointer came to rest.
fn slow_swipe_to(robot: &mut SwipeRobot, to: f32) {
    robot.slow_swipe(Point::new(100.0, 40.0), Point::new(to, 40.0), 10);
}

#[test]
fn release_past_activation_distance_activates() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    // (343 - 100) / 3 = 81 > 0.8 * 100
    robot.down(100.0, 40.0);
    robot.drag_to(343.0, 40.0, 10);
    assert_approx_eq(robot.view().container_offset(), 81.0, 0.01, "offset before release");
    robot.advance_time(50);
    robot.up();
    robot.wait_for_idle();

    assert_eq!(
        listener.calls(),
        vec![ListenerCall::SwipedRight, ListenerCall::SwipeRightComplete]
    );
    robot_assertions::assert_at_rest(robot.view(), "after activation");
    assert!(robot.view().can_perform_swipe_action());
}

#[test]
fn release_short_of_activation_distance_snaps_back() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    // (337 - 100) / 3 = 79 < 80
    slow_swipe_to(&mut robot, 337.0);
    assert!(robot.view().is_animating());
    robot.wait_for_idle();

    assert!(listener.calls().is_empty());
    robot_assertions::assert_at_rest(robot.view(), "after snap");
}

#[test]
fn left_swipe_activates_left() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    robot.slow_swipe(Point::new(279.0, 40.0), Point::new(9.0, 40.0), 10);
    robot.wait_for_idle();

    assert_eq!(
        listener.calls(),
        vec![ListenerCall::SwipedLeft, ListenerCall::SwipeLeftComplete]
    );
}

#[test]
fn activation_reaches_full_distance_before_callback() {
    let (mut robot, listener) = robot_with(
        two_sided_layout(ROW_SIZE, 100.0),
        RecordingListener::with_response(ListenerResponse::Keep),
    );

    slow_swipe_to(&mut robot, 343.0);
    robot.wait_for_idle();

    assert_eq!(listener.calls(), vec![ListenerCall::SwipedRight]);
    assert_eq!(robot.view().container_offset(), 100.0);
    assert!(!robot.view().is_animating());
    assert!(!robot.view().can_perform_swipe_action());
    assert!(robot
        .view()
        .reveal_view(SwipeDirection::Right)
        .is_some_and(|view| view.shown));
}

#[test]
fn manual_reset_after_declined_auto_reset_completes() {
    let (mut robot, listener) = robot_with(
        two_sided_layout(ROW_SIZE, 100.0),
        RecordingListener::with_response(ListenerResponse::Keep),
    );
    slow_swipe_to(&mut robot, 343.0);
    robot.wait_for_idle();

    robot.view_mut().move_to_original_position(0);
    robot.wait_for_idle();

    assert_eq!(
        listener.calls(),
        vec![ListenerCall::SwipedRight, ListenerCall::SwipeRightComplete]
    );
    robot_assertions::assert_at_rest(robot.view(), "after manual reset");
    assert!(robot.view().can_perform_swipe_action());
    let right = robot.view().reveal_view(SwipeDirection::Right).expect("right view");
    assert!(!right.shown);
}

#[test]
fn listener_can_schedule_its_own_delayed_reset() {
    let (mut robot, listener) = robot_with(
        two_sided_layout(ROW_SIZE, 100.0),
        RecordingListener::with_response(ListenerResponse::ResetAfter(2000)),
    );
    slow_swipe_to(&mut robot, 343.0);

    // Activation takes 250ms from the first frame.
    robot.advance_time(400);
    assert_eq!(listener.calls(), vec![ListenerCall::SwipedRight]);
    robot.advance_time(1000);
    assert_eq!(robot.view().container_offset(), 100.0);

    robot.wait_for_idle();
    assert_eq!(
        listener.calls(),
        vec![ListenerCall::SwipedRight, ListenerCall::SwipeRightComplete]
    );
    assert_eq!(robot.view().container_offset(), 0.0);
}

#[test]
fn fast_release_activates_below_activation_distance() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    // 40px per 16ms is 250px per 100ms.
    robot.down(100.0, 40.0);
    robot.drag_to(180.0, 40.0, 2);
    let offset = robot.view().container_offset();
    assert!(offset < 80.0, "offset {offset} should be short of activation");
    robot.up();
    robot.wait_for_idle();

    assert_eq!(listener.count(ListenerCall::SwipedRight), 1);
}

#[test]
fn slow_release_below_activation_distance_does_nothing() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    // Ends at offset 10 with the pointer at rest.
    slow_swipe_to(&mut robot, 130.0);
    robot.wait_for_idle();

    assert!(listener.calls().is_empty());
}

#[test]
fn fast_release_towards_disabled_direction_snaps() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));
    robot
        .view_mut()
        .set_direction_enabled(SwipeDirection::Right, false)
        .expect("right view exists");

    robot.down(200.0, 40.0);
    robot.drag_to(140.0, 40.0, 4);
    assert!(robot.view().container_offset() < 0.0);
    robot.drag_to(220.0, 40.0, 2);
    assert_eq!(robot.view().container_offset(), 0.0);
    robot.up();
    robot.wait_for_idle();

    assert!(listener.calls().is_empty());
    robot_assertions::assert_at_rest(robot.view(), "after fling");
}

#[test]
fn second_activation_during_reset_snaps_without_callback() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    slow_swipe_to(&mut robot, 343.0);
    // Activation is done, the reset is still waiting out its settle delay.
    robot.advance_time(320);
    assert_eq!(listener.count(ListenerCall::SwipedRight), 1);
    assert!(robot.view().is_animating());
    assert!(!robot.view().can_perform_swipe_action());

    // Catch the container and release it far out again.
    slow_swipe_to(&mut robot, 343.0);
    robot.wait_for_idle();

    assert_eq!(listener.count(ListenerCall::SwipedRight), 1);
    assert_eq!(listener.count(ListenerCall::SwipeRightComplete), 1);
    robot_assertions::assert_at_rest(robot.view(), "after refused activation");
    assert!(robot.view().can_perform_swipe_action());

    // Unlocked again once at rest.
    slow_swipe_to(&mut robot, 343.0);
    robot.wait_for_idle();
    assert_eq!(listener.count(ListenerCall::SwipedRight), 2);
}

#[test]
fn catching_the_container_keeps_its_offset() {
    let (mut robot, _listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    // Ends at offset 60, short of activation.
    slow_swipe_to(&mut robot, 280.0);
    robot.advance_time(150);
    let caught_at = robot.view().container_offset();
    assert!(caught_at > 0.0 && caught_at < 60.0, "caught at {caught_at}");

    robot.down(150.0, 40.0);
    assert!(!robot.view().is_animating());
    assert_eq!(robot.view().container_offset(), caught_at);
    robot.advance_time(200);
    assert_eq!(robot.view().container_offset(), caught_at);
}

#[test]
fn move_to_original_position_at_rest_still_completes() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    robot.view_mut().move_to_original_position(0);
    assert!(robot.view().is_animating());
    robot.wait_for_idle();

    robot_assertions::assert_at_rest(robot.view(), "after reset at rest");
    assert!(robot.view().can_perform_swipe_action());
    assert!(listener.calls().is_empty());
}

#[test]
fn listener_replaced_during_callback_takes_over() {
    let first = RecordingListener::new();
    let second = RecordingListener::new();

    struct Replacing {
        inner: RecordingListener,
        replacement: RecordingListener,
    }

    impl SwipeGestureListener for Replacing {
        fn on_swiped_right(&mut self, view: &mut SwipeActionView) -> bool {
            let result = self.inner.on_swiped_right(view);
            view.set_swipe_gesture_listener(self.replacement.boxed());
            result
        }
    }

    let mut robot = SwipeRobot::new(SwipeConfig::default());
    robot
        .layout(ROW_SIZE, &two_sided_layout(ROW_SIZE, 100.0))
        .expect("valid layout");
    robot.view_mut().set_swipe_gesture_listener(Some(Box::new(Replacing {
        inner: first.clone(),
        replacement: second.clone(),
    })));

    slow_swipe_to(&mut robot, 343.0);
    robot.wait_for_idle();

    assert_eq!(first.calls(), vec![ListenerCall::SwipedRight]);
    assert_eq!(second.calls(), vec![ListenerCall::SwipeRightComplete]);
}

#[derive(Clone, Default)]
struct CountingAnimator {
    updates: Rc<Cell<usize>>,
    activations: Rc<Cell<usize>>,
}

impl SwipeProgressAnimator for CountingAnimator {
    fn on_update_swipe_progress(
        &mut self,
        view: &mut RevealView,
        progress: f32,
        _min_activation_progress: f32,
    ) {
        self.updates.set(self.updates.get() + 1);
        view.alpha = progress;
    }

    fn on_activate(&mut self) {
        self.activations.set(self.activations.get() + 1);
    }
}

#[test]
fn progress_animator_follows_swipe_and_hears_activation() {
    let (mut robot, _listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));
    let animator = CountingAnimator::default();
    robot
        .view_mut()
        .set_right_swipe_animator(Some(Box::new(animator.clone())));

    // (370 - 100) / 3 = 90
    robot.down(100.0, 40.0);
    robot.drag_to(370.0, 40.0, 10);
    assert!(animator.updates.get() >= 10);
    let right = robot.view().reveal_view(SwipeDirection::Right).expect("right view");
    assert_approx_eq(right.alpha, 0.9, 0.001, "progress passed to animator");
    assert_eq!(animator.activations.get(), 0);

    robot.advance_time(50);
    robot.up();
    robot.advance_time(400);
    assert_eq!(animator.activations.get(), 1);
}

#[test]
fn scalable_icon_grows_past_activation_threshold() {
    let (mut robot, _listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));
    robot
        .view_mut()
        .set_right_swipe_animator(Some(Box::new(ScalableIconAnimator::new())));

    robot.down(100.0, 40.0);
    robot.drag_to(370.0, 40.0, 10);

    let right = robot.view().reveal_view(SwipeDirection::Right).expect("right view");
    // 0.65 + 0.35 * (0.9 - 0.8) / 0.4
    assert_approx_eq(right.scale, 0.7375, 0.001, "icon scale");
    assert_approx_eq(robot.view().child_transform(right.index).scale, 0.7375, 0.001, "transform");
}

#[test]
fn ripple_plays_on_activation_only_with_color() {
    let config = SwipeConfig::default().with_ripple_colors(None, Some(Color::GREEN));
    let mut robot = SwipeRobot::new(config);
    robot
        .layout(ROW_SIZE, &two_sided_layout(ROW_SIZE, 100.0))
        .expect("valid layout");

    slow_swipe_to(&mut robot, 343.0);
    robot.advance_time(100);

    let frame = robot
        .view()
        .ripple_frame(SwipeDirection::Right)
        .expect("right ripple running");
    assert_eq!(frame.center, Point::new(-20.0, 40.0));
    assert!(frame.radius > 0.0);
    assert!(frame.color.a() < 1.0);
    assert!(robot.view().ripple_frame(SwipeDirection::Left).is_none());

    robot.advance_time(400);
    assert!(robot.view().ripple_frame(SwipeDirection::Right).is_none());
}

#[test]
fn ripple_disabled_with_negative_one() {
    let config = SwipeConfig::default().with_ripple_colors(None, Some(Color::GREEN));
    let mut robot = SwipeRobot::new(config);
    robot
        .layout(ROW_SIZE, &two_sided_layout(ROW_SIZE, 100.0))
        .expect("valid layout");
    robot
        .view_mut()
        .set_ripple_color(SwipeDirection::Right, Color::from_argb_int(-1));

    slow_swipe_to(&mut robot, 343.0);
    robot.advance_time(100);
    assert!(robot.view().ripple_frame(SwipeDirection::Right).is_none());
}

#[test]
fn cancel_snaps_back_without_activation() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    robot.down(100.0, 40.0);
    robot.drag_to(343.0, 40.0, 10);
    assert!(robot.host().is_intercept_disallowed());
    robot.cancel();
    robot.wait_for_idle();

    assert!(listener.calls().is_empty());
    assert!(!robot.host().is_intercept_disallowed());
    robot_assertions::assert_at_rest(robot.view(), "after cancel");
}

#[test]
fn touching_the_container_mid_activation_still_activates() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));
    let animator = CountingAnimator::default();
    robot
        .view_mut()
        .set_right_swipe_animator(Some(Box::new(animator.clone())));

    slow_swipe_to(&mut robot, 343.0);
    robot.advance_time(100);
    assert!(robot.view().is_animating());
    assert!(listener.calls().is_empty());

    robot.down(150.0, 40.0);
    assert_eq!(listener.calls(), vec![ListenerCall::SwipedRight]);
    assert_eq!(animator.activations.get(), 1);
    assert_eq!(robot.view().container_offset(), 100.0);
    assert!(!robot.view().is_animating());
    assert!(!robot.view().can_perform_swipe_action());

    robot.up();
    robot.wait_for_idle();

    assert_eq!(
        listener.calls(),
        vec![ListenerCall::SwipedRight, ListenerCall::SwipeRightComplete]
    );
    robot_assertions::assert_at_rest(robot.view(), "after interrupted activation");
    assert!(robot.view().can_perform_swipe_action());
}

#[test]
fn container_caught_mid_activation_drags_from_full_distance() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    slow_swipe_to(&mut robot, 343.0);
    robot.advance_time(100);

    // Towards rest there is no resistance: 100 - 90.
    robot.down(150.0, 40.0);
    assert!(robot.drag_to(60.0, 40.0, 6));
    assert_approx_eq(robot.view().container_offset(), 10.0, 0.001, "dragged back");
    robot.advance_time(50);
    robot.up();
    robot.wait_for_idle();

    assert_eq!(
        listener.calls(),
        vec![ListenerCall::SwipedRight, ListenerCall::SwipeRightComplete]
    );
    robot_assertions::assert_at_rest(robot.view(), "after drag back");
}

#[test]
fn disabling_the_swiped_direction_returns_container_to_rest() {
    let (mut robot, listener) = robot_with(
        two_sided_layout(ROW_SIZE, 100.0),
        RecordingListener::with_response(ListenerResponse::Keep),
    );
    slow_swipe_to(&mut robot, 343.0);
    robot.wait_for_idle();
    assert_eq!(robot.view().container_offset(), 100.0);

    robot
        .view_mut()
        .set_direction_enabled(SwipeDirection::Right, false)
        .expect("right view exists");
    assert_eq!(robot.view().container_offset(), 0.0);
    robot_assertions::assert_offset_within_limits(robot.view(), "after disabling right");
    robot.wait_for_idle();

    assert_eq!(
        listener.calls(),
        vec![ListenerCall::SwipedRight, ListenerCall::SwipeRightComplete]
    );
    robot_assertions::assert_at_rest(robot.view(), "after disabling right");
    assert!(robot.view().can_perform_swipe_action());
}

#[test]
fn disabling_a_direction_mid_activation_drops_the_activation() {
    let (mut robot, listener) = robot_with_listener(two_sided_layout(ROW_SIZE, 100.0));

    slow_swipe_to(&mut robot, 343.0);
    robot.advance_time(100);
    assert!(robot.view().container_offset() > 80.0);

    robot
        .view_mut()
        .set_direction_enabled(SwipeDirection::Right, false)
        .expect("right view exists");
    assert_eq!(robot.view().container_offset(), 0.0);
    robot.wait_for_idle();

    assert!(listener.calls().is_empty());
    robot_assertions::assert_at_rest(robot.view(), "after disabling mid activation");
    assert!(robot.view().can_perform_swipe_action());
}

#[test]
fn background_gone_on_relayout_returns_container_to_rest() {
    let (mut robot, listener) = robot_with(
        two_sided_layout(ROW_SIZE, 100.0),
        RecordingListener::with_response(ListenerResponse::Keep),
    );
    slow_swipe_to(&mut robot, 343.0);
    robot.wait_for_idle();

    let mut layout = two_sided_layout(ROW_SIZE, 100.0);
    layout[0] = layout[0].with_visible(false);
    robot.layout(ROW_SIZE, &layout).expect("valid layout");
    assert!(!robot.view().has_enabled_direction(SwipeDirection::Right));
    assert_eq!(robot.view().container_offset(), 0.0);
    robot.wait_for_idle();

    assert_eq!(listener.count(ListenerCall::SwipeRightComplete), 1);
    robot_assertions::assert_at_rest(robot.view(), "after relayout");
}
