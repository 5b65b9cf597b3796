//! The swipe-to-reveal container.

use std::rc::Rc;

use swipeview_animation::AnimationSpec;
use swipeview_foundation::{
    is_touch_in_swipe_area, PointerEvent, PointerEventKind, PressMessage, SwipeDirection,
    SwipeDirections, SwipeEdge, SwipeEdges, TouchSession,
};
use swipeview_ui_graphics::{clamp, radius, Color, Point, Size};
use swipeview_ui_layout::ChildLayout;

use crate::{
    decide_release, resolve_children, ClickKind, ClickListener, ClickShim, LongClickListener,
    PositionAnimation, PositionEndAction, ReleaseDecision, ReleaseState, RevealView, RippleFrame,
    SwipeConfig, SwipeConfigError, SwipeError, SwipeGestureListener, SwipeHost,
    SwipeProgressAnimator, SwipeRipple,
};

/// How the host should draw one child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildTransform {
    pub translation_x: f32,
    pub scale: f32,
    pub alpha: f32,
    pub visible: bool,
}

impl ChildTransform {
    pub const IDENTITY: ChildTransform = ChildTransform {
        translation_x: 0.0,
        scale: 1.0,
        alpha: 1.0,
        visible: true,
    };
}

impl Default for ChildTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

struct SwipeSide {
    view: Option<RevealView>,
    /// Host-reported visibility of the child; a gone child disables the side.
    child_visible: bool,
    max_distance: f32,
    min_activation_distance: f32,
    animator: Option<Box<dyn SwipeProgressAnimator>>,
    ripple: SwipeRipple,
}

impl SwipeSide {
    fn new(ripple_color: Option<Color>, ripple_duration_millis: u64) -> Self {
        Self {
            view: None,
            child_visible: false,
            max_distance: 0.0,
            min_activation_distance: 0.0,
            animator: None,
            ripple: SwipeRipple::new(ripple_color, ripple_duration_millis),
        }
    }

    fn attach(&mut self, index: usize, child: &ChildLayout, max_distance: f32, ratio: f32) {
        if self.view.map(|view| view.index) != Some(index) {
            self.view = Some(RevealView::new(index));
        }
        self.child_visible = child.visible;
        self.max_distance = max_distance.max(0.0);
        self.min_activation_distance = ratio * self.max_distance;
    }

    fn detach(&mut self) {
        self.view = None;
        self.child_visible = false;
        self.max_distance = 0.0;
        self.min_activation_distance = 0.0;
    }

    fn is_available(&self) -> bool {
        self.view.is_some() && self.child_visible
    }
}

/// A container whose foreground can be swiped aside to reveal background
/// views and trigger an action.
///
/// The widget is driven entirely by its host:
///
/// - layout results arrive through [`SwipeActionView::on_layout`],
/// - pointer events through [`SwipeActionView::on_intercept_touch_event`] and
///   [`SwipeActionView::on_touch_event`],
/// - messages posted with [`SwipeHost::post_delayed`] come back through
///   [`SwipeActionView::handle_message`],
/// - frames requested with `schedule_frame` through [`SwipeActionView::on_frame`].
///
/// Rendering reads [`SwipeActionView::child_transform`] and
/// [`SwipeActionView::ripple_frame`].
///
/// Releasing the container past the activation distance of a side, or faster
/// than the activation speed, animates it to that side's full distance and
/// then calls the [`SwipeGestureListener`]. A new activation is refused until
/// the container has returned to rest after the previous one.
pub struct SwipeActionView {
    host: Rc<dyn SwipeHost>,
    config: SwipeConfig,
    size: Size,
    container: Option<usize>,
    left: SwipeSide,
    right: SwipeSide,
    offset: f32,
    position: PositionAnimation,
    session: TouchSession,
    can_perform_swipe_action: bool,
    /// Direction whose completion hook fires on the next finished reset.
    pending_completion: Option<SwipeDirection>,
    enabled_directions: SwipeDirections,
    enabled_edges: SwipeEdges,
    listener: Option<Box<dyn SwipeGestureListener>>,
    listener_replaced: bool,
    clicks: ClickShim,
    pressed: bool,
}

impl SwipeActionView {
    pub fn new(host: Rc<dyn SwipeHost>, config: SwipeConfig) -> Self {
        let left = SwipeSide::new(config.left_ripple_color, config.ripple_duration_millis);
        let right = SwipeSide::new(config.right_ripple_color, config.ripple_duration_millis);
        Self {
            host,
            size: Size::ZERO,
            container: None,
            left,
            right,
            offset: 0.0,
            position: PositionAnimation::new(),
            session: TouchSession::default(),
            can_perform_swipe_action: true,
            pending_completion: None,
            enabled_directions: config.enabled_directions,
            enabled_edges: config.enabled_edges,
            listener: None,
            listener_replaced: false,
            clicks: ClickShim::new(),
            pressed: false,
            config,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Applies a layout pass.
    ///
    /// Resolves which children are backgrounds and which is the container, then
    /// derives swipe distances and ripple geometry. Children must be between
    /// one and three, and two backgrounds must be aligned to opposite sides.
    pub fn on_layout(
        &mut self,
        size: Size,
        children: &[ChildLayout],
    ) -> Result<(), SwipeConfigError> {
        let resolved = match resolve_children(children) {
            Ok(resolved) => resolved,
            Err(err) => {
                log::warn!("swipe action view layout rejected: {err}");
                return Err(err);
            }
        };

        self.size = size;
        self.container = Some(resolved.container);
        let container = &children[resolved.container];
        let ratio = self.config.min_activation_distance_ratio;

        match resolved.left {
            Some(index) => {
                let max_distance = children[index].total_width() - container.margin_end();
                self.left.attach(index, &children[index], max_distance, ratio);
            }
            None => self.left.detach(),
        }
        match resolved.right {
            Some(index) => {
                let max_distance = children[index].total_width() - container.margin_start();
                self.right.attach(index, &children[index], max_distance, ratio);
            }
            None => self.right.detach(),
        }
        self.keep_offset_in_enabled_limits();

        let swipe_bounds = container.bounds;
        let clip = if self.config.ripple_takes_padding {
            swipe_bounds.inset(container.padding)
        } else {
            swipe_bounds
        };
        let edge_slop = self.config.view_configuration.edge_slop;
        let vertical_center = size.height / 2.0;
        let width = swipe_bounds.width;
        let max_radius = radius(width, vertical_center);
        self.left.ripple.set_geometry(
            clip,
            Point::new(edge_slop + width, vertical_center),
            max_radius,
        );
        self.right
            .ripple
            .set_geometry(clip, Point::new(-edge_slop, vertical_center), max_radius);

        log::debug!(
            "swipe children resolved: {resolved:?}, max left {}, max right {}",
            self.left.max_distance,
            self.right.max_distance
        );
        Ok(())
    }

    /// Current horizontal offset of the container; positive when swiped right.
    pub fn container_offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the container is being animated.
    pub fn is_animating(&self) -> bool {
        self.position.is_running()
    }

    /// `false` from an activation until the container is back at rest.
    pub fn can_perform_swipe_action(&self) -> bool {
        self.can_perform_swipe_action
    }

    pub fn set_swipe_gesture_listener(&mut self, listener: Option<Box<dyn SwipeGestureListener>>) {
        self.listener = listener;
        self.listener_replaced = true;
    }

    /// Whether `direction` has a background view that is present, not gone
    /// and not disabled.
    pub fn has_enabled_direction(&self, direction: SwipeDirection) -> bool {
        self.side(direction).is_available() && self.enabled_directions.contains(direction)
    }

    pub fn set_direction_enabled(
        &mut self,
        direction: SwipeDirection,
        enabled: bool,
    ) -> Result<(), SwipeError> {
        self.require_view(direction)?;
        self.enabled_directions.set(direction, enabled);
        self.keep_offset_in_enabled_limits();
        Ok(())
    }

    pub fn max_swipe_distance(&self, direction: SwipeDirection) -> Result<f32, SwipeError> {
        self.require_view(direction)?;
        Ok(self.side(direction).max_distance)
    }

    pub fn min_activation_distance(&self, direction: SwipeDirection) -> Result<f32, SwipeError> {
        self.require_view(direction)?;
        Ok(self.side(direction).min_activation_distance)
    }

    /// Accept touches within the edge slop of `edge`.
    pub fn enable_edge(&mut self, edge: SwipeEdge) {
        self.enabled_edges.insert(edge);
    }

    /// Ignore touches within the edge slop of `edge`. This is the default.
    pub fn disable_edge(&mut self, edge: SwipeEdge) {
        self.enabled_edges.remove(edge);
    }

    pub fn is_edge_enabled(&self, edge: SwipeEdge) -> bool {
        self.enabled_edges.contains(edge)
    }

    pub fn set_left_swipe_animator(&mut self, animator: Option<Box<dyn SwipeProgressAnimator>>) {
        self.left.animator = animator;
    }

    pub fn set_right_swipe_animator(&mut self, animator: Option<Box<dyn SwipeProgressAnimator>>) {
        self.right.animator = animator;
    }

    /// Sets the activation ripple color; `None` disables the ripple.
    pub fn set_ripple_color(&mut self, direction: SwipeDirection, color: Option<Color>) {
        self.side_mut(direction).ripple.set_color(color);
        self.host.invalidate();
    }

    pub fn ripple_color(&self, direction: SwipeDirection) -> Option<Color> {
        self.side(direction).ripple.color()
    }

    /// The ripple to draw for `direction`, if one is running.
    pub fn ripple_frame(&self, direction: SwipeDirection) -> Option<RippleFrame> {
        self.side(direction).ripple.frame()
    }

    pub fn reveal_view(&self, direction: SwipeDirection) -> Option<RevealView> {
        self.side(direction).view
    }

    pub fn child_transform(&self, index: usize) -> ChildTransform {
        if self.container == Some(index) {
            return ChildTransform {
                translation_x: self.offset,
                ..ChildTransform::IDENTITY
            };
        }
        [&self.left, &self.right]
            .into_iter()
            .filter_map(|side| side.view)
            .find(|view| view.index == index)
            .map(|view| ChildTransform {
                translation_x: 0.0,
                scale: view.scale,
                alpha: view.alpha,
                visible: view.shown,
            })
            .unwrap_or_default()
    }

    pub fn set_on_click_listener(&mut self, listener: Option<ClickListener>) {
        self.clicks.set_on_click_listener(listener);
    }

    pub fn set_on_long_click_listener(&mut self, listener: Option<LongClickListener>) {
        self.clicks.set_on_long_click_listener(listener);
    }

    pub fn is_clickable(&self) -> bool {
        self.clicks.is_clickable()
    }

    pub fn is_long_clickable(&self) -> bool {
        self.clicks.is_long_clickable()
    }

    pub fn perform_click(&mut self) -> bool {
        let host = Rc::clone(&self.host);
        self.clicks
            .perform(ClickKind::Click, |kind| host.dispatch_click(kind))
    }

    pub fn perform_long_click(&mut self) -> bool {
        let host = Rc::clone(&self.host);
        self.clicks
            .perform(ClickKind::LongClick, |kind| host.dispatch_click(kind))
    }

    /// Animates the container back to rest after `start_delay_millis`.
    ///
    /// Completes, and unlocks new activations, even when already at rest.
    pub fn move_to_original_position(&mut self, start_delay_millis: u64) {
        if self.session.is_dragging() {
            self.cancel_drag(false);
            self.session.defer_to_ancestor();
        }
        log::debug!(
            "moving container from {} to rest after {start_delay_millis}ms",
            self.offset
        );
        let spec = AnimationSpec::decelerate(self.config.reset_duration_millis)
            .with_delay(start_delay_millis);
        self.position
            .animate(self.offset, 0.0, spec, PositionEndAction::Reset, &*self.host);
    }

    /// Intercept pass for events headed to children.
    ///
    /// Returns `true` once the gesture became a drag and the widget wants the
    /// rest of it.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                self.prepare_drag(event);
                false
            }
            PointerEventKind::Move => self.handle_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.set_pressed(false, event.position);
                self.cancel_drag(false);
                self.move_to_original_position(0);
                self.session = TouchSession::default();
                false
            }
        }
    }

    /// Handles an event targeted at the widget. Returns whether it was consumed.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                self.prepare_drag(event);
                self.prepare_messages();
                true
            }
            PointerEventKind::Move => self.handle_move(event),
            PointerEventKind::Up => {
                self.handle_up(event);
                false
            }
            PointerEventKind::Cancel => {
                self.set_pressed(false, event.position);
                self.cancel_drag(false);
                self.move_to_original_position(0);
                self.session = TouchSession::default();
                false
            }
        }
    }

    /// Delivers a message posted through [`SwipeHost::post_delayed`].
    pub fn handle_message(&mut self, message: PressMessage) {
        match message {
            PressMessage::Tap => self.set_pressed(true, self.session.hotspot()),
            PressMessage::LongPress => {
                self.session.set_in_long_press(true);
                self.perform_long_click();
            }
            PressMessage::Unpress => self.set_pressed(false, self.session.hotspot()),
        }
    }

    /// Steps running animations to `frame_time_nanos`.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        let host = Rc::clone(&self.host);

        let mut ripple_changed = false;
        for direction in SwipeDirection::ALL {
            ripple_changed |= self
                .side_mut(direction)
                .ripple
                .on_frame(frame_time_nanos, &*host);
        }
        if ripple_changed {
            host.invalidate();
        }

        if let Some(step) = self.position.on_frame(frame_time_nanos, &*host) {
            self.set_offset(step.offset);
            if let Some(action) = step.completed {
                self.complete_position_animation(action);
            }
        }
    }

    fn side(&self, direction: SwipeDirection) -> &SwipeSide {
        match direction {
            SwipeDirection::Left => &self.left,
            SwipeDirection::Right => &self.right,
        }
    }

    fn side_mut(&mut self, direction: SwipeDirection) -> &mut SwipeSide {
        match direction {
            SwipeDirection::Left => &mut self.left,
            SwipeDirection::Right => &mut self.right,
        }
    }

    fn require_view(&self, direction: SwipeDirection) -> Result<(), SwipeError> {
        match self.side(direction).view {
            Some(_) => Ok(()),
            None => Err(SwipeError::MissingDirectionView { direction }),
        }
    }

    fn prepare_drag(&mut self, event: &PointerEvent) {
        if self.session.is_dragging() {
            self.cancel_drag(false);
        }

        let touch_valid = is_touch_in_swipe_area(
            event.position.x,
            self.size.width,
            self.config.view_configuration.edge_slop,
            self.enabled_edges,
        );
        self.session = TouchSession::begin(event, touch_valid);

        // Catch the container where it is so the new gesture continues from there.
        if let Some(caught) = self.position.catch() {
            self.offset = caught.offset;
            if let Some(PositionEndAction::Activated(direction)) = caught.end_action {
                self.finish_caught_activation(direction);
            }
        }

        self.remove_press_messages();
    }

    fn prepare_messages(&mut self) {
        let long_clickable = self.clicks.is_long_clickable();
        if !self.clicks.is_clickable() && !long_clickable {
            return;
        }

        let view_configuration = self.config.view_configuration;
        if !self
            .host
            .post_delayed(PressMessage::Tap, view_configuration.tap_timeout_millis)
        {
            log::debug!("tap message could not be scheduled");
        }
        if long_clickable
            && !self.host.post_delayed(
                PressMessage::LongPress,
                view_configuration.long_press_delay_millis(),
            )
        {
            log::debug!("long press message could not be scheduled");
        }
    }

    fn handle_move(&mut self, event: &PointerEvent) -> bool {
        if self.session.in_long_press() || self.session.is_deferred_to_ancestor() {
            return false;
        }

        let raw = event.raw_position;
        let touch_slop = self.config.view_configuration.touch_slop;

        if !self.session.is_dragging() {
            if self.session.has_moved_vertically(raw, touch_slop) {
                log::trace!("vertical movement, leaving the gesture to ancestors");
                self.remove_press_messages();
                self.session.defer_to_ancestor();
                return false;
            }

            let direction_enabled = SwipeDirection::from_delta(self.session.frame_delta(raw.x))
                .is_some_and(|direction| self.has_enabled_direction(direction));
            if direction_enabled
                && self.session.touch_valid()
                && self.session.is_past_horizontal_slop(raw.x, touch_slop)
            {
                log::trace!("drag started at {}", raw.x);
                self.session.set_dragging(true);
            }
        }

        if self.session.is_dragging() {
            self.reset_click_and_long_click();
            self.host.request_disallow_intercept(true);
            self.session.track(event);
            self.perform_drag(raw.x);
        }

        self.session.set_last_raw_x(raw.x);
        self.session.is_dragging()
    }

    fn handle_up(&mut self, event: &PointerEvent) {
        if self.session.is_dragging() {
            self.session.track(event);
        }

        let moved_vertically = self.session.has_moved_vertically(
            event.raw_position,
            self.config.view_configuration.touch_slop,
        );
        if self.is_clickable()
            && self.session.touch_valid()
            && !self.session.is_dragging()
            && !self.session.in_long_press()
            && !moved_vertically
        {
            self.set_pressed(true, event.position);
            self.perform_click();
        }

        if self.pressed {
            let duration = self.config.view_configuration.pressed_state_duration_millis;
            if !self.host.post_delayed(PressMessage::Unpress, duration) {
                log::debug!("unpress could not be scheduled, clearing pressed state now");
                self.set_pressed(false, event.position);
            }
        }

        self.finish_drag();
    }

    fn perform_drag(&mut self, raw_x: f32) {
        let mut delta = self.session.frame_delta(raw_x);

        // Moving away from rest, or starting from rest, is harder.
        if (delta > 0.0) == (self.offset > 0.0) || self.offset == 0.0 {
            delta *= self.config.drag_resistance;
        }

        let offset = self.limit_in_distance(self.offset + delta);
        self.set_offset(offset);
    }

    /// Moves the container off a side that can no longer be swiped, and
    /// clamps it to the current distances.
    ///
    /// An activation heading for a disabled side is replaced by a reset.
    fn keep_offset_in_enabled_limits(&mut self) {
        let side_disabled = |view: &Self, direction: Option<SwipeDirection>| {
            direction.is_some_and(|direction| !view.has_enabled_direction(direction))
        };
        let heading = match self.position.end_action() {
            Some(PositionEndAction::Activated(direction)) => Some(direction),
            _ => None,
        };
        let must_reset = side_disabled(self, SwipeDirection::from_delta(self.offset))
            || side_disabled(self, heading);

        let limited = self.limit_in_distance(self.offset);
        if limited != self.offset {
            log::debug!("container offset {} clamped to {limited}", self.offset);
            self.set_offset(limited);
        }
        if must_reset && !self.session.is_dragging() {
            self.move_to_original_position(0);
        }
    }

    fn limit_in_distance(&self, value: f32) -> f32 {
        let min = if self.has_enabled_direction(SwipeDirection::Left) {
            -self.left.max_distance
        } else {
            0.0
        };
        let max = if self.has_enabled_direction(SwipeDirection::Right) {
            self.right.max_distance
        } else {
            0.0
        };
        clamp(value, min, max)
    }

    fn finish_drag(&mut self) {
        let velocity = self.session.release_velocity(
            self.config.velocity_units_millis,
            self.config.view_configuration.max_velocity,
        );
        self.cancel_drag(false);

        let release = ReleaseState {
            offset: self.offset,
            velocity,
            min_activation_speed: self.config.min_activation_speed,
            min_left_activation_distance: self.left.min_activation_distance,
            min_right_activation_distance: self.right.min_activation_distance,
            left_enabled: self.has_enabled_direction(SwipeDirection::Left),
            right_enabled: self.has_enabled_direction(SwipeDirection::Right),
        };
        match decide_release(&release) {
            ReleaseDecision::Activate(direction) => self.activate(direction),
            ReleaseDecision::Snap => self.move_to_original_position(0),
        }
        self.session = TouchSession::default();
    }

    fn cancel_drag(&mut self, stop_press: bool) {
        if stop_press {
            self.set_pressed(false, self.session.hotspot());
        }
        if self.session.is_dragging() {
            self.host.request_disallow_intercept(false);
            self.session.set_dragging(false);
        }
        self.remove_press_messages();
        self.session.set_in_long_press(false);
    }

    fn activate(&mut self, direction: SwipeDirection) {
        if !self.can_perform_swipe_action {
            log::debug!("swipe {direction} ignored, previous activation is still resetting");
            self.move_to_original_position(0);
            return;
        }
        self.can_perform_swipe_action = false;
        log::debug!("activating swipe {direction}");

        let host = Rc::clone(&self.host);
        let side = self.side_mut(direction);
        side.ripple.restart(&*host);
        let target = direction.sign() * side.max_distance;

        let spec = AnimationSpec::decelerate(self.config.activation_duration_millis);
        self.position.animate(
            self.offset,
            target,
            spec,
            PositionEndAction::Activated(direction),
            &*host,
        );
    }

    /// Completes an activation whose animation was interrupted by a new
    /// pointer down.
    ///
    /// The container jumps to the side's full distance and the listener runs.
    /// A reset started from the listener is caught as well, since the pointer
    /// now holds the container; the completion hook waits for the reset that
    /// follows the gesture.
    fn finish_caught_activation(&mut self, direction: SwipeDirection) {
        log::debug!("activation {direction} interrupted at {}, completing it", self.offset);
        let target = direction.sign() * self.side(direction).max_distance;
        self.set_offset(target);
        self.complete_position_animation(PositionEndAction::Activated(direction));
        if let Some(caught) = self.position.catch() {
            self.offset = caught.offset;
        }
    }

    fn complete_position_animation(&mut self, action: PositionEndAction) {
        match action {
            PositionEndAction::Activated(direction) => {
                if let Some(animator) = self.side_mut(direction).animator.as_mut() {
                    animator.on_activate();
                }
                self.pending_completion = Some(direction);

                let should_reset = self.with_listener(true, |listener, view| match direction {
                    SwipeDirection::Left => listener.on_swiped_left(view),
                    SwipeDirection::Right => listener.on_swiped_right(view),
                });
                if should_reset {
                    self.move_to_original_position(self.config.reset_settle_delay_millis);
                } else {
                    log::debug!("listener keeps the container swiped {direction}");
                }
            }
            PositionEndAction::Reset => {
                self.can_perform_swipe_action = true;
                for side in [&mut self.left, &mut self.right] {
                    if let Some(view) = side.view.as_mut() {
                        view.shown = false;
                    }
                }
                self.host.invalidate();

                if let Some(direction) = self.pending_completion.take() {
                    self.with_listener((), |listener, view| match direction {
                        SwipeDirection::Left => listener.on_swipe_left_complete(view),
                        SwipeDirection::Right => listener.on_swipe_right_complete(view),
                    });
                }
            }
        }
    }

    /// Calls the listener with mutable access to the view.
    ///
    /// A listener installed during the call replaces the one being called.
    fn with_listener<R>(
        &mut self,
        default: R,
        call: impl FnOnce(&mut dyn SwipeGestureListener, &mut Self) -> R,
    ) -> R {
        let Some(mut listener) = self.listener.take() else {
            return default;
        };
        self.listener_replaced = false;
        let result = call(&mut *listener, self);
        if !self.listener_replaced {
            self.listener = Some(listener);
        }
        result
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.perform_view_animations();
        self.host.invalidate();
    }

    /// Shows the background on the side being revealed and feeds its
    /// progress animator.
    fn perform_view_animations(&mut self) {
        let revealed = SwipeDirection::from_delta(self.offset);
        for direction in SwipeDirection::ALL {
            let side = self.side_mut(direction);
            let child_visible = side.child_visible;
            if let Some(view) = side.view.as_mut() {
                view.shown = child_visible && revealed == Some(direction);
            }
        }

        let Some(direction) = revealed else {
            return;
        };
        let progress_distance = self.offset.abs();
        let side = self.side_mut(direction);
        if side.max_distance <= 0.0 {
            return;
        }
        let progress = progress_distance / side.max_distance;
        let min_activation_progress = side.min_activation_distance / side.max_distance;
        if let (Some(view), Some(animator)) = (side.view.as_mut(), side.animator.as_mut()) {
            animator.on_update_swipe_progress(view, progress, min_activation_progress);
        }
    }

    fn reset_click_and_long_click(&mut self) {
        if self.pressed {
            self.set_pressed(false, self.session.hotspot());
        }
        if PressMessage::GESTURE
            .iter()
            .any(|message| self.host.has_messages(*message))
        {
            self.remove_press_messages();
        }
    }

    fn remove_press_messages(&self) {
        for message in PressMessage::GESTURE {
            self.host.remove_messages(message);
        }
    }

    fn set_pressed(&mut self, pressed: bool, hotspot: Point) {
        if self.pressed == pressed {
            return;
        }
        self.pressed = pressed;
        self.host.set_pressed(pressed, hotspot);
    }
}

impl std::fmt::Debug for SwipeActionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeActionView")
            .field("offset", &self.offset)
            .field("dragging", &self.session.is_dragging())
            .field("pressed", &self.pressed)
            .field("can_perform_swipe_action", &self.can_perform_swipe_action)
            .field("enabled_directions", &self.enabled_directions)
            .field("enabled_edges", &self.enabled_edges)
            .finish_non_exhaustive()
    }
}
