//! The environment a swipe widget runs in.

use swipeview_core::RuntimeScheduler;
use swipeview_foundation::PressMessage;
use swipeview_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickKind {
    Click,
    LongClick,
}

/// Services a host toolkit provides to a [`SwipeActionView`](crate::SwipeActionView).
///
/// All calls happen on the UI thread. Implementations must not call back into
/// the widget from inside these methods: posted messages are delivered later
/// through [`SwipeActionView::handle_message`](crate::SwipeActionView::handle_message)
/// and frames through [`SwipeActionView::on_frame`](crate::SwipeActionView::on_frame).
pub trait SwipeHost: RuntimeScheduler {
    /// Ask ancestors to stop intercepting events for the current gesture.
    fn request_disallow_intercept(&self, disallow: bool);

    /// Deliver `message` after `delay_millis`. Returns `false` when the
    /// message could not be scheduled, e.g. the view is detached.
    fn post_delayed(&self, message: PressMessage, delay_millis: u64) -> bool;

    fn remove_messages(&self, message: PressMessage);

    fn has_messages(&self, message: PressMessage) -> bool;

    /// The visual state changed and needs to be redrawn.
    fn invalidate(&self);

    /// Pressed state changed; `hotspot` is the local touch point.
    fn set_pressed(&self, pressed: bool, hotspot: Point);

    /// Native click dispatch (sound effects, accessibility events).
    ///
    /// Only invoked while the widget performs a click itself. Returns whether
    /// the host handled it.
    fn dispatch_click(&self, kind: ClickKind) -> bool;
}
