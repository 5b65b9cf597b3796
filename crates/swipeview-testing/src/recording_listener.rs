use std::cell::RefCell;
use std::rc::Rc;

use swipeview_ui::{SwipeActionView, SwipeGestureListener};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerCall {
    SwipedLeft,
    SwipedRight,
    SwipeLeftComplete,
    SwipeRightComplete,
}

/// How a [`RecordingListener`] answers a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerResponse {
    AutoReset,
    /// Keep the view swiped.
    Keep,
    /// Keep the view swiped, then reset it manually after the delay.
    ResetAfter(u64),
}

/// Listener recording its calls into a shared log.
///
/// Clones share the log, so a test keeps one handle and installs another.
#[derive(Clone)]
pub struct RecordingListener {
    calls: Rc<RefCell<Vec<ListenerCall>>>,
    response: ListenerResponse,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::with_response(ListenerResponse::AutoReset)
    }

    pub fn with_response(response: ListenerResponse) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            response,
        }
    }

    pub fn calls(&self) -> Vec<ListenerCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: ListenerCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    pub fn boxed(&self) -> Option<Box<dyn SwipeGestureListener>> {
        Some(Box::new(self.clone()))
    }

    fn respond(&self, view: &mut SwipeActionView) -> bool {
        match self.response {
            ListenerResponse::AutoReset => true,
            ListenerResponse::Keep => false,
            ListenerResponse::ResetAfter(delay) => {
                view.move_to_original_position(delay);
                false
            }
        }
    }
}

impl Default for RecordingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeGestureListener for RecordingListener {
    fn on_swiped_left(&mut self, view: &mut SwipeActionView) -> bool {
        self.calls.borrow_mut().push(ListenerCall::SwipedLeft);
        self.respond(view)
    }

    fn on_swiped_right(&mut self, view: &mut SwipeActionView) -> bool {
        self.calls.borrow_mut().push(ListenerCall::SwipedRight);
        self.respond(view)
    }

    fn on_swipe_left_complete(&mut self, _view: &mut SwipeActionView) {
        self.calls.borrow_mut().push(ListenerCall::SwipeLeftComplete);
    }

    fn on_swipe_right_complete(&mut self, _view: &mut SwipeActionView) {
        self.calls.borrow_mut().push(ListenerCall::SwipeRightComplete);
    }
}
