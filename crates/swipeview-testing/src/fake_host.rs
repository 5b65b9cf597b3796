//! In-memory [`SwipeHost`] that records every interaction.

use std::cell::RefCell;
use std::rc::Rc;

use swipeview_core::{ManualClock, MessageQueue, RuntimeScheduler};
use swipeview_foundation::PressMessage;
use swipeview_ui::{ClickKind, SwipeHost};
use swipeview_ui_graphics::Point;

/// A host interaction worth asserting on.
///
/// Frame requests and invalidations are only counted, see
/// [`FakeHost::frame_requests`] and [`FakeHost::invalidations`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    DisallowIntercept(bool),
    Posted {
        message: PressMessage,
        delay_millis: u64,
    },
    Removed(PressMessage),
    Pressed {
        pressed: bool,
        hotspot: Point,
    },
    Click(ClickKind),
}

#[derive(Default)]
struct FakeHostState {
    queue: MessageQueue<PressMessage>,
    events: Vec<HostEvent>,
    frame_requested: bool,
    frame_requests: usize,
    invalidations: usize,
    pressed: bool,
    disallow_intercept: bool,
    fail_scheduling: bool,
    click_result: bool,
}

/// Host double owning a manual clock and a message queue.
///
/// Nothing is delivered on its own: a driver such as
/// [`SwipeRobot`](crate::SwipeRobot) takes due messages and pending frame
/// requests and hands them to the view.
#[derive(Default)]
pub struct FakeHost {
    clock: ManualClock,
    state: RefCell<FakeHostState>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Makes `post_delayed` fail, as for a detached view.
    pub fn set_fail_scheduling(&self, fail: bool) {
        self.state.borrow_mut().fail_scheduling = fail;
    }

    /// Result reported by native click dispatch.
    pub fn set_click_result(&self, handled: bool) {
        self.state.borrow_mut().click_result = handled;
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.state.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }

    pub fn count_events(&self, predicate: impl Fn(&HostEvent) -> bool) -> usize {
        self.state
            .borrow()
            .events
            .iter()
            .filter(|event| predicate(event))
            .count()
    }

    pub fn clicks(&self, kind: ClickKind) -> usize {
        self.count_events(|event| *event == HostEvent::Click(kind))
    }

    pub fn is_pressed(&self) -> bool {
        self.state.borrow().pressed
    }

    pub fn is_intercept_disallowed(&self) -> bool {
        self.state.borrow().disallow_intercept
    }

    pub fn frame_requests(&self) -> usize {
        self.state.borrow().frame_requests
    }

    pub fn invalidations(&self) -> usize {
        self.state.borrow().invalidations
    }

    pub fn has_pending_frame(&self) -> bool {
        self.state.borrow().frame_requested
    }

    /// Clears and returns the pending frame request.
    pub fn take_frame_request(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().frame_requested)
    }

    pub fn pending_messages(&self) -> usize {
        self.state.borrow().queue.len()
    }

    pub fn has_pending(&self, message: PressMessage) -> bool {
        self.state.borrow().queue.contains(&message)
    }

    pub fn next_message_deadline(&self) -> Option<u64> {
        self.state.borrow().queue.next_deadline()
    }

    /// Removes and returns messages due at the current time, oldest first.
    pub fn take_due_messages(&self) -> Vec<PressMessage> {
        let now = self.clock.now_millis();
        self.state.borrow_mut().queue.take_due(now).into_iter().collect()
    }
}

impl RuntimeScheduler for FakeHost {
    fn schedule_frame(&self) {
        let mut state = self.state.borrow_mut();
        state.frame_requested = true;
        state.frame_requests += 1;
    }
}

impl SwipeHost for FakeHost {
    fn request_disallow_intercept(&self, disallow: bool) {
        let mut state = self.state.borrow_mut();
        state.disallow_intercept = disallow;
        state.events.push(HostEvent::DisallowIntercept(disallow));
    }

    fn post_delayed(&self, message: PressMessage, delay_millis: u64) -> bool {
        let now = self.clock.now_millis();
        let mut state = self.state.borrow_mut();
        if state.fail_scheduling {
            log::trace!("fake host refused {message:?}");
            return false;
        }
        state.queue.send_delayed(message, now, delay_millis);
        state.events.push(HostEvent::Posted {
            message,
            delay_millis,
        });
        true
    }

    fn remove_messages(&self, message: PressMessage) {
        let mut state = self.state.borrow_mut();
        if state.queue.remove(&message) > 0 {
            state.events.push(HostEvent::Removed(message));
        }
    }

    fn has_messages(&self, message: PressMessage) -> bool {
        self.state.borrow().queue.contains(&message)
    }

    fn invalidate(&self) {
        self.state.borrow_mut().invalidations += 1;
    }

    fn set_pressed(&self, pressed: bool, hotspot: Point) {
        let mut state = self.state.borrow_mut();
        state.pressed = pressed;
        state.events.push(HostEvent::Pressed { pressed, hotspot });
    }

    fn dispatch_click(&self, kind: ClickKind) -> bool {
        let mut state = self.state.borrow_mut();
        state.events.push(HostEvent::Click(kind));
        state.click_result
    }
}
