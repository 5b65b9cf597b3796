//! Host printing what a real view system would do.

use std::cell::{Cell, RefCell};

use swipeview_core::{ManualClock, MessageQueue, RuntimeScheduler};
use swipeview_ui::{ClickKind, PressMessage, SwipeHost};
use swipeview_ui_graphics::Point;

/// Runs on virtual time so a replay finishes instantly and reads the same on
/// every run.
pub struct ConsoleHost {
    name: &'static str,
    clock: ManualClock,
    queue: RefCell<MessageQueue<PressMessage>>,
    frame_requested: Cell<bool>,
}

impl ConsoleHost {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            clock: ManualClock::new(0),
            queue: RefCell::new(MessageQueue::new()),
            frame_requested: Cell::new(false),
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    pub fn advance(&self, millis: u64) {
        self.clock.advance(millis);
    }

    pub fn take_due_messages(&self) -> Vec<PressMessage> {
        let now = self.clock.now_millis();
        self.queue.borrow_mut().take_due(now).into_iter().collect()
    }

    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.replace(false)
    }

    pub fn is_idle(&self) -> bool {
        !self.frame_requested.get() && self.queue.borrow().is_empty()
    }
}

impl RuntimeScheduler for ConsoleHost {
    fn schedule_frame(&self) {
        self.frame_requested.set(true);
    }
}

impl SwipeHost for ConsoleHost {
    fn request_disallow_intercept(&self, disallow: bool) {
        log::debug!("[{}] parent may intercept: {}", self.name, !disallow);
    }

    fn post_delayed(&self, message: PressMessage, delay_millis: u64) -> bool {
        let now = self.clock.now_millis();
        self.queue.borrow_mut().send_delayed(message, now, delay_millis);
        true
    }

    fn remove_messages(&self, message: PressMessage) {
        self.queue.borrow_mut().remove(&message);
    }

    fn has_messages(&self, message: PressMessage) -> bool {
        self.queue.borrow().contains(&message)
    }

    fn invalidate(&self) {}

    fn set_pressed(&self, pressed: bool, hotspot: Point) {
        log::info!(
            "[{}] pressed={pressed} at ({:.0}, {:.0})",
            self.name,
            hotspot.x,
            hotspot.y
        );
    }

    fn dispatch_click(&self, kind: ClickKind) -> bool {
        log::info!("[{}] {kind:?}", self.name);
        false
    }
}
