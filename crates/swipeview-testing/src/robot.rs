//! Robot-style driver for swipe widgets.
//!
//! The robot owns a [`SwipeActionView`] wired to a [`FakeHost`] and replays
//! pointer input against it while advancing virtual time. Time only moves
//! through [`SwipeRobot::advance_time`], which delivers due messages and
//! requested frames the way a UI loop running at roughly 60 fps would.
//!
//! # Example
//!
//! ```
//! use swipeview_testing::{two_sided_layout, SwipeRobot, ROW_SIZE};
//! use swipeview_ui::SwipeConfig;
//!
//! let mut robot = SwipeRobot::new(SwipeConfig::default());
//! robot.layout(ROW_SIZE, &two_sided_layout(ROW_SIZE, 100.0)).unwrap();
//!
//! robot.down(150.0, 40.0);
//! robot.drag_to(180.0, 40.0, 4);
//! robot.up();
//! robot.wait_for_idle();
//!
//! assert_eq!(robot.view().container_offset(), 0.0);
//! ```

use std::rc::Rc;

use swipeview_foundation::PointerEvent;
use swipeview_ui::{SwipeActionView, SwipeConfig, SwipeConfigError, SwipeHost};
use swipeview_ui_graphics::{Point, Size};
use swipeview_ui_layout::ChildLayout;

use crate::FakeHost;

/// Virtual frame interval.
pub const FRAME_MILLIS: u64 = 16;

/// Upper bound for [`SwipeRobot::wait_for_idle`].
const IDLE_TIMEOUT_MILLIS: u64 = 30_000;

pub struct SwipeRobot {
    host: Rc<FakeHost>,
    view: SwipeActionView,
    pointer: Point,
}

impl SwipeRobot {
    pub fn new(config: SwipeConfig) -> Self {
        let host = FakeHost::new();
        let view = SwipeActionView::new(Rc::clone(&host) as Rc<dyn SwipeHost>, config);
        Self::with_view(host, view)
    }

    /// Drives an existing view; `host` must be the view's host.
    pub fn with_view(host: Rc<FakeHost>, view: SwipeActionView) -> Self {
        Self {
            host,
            view,
            pointer: Point::ZERO,
        }
    }

    pub fn layout(&mut self, size: Size, children: &[ChildLayout]) -> Result<(), SwipeConfigError> {
        self.view.on_layout(size, children)
    }

    pub fn view(&self) -> &SwipeActionView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut SwipeActionView {
        &mut self.view
    }

    pub fn host(&self) -> &FakeHost {
        &self.host
    }

    pub fn now(&self) -> u64 {
        self.host.now_millis()
    }

    /// Last pointer position sent.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn down(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);
        let event = PointerEvent::down(x, y, self.now());
        self.view.on_touch_event(&event)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);
        let event = PointerEvent::moved(x, y, self.now());
        self.view.on_touch_event(&event)
    }

    /// Releases at the last pointer position.
    pub fn up(&mut self) -> bool {
        let event = PointerEvent::up(self.pointer.x, self.pointer.y, self.now());
        self.view.on_touch_event(&event)
    }

    pub fn cancel(&mut self) -> bool {
        let event = PointerEvent::cancel(self.pointer.x, self.pointer.y, self.now());
        self.view.on_touch_event(&event)
    }

    pub fn intercept_down(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);
        let event = PointerEvent::down(x, y, self.now());
        self.view.on_intercept_touch_event(&event)
    }

    pub fn intercept_move_to(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);
        let event = PointerEvent::moved(x, y, self.now());
        self.view.on_intercept_touch_event(&event)
    }

    pub fn intercept_up(&mut self) -> bool {
        let event = PointerEvent::up(self.pointer.x, self.pointer.y, self.now());
        self.view.on_intercept_touch_event(&event)
    }

    /// Moves in `steps` equal increments, one frame apart.
    ///
    /// Returns what the view answered to the last move.
    pub fn drag_to(&mut self, x: f32, y: f32, steps: u32) -> bool {
        let steps = steps.max(1);
        let start = self.pointer;
        let mut handled = false;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.advance_time(FRAME_MILLIS);
            handled = self.move_to(
                start.x + (x - start.x) * fraction,
                start.y + (y - start.y) * fraction,
            );
        }
        handled
    }

    /// Full gesture: down, drag in `steps`, a pause long enough for the
    /// pointer to count as stopped, then up.
    pub fn slow_swipe(&mut self, from: Point, to: Point, steps: u32) {
        self.down(from.x, from.y);
        self.drag_to(to.x, to.y, steps);
        self.advance_time(50);
        self.up();
    }

    /// Advances virtual time, delivering messages and frames on the way.
    pub fn advance_time(&mut self, millis: u64) {
        let target = self.now().saturating_add(millis);
        while self.now() < target {
            let step = FRAME_MILLIS.min(target - self.now());
            self.host.clock().advance(step);
            self.pump();
        }
    }

    /// Runs until no frame or message is pending.
    pub fn wait_for_idle(&mut self) {
        let deadline = self.now().saturating_add(IDLE_TIMEOUT_MILLIS);
        while self.host.has_pending_frame() || self.host.pending_messages() > 0 {
            if self.now() >= deadline {
                panic!("swipe view did not become idle within {IDLE_TIMEOUT_MILLIS}ms");
            }
            self.advance_time(FRAME_MILLIS);
        }
    }

    fn pump(&mut self) {
        for message in self.host.take_due_messages() {
            self.view.handle_message(message);
        }
        if self.host.take_frame_request() {
            self.view.on_frame(self.now() * 1_000_000);
        }
    }
}
