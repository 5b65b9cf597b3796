//! The sample rows and the listeners attached to them.

use std::rc::Rc;

use swipeview_ui::{
    PointerEvent, ScalableIconAnimator, SwipeActionView, SwipeConfig, SwipeDirection,
    SwipeGestureListener, SwipeHost,
};
use swipeview_ui_graphics::{Color, Rect, Size};
use swipeview_ui_layout::{ChildLayout, HorizontalAlignment};

use crate::console_host::ConsoleHost;

pub const ROW_SIZE: Size = Size {
    width: 360.0,
    height: 72.0,
};
const REVEAL_WIDTH: f32 = 96.0;
const FRAME_MILLIS: u64 = 16;

/// Which backgrounds a row has.
#[derive(Clone, Copy, Debug)]
pub enum Backgrounds {
    Left,
    Right,
    Both,
}

impl Backgrounds {
    fn children(self) -> Vec<ChildLayout> {
        let right = ChildLayout::new(Rect::new(0.0, 0.0, REVEAL_WIDTH, ROW_SIZE.height))
            .with_alignment(HorizontalAlignment::Start);
        let left = ChildLayout::new(Rect::new(
            ROW_SIZE.width - REVEAL_WIDTH,
            0.0,
            REVEAL_WIDTH,
            ROW_SIZE.height,
        ))
        .with_alignment(HorizontalAlignment::End);
        let container = ChildLayout::new(Rect::from_size(ROW_SIZE));
        match self {
            Backgrounds::Left => vec![left, container],
            Backgrounds::Right => vec![right, container],
            Backgrounds::Both => vec![right, left, container],
        }
    }
}

/// Reports swipes; keeps right swipes open for two seconds.
pub struct ToastListener {
    pub name: &'static str,
}

impl SwipeGestureListener for ToastListener {
    fn on_swiped_left(&mut self, _view: &mut SwipeActionView) -> bool {
        log::info!("[{}] swiped left", self.name);
        true
    }

    fn on_swiped_right(&mut self, view: &mut SwipeActionView) -> bool {
        log::info!("[{}] swiped right", self.name);
        view.move_to_original_position(2000);
        false
    }

    fn on_swipe_right_complete(&mut self, _view: &mut SwipeActionView) {
        log::info!("[{}] back at rest", self.name);
    }
}

/// Right swipes switch the left direction on and off.
pub struct ToggleListener;

impl SwipeGestureListener for ToggleListener {
    fn on_swiped_left(&mut self, _view: &mut SwipeActionView) -> bool {
        log::info!("[toggle] swiped left");
        true
    }

    fn on_swiped_right(&mut self, view: &mut SwipeActionView) -> bool {
        let enabled = !view.has_enabled_direction(SwipeDirection::Left);
        match view.set_direction_enabled(SwipeDirection::Left, enabled) {
            Ok(()) => log::info!("[toggle] left swipe enabled: {enabled}"),
            Err(err) => log::warn!("[toggle] {err}"),
        }
        true
    }
}

/// Left swipes turn the ripples off, right swipes turn them green.
pub struct RippleListener;

impl SwipeGestureListener for RippleListener {
    fn on_swiped_left(&mut self, view: &mut SwipeActionView) -> bool {
        for direction in SwipeDirection::ALL {
            view.set_ripple_color(direction, Color::from_argb_int(-1));
        }
        log::info!("[ripples] ripples off");
        true
    }

    fn on_swiped_right(&mut self, view: &mut SwipeActionView) -> bool {
        for direction in SwipeDirection::ALL {
            view.set_ripple_color(direction, Some(Color::GREEN));
        }
        log::info!("[ripples] ripples green");
        true
    }
}

/// One widget wired to its own console host.
pub struct SampleRow {
    name: &'static str,
    host: Rc<ConsoleHost>,
    view: SwipeActionView,
    pointer_x: f32,
}

impl SampleRow {
    pub fn new(
        name: &'static str,
        backgrounds: Backgrounds,
        config: SwipeConfig,
        listener: Box<dyn SwipeGestureListener>,
    ) -> Self {
        let host = Rc::new(ConsoleHost::new(name));
        let mut view = SwipeActionView::new(Rc::clone(&host) as Rc<dyn SwipeHost>, config);
        if let Err(err) = view.on_layout(ROW_SIZE, &backgrounds.children()) {
            log::error!("[{name}] invalid layout: {err}");
        }
        view.set_swipe_gesture_listener(Some(listener));
        view.set_left_swipe_animator(Some(Box::new(ScalableIconAnimator::new())));
        view.set_right_swipe_animator(Some(Box::new(ScalableIconAnimator::new())));
        Self {
            name,
            host,
            view,
            pointer_x: 0.0,
        }
    }

    pub fn view_mut(&mut self) -> &mut SwipeActionView {
        &mut self.view
    }

    /// Drags from `from_x` to `to_x` over `steps` frames, pauses, and releases.
    pub fn swipe(&mut self, from_x: f32, to_x: f32, steps: u32) {
        let y = ROW_SIZE.height / 2.0;
        log::info!("[{}] swipe {from_x:.0} -> {to_x:.0}", self.name);
        self.pointer_x = from_x;
        self.view
            .on_touch_event(&PointerEvent::down(from_x, y, self.host.now_millis()));
        for step in 1..=steps.max(1) {
            self.run_for(FRAME_MILLIS);
            let x = from_x + (to_x - from_x) * step as f32 / steps.max(1) as f32;
            self.pointer_x = x;
            self.view
                .on_touch_event(&PointerEvent::moved(x, y, self.host.now_millis()));
        }
        log::debug!(
            "[{}] released at offset {:.1}",
            self.name,
            self.view.container_offset()
        );
        self.run_for(50);
        self.view
            .on_touch_event(&PointerEvent::up(self.pointer_x, y, self.host.now_millis()));
    }

    pub fn tap(&mut self, x: f32) {
        let y = ROW_SIZE.height / 2.0;
        self.view
            .on_touch_event(&PointerEvent::down(x, y, self.host.now_millis()));
        self.run_for(FRAME_MILLIS);
        self.view
            .on_touch_event(&PointerEvent::up(x, y, self.host.now_millis()));
    }

    pub fn run_for(&mut self, millis: u64) {
        let mut remaining = millis;
        while remaining > 0 {
            let step = remaining.min(FRAME_MILLIS);
            remaining -= step;
            self.host.advance(step);
            self.pump();
        }
    }

    /// Runs until nothing is scheduled.
    pub fn settle(&mut self) {
        while !self.host.is_idle() {
            self.run_for(FRAME_MILLIS);
        }
        log::info!(
            "[{}] settled at offset {:.1} after {}ms",
            self.name,
            self.view.container_offset(),
            self.host.now_millis()
        );
    }

    fn pump(&mut self) {
        for message in self.host.take_due_messages() {
            self.view.handle_message(message);
        }
        if self.host.take_frame_request() {
            self.view.on_frame(self.host.now_millis() * 1_000_000);
            for direction in SwipeDirection::ALL {
                if let Some(ripple) = self.view.ripple_frame(direction) {
                    log::trace!(
                        "[{}] {direction} ripple radius {:.1} alpha {:.2}",
                        self.name,
                        ripple.radius,
                        ripple.color.a()
                    );
                }
            }
        }
    }
}

pub fn ripple_config() -> SwipeConfig {
    SwipeConfig::default().with_ripple_colors(
        Some(Color::from_rgb_u8(0x21, 0x96, 0xF3)),
        Some(Color::from_rgb_u8(0xF4, 0x43, 0x36)),
    )
}
