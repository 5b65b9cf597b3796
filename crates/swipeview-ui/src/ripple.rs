//! Circular reveal played when a swipe activates.

use swipeview_animation::{AnimationSpec, FloatAnimator};
use swipeview_core::RuntimeScheduler;
use swipeview_ui_graphics::{Color, Point, Rect};

/// What to draw for a running ripple on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleFrame {
    /// Drawing is clipped to these bounds.
    pub clip: Rect,
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// A ripple growing from a fixed center to `max_radius` while fading out.
#[derive(Clone, Debug)]
pub struct SwipeRipple {
    color: Option<Color>,
    clip: Rect,
    center: Point,
    max_radius: f32,
    duration_millis: u64,
    progress: FloatAnimator,
}

impl SwipeRipple {
    pub fn new(color: Option<Color>, duration_millis: u64) -> Self {
        Self {
            color,
            clip: Rect::default(),
            center: Point::ZERO,
            max_radius: 0.0,
            duration_millis,
            progress: FloatAnimator::new(0.0),
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// `None` disables the ripple and stops a running one.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
        if color.is_none() {
            self.stop();
        }
    }

    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub fn set_geometry(&mut self, clip: Rect, center: Point, max_radius: f32) {
        self.clip = clip;
        self.center = center;
        self.max_radius = max_radius;
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Starts over from zero. Returns `false` if the ripple has no color.
    pub fn restart<S: RuntimeScheduler + ?Sized>(&mut self, scheduler: &S) -> bool {
        self.stop();
        if !self.has_color() {
            return false;
        }
        self.progress
            .animate_to(0.0, 1.0, AnimationSpec::linear(self.duration_millis), scheduler);
        true
    }

    pub fn stop(&mut self) {
        self.progress.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.progress.is_running()
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// Steps the ripple. Returns `true` if it needs a redraw.
    pub fn on_frame<S: RuntimeScheduler + ?Sized>(
        &mut self,
        frame_time_nanos: u64,
        scheduler: &S,
    ) -> bool {
        self.progress.on_frame(frame_time_nanos, scheduler).is_some()
    }

    pub fn frame(&self) -> Option<RippleFrame> {
        let color = self.color?;
        if !self.is_running() {
            return None;
        }
        let progress = self.progress();
        Some(RippleFrame {
            clip: self.clip,
            center: self.center,
            radius: self.max_radius * progress,
            color: color.with_alpha(1.0 - progress),
        })
    }
}
