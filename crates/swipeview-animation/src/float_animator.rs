//! Single-value tween driven by frame callbacks.

use crate::{AnimationSpec, Lerp};
use swipeview_core::RuntimeScheduler;

/// Value produced by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub value: f32,
    /// True on the frame that reached the target.
    pub finished: bool,
}

/// Animates one `f32` from a start value to a target.
///
/// Only one animation is active at a time: starting a new one replaces the
/// previous one without notifying it. The start time is taken from the first
/// frame delivered after [`FloatAnimator::animate_to`], so an animation never
/// jumps because the host was slow to deliver that frame.
#[derive(Debug, Clone)]
pub struct FloatAnimator {
    start: f32,
    target: f32,
    current: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    running: bool,
}

impl FloatAnimator {
    pub fn new(initial: f32) -> Self {
        Self {
            start: initial,
            target: initial,
            current: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            running: false,
        }
    }

    /// Starts animating from `from` to `target` and requests the first frame.
    pub fn animate_to<S: RuntimeScheduler + ?Sized>(
        &mut self,
        from: f32,
        target: f32,
        spec: AnimationSpec,
        scheduler: &S,
    ) {
        self.start = from;
        self.current = from;
        self.target = target;
        self.spec = spec;
        self.start_time_nanos = None;
        self.running = true;
        scheduler.schedule_frame();
    }

    /// Stops the animation where it is.
    ///
    /// Returns the value reached if an animation was running.
    pub fn cancel(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.start_time_nanos = None;
        self.start = self.current;
        self.target = self.current;
        Some(self.current)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Advances the animation to `frame_time_nanos`.
    ///
    /// Returns `None` when nothing is running. Requests another frame from
    /// `scheduler` while the animation has not finished.
    pub fn on_frame<S: RuntimeScheduler + ?Sized>(
        &mut self,
        frame_time_nanos: u64,
        scheduler: &S,
    ) -> Option<AnimationFrame> {
        if !self.running {
            return None;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = self.spec.delay_millis.saturating_mul(1_000_000);

        if elapsed_nanos < delay_nanos {
            scheduler.schedule_frame();
            return Some(AnimationFrame {
                value: self.current,
                finished: false,
            });
        }

        let animation_elapsed = elapsed_nanos - delay_nanos;
        let duration_nanos = self.spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear_progress = (animation_elapsed as f64 / duration_nanos as f64).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear_progress as f32);

        if linear_progress >= 1.0 {
            self.current = self.target;
            self.start = self.target;
            self.start_time_nanos = None;
            self.running = false;
            return Some(AnimationFrame {
                value: self.current,
                finished: true,
            });
        }

        self.current = self.start.lerp(&self.target, progress);
        scheduler.schedule_frame();
        Some(AnimationFrame {
            value: self.current,
            finished: false,
        })
    }
}

impl Default for FloatAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
#[path = "tests/float_animator_tests.rs"]
mod tests;
