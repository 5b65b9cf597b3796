//! The single animation that moves the container.

use swipeview_animation::{AnimationSpec, FloatAnimator};
use swipeview_core::RuntimeScheduler;
use swipeview_foundation::SwipeDirection;

/// What to do when a position animation reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionEndAction {
    /// The container is fully swiped in the direction.
    Activated(SwipeDirection),
    /// The container is back at rest.
    Reset,
}

/// Result of stepping the position animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionStep {
    pub offset: f32,
    /// Set on the frame the animation completed.
    pub completed: Option<PositionEndAction>,
}

/// Where a caught animation stopped and what it would have done on
/// completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaughtPosition {
    pub offset: f32,
    pub end_action: Option<PositionEndAction>,
}

/// Owns the container's position animation.
///
/// Starting an animation drops the previous one together with its end
/// action. [`PositionAnimation::catch`] stops the animation where it is and
/// hands the end action to the caller, which decides whether it still runs.
#[derive(Debug, Default)]
pub struct PositionAnimation {
    animator: FloatAnimator,
    end_action: Option<PositionEndAction>,
}

impl PositionAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animate<S: RuntimeScheduler + ?Sized>(
        &mut self,
        from: f32,
        target: f32,
        spec: AnimationSpec,
        end_action: PositionEndAction,
        scheduler: &S,
    ) {
        if let Some(previous) = self.end_action.replace(end_action) {
            log::trace!("position animation {previous:?} replaced by {end_action:?}");
        }
        self.animator.animate_to(from, target, spec, scheduler);
    }

    /// Stops the running animation, returning the offset it reached and its
    /// pending end action.
    pub fn catch(&mut self) -> Option<CaughtPosition> {
        let offset = self.animator.cancel()?;
        let end_action = self.end_action.take();
        log::trace!("caught position animation {end_action:?} at {offset}");
        Some(CaughtPosition { offset, end_action })
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    pub fn end_action(&self) -> Option<PositionEndAction> {
        if self.is_running() {
            self.end_action
        } else {
            None
        }
    }

    pub fn on_frame<S: RuntimeScheduler + ?Sized>(
        &mut self,
        frame_time_nanos: u64,
        scheduler: &S,
    ) -> Option<PositionStep> {
        let frame = self.animator.on_frame(frame_time_nanos, scheduler)?;
        let completed = if frame.finished {
            self.end_action.take()
        } else {
            None
        };
        Some(PositionStep {
            offset: frame.value,
            completed,
        })
    }
}
