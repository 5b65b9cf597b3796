//! Strategies that animate a revealed background view while swiping.

/// Visual state of a background view revealed by swiping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealView {
    /// Index of the child in the widget.
    pub index: usize,
    /// Whether the view is currently drawn.
    pub shown: bool,
    pub scale: f32,
    pub alpha: f32,
}

impl RevealView {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            shown: false,
            scale: 1.0,
            alpha: 1.0,
        }
    }
}

/// Animates a [`RevealView`] as a function of swipe progress.
pub trait SwipeProgressAnimator {
    /// Called on every container offset change while the offset is non-zero.
    ///
    /// `progress` is the offset relative to the maximum swipe distance of the
    /// revealed side and `min_activation_progress` the progress a release
    /// must exceed to activate.
    fn on_update_swipe_progress(
        &mut self,
        view: &mut RevealView,
        progress: f32,
        min_activation_progress: f32,
    );

    /// The container reached its fully swiped position.
    fn on_activate(&mut self) {}
}

/// Scales the revealed view up from 0.65 once the swipe passes the
/// activation threshold, reaching full size 0.4 progress later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalableIconAnimator {
    pub min_scale: f32,
    pub saturation_range: f32,
}

impl ScalableIconAnimator {
    pub fn new() -> Self {
        Self {
            min_scale: 0.65,
            saturation_range: 0.4,
        }
    }

    pub fn scale_for(&self, progress: f32, min_activation_progress: f32) -> f32 {
        if progress <= min_activation_progress || self.saturation_range <= 0.0 {
            return self.min_scale;
        }
        let over_activation = (progress - min_activation_progress) / self.saturation_range;
        self.min_scale + (1.0 - self.min_scale) * over_activation.min(1.0)
    }
}

impl Default for ScalableIconAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeProgressAnimator for ScalableIconAnimator {
    fn on_update_swipe_progress(
        &mut self,
        view: &mut RevealView,
        progress: f32,
        min_activation_progress: f32,
    ) {
        view.scale = self.scale_for(progress, min_activation_progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
    }

    #[test]
    fn stays_small_below_activation() {
        let animator = ScalableIconAnimator::new();
        approx(animator.scale_for(0.0, 0.8), 0.65);
        approx(animator.scale_for(0.8, 0.8), 0.65);
    }

    #[test]
    fn grows_linearly_past_activation() {
        let animator = ScalableIconAnimator::new();
        approx(animator.scale_for(0.9, 0.8), 0.7375);
        approx(animator.scale_for(0.6, 0.4), 0.825);
    }

    #[test]
    fn saturates_at_full_size() {
        let animator = ScalableIconAnimator::new();
        approx(animator.scale_for(0.8, 0.4), 1.0);
        approx(animator.scale_for(1.0, 0.2), 1.0);
    }

    #[test]
    fn updates_view_scale() {
        let mut animator = ScalableIconAnimator::new();
        let mut view = RevealView::new(0);
        animator.on_update_swipe_progress(&mut view, 1.0, 0.8);
        approx(view.scale, 0.825);
        assert_eq!(view.alpha, 1.0);
    }
}
