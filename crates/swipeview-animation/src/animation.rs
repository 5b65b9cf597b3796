//! Easing curves and tween specifications.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Quadratic deceleration, `1 - (1 - t)^2`.
    /// Matches the platform's default decelerate interpolator used for swipes.
    Decelerate,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::Decelerate => {
                let t = fraction.clamp(0.0, 1.0);
                1.0 - (1.0 - t) * (1.0 - t)
            }
        }
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Create a decelerating tween animation.
    pub fn decelerate(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Decelerate)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Delay plus duration.
    pub fn total_millis(&self) -> u64 {
        self.delay_millis.saturating_add(self.duration_millis)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::decelerate(300)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
