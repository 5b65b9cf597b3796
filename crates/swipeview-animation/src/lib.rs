//! Time-based animations for Swipeview.
//!
//! Animations here are plain state machines: they are started with a target
//! and an [`AnimationSpec`], then stepped with the host's frame time until
//! they report completion. Nothing in this crate owns a timer.

mod animation;
mod float_animator;

pub use animation::*;
pub use float_animator::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::float_animator::{AnimationFrame, FloatAnimator};
}
