//! Swipe-to-reveal action container.
//!
//! [`SwipeActionView`] hosts up to two background views and a foreground
//! container. Dragging the container horizontally reveals the background on
//! the opposite side; releasing far or fast enough commits the swipe and
//! notifies a [`SwipeGestureListener`]. The widget does not render or own
//! timers: it talks to its environment through a [`SwipeHost`].

mod animators;
mod click_shim;
mod config;
mod error;
mod host;
mod listener;
mod position_animation;
mod release;
mod resolution;
mod ripple;
mod swipe_action_view;

pub use animators::*;
pub use click_shim::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use listener::*;
pub use position_animation::*;
pub use release::*;
pub use resolution::*;
pub use ripple::*;
pub use swipe_action_view::*;

pub use swipeview_foundation::{
    PointerEvent, PointerEventKind, PressMessage, SwipeDirection, SwipeDirections, SwipeEdge,
    SwipeEdges, ViewConfiguration,
};

pub mod prelude {
    pub use crate::animators::{RevealView, ScalableIconAnimator, SwipeProgressAnimator};
    pub use crate::config::SwipeConfig;
    pub use crate::error::{SwipeConfigError, SwipeError};
    pub use crate::host::{ClickKind, SwipeHost};
    pub use crate::listener::{NoopSwipeGestureListener, SwipeGestureListener};
    pub use crate::ripple::RippleFrame;
    pub use crate::swipe_action_view::{ChildTransform, SwipeActionView};
    pub use swipeview_foundation::prelude::*;
    pub use swipeview_ui_graphics::prelude::*;
    pub use swipeview_ui_layout::{ChildLayout, HorizontalAlignment, LayoutDirection};
}
