//! Foundation elements for Swipeview: pointer input, gesture tracking and the
//! swipe direction model.

pub mod direction;
pub mod gesture_constants;
pub mod gestures;
pub mod pointer;
pub mod velocity_tracker;
pub mod view_configuration;

pub use direction::{SwipeDirection, SwipeDirections, SwipeEdge, SwipeEdges};
pub use gestures::{is_touch_in_swipe_area, PressMessage, TouchSession};
pub use pointer::{PointerEvent, PointerEventKind};
pub use velocity_tracker::VelocityTracker1D;
pub use view_configuration::ViewConfiguration;

pub mod prelude {
    pub use crate::direction::{SwipeDirection, SwipeDirections, SwipeEdge, SwipeEdges};
    pub use crate::gestures::{PressMessage, TouchSession};
    pub use crate::pointer::{PointerEvent, PointerEventKind};
    pub use crate::velocity_tracker::VelocityTracker1D;
    pub use crate::view_configuration::ViewConfiguration;
}
