//! Per-gesture bookkeeping for the swipe state machine.

mod press;
mod touch_session;

pub use press::PressMessage;
pub use touch_session::{is_touch_in_swipe_area, TouchSession};
