//! Core runtime services for Swipeview.
//!
//! Widgets in this workspace never block and never own threads. Everything
//! time-based is expressed through the services defined here:
//!
//! - [`RuntimeScheduler`] asks the host for another frame,
//! - [`Clock`] reports monotonic time,
//! - [`MessageQueue`] holds tagged one-shot messages that fire after a delay and
//!   can be removed by tag before they do.

mod message_queue;
mod platform;
mod std_clock;

pub use message_queue::*;
pub use platform::*;
pub use std_clock::*;

pub mod prelude {
    pub use crate::message_queue::MessageQueue;
    pub use crate::platform::{Clock, RuntimeScheduler};
    pub use crate::std_clock::{ManualClock, StdClock};
}
