//! Testing utilities and harness for Swipeview

pub mod fake_host;
pub mod fixtures;
pub mod recording_listener;
pub mod robot;
pub mod robot_assertions;

pub use fake_host::*;
pub use fixtures::*;
pub use recording_listener::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fake_host::{FakeHost, HostEvent};
    pub use crate::fixtures::*;
    pub use crate::recording_listener::{ListenerCall, ListenerResponse, RecordingListener};
    pub use crate::robot::{SwipeRobot, FRAME_MILLIS};
    pub use crate::robot_assertions;
    pub use crate::robot_assertions::assert_approx_eq;
}
