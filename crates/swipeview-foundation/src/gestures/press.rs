/// Delayed messages a swipe widget posts to its host.
///
/// Each tag is posted at most once per gesture and can be removed by tag, so
/// a gesture that changes state can cancel its own pending transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PressMessage {
    /// Tap timeout elapsed: show the pressed state.
    Tap,
    /// Long press timeout elapsed: perform the long click.
    LongPress,
    /// Pressed state duration elapsed after a tap: clear the pressed state.
    Unpress,
}

impl PressMessage {
    /// Messages armed on pointer down and cleared when the gesture moves on.
    pub const GESTURE: [PressMessage; 2] = [PressMessage::Tap, PressMessage::LongPress];
}
