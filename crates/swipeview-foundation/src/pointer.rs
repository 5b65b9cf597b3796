use swipeview_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer touch event.
///
/// `position` is local to the widget and drives hit tests (edge exclusion,
/// pressed hotspot). `raw_position` is in screen space and drives drag
/// deltas, so it stays stable while the container itself moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub raw_position: Point,
    pub time_millis: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_millis: u64) -> Self {
        Self {
            kind,
            position,
            raw_position: position,
            time_millis,
        }
    }

    pub fn down(x: f32, y: f32, time_millis: u64) -> Self {
        Self::new(PointerEventKind::Down, Point { x, y }, time_millis)
    }

    pub fn moved(x: f32, y: f32, time_millis: u64) -> Self {
        Self::new(PointerEventKind::Move, Point { x, y }, time_millis)
    }

    pub fn up(x: f32, y: f32, time_millis: u64) -> Self {
        Self::new(PointerEventKind::Up, Point { x, y }, time_millis)
    }

    pub fn cancel(x: f32, y: f32, time_millis: u64) -> Self {
        Self::new(PointerEventKind::Cancel, Point { x, y }, time_millis)
    }

    /// Replaces the screen-space position, for widgets not placed at the origin.
    pub fn with_raw_position(mut self, raw_position: Point) -> Self {
        self.raw_position = raw_position;
        self
    }
}
