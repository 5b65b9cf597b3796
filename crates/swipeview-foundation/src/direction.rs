//! Swipe direction and edge model.
//!
//! `Left` means the container moves to the left and the left-reveal view
//! (aligned to the end) becomes visible. The bit values match the flags
//! accepted by the flag based configuration surface.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 2] = [SwipeDirection::Left, SwipeDirection::Right];

    pub const fn bit(self) -> u8 {
        match self {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => 2,
        }
    }

    /// Direction implied by a horizontal delta or offset. Zero has no direction.
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(SwipeDirection::Right)
        } else if delta < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    /// Sign applied to a distance to reach this direction's terminal offset.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            SwipeDirection::Left => SwipeDirection::Right,
            SwipeDirection::Right => SwipeDirection::Left,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Left => f.write_str("left"),
            SwipeDirection::Right => f.write_str("right"),
        }
    }
}

/// Bitmask of enabled swipe directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwipeDirections(u8);

impl SwipeDirections {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTH: Self = Self(3);

    /// Builds a mask from raw flag bits, ignoring unknown bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::BOTH.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn with(mut self, direction: SwipeDirection) -> Self {
        self.insert(direction);
        self
    }

    pub fn insert(&mut self, direction: SwipeDirection) {
        self.0 |= direction.bit();
    }

    pub fn remove(&mut self, direction: SwipeDirection) {
        self.0 &= !direction.bit();
    }

    pub fn set(&mut self, direction: SwipeDirection, enabled: bool) {
        if enabled {
            self.insert(direction);
        } else {
            self.remove(direction);
        }
    }

    pub fn contains(&self, direction: SwipeDirection) -> bool {
        (self.0 & direction.bit()) != 0
    }
}

impl Default for SwipeDirections {
    fn default() -> Self {
        Self::BOTH
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeEdge {
    Left,
    Right,
}

impl SwipeEdge {
    pub const fn bit(self) -> u8 {
        match self {
            SwipeEdge::Left => 1,
            SwipeEdge::Right => 2,
        }
    }
}

/// Edges on which touches are accepted without the edge-slop exclusion.
///
/// Empty by default: touches within `edge_slop` of either edge never start a
/// drag or a tap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SwipeEdges(u8);

impl SwipeEdges {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTH: Self = Self(3);

    pub fn with(mut self, edge: SwipeEdge) -> Self {
        self.insert(edge);
        self
    }

    pub fn insert(&mut self, edge: SwipeEdge) {
        self.0 |= edge.bit();
    }

    pub fn remove(&mut self, edge: SwipeEdge) {
        self.0 &= !edge.bit();
    }

    pub fn contains(&self, edge: SwipeEdge) -> bool {
        (self.0 & edge.bit()) != 0
    }
}
