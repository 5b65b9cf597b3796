//! Pure math/data for Swipeview
//!
//! This crate contains geometry primitives, color definitions and the small
//! numeric helpers shared by the gesture and layout crates.

mod color;
mod geometry;
mod math;

pub use color::*;
pub use geometry::*;
pub use math::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::math::{clamp, radius};
}
