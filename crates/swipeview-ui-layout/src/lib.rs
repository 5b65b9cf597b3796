//! Layout contracts & policies for Swipeview

mod alignment;
mod child;

pub use alignment::*;
pub use child::*;

pub mod prelude {
    pub use crate::alignment::{HorizontalAlignment, LayoutDirection};
    pub use crate::child::ChildLayout;
}
