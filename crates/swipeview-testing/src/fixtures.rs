//! Child layouts matching the common widget setups.
//!
//! Backgrounds span the full widget width, as in a list row where the icon
//! sits inside a full-width colored background.

use swipeview_ui_graphics::{Rect, Size};
use swipeview_ui_layout::{ChildLayout, HorizontalAlignment};

pub const ROW_SIZE: Size = Size {
    width: 300.0,
    height: 80.0,
};

/// Background revealed by swiping right, `width` wide.
pub fn right_reveal_child(width: f32, height: f32) -> ChildLayout {
    ChildLayout::new(Rect::new(0.0, 0.0, width, height)).with_alignment(HorizontalAlignment::Start)
}

/// Background revealed by swiping left, `width` wide and end-aligned.
pub fn left_reveal_child(width: f32, size: Size) -> ChildLayout {
    ChildLayout::new(Rect::new(size.width - width, 0.0, width, size.height))
        .with_alignment(HorizontalAlignment::End)
}

pub fn container_child(size: Size) -> ChildLayout {
    ChildLayout::new(Rect::from_size(size))
}

/// Only a right-swipe background.
pub fn right_only_layout(size: Size, reveal_width: f32) -> Vec<ChildLayout> {
    vec![
        right_reveal_child(reveal_width, size.height),
        container_child(size),
    ]
}

/// Only a left-swipe background.
pub fn left_only_layout(size: Size, reveal_width: f32) -> Vec<ChildLayout> {
    vec![left_reveal_child(reveal_width, size), container_child(size)]
}

/// Backgrounds on both sides.
pub fn two_sided_layout(size: Size, reveal_width: f32) -> Vec<ChildLayout> {
    vec![
        right_reveal_child(reveal_width, size.height),
        left_reveal_child(reveal_width, size),
        container_child(size),
    ]
}
