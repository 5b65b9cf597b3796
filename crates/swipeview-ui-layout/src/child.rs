//! Per-child layout information reported by the host after a layout pass.

use crate::{HorizontalAlignment, LayoutDirection};
use swipeview_ui_graphics::{EdgeInsets, Rect};

/// Layout snapshot of one child view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildLayout {
    /// Bounds relative to the parent, excluding margins.
    pub bounds: Rect,
    /// Absolute (left/right) margins.
    pub margins: EdgeInsets,
    /// Inner padding, used by drawing that should respect it.
    pub padding: EdgeInsets,
    /// Horizontal gravity; `None` means the child declared none.
    pub alignment: Option<HorizontalAlignment>,
    pub layout_direction: LayoutDirection,
    /// `false` when the child is gone from layout.
    pub visible: bool,
}

impl ChildLayout {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            margins: EdgeInsets::default(),
            padding: EdgeInsets::default(),
            alignment: None,
            layout_direction: LayoutDirection::Ltr,
            visible: true,
        }
    }

    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Whether the child's gravity resolves to the right edge.
    pub fn is_right_aligned(&self) -> bool {
        self.alignment
            .is_some_and(|alignment| alignment.is_right_aligned(self.layout_direction))
    }

    /// Margin on the leading edge for the child's layout direction.
    pub fn margin_start(&self) -> f32 {
        if self.layout_direction.is_rtl() {
            self.margins.right
        } else {
            self.margins.left
        }
    }

    /// Margin on the trailing edge for the child's layout direction.
    pub fn margin_end(&self) -> f32 {
        if self.layout_direction.is_rtl() {
            self.margins.left
        } else {
            self.margins.right
        }
    }

    /// Width including both horizontal margins.
    pub fn total_width(&self) -> f32 {
        self.margin_start() + self.bounds.width + self.margin_end()
    }
}

#[cfg(test)]
#[path = "tests/child_tests.rs"]
mod tests;
