//! Alignment utilities for positioning content

/// Direction in which horizontal content flows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}

/// Alignment along the horizontal axis.
///
/// `Start`/`End` are relative and flip with the layout direction, `Left`/`Right`
/// are absolute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align children to the leading edge.
    Start,
    /// Align children to the horizontal center.
    CenterHorizontally,
    /// Align children to the trailing edge.
    End,
    /// Align children to the left edge regardless of direction.
    Left,
    /// Align children to the right edge regardless of direction.
    Right,
}

impl HorizontalAlignment {
    /// Resolves relative alignment against `direction`, leaving only
    /// `Left`, `Right` and `CenterHorizontally`.
    pub fn resolve(self, direction: LayoutDirection) -> Self {
        match (self, direction) {
            (HorizontalAlignment::Start, LayoutDirection::Ltr)
            | (HorizontalAlignment::End, LayoutDirection::Rtl) => HorizontalAlignment::Left,
            (HorizontalAlignment::End, LayoutDirection::Ltr)
            | (HorizontalAlignment::Start, LayoutDirection::Rtl) => HorizontalAlignment::Right,
            (other, _) => other,
        }
    }

    /// Returns true when the alignment resolves to the right edge.
    pub fn is_right_aligned(self, direction: LayoutDirection) -> bool {
        matches!(self.resolve(direction), HorizontalAlignment::Right)
    }

    /// Computes the horizontal offset for alignment.
    pub fn align(&self, available: f32, child: f32, direction: LayoutDirection) -> f32 {
        match self.resolve(direction) {
            HorizontalAlignment::CenterHorizontally => ((available - child) / 2.0).max(0.0),
            HorizontalAlignment::Right => (available - child).max(0.0),
            _ => 0.0,
        }
    }
}
