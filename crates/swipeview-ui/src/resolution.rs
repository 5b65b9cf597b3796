//! Assigns the widget's children to background and foreground roles.

use swipeview_ui_layout::ChildLayout;

use crate::SwipeConfigError;

/// Child indices of each role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedChildren {
    /// End-aligned background, revealed by swiping left.
    pub left: Option<usize>,
    /// Start-aligned background, revealed by swiping right.
    pub right: Option<usize>,
    /// The dragged foreground; always the last child.
    pub container: usize,
}

/// Resolves 1..=3 children into roles.
///
/// Every child but the last is a background view. A right-aligned one is
/// revealed by swiping left, any other one by swiping right.
pub fn resolve_children(children: &[ChildLayout]) -> Result<ResolvedChildren, SwipeConfigError> {
    let count = children.len();
    if count == 0 {
        return Err(SwipeConfigError::NoChildren);
    }
    if count > 3 {
        return Err(SwipeConfigError::TooManyChildren { count });
    }

    let mut resolved = ResolvedChildren {
        left: None,
        right: None,
        container: count - 1,
    };

    for (index, child) in children[..count - 1].iter().enumerate() {
        let slot = if child.is_right_aligned() {
            &mut resolved.left
        } else {
            &mut resolved.right
        };
        if slot.is_some() {
            return Err(SwipeConfigError::BackgroundAlignmentConflict);
        }
        *slot = Some(index);
    }

    Ok(resolved)
}

#[cfg(test)]
#[path = "tests/resolution_tests.rs"]
mod tests;
