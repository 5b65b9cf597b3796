use crate::SwipeActionView;

/// Receives swipe activations.
///
/// Every method has a default: `on_swiped_*` return `true` (reset the view
/// automatically) and the completion hooks do nothing.
pub trait SwipeGestureListener {
    /// The view was swiped fully to the left.
    ///
    /// Return `false` to keep the view in its swiped position; call
    /// [`SwipeActionView::move_to_original_position`] later to reset it.
    fn on_swiped_left(&mut self, view: &mut SwipeActionView) -> bool {
        let _ = view;
        true
    }

    /// The view was swiped fully to the right. See [`Self::on_swiped_left`].
    fn on_swiped_right(&mut self, view: &mut SwipeActionView) -> bool {
        let _ = view;
        true
    }

    /// The view returned to rest after a left swipe.
    fn on_swipe_left_complete(&mut self, view: &mut SwipeActionView) {
        let _ = view;
    }

    /// The view returned to rest after a right swipe.
    fn on_swipe_right_complete(&mut self, view: &mut SwipeActionView) {
        let _ = view;
    }
}

/// Listener that keeps every default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSwipeGestureListener;

impl SwipeGestureListener for NoopSwipeGestureListener {}
