//! What happens to the container when the pointer is released.

use swipeview_foundation::SwipeDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    Activate(SwipeDirection),
    Snap,
}

/// Inputs of a release decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseState {
    /// Container offset; positive when swiped right.
    pub offset: f32,
    /// Pointer velocity in the configured units; positive to the right.
    pub velocity: f32,
    pub min_activation_speed: f32,
    pub min_left_activation_distance: f32,
    pub min_right_activation_distance: f32,
    pub left_enabled: bool,
    pub right_enabled: bool,
}

impl ReleaseState {
    fn is_enabled(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Left => self.left_enabled,
            SwipeDirection::Right => self.right_enabled,
        }
    }

    fn is_swiped_far_enough(&self) -> bool {
        if self.offset < 0.0 {
            self.offset < -self.min_left_activation_distance
        } else if self.offset > 0.0 {
            self.offset > self.min_right_activation_distance
        } else {
            false
        }
    }
}

/// Decides between activating and snapping back.
///
/// A fast release towards a disabled direction always snaps. Otherwise a
/// release past the activation distance or faster than the activation speed
/// activates in the direction of the offset, falling back to the velocity
/// direction while the container is at rest.
pub fn decide_release(state: &ReleaseState) -> ReleaseDecision {
    let fast = state.velocity.abs() > state.min_activation_speed;
    let velocity_direction = SwipeDirection::from_delta(state.velocity);

    if fast && !velocity_direction.is_some_and(|direction| state.is_enabled(direction)) {
        return ReleaseDecision::Snap;
    }

    if !(state.is_swiped_far_enough() || fast) {
        return ReleaseDecision::Snap;
    }

    match SwipeDirection::from_delta(state.offset).or(velocity_direction) {
        Some(direction) => ReleaseDecision::Activate(direction),
        None => ReleaseDecision::Snap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(offset: f32, velocity: f32) -> ReleaseState {
        ReleaseState {
            offset,
            velocity,
            min_activation_speed: 200.0,
            min_left_activation_distance: 80.0,
            min_right_activation_distance: 80.0,
            left_enabled: true,
            right_enabled: true,
        }
    }

    #[test]
    fn distance_threshold_is_exclusive() {
        assert_eq!(
            decide_release(&state(81.0, 0.0)),
            ReleaseDecision::Activate(SwipeDirection::Right)
        );
        assert_eq!(decide_release(&state(79.0, 0.0)), ReleaseDecision::Snap);
        assert_eq!(decide_release(&state(80.0, 0.0)), ReleaseDecision::Snap);
        assert_eq!(
            decide_release(&state(-81.0, 0.0)),
            ReleaseDecision::Activate(SwipeDirection::Left)
        );
    }

    #[test]
    fn each_side_uses_its_own_distance() {
        let mut release = state(-50.0, 0.0);
        release.min_left_activation_distance = 40.0;
        assert_eq!(
            decide_release(&release),
            ReleaseDecision::Activate(SwipeDirection::Left)
        );
        release.offset = 50.0;
        assert_eq!(decide_release(&release), ReleaseDecision::Snap);
    }

    #[test]
    fn fast_release_activates_below_distance() {
        assert_eq!(
            decide_release(&state(10.0, 250.0)),
            ReleaseDecision::Activate(SwipeDirection::Right)
        );
        assert_eq!(decide_release(&state(10.0, 200.0)), ReleaseDecision::Snap);
    }

    #[test]
    fn fast_release_towards_disabled_direction_snaps() {
        let mut release = state(10.0, 250.0);
        release.right_enabled = false;
        assert_eq!(decide_release(&release), ReleaseDecision::Snap);

        // Even when the offset alone would activate.
        let mut release = state(-90.0, 250.0);
        release.right_enabled = false;
        assert_eq!(decide_release(&release), ReleaseDecision::Snap);
    }

    #[test]
    fn direction_follows_offset_not_velocity() {
        assert_eq!(
            decide_release(&state(10.0, -250.0)),
            ReleaseDecision::Activate(SwipeDirection::Right)
        );
    }

    #[test]
    fn fast_release_at_rest_uses_velocity_direction() {
        assert_eq!(
            decide_release(&state(0.0, -300.0)),
            ReleaseDecision::Activate(SwipeDirection::Left)
        );
        assert_eq!(decide_release(&state(0.0, 0.0)), ReleaseDecision::Snap);
    }
}
