//! Per-view tracking state machine.

/// Whether the view currently has a usable camera pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// A pose has arrived and tracked content is visible.
    Tracking,
    /// No pose yet, or the engine signalled loss. Nothing tracked is shown.
    #[default]
    Lost,
}

/// Binary TRACKING/LOST state machine driven by pose-stream events.
///
/// Starts in [`TrackingState::Lost`] — nothing is visible until the first
/// pose arrives. Loss of tracking is a normal external signal, not an
/// error; the controller never fails. The owning view enforces the
/// visibility invariant (tracked indicator and placed objects visible iff
/// `Tracking`) after each transition.
#[derive(Debug, Default)]
pub struct TrackingStateController {
    state: TrackingState,
}

impl TrackingStateController {
    /// Creates a controller in the initial `Lost` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// True while in the `Tracking` state.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    /// A pose arrived. Returns true if this transitioned out of `Lost`.
    pub fn on_pose_received(&mut self) -> bool {
        let changed = self.state == TrackingState::Lost;
        if changed {
            log::debug!("tracking regained");
        }
        self.state = TrackingState::Tracking;
        changed
    }

    /// The engine signalled tracking loss. Returns true on transition.
    pub fn on_tracking_lost(&mut self) -> bool {
        let changed = self.state == TrackingState::Tracking;
        if changed {
            log::debug!("tracking lost");
        }
        self.state = TrackingState::Lost;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state_is_lost() {
        let ctrl = TrackingStateController::new();
        assert_eq!(ctrl.state(), TrackingState::Lost);
        assert!(!ctrl.is_tracking());
    }

    #[test]
    fn test_transitions() {
        let mut ctrl = TrackingStateController::new();

        assert!(ctrl.on_pose_received()); // Lost -> Tracking
        assert!(ctrl.is_tracking());
        assert!(!ctrl.on_pose_received()); // Tracking -> Tracking

        assert!(ctrl.on_tracking_lost()); // Tracking -> Lost
        assert!(!ctrl.is_tracking());
        assert!(!ctrl.on_tracking_lost()); // Lost -> Lost
    }

    proptest! {
        /// For any signal sequence, tracking equals "last signal was a pose".
        #[test]
        fn prop_state_follows_last_signal(signals in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut ctrl = TrackingStateController::new();
            for &pose_arrived in &signals {
                if pose_arrived {
                    ctrl.on_pose_received();
                } else {
                    ctrl.on_tracking_lost();
                }
            }
            prop_assert_eq!(ctrl.is_tracking(), *signals.last().unwrap());
        }
    }
}
