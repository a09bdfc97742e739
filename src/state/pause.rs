//! Pause reasons - why autoplay is currently suspended.
//!
//! Hover and gesture suspend autoplay independently. Autoplay may only run
//! again once every reason has been cleared, so a gesture that ends while the
//! pointer still hovers does not restart the timer.

use bitflags::bitflags;

bitflags! {
    /// Set of active reasons suspending autoplay
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PauseReasons: u8 {
        /// Pointer is over the carousel root
        const HOVER = 1 << 0;
        /// A swipe gesture is in progress
        const GESTURE = 1 << 1;
    }
}

/// Transition produced by changing the pause set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTransition {
    /// Set went from empty to non-empty - stop the timer.
    Paused,
    /// Set went from non-empty to empty - the timer may resume.
    Resumed,
    /// Paused-ness didn't change.
    Unchanged,
}

/// Pause-reason state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseState {
    reasons: PauseReasons,
}

impl PauseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reasons(&self) -> PauseReasons {
        self.reasons
    }

    pub fn is_paused(&self) -> bool {
        !self.reasons.is_empty()
    }

    /// Add a reason.
    pub fn insert(&mut self, reason: PauseReasons) -> PauseTransition {
        let was_paused = self.is_paused();
        self.reasons.insert(reason);
        if !was_paused && self.is_paused() {
            PauseTransition::Paused
        } else {
            PauseTransition::Unchanged
        }
    }

    /// Clear a reason.
    pub fn remove(&mut self, reason: PauseReasons) -> PauseTransition {
        let was_paused = self.is_paused();
        self.reasons.remove(reason);
        if was_paused && !self.is_paused() {
            PauseTransition::Resumed
        } else {
            PauseTransition::Unchanged
        }
    }

    pub fn clear(&mut self) {
        self.reasons = PauseReasons::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reason_round_trip() {
        let mut state = PauseState::new();
        assert!(!state.is_paused());

        assert_eq!(state.insert(PauseReasons::HOVER), PauseTransition::Paused);
        assert!(state.is_paused());

        assert_eq!(state.remove(PauseReasons::HOVER), PauseTransition::Resumed);
        assert!(!state.is_paused());
    }

    #[test]
    fn test_resume_requires_all_cleared() {
        let mut state = PauseState::new();
        assert_eq!(state.insert(PauseReasons::HOVER), PauseTransition::Paused);
        assert_eq!(state.insert(PauseReasons::GESTURE), PauseTransition::Unchanged);

        // Gesture ends while still hovered
        assert_eq!(state.remove(PauseReasons::GESTURE), PauseTransition::Unchanged);
        assert!(state.is_paused());
        assert_eq!(state.reasons(), PauseReasons::HOVER);

        assert_eq!(state.remove(PauseReasons::HOVER), PauseTransition::Resumed);
    }

    #[test]
    fn test_duplicate_insert_and_remove() {
        let mut state = PauseState::new();
        state.insert(PauseReasons::GESTURE);
        assert_eq!(state.insert(PauseReasons::GESTURE), PauseTransition::Unchanged);

        state.remove(PauseReasons::GESTURE);
        // Removing an absent reason doesn't resume twice
        assert_eq!(state.remove(PauseReasons::GESTURE), PauseTransition::Unchanged);
        assert_eq!(state.remove(PauseReasons::HOVER), PauseTransition::Unchanged);
    }

    #[test]
    fn test_clear() {
        let mut state = PauseState::new();
        state.insert(PauseReasons::HOVER | PauseReasons::GESTURE);
        state.clear();
        assert!(!state.is_paused());
    }
}
