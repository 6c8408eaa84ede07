//! Ephemeral view state of the card screen.

use serde::{Deserialize, Serialize};

/// View state of the business card screen.
///
/// Owned by the card screen for its lifetime; the toggle action is the only
/// mutation. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CardViewState {
    /// Whether the portfolio section is expanded
    pub expanded: bool,
}

impl CardViewState {
    /// Flip the expanded flag.
    ///
    /// Flipping twice restores the original state.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the portfolio subtree is mounted in the rendered tree.
    ///
    /// Collapsed means unmounted, not hidden.
    pub fn portfolio_mounted(&self) -> bool {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_collapsed() {
        let state = CardViewState::default();
        assert!(!state.expanded);
        assert!(!state.portfolio_mounted());
    }

    #[test]
    fn test_toggle_mounts_portfolio() {
        let mut state = CardViewState::default();
        state.toggle();
        assert!(state.expanded);
        assert!(state.portfolio_mounted());
    }

    #[test]
    fn test_double_toggle_restores_initial_state() {
        let mut state = CardViewState::default();
        state.toggle();
        state.toggle();
        assert_eq!(state, CardViewState::default());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for initial in [false, true] {
            let mut state = CardViewState { expanded: initial };
            state.toggle();
            state.toggle();
            assert_eq!(state.expanded, initial);
        }
    }
}
