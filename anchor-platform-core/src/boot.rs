//! Boot State
//!
//! The root component shows a spinner until the first mount has completed,
//! then hands over to the navigation shell. There is no async bootstrap yet.

/// Loading state of the root component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BootState {
    #[default]
    Loading,
    Ready,
}

impl BootState {
    /// State after the initial mount has completed
    pub fn mounted(self) -> Self {
        BootState::Ready
    }

    /// The spinner is shown until ready, the shell afterwards
    pub fn shows_spinner(self) -> bool {
        self == BootState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state = BootState::default();
        assert!(state.shows_spinner());
    }

    #[test]
    fn test_mounted_is_ready_and_idempotent() {
        let state = BootState::default().mounted();
        assert_eq!(state, BootState::Ready);
        assert_eq!(state.mounted(), BootState::Ready);
    }

    #[test]
    fn test_ready_shows_shell() {
        assert!(!BootState::default().mounted().shows_spinner());
    }
}
