//! Global Application State
//!
//! Reactive state management using Leptos signals.

use anchor_platform_core::notice_for;
use anchor_platform_core::rpc::RpcFailure;
use leptos::*;

/// How long an error toast stays visible
pub const ERROR_TOAST_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Bumped on every shown message; a timer only clears its own
    error_generation: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            error: create_rw_signal(None),
            error_generation: store_value(0),
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        let generation = self.error_generation.get_value().wrapping_add(1);
        self.error_generation.set_value(generation);
        self.error.set(Some(message.to_string()));

        let state = *self;
        gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || {
            // a newer message restarts its own timer
            if state.error_generation.try_get_value() == Some(generation) {
                let _ = state.error.try_set(None);
            }
        })
        .forget();
    }

    /// Notice for a failed JSON-RPC call
    pub fn notify_failure(&self, failure: &RpcFailure) {
        self.show_error(&notice_for(failure));
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
