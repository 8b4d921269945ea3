//! Per-action in-flight guard.
//!
//! Nothing in the UI serialises overlapping clicks, so without a guard a
//! double-click issues two concurrent mutation requests. `begin` hands out
//! at most one token per action name; the token releases its slot on drop.

use std::collections::HashSet;

use parking_lot::Mutex;
use tracing::warn;

/// Tracks which actions currently have a request in flight.
#[derive(Default)]
pub struct InFlightGuard {
    active: Mutex<HashSet<&'static str>>,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `action`.
    ///
    /// Returns `None` when a previous claim is still alive; the caller
    /// reports "already in progress" and issues no request.
    pub fn begin(&self, action: &'static str) -> Option<InFlightToken<'_>> {
        let mut active = self.active.lock();
        if !active.insert(action) {
            warn!(action, "action already in flight; ignoring duplicate trigger");
            return None;
        }

        Some(InFlightToken { guard: self, action })
    }

    /// Whether `action` currently holds a token.
    pub fn is_active(&self, action: &str) -> bool {
        self.active.lock().contains(action)
    }
}

/// RAII claim on an action slot; dropping it releases the slot.
pub struct InFlightToken<'a> {
    guard: &'a InFlightGuard,
    action: &'static str,
}

impl Drop for InFlightToken<'_> {
    fn drop(&mut self) {
        self.guard.active.lock().remove(self.action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_rejected_while_first_is_alive() {
        let guard = InFlightGuard::new();

        let token = guard.begin("add_event");
        assert!(token.is_some());
        assert!(guard.begin("add_event").is_none());
    }

    #[test]
    fn dropping_the_token_releases_the_slot() {
        let guard = InFlightGuard::new();

        drop(guard.begin("delete_event"));
        assert!(!guard.is_active("delete_event"));
        assert!(guard.begin("delete_event").is_some());
    }

    #[test]
    fn distinct_actions_do_not_interfere() {
        let guard = InFlightGuard::new();

        let _routes = guard.begin("generate_routes");
        assert!(guard.begin("add_event").is_some());
    }
}
