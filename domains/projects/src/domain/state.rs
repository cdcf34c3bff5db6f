//! Fetch state machine for the project list
//!
//! Read-only counterpart of the contact form's submission machine:
//! Loading on mount, Loaded or Failed on resolution, back to Loading on
//! an explicit retry only. No terminal states.

use folio_common::StateError;

/// Fetch lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchPhase {
    /// One read in flight; retries are no-ops
    Loading,
    /// Last read resolved with a full collection
    Loaded,
    /// Last read failed; the error message is kept for display
    Failed,
}

impl FetchPhase {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [FetchPhase] {
        match self {
            Self::Loading => &[Self::Loaded, Self::Failed],
            Self::Loaded => &[Self::Loading],
            Self::Failed => &[Self::Loading],
        }
    }
}

impl std::fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Loaded => write!(f, "loaded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Events that trigger fetch state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// The read resolved with the full collection
    Resolve,
    /// The read failed
    Fail,
    /// User-triggered re-fetch
    Retry,
}

impl std::fmt::Display for FetchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolve => write!(f, "resolve"),
            Self::Fail => write!(f, "fail"),
            Self::Retry => write!(f, "retry"),
        }
    }
}

/// Project fetch state machine
pub struct FetchStateMachine;

impl FetchStateMachine {
    /// Attempt a state transition
    pub fn transition(current: FetchPhase, event: FetchEvent) -> Result<FetchPhase, StateError> {
        let next = match (&current, &event) {
            (FetchPhase::Loading, FetchEvent::Resolve) => FetchPhase::Loaded,
            (FetchPhase::Loading, FetchEvent::Fail) => FetchPhase::Failed,

            (FetchPhase::Loaded, FetchEvent::Retry) => FetchPhase::Loading,
            (FetchPhase::Failed, FetchEvent::Retry) => FetchPhase::Loading,

            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: FetchPhase, event: &FetchEvent) -> bool {
        Self::transition(current, event.clone()).is_ok()
    }
}
