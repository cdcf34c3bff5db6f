//! Submission state machine for the contact form
//!
//! Models the async submission lifecycle as a tagged state value so that
//! illegal combinations (submitting and succeeded at once) cannot be
//! represented. There are no terminal states: Success and Error both
//! lead back to another attempt or to Idle.

use folio_common::StateError;

/// Submission lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormPhase {
    /// Waiting for input; nothing in flight
    Idle,
    /// One submission in flight; further submits are rejected
    Submitting,
    /// Last attempt accepted; auto-resets to Idle after the display window
    Success,
    /// Last attempt blocked by validation or failed in transit
    Error,
}

impl FormPhase {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [FormPhase] {
        match self {
            Self::Idle => &[Self::Submitting, Self::Error],
            Self::Submitting => &[Self::Success, Self::Error],
            Self::Success => &[Self::Idle, Self::Submitting, Self::Error],
            Self::Error => &[Self::Submitting, Self::Error, Self::Idle],
        }
    }
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Events that trigger form state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User fires a submit with valid fields
    Submit,
    /// Validation rejected the fields before dispatch
    Block,
    /// The submission client reported success
    Accept,
    /// The submission client reported failure
    Reject,
    /// Display window elapsed or the form was torn down
    Reset,
}

impl std::fmt::Display for FormEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submit => write!(f, "submit"),
            Self::Block => write!(f, "block"),
            Self::Accept => write!(f, "accept"),
            Self::Reject => write!(f, "reject"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

/// Form submission state machine
pub struct FormStateMachine;

impl FormStateMachine {
    /// Attempt a state transition
    ///
    /// Returns the new state if the transition is valid, or an error
    /// otherwise. A Submit while already Submitting is invalid, which is
    /// what guards against double-firing the async call.
    pub fn transition(current: FormPhase, event: FormEvent) -> Result<FormPhase, StateError> {
        let next = match (&current, &event) {
            (FormPhase::Idle, FormEvent::Submit) => FormPhase::Submitting,
            (FormPhase::Idle, FormEvent::Block) => FormPhase::Error,

            (FormPhase::Submitting, FormEvent::Accept) => FormPhase::Success,
            (FormPhase::Submitting, FormEvent::Reject) => FormPhase::Error,

            (FormPhase::Success, FormEvent::Reset) => FormPhase::Idle,
            // A new attempt may start before the display window elapses
            (FormPhase::Success, FormEvent::Submit) => FormPhase::Submitting,
            (FormPhase::Success, FormEvent::Block) => FormPhase::Error,

            // A failed attempt can be resubmitted or re-blocked
            (FormPhase::Error, FormEvent::Submit) => FormPhase::Submitting,
            (FormPhase::Error, FormEvent::Block) => FormPhase::Error,
            (FormPhase::Error, FormEvent::Reset) => FormPhase::Idle,

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
    pub fn can_transition(current: FormPhase, event: &FormEvent) -> bool {
        Self::transition(current, event.clone()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_idle_to_submitting() {
        let result = FormStateMachine::transition(FormPhase::Idle, FormEvent::Submit);
        assert_eq!(result, Ok(FormPhase::Submitting));
    }

    #[test]
    fn test_valid_idle_blocked_by_validation() {
        let result = FormStateMachine::transition(FormPhase::Idle, FormEvent::Block);
        assert_eq!(result, Ok(FormPhase::Error));
    }

    #[test]
    fn test_valid_submitting_to_success() {
        let result = FormStateMachine::transition(FormPhase::Submitting, FormEvent::Accept);
        assert_eq!(result, Ok(FormPhase::Success));
    }

    #[test]
    fn test_valid_submitting_to_error() {
        let result = FormStateMachine::transition(FormPhase::Submitting, FormEvent::Reject);
        assert_eq!(result, Ok(FormPhase::Error));
    }

    #[test]
    fn test_valid_success_resets_to_idle() {
        let result = FormStateMachine::transition(FormPhase::Success, FormEvent::Reset);
        assert_eq!(result, Ok(FormPhase::Idle));
    }

    #[test]
    fn test_valid_error_to_resubmit() {
        let result = FormStateMachine::transition(FormPhase::Error, FormEvent::Submit);
        assert_eq!(result, Ok(FormPhase::Submitting));
    }

    #[test]
    fn test_invalid_double_submit() {
        let result = FormStateMachine::transition(FormPhase::Submitting, FormEvent::Submit);
        assert!(matches!(result, Err(StateError::InvalidTransition { .. })));
    }

    #[test]
    fn test_invalid_accept_without_submit() {
        let result = FormStateMachine::transition(FormPhase::Idle, FormEvent::Accept);
        assert!(matches!(result, Err(StateError::InvalidTransition { .. })));
    }

    #[test]
    fn test_valid_submit_during_success_window() {
        let result = FormStateMachine::transition(FormPhase::Success, FormEvent::Submit);
        assert_eq!(result, Ok(FormPhase::Submitting));
    }

    #[test]
    fn test_invalid_reject_while_idle() {
        let result = FormStateMachine::transition(FormPhase::Idle, FormEvent::Reject);
        assert!(matches!(result, Err(StateError::InvalidTransition { .. })));
    }

    #[test]
    fn test_can_transition() {
        assert!(FormStateMachine::can_transition(
            FormPhase::Idle,
            &FormEvent::Submit
        ));
        assert!(!FormStateMachine::can_transition(
            FormPhase::Submitting,
            &FormEvent::Submit
        ));
    }

    #[test]
    fn test_valid_transitions_from_submitting() {
        let transitions = FormPhase::Submitting.valid_transitions();
        assert!(transitions.contains(&FormPhase::Success));
        assert!(transitions.contains(&FormPhase::Error));
        assert_eq!(transitions.len(), 2);
    }
}
