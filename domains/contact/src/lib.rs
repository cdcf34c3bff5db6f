//! Contact domain: form validation, submission state machine

pub mod domain;
pub mod form;

// Re-export domain types at the crate root for convenience
pub use domain::state::{FormEvent, FormPhase, FormStateMachine};
pub use domain::validation::{validate, Field, FormErrors};
pub use domain::{QueryTypeOption, QUERY_TYPES};
pub use form::{ContactForm, FormSnapshot};
