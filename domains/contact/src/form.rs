//! Contact form controller
//!
//! Owns the field data, validation errors, and submission phase for one
//! form instance, and exposes render-ready snapshots to the display
//! layer. Field edits clear only the touched field's error; full
//! validation runs at submit time. One submission is in flight at most,
//! and a success resets the form after a fixed display window.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use folio_alert::{AlertChannel, Severity};
use folio_email::{ContactFormData, ContactMailer, SubmissionResult};

use crate::domain::state::{FormEvent, FormPhase, FormStateMachine};
use crate::domain::validation::{validate, Field, FormErrors};

const BLOCKED_NOTICE: &str = "Please fix the errors below";
const IN_FLIGHT_NOTICE: &str = "A submission is already in progress";
const SUCCESS_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// Render-ready view of the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub data: ContactFormData,
    pub errors: FormErrors,
    pub phase: FormPhase,
}

struct FormInner {
    data: ContactFormData,
    errors: FormErrors,
    phase: FormPhase,
    // Bumped whenever the form loses interest in pending async results
    // (new submission, reset, detach); stale resolutions compare against
    // it and leave the state alone
    generation: u64,
}

/// One contact form instance
#[derive(Clone)]
pub struct ContactForm {
    inner: Arc<Mutex<FormInner>>,
    mailer: Arc<ContactMailer>,
    alert: AlertChannel,
    reset_window: Duration,
}

impl ContactForm {
    pub fn new(mailer: Arc<ContactMailer>, alert: AlertChannel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FormInner {
                data: ContactFormData::default(),
                errors: FormErrors::default(),
                phase: FormPhase::Idle,
                generation: 0,
            })),
            mailer,
            alert,
            reset_window: SUCCESS_DISPLAY_WINDOW,
        }
    }

    /// Override the success display window (tests use short windows)
    pub fn with_reset_window(mut self, window: Duration) -> Self {
        self.reset_window = window;
        self
    }

    /// Merge one field edit into the form
    ///
    /// Clears only the edited field's error; other fields keep whatever
    /// error they had so valid-looking input is not flagged mid-typing.
    pub fn edit(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let mut inner = self.inner.lock().unwrap();
        match field {
            Field::FirstName => inner.data.first_name = value,
            Field::LastName => inner.data.last_name = value,
            Field::Email => inner.data.email = value,
            Field::Phone => inner.data.phone = value,
            Field::Company => inner.data.company = value,
            Field::QueryType => inner.data.query_type = value,
            Field::Message => inner.data.message = value,
        }
        inner.errors.clear(field);
    }

    /// Run one submission attempt
    ///
    /// Validation failures block without invoking the mailer. While a
    /// submission is in flight, further calls are rejected without side
    /// effects.
    pub async fn submit(&self) -> SubmissionResult {
        let (data, generation) = {
            let mut inner = self.inner.lock().unwrap();

            if inner.phase == FormPhase::Submitting {
                tracing::debug!("Ignoring submit while a submission is in flight");
                return SubmissionResult::failed(IN_FLIGHT_NOTICE);
            }

            let errors = validate(&inner.data);
            if !errors.is_empty() {
                inner.errors = errors;
                Self::apply(&mut inner, FormEvent::Block);
                drop(inner);
                self.alert.open(Severity::Error, BLOCKED_NOTICE);
                return SubmissionResult::failed(BLOCKED_NOTICE);
            }

            inner.errors = FormErrors::default();
            Self::apply(&mut inner, FormEvent::Submit);
            inner.generation += 1;
            (inner.data.trimmed(), inner.generation)
        };

        let result = self.mailer.send_contact_email(&data).await;

        {
            let mut inner = self.inner.lock().unwrap();
            if inner.generation != generation {
                // The form stopped caring about this attempt (reset or
                // teardown); report the outcome but leave state alone
                tracing::debug!("Discarding stale submission result");
                return result;
            }

            if result.success {
                Self::apply(&mut inner, FormEvent::Accept);
            } else {
                Self::apply(&mut inner, FormEvent::Reject);
                // Field values are preserved for a retry
            }
        }

        if result.success {
            self.alert.open(Severity::Success, result.message.clone());
            self.schedule_reset(generation);
        } else {
            self.alert.open(Severity::Error, result.message.clone());
        }

        result
    }

    /// Current render state
    pub fn snapshot(&self) -> FormSnapshot {
        let inner = self.inner.lock().unwrap();
        FormSnapshot {
            data: inner.data.clone(),
            errors: inner.errors.clone(),
            phase: inner.phase,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.lock().unwrap().phase == FormPhase::Submitting
    }

    /// Detach the form from pending async work (component teardown).
    /// In-flight results and scheduled resets become no-ops.
    pub fn detach(&self) {
        self.inner.lock().unwrap().generation += 1;
    }

    fn apply(inner: &mut FormInner, event: FormEvent) {
        match FormStateMachine::transition(inner.phase, event) {
            Ok(next) => inner.phase = next,
            Err(e) => tracing::warn!(error = %e, "Form transition rejected"),
        }
    }

    fn schedule_reset(&self, generation: u64) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let inner = Arc::clone(&self.inner);
        let window = self.reset_window;
        handle.spawn(async move {
            tokio::time::sleep(window).await;
            let mut inner = inner.lock().unwrap();
            if inner.generation == generation && inner.phase == FormPhase::Success {
                inner.data = ContactFormData::default();
                inner.errors = FormErrors::default();
                inner.phase = FormPhase::Idle;
                inner.generation += 1;
            }
        });
    }
}
