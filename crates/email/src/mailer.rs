//! Contact Mailer
//!
//! Orchestrates one submission attempt: a defensive re-validation of the
//! required fields, then either a single relay send or a single fallback
//! hand-off. All failure modes resolve to a [`SubmissionResult`]; this
//! type never returns an error and never retries on its own.

use std::sync::Arc;

use crate::{
    ContactFormData, EmailError, FallbackChain, MailRelay, SubmissionResult, TemplateParams,
    EMAIL_REGEX,
};

const GENERIC_FAILURE: &str = "Failed to send message. Please try again later.";

/// The contact-form submission client
pub struct ContactMailer {
    recipient_name: String,
    relay: Option<Arc<dyn MailRelay>>,
    fallback: FallbackChain,
}

impl ContactMailer {
    pub fn new(
        recipient_name: String,
        relay: Option<Arc<dyn MailRelay>>,
        fallback: FallbackChain,
    ) -> Self {
        Self {
            recipient_name,
            relay,
            fallback,
        }
    }

    /// Whether a relay is wired in (the fallback path is used otherwise)
    pub fn has_relay(&self) -> bool {
        self.relay.is_some()
    }

    /// Send a contact form message
    ///
    /// Exactly one outbound side effect per call: a relay send or a
    /// fallback hand-off, never both. A failed attempt is only reported;
    /// re-invocation is up to the caller.
    pub async fn send_contact_email(&self, data: &ContactFormData) -> SubmissionResult {
        // Second line of defense: this client can be invoked directly,
        // without going through the form validator
        if let Err(e) = check_required(data) {
            tracing::warn!(error = %e, "Rejecting contact message before dispatch");
            return SubmissionResult::failed(failure_message(e));
        }

        match &self.relay {
            Some(relay) => {
                let params = TemplateParams::from_form(data, &self.recipient_name);
                match relay.send(&params).await {
                    Ok(receipt) => {
                        tracing::info!(
                            provider = relay.provider_name(),
                            message_id = %receipt.message_id,
                            "Contact message sent"
                        );
                        SubmissionResult::ok(format!(
                            "Thank you {}! Your message has been sent successfully. \
                             I'll get back to you within 24 hours.",
                            data.first_name,
                        ))
                    }
                    Err(e) => {
                        tracing::error!(
                            provider = relay.provider_name(),
                            error = %e,
                            "Contact message send failed"
                        );
                        SubmissionResult::failed(failure_message(e))
                    }
                }
            }
            None => self.fallback.hand_off(data),
        }
    }

    /// Send a fixed test payload (for development)
    pub async fn send_test_email(&self) -> SubmissionResult {
        let test_data = ContactFormData {
            first_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            query_type: "other".to_string(),
            message: "This is a test message from the contact form.".to_string(),
            ..Default::default()
        };

        self.send_contact_email(&test_data).await
    }
}

fn check_required(data: &ContactFormData) -> Result<(), EmailError> {
    if data.first_name.is_empty() || data.email.is_empty() || data.message.is_empty() {
        return Err(EmailError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }

    if !EMAIL_REGEX.is_match(&data.email) {
        return Err(EmailError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    Ok(())
}

/// User-facing text for a failed attempt: the underlying error text, or a
/// generic fallback when there is nothing readable to show
fn failure_message(error: EmailError) -> String {
    let text = match error {
        EmailError::Validation(m) | EmailError::Relay(m) => m,
        EmailError::Configuration(m) | EmailError::Handoff(m) => m,
    };
    if text.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        text
    }
}
