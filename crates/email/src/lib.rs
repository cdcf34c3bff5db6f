//! Folio Contact Mail Service
//!
//! Delivers contact-form messages with support for:
//! - EmailJS-style HTTP relay for hosted transactional delivery
//! - Client-local mailto fallback chain when no relay is configured
//! - Clipboard last resort with a transient on-screen acknowledgment
//! - Mock relay for testing and development
//!
//! The public entry point is [`ContactMailer::send_contact_email`], which
//! never returns an error: every failure mode is folded into a
//! [`SubmissionResult`] so callers always receive a structured outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod emailjs;
pub mod fallback;
pub mod mailer;
pub mod mock;

pub use fallback::{ClipboardSink, ComposeStrategy, FallbackChain};
pub use mailer::ContactMailer;

lazy_static::lazy_static! {
    /// Simple `local@domain.tld` shape: non-whitespace runs around a single
    /// `@`, at least one `.` in the domain
    pub static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Sentinel used for absent optional fields in outbound payloads
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    Configuration(String),

    #[error("Email validation error: {0}")]
    Validation(String),

    #[error("Mail relay error: {0}")]
    Relay(String),

    #[error("Compose hand-off error: {0}")]
    Handoff(String),
}

/// Contact form payload as entered by the visitor
///
/// Optional fields are carried as empty strings, matching the form's
/// keystroke-by-keystroke editing model; helpers apply the outbound
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub query_type: String,
    pub message: String,
}

impl ContactFormData {
    /// Display name for the sender: first name plus optional last name
    pub fn sender_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// Copy with every field trimmed, applied once at submission time
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company: self.company.trim().to_string(),
            query_type: self.query_type.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Named template variables sent to the relay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub query_type: String,
    pub phone: String,
    pub company: String,
    pub to_name: String,
    pub reply_to: String,
}

impl TemplateParams {
    /// Build the relay payload from form data and the fixed recipient name
    pub fn from_form(data: &ContactFormData, recipient_name: &str) -> Self {
        let or_not_provided = |s: &str| {
            if s.is_empty() {
                NOT_PROVIDED.to_string()
            } else {
                s.to_string()
            }
        };

        Self {
            from_name: data.sender_name(),
            from_email: data.email.clone(),
            message: data.message.clone(),
            query_type: data.query_type.clone(),
            phone: or_not_provided(&data.phone),
            company: or_not_provided(&data.company),
            to_name: recipient_name.to_string(),
            reply_to: data.email.clone(),
        }
    }
}

/// Receipt from a successful relay send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayReceipt {
    pub message_id: String,
    pub status: u16,
    pub provider: String,
    pub sent_at: DateTime<Utc>,
}

/// Mail service configuration
#[derive(Clone)]
pub struct EmailConfig {
    /// Mail provider (emailjs, mock)
    pub provider: String,
    /// EmailJS service identifier
    pub service_id: String,
    /// EmailJS template identifier
    pub template_id: String,
    /// EmailJS public key
    pub public_key: String,
    /// Relay API base URL (overridable for test servers)
    pub api_base_url: String,
    /// Fixed recipient name placed in the template payload
    pub recipient_name: String,
    /// Address used by the mailto fallback and quoted in user-facing copy
    pub recipient_email: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("provider", &self.provider)
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("recipient_name", &self.recipient_name)
            .field("recipient_email", &self.recipient_email)
            .finish()
    }
}

impl EmailConfig {
    /// Create mail config from environment variables
    pub fn from_env() -> Result<Self, EmailError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "emailjs".to_string());

        let service_id = std::env::var("EMAILJS_SERVICE_ID").unwrap_or_default();
        let template_id = std::env::var("EMAILJS_TEMPLATE_ID").unwrap_or_default();
        let public_key = std::env::var("EMAILJS_PUBLIC_KEY").unwrap_or_default();

        let api_base_url = std::env::var("EMAILJS_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.emailjs.com".to_string());

        let recipient_name =
            std::env::var("SITE_OWNER").unwrap_or_else(|_| "Jack Ooi".to_string());
        let recipient_email =
            std::env::var("CONTACT_EMAIL").unwrap_or_else(|_| "thooi998@gmail.com".to_string());

        Ok(Self {
            provider,
            service_id,
            template_id,
            public_key,
            api_base_url,
            recipient_name,
            recipient_email,
        })
    }

    /// The relay path is selected only when all three identifiers are present
    pub fn is_relay_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Mail relay trait for different implementations
#[async_trait::async_trait]
pub trait MailRelay: Send + Sync {
    /// Attempt exactly one send of the structured payload
    async fn send(&self, params: &TemplateParams) -> Result<RelayReceipt, EmailError>;

    /// Short provider label for logging
    fn provider_name(&self) -> &'static str;
}

/// Factory for assembling a [`ContactMailer`] from configuration
pub struct ContactMailerFactory;

impl ContactMailerFactory {
    /// Create a mailer based on configuration
    ///
    /// An unconfigured relay is not an error: the mailer falls back to the
    /// client-local compose path.
    pub fn create(
        config: EmailConfig,
        alert: folio_alert::AlertChannel,
    ) -> Result<ContactMailer, EmailError> {
        let fallback =
            FallbackChain::with_defaults(config.recipient_email.clone(), alert);

        match config.provider.as_str() {
            "emailjs" => {
                if config.is_relay_configured() {
                    tracing::info!("Creating EmailJS relay mailer");
                    let relay = emailjs::EmailJsRelay::new(&config);
                    Ok(ContactMailer::new(
                        config.recipient_name,
                        Some(std::sync::Arc::new(relay)),
                        fallback,
                    ))
                } else {
                    tracing::warn!("EmailJS relay not configured, using mailto fallback path");
                    Ok(ContactMailer::new(config.recipient_name, None, fallback))
                }
            }
            "mock" => {
                tracing::info!("Creating mock relay mailer");
                Ok(ContactMailer::new(
                    config.recipient_name,
                    Some(std::sync::Arc::new(mock::MockRelay::new())),
                    fallback,
                ))
            }
            provider => Err(EmailError::Configuration(format!(
                "Unknown mail provider: {}. Supported providers: emailjs, mock",
                provider
            ))),
        }
    }
}
