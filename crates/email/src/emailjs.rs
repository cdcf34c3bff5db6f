//! EmailJS Relay Implementation
//!
//! Real HTTP client that POSTs contact messages to the EmailJS send API
//! at `{base_url}/api/v1.0/email/send`. The relay signals acceptance with
//! HTTP 200 only; every other status is a failure.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{EmailConfig, EmailError, MailRelay, RelayReceipt, TemplateParams};

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// HTTP relay client for the EmailJS send API
pub struct EmailJsRelay {
    http: reqwest::Client,
    send_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsRelay {
    /// Create a new relay client from configuration
    pub fn new(config: &EmailConfig) -> Self {
        let send_url = format!(
            "{}/api/v1.0/email/send",
            config.api_base_url.trim_end_matches('/')
        );
        Self {
            http: reqwest::Client::new(),
            send_url,
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        }
    }
}

#[async_trait::async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<RelayReceipt, EmailError> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self
            .http
            .post(&self.send_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::Relay(e.to_string()))?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(EmailError::Relay(format!(
                "EmailJS returned {}: {}",
                status, body
            )));
        }

        tracing::info!(from = %params.from_email, "Contact message accepted by EmailJS");

        Ok(RelayReceipt {
            message_id: format!("emailjs-{}", Uuid::new_v4()),
            status: status.as_u16(),
            provider: "emailjs".to_string(),
            sent_at: Utc::now(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "emailjs"
    }
}
