//! Mock Mail Implementations
//!
//! In-memory capture of relay sends and compose hand-offs for testing
//! without external dependencies.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    ClipboardSink, ComposeStrategy, EmailError, MailRelay, RelayReceipt, TemplateParams,
};

/// Mock relay that captures template payloads
#[derive(Clone)]
pub struct MockRelay {
    sent: Arc<Mutex<Vec<TemplateParams>>>,
    fail_with: Arc<Mutex<Option<String>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockRelay {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(None)),
            delay: Arc::new(Mutex::new(None)),
        }
    }

    /// Delay every send, for tests that need an observable in-flight window
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Script the next sends to fail with the given relay message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Restore the accepting behavior
    pub fn succeed(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    /// All captured payloads, in send order
    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_params(&self) -> Option<TemplateParams> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl Default for MockRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MailRelay for MockRelay {
    async fn send(&self, params: &TemplateParams) -> Result<RelayReceipt, EmailError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(EmailError::Relay(message));
        }

        tracing::info!(from = %params.from_email, "Mock relay capturing contact message");
        self.sent.lock().unwrap().push(params.clone());

        Ok(RelayReceipt {
            message_id: format!("mock-{}", Uuid::new_v4()),
            status: 200,
            provider: "mock".to_string(),
            sent_at: Utc::now(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Scriptable compose strategy recording each attempt
#[derive(Clone)]
pub struct MockStrategy {
    name: &'static str,
    succeeds: bool,
    attempts: Arc<Mutex<Vec<String>>>,
}

impl MockStrategy {
    pub fn succeeding(name: &'static str) -> Self {
        Self {
            name,
            succeeds: true,
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            succeeds: false,
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn last_uri(&self) -> Option<String> {
        self.attempts.lock().unwrap().last().cloned()
    }
}

impl ComposeStrategy for MockStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn attempt(&self, mailto_uri: &str) -> Result<(), EmailError> {
        self.attempts.lock().unwrap().push(mailto_uri.to_string());
        if self.succeeds {
            Ok(())
        } else {
            Err(EmailError::Handoff(format!("{} unavailable", self.name)))
        }
    }
}

/// Clipboard sink that captures the copied text
#[derive(Clone)]
pub struct MockClipboard {
    copied: Arc<Mutex<Option<String>>>,
    succeeds: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            copied: Arc::new(Mutex::new(None)),
            succeeds: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            copied: Arc::new(Mutex::new(None)),
            succeeds: false,
        }
    }

    pub fn copied(&self) -> Option<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for MockClipboard {
    fn copy(&self, text: &str) -> Result<(), EmailError> {
        if !self.succeeds {
            return Err(EmailError::Handoff("clipboard unavailable".to_string()));
        }
        *self.copied.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
