//! Folio Alert Channel
//!
//! Process-wide notification banner state consumed by a single display
//! widget. Any component holding a channel handle can replace the state;
//! the last writer wins and nothing is queued. The channel is passed to
//! collaborators explicitly rather than reached through ambient globals,
//! so tests can wire their own instance.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Severity of the displayed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    /// Terminal sentinel installed by [`AlertChannel::close`]. Distinct from
    /// the initial default so provider wiring is observable in tests.
    End,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Snapshot of the banner state handed to the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertState {
    pub is_open: bool,
    pub severity: Severity,
    pub message: String,
}

impl AlertState {
    /// State installed when the channel is created
    pub fn initial() -> Self {
        Self {
            is_open: false,
            severity: Severity::Success,
            message: "Thanks for submitting your query".to_string(),
        }
    }

    /// Terminal state installed by close()
    pub fn closed() -> Self {
        Self {
            is_open: false,
            severity: Severity::End,
            message: "Goodbye, I will speak to you very soon".to_string(),
        }
    }
}

struct Inner {
    state: AlertState,
    // Bumped on every write so delayed dismissals can detect staleness
    generation: u64,
}

/// Cloneable handle to the shared banner state
#[derive(Clone)]
pub struct AlertChannel {
    inner: Arc<Mutex<Inner>>,
}

impl AlertChannel {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AlertState::initial(),
                generation: 0,
            })),
        }
    }

    /// Replace the state wholesale with an open notification
    pub fn open(&self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%severity, "Opening alert banner");
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        inner.state = AlertState {
            is_open: true,
            severity,
            message,
        };
    }

    /// Replace the state wholesale with the closed terminal sentinel
    pub fn close(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        inner.state = AlertState::closed();
    }

    /// Open a notification that dismisses itself after `duration`, unless a
    /// newer write has replaced it in the meantime
    pub fn open_for(&self, severity: Severity, message: impl Into<String>, duration: Duration) {
        self.open(severity, message);
        let generation = self.inner.lock().unwrap().generation;
        // Without a runtime the notification simply stays open until the
        // next write; dismissal is best-effort
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let channel = self.clone();
        handle.spawn(async move {
            tokio::time::sleep(duration).await;
            let mut inner = channel.inner.lock().unwrap();
            if inner.generation == generation {
                inner.generation += 1;
                inner.state = AlertState::closed();
            }
        });
    }

    /// Current banner state
    pub fn current(&self) -> AlertState {
        self.inner.lock().unwrap().state.clone()
    }
}

impl Default for AlertChannel {
    fn default() -> Self {
        Self::new()
    }
}
