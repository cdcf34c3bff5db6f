//! Client-local compose fallback
//!
//! Used when no mail relay is configured. Builds a pre-filled `mailto:`
//! URI and hands it to the platform's default mail handler through an
//! ordered list of strategies, short-circuiting on the first success.
//! If every strategy fails, the structured text is copied to the
//! clipboard and a transient acknowledgment is surfaced instead.
//!
//! The chain always reports `success: true`: there is no definitive
//! delivery confirmation on this path, and the user is told what should
//! have happened and where to send the message by hand.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

use folio_alert::{AlertChannel, Severity};

use crate::{ContactFormData, EmailError, SubmissionResult};

const CLIPBOARD_ACK: &str =
    "Email content copied to clipboard! Paste it into your email client.";
const ACK_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// One attempt at handing a mailto URI to the platform
pub trait ComposeStrategy: Send + Sync {
    /// Short label for logging
    fn name(&self) -> &'static str;

    /// Try to open the URI with the platform mail handler
    fn attempt(&self, mailto_uri: &str) -> Result<(), EmailError>;
}

/// Destination for the clipboard last resort
pub trait ClipboardSink: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), EmailError>;
}

/// Build the `mailto:` deep link with URL-encoded subject and body
pub fn mailto_uri(recipient: &str, data: &ContactFormData) -> String {
    let query_type = if data.query_type.is_empty() {
        "General Inquiry"
    } else {
        &data.query_type
    };
    let subject = format!("Contact Form: {}", query_type);
    let body = compose_body(data);

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Fixed body template shared by every hand-off attempt
pub fn compose_body(data: &ContactFormData) -> String {
    let or_default = |s: &str, default: &str| {
        if s.is_empty() {
            default.to_string()
        } else {
            s.to_string()
        }
    };

    format!(
        "Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Company: {}\n\
         Query Type: {}\n\
         \n\
         Message:\n\
         {}",
        data.sender_name(),
        data.email,
        or_default(&data.phone, crate::NOT_PROVIDED),
        or_default(&data.company, crate::NOT_PROVIDED),
        or_default(&data.query_type, "Not specified"),
        data.message,
    )
}

/// Text placed on the clipboard when every hand-off strategy fails
pub fn clipboard_text(recipient: &str, data: &ContactFormData) -> String {
    format!(
        "Contact Form Submission:\n\n{}\n\n---\nPlease send this information to: {}",
        compose_body(data),
        recipient,
    )
}

/// Hand-off strategy that shells out to a platform opener command
pub struct CommandOpen {
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandOpen {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

impl ComposeStrategy for CommandOpen {
    fn name(&self) -> &'static str {
        self.program
    }

    fn attempt(&self, mailto_uri: &str) -> Result<(), EmailError> {
        let status = Command::new(self.program)
            .args(self.args)
            .arg(mailto_uri)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| EmailError::Handoff(format!("{}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(EmailError::Handoff(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Clipboard sink that pipes text into a platform clipboard utility
pub struct CommandClipboard;

impl CommandClipboard {
    #[cfg(target_os = "macos")]
    const CANDIDATES: &'static [(&'static str, &'static [&'static str])] = &[("pbcopy", &[])];

    #[cfg(not(target_os = "macos"))]
    const CANDIDATES: &'static [(&'static str, &'static [&'static str])] = &[
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), EmailError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| EmailError::Handoff(format!("{}: {}", program, e)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| EmailError::Handoff(format!("{}: {}", program, e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| EmailError::Handoff(format!("{}: {}", program, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(EmailError::Handoff(format!(
                "{} exited with {}",
                program, status
            )))
        }
    }
}

impl ClipboardSink for CommandClipboard {
    fn copy(&self, text: &str) -> Result<(), EmailError> {
        for (program, args) in Self::CANDIDATES {
            match Self::pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => tracing::debug!(error = %e, "Clipboard utility unavailable"),
            }
        }
        Err(EmailError::Handoff(
            "no clipboard utility available".to_string(),
        ))
    }
}

/// Ordered compose strategies plus the clipboard last resort
pub struct FallbackChain {
    recipient: String,
    strategies: Vec<Box<dyn ComposeStrategy>>,
    clipboard: Box<dyn ClipboardSink>,
    alert: AlertChannel,
}

impl FallbackChain {
    pub fn new(
        recipient: String,
        strategies: Vec<Box<dyn ComposeStrategy>>,
        clipboard: Box<dyn ClipboardSink>,
        alert: AlertChannel,
    ) -> Self {
        Self {
            recipient,
            strategies,
            clipboard,
            alert,
        }
    }

    /// Chain with the platform's opener commands, most direct first
    pub fn with_defaults(recipient: String, alert: AlertChannel) -> Self {
        #[cfg(target_os = "macos")]
        let strategies: Vec<Box<dyn ComposeStrategy>> =
            vec![Box::new(CommandOpen::new("open", &[]))];

        #[cfg(target_os = "windows")]
        let strategies: Vec<Box<dyn ComposeStrategy>> =
            vec![Box::new(CommandOpen::new("cmd", &["/C", "start", ""]))];

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let strategies: Vec<Box<dyn ComposeStrategy>> = vec![
            Box::new(CommandOpen::new("xdg-open", &[])),
            Box::new(CommandOpen::new("gio", &["open"])),
            Box::new(CommandOpen::new("kde-open", &[])),
        ];

        Self::new(recipient, strategies, Box::new(CommandClipboard), alert)
    }

    /// Hand the message to the platform mail handler
    ///
    /// Exactly one side effect happens per call: the first strategy that
    /// succeeds, or the clipboard copy once all of them fail.
    pub fn hand_off(&self, data: &ContactFormData) -> SubmissionResult {
        let uri = mailto_uri(&self.recipient, data);

        for strategy in &self.strategies {
            match strategy.attempt(&uri) {
                Ok(()) => {
                    tracing::info!(
                        strategy = strategy.name(),
                        "Handed contact message to platform mail handler"
                    );
                    return self.opened_result(data);
                }
                Err(e) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %e,
                        "Compose hand-off failed, trying next strategy"
                    );
                }
            }
        }

        match self.clipboard.copy(&clipboard_text(&self.recipient, data)) {
            Ok(()) => {
                self.alert
                    .open_for(Severity::Info, CLIPBOARD_ACK, ACK_DISPLAY_WINDOW);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard fallback failed");
            }
        }

        self.opened_result(data)
    }

    fn opened_result(&self, data: &ContactFormData) -> SubmissionResult {
        SubmissionResult::ok(format!(
            "Thank you {}! Your email client should open with a pre-filled message. \
             If it doesn't open, please email me directly at {} with the details you entered.",
            data.first_name, self.recipient,
        ))
    }
}
