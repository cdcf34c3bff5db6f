//! Contact flow without a configured relay: mailto hand-off strategies
//! and the clipboard last resort, driven through the full form.

use std::sync::Arc;

use folio_alert::{AlertChannel, Severity};
use folio_contact::{ContactForm, Field, FormPhase};
use folio_email::mock::{MockClipboard, MockStrategy};

fn fill(form: &ContactForm) {
    form.edit(Field::FirstName, "John");
    form.edit(Field::Email, "john@example.com");
    form.edit(Field::QueryType, "collaboration");
    form.edit(Field::Message, "I would like to collaborate");
}

#[tokio::test]
async fn test_first_working_strategy_receives_mailto_uri() {
    let strategy = MockStrategy::succeeding("open");
    let alert = AlertChannel::new();
    let mailer = common::fallback_mailer(
        vec![strategy.clone()],
        MockClipboard::new(),
        alert.clone(),
    );
    let form = ContactForm::new(Arc::new(mailer), alert.clone());
    fill(&form);

    let result = form.submit().await;
    assert!(result.success);
    assert!(result.message.contains("email client should open"));
    assert!(result.message.contains(common::RECIPIENT_EMAIL));

    assert_eq!(strategy.attempts(), 1);
    let uri = strategy.last_uri().unwrap();
    assert!(uri.starts_with(&format!("mailto:{}?", common::RECIPIENT_EMAIL)));
    assert!(uri.contains("Contact%20Form%3A%20collaboration"));

    // The hand-off path still counts as a successful submission
    assert_eq!(form.snapshot().phase, FormPhase::Success);
    assert_eq!(alert.current().severity, Severity::Success);
}

#[tokio::test]
async fn test_exhausted_strategies_copy_to_clipboard() {
    let first = MockStrategy::failing("xdg-open");
    let second = MockStrategy::failing("gio");
    let clipboard = MockClipboard::new();
    let alert = AlertChannel::new();
    let mailer = common::fallback_mailer(
        vec![first.clone(), second.clone()],
        clipboard.clone(),
        alert.clone(),
    );
    let form = ContactForm::new(Arc::new(mailer), alert.clone());
    fill(&form);

    let result = form.submit().await;
    assert!(result.success);
    assert_eq!(first.attempts(), 1);
    assert_eq!(second.attempts(), 1);

    let copied = clipboard.copied().expect("clipboard should receive text");
    assert!(copied.starts_with("Contact Form Submission:"));
    assert!(copied.contains("Name: John"));
    assert!(copied.contains("john@example.com"));
    assert!(copied.ends_with(&format!(
        "Please send this information to: {}",
        common::RECIPIENT_EMAIL,
    )));

    // The form-level success banner replaces the transient clipboard
    // acknowledgment, last write wins
    assert_eq!(form.snapshot().phase, FormPhase::Success);
    assert_eq!(alert.current().severity, Severity::Success);
}

#[tokio::test]
async fn test_clipboard_failure_still_reports_success() {
    let alert = AlertChannel::new();
    let mailer = common::fallback_mailer(
        vec![MockStrategy::failing("xdg-open")],
        MockClipboard::failing(),
        alert.clone(),
    );
    let form = ContactForm::new(Arc::new(mailer), alert);
    fill(&form);

    let result = form.submit().await;
    assert!(result.success);
    assert!(result.message.contains(common::RECIPIENT_EMAIL));
    assert_eq!(form.snapshot().phase, FormPhase::Success);
}

#[tokio::test]
async fn test_optional_fields_fall_back_to_sentinels_in_body() {
    let strategy = MockStrategy::failing("xdg-open");
    let clipboard = MockClipboard::new();
    let mailer = common::fallback_mailer(
        vec![strategy],
        clipboard.clone(),
        AlertChannel::new(),
    );
    // Phone and company left empty
    let data = folio_email::ContactFormData {
        first_name: "John".to_string(),
        email: "john@example.com".to_string(),
        message: "I would like to collaborate".to_string(),
        ..Default::default()
    };

    let result = mailer.send_contact_email(&data).await;
    assert!(result.success);

    let copied = clipboard.copied().unwrap();
    assert!(copied.contains("Phone: Not provided"));
    assert!(copied.contains("Company: Not provided"));
    assert!(copied.contains("Query Type: Not specified"));
}

mod common;
