//! End-to-end contact form flow: edits, validation, relay dispatch,
//! phase transitions, and the shared alert banner.

use std::time::Duration;

use folio_alert::Severity;
use folio_contact::{Field, FormPhase};
use folio_email::ContactFormData;

#[tokio::test]
async fn test_valid_submission_reaches_relay_and_opens_banner() {
    let (form, relay, alert) = common::relay_form();

    form.edit(Field::FirstName, "John");
    form.edit(Field::LastName, "Doe");
    form.edit(Field::Email, "john@example.com");
    form.edit(Field::QueryType, "hireMe");
    form.edit(Field::Message, "I would like to hire you");

    let result = form.submit().await;
    assert!(result.success);
    assert!(result.message.contains("Thank you John"));
    assert!(result.message.contains("24 hours"));

    assert_eq!(relay.sent_count(), 1);
    let params = relay.last_params().unwrap();
    assert_eq!(params.from_name, "John Doe");
    assert_eq!(params.reply_to, "john@example.com");
    assert_eq!(params.query_type, "hireMe");
    assert_eq!(params.to_name, common::RECIPIENT_NAME);

    assert_eq!(form.snapshot().phase, FormPhase::Success);
    let banner = alert.current();
    assert!(banner.is_open);
    assert_eq!(banner.severity, Severity::Success);
    assert_eq!(banner.message, result.message);
}

#[tokio::test]
async fn test_invalid_form_is_blocked_before_any_dispatch() {
    let (form, relay, alert) = common::relay_form();

    form.edit(Field::FirstName, "John");
    form.edit(Field::Email, "not-an-email");
    form.edit(Field::Message, "short");

    let result = form.submit().await;
    assert!(!result.success);
    assert_eq!(relay.sent_count(), 0);

    let snapshot = form.snapshot();
    assert_eq!(snapshot.phase, FormPhase::Error);
    assert_eq!(
        snapshot.errors.email.as_deref(),
        Some("Please enter a valid email address"),
    );
    assert_eq!(
        snapshot.errors.message.as_deref(),
        Some("Message must be at least 10 characters long"),
    );
    // Field values survive a blocked submit
    assert_eq!(snapshot.data.email, "not-an-email");

    assert_eq!(alert.current().severity, Severity::Error);
}

#[tokio::test]
async fn test_relay_failure_then_retry_recovers() {
    let (form, relay, alert) = common::relay_form();
    relay.fail_with("EmailJS returned 502 Bad Gateway: upstream down");

    form.edit(Field::FirstName, "John");
    form.edit(Field::Email, "john@example.com");
    form.edit(Field::Message, "I would like to hire you");

    let result = form.submit().await;
    assert!(!result.success);
    assert_eq!(
        result.message,
        "EmailJS returned 502 Bad Gateway: upstream down",
    );
    assert_eq!(form.snapshot().phase, FormPhase::Error);
    assert_eq!(alert.current().severity, Severity::Error);

    // Input is preserved, so the user can retry without re-typing
    relay.succeed();
    let result = form.submit().await;
    assert!(result.success);
    assert_eq!(relay.sent_count(), 1);
    assert_eq!(alert.current().severity, Severity::Success);
}

#[tokio::test]
async fn test_success_clears_the_form_after_display_window() {
    let (form, _relay, _alert) = common::relay_form();
    let form = form.with_reset_window(Duration::from_millis(30));

    form.edit(Field::FirstName, "John");
    form.edit(Field::Email, "john@example.com");
    form.edit(Field::Message, "I would like to hire you");

    form.submit().await;
    assert_eq!(form.snapshot().phase, FormPhase::Success);

    tokio::time::sleep(Duration::from_millis(80)).await;
    let snapshot = form.snapshot();
    assert_eq!(snapshot.phase, FormPhase::Idle);
    assert_eq!(snapshot.data, ContactFormData::default());
    assert!(snapshot.errors.is_empty());
}

#[tokio::test]
async fn test_submission_trims_whitespace_before_dispatch() {
    let (form, relay, _alert) = common::relay_form();

    form.edit(Field::FirstName, "  John  ");
    form.edit(Field::Email, "  john@example.com  ");
    form.edit(Field::Message, "  I would like to hire you  ");

    let result = form.submit().await;
    assert!(result.success);

    let params = relay.last_params().unwrap();
    assert_eq!(params.from_name, "John");
    assert_eq!(params.from_email, "john@example.com");
    assert_eq!(params.message, "I would like to hire you");
}

mod common;
