//! Shared alert banner behavior across collaborators holding clones of
//! the same channel.

use std::time::Duration;

use folio_alert::{AlertChannel, AlertState, Severity};
use folio_contact::Field;

#[tokio::test]
async fn test_last_writer_wins_across_clones() {
    let channel = AlertChannel::new();
    let writer_a = channel.clone();
    let writer_b = channel.clone();

    writer_a.open(Severity::Success, "A");
    writer_b.open(Severity::Error, "B");

    let state = channel.current();
    assert!(state.is_open);
    assert_eq!(state.severity, Severity::Error);
    assert_eq!(state.message, "B");
}

#[tokio::test]
async fn test_close_sentinel_is_distinct_from_initial_state() {
    let channel = AlertChannel::new();
    let initial = channel.current();
    assert!(!initial.is_open);
    assert_eq!(initial.severity, Severity::Success);

    channel.open(Severity::Info, "something");
    channel.close();

    let closed = channel.current();
    assert!(!closed.is_open);
    assert_eq!(closed.severity, Severity::End);
    assert_eq!(closed, AlertState::closed());
    assert_ne!(closed, initial);
}

#[tokio::test]
async fn test_transient_notification_dismisses_itself() {
    let channel = AlertChannel::new();
    channel.open_for(Severity::Info, "copied", Duration::from_millis(20));
    assert!(channel.current().is_open);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!channel.current().is_open);
}

#[tokio::test]
async fn test_form_writes_surface_on_every_clone() {
    let (form, _relay, alert) = common::relay_form();
    let observer = alert.clone();

    form.edit(Field::FirstName, "John");
    form.edit(Field::Email, "john@example.com");
    form.edit(Field::Message, "I would like to hire you");
    form.submit().await;

    let state = observer.current();
    assert!(state.is_open);
    assert_eq!(state.severity, Severity::Success);
    assert!(state.message.contains("24 hours"));
}

mod common;
