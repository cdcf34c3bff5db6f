//! Common test utilities and fixtures for integration tests
//!
//! Builds fully wired contact forms and project loaders backed by the
//! in-crate mocks, so scenarios run without any external service.

use std::sync::Arc;

use chrono::Utc;
use folio_alert::AlertChannel;
use folio_contact::ContactForm;
use folio_email::mock::{MockClipboard, MockRelay, MockStrategy};
use folio_email::{ContactMailer, FallbackChain};
use folio_projects::repository::mock::MockProjectStore;
use folio_projects::{Project, ProjectsLoader};

#[allow(dead_code)]
pub const RECIPIENT_NAME: &str = "Jack Ooi";
#[allow(dead_code)]
pub const RECIPIENT_EMAIL: &str = "owner@example.com";

/// Contact form wired to a capturing mock relay
#[allow(dead_code)]
pub fn relay_form() -> (ContactForm, MockRelay, AlertChannel) {
    let relay = MockRelay::new();
    let alert = AlertChannel::new();
    let fallback = FallbackChain::new(
        RECIPIENT_EMAIL.to_string(),
        vec![Box::new(MockStrategy::succeeding("open"))],
        Box::new(MockClipboard::new()),
        alert.clone(),
    );
    let mailer = Arc::new(ContactMailer::new(
        RECIPIENT_NAME.to_string(),
        Some(Arc::new(relay.clone())),
        fallback,
    ));
    (ContactForm::new(mailer, alert.clone()), relay, alert)
}

/// Mailer with no relay configured, driven entirely by the fallback chain
#[allow(dead_code)]
pub fn fallback_mailer(
    strategies: Vec<MockStrategy>,
    clipboard: MockClipboard,
    alert: AlertChannel,
) -> ContactMailer {
    let boxed: Vec<Box<dyn folio_email::ComposeStrategy>> = strategies
        .into_iter()
        .map(|s| Box::new(s) as Box<dyn folio_email::ComposeStrategy>)
        .collect();
    let fallback = FallbackChain::new(
        RECIPIENT_EMAIL.to_string(),
        boxed,
        Box::new(clipboard),
        alert,
    );
    ContactMailer::new(RECIPIENT_NAME.to_string(), None, fallback)
}

/// Loader over a scriptable mock store
#[allow(dead_code)]
pub fn loader_with(store: MockProjectStore) -> ProjectsLoader {
    ProjectsLoader::new(Arc::new(store))
}

/// Minimal project fixture
#[allow(dead_code)]
pub fn project(title: &str, order: i64) -> Project {
    let now = Utc::now();
    Project {
        id: format!("id-{}", title),
        title: title.to_string(),
        description: format!("{} description", title),
        image_src: format!("/images/{}.png", title),
        url: format!("https://example.com/{}", title),
        tech: vec!["Rust".to_string()],
        order,
        created_at: now,
        updated_at: now,
    }
}
