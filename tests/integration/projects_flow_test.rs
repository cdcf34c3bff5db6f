//! End-to-end project list flow: initial load, ordering, failure text,
//! and user-triggered retries.

use std::time::Duration;

use folio_projects::repository::mock::MockProjectStore;
use folio_projects::FetchPhase;

#[tokio::test]
async fn test_initial_load_yields_ordered_projects() {
    let store = MockProjectStore::with_projects(vec![
        common::project("third", 3),
        common::project("first", 1),
        common::project("fourth", 4),
        common::project("second", 2),
    ]);
    let loader = common::loader_with(store);

    assert!(loader.is_loading());
    loader.load().await;

    let snapshot = loader.snapshot();
    assert_eq!(snapshot.phase, FetchPhase::Loaded);
    assert!(snapshot.error.is_none());
    let titles: Vec<&str> = snapshot.projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third", "fourth"]);
}

#[tokio::test]
async fn test_failed_load_keeps_error_text_verbatim() {
    let store = MockProjectStore::failing("permission denied");
    let loader = common::loader_with(store);

    loader.load().await;

    let snapshot = loader.snapshot();
    assert_eq!(snapshot.phase, FetchPhase::Failed);
    assert_eq!(
        snapshot.error.as_deref(),
        Some("Failed to fetch projects: permission denied"),
    );
    assert!(snapshot.projects.is_empty());
}

#[tokio::test]
async fn test_retry_after_failure_reaches_loaded() {
    let store = MockProjectStore::failing("store down");
    let loader = common::loader_with(store.clone());

    loader.load().await;
    assert_eq!(loader.snapshot().phase, FetchPhase::Failed);

    store.set_projects(vec![common::project("only", 1)]);
    loader.retry().await;

    let snapshot = loader.snapshot();
    assert_eq!(snapshot.phase, FetchPhase::Loaded);
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.projects.len(), 1);
    assert_eq!(store.call_count(), 2);
}

#[tokio::test]
async fn test_retry_during_pending_read_is_coalesced() {
    let store = MockProjectStore::with_projects(vec![common::project("only", 1)]);
    store.set_delay(Duration::from_millis(50));
    let loader = common::loader_with(store.clone());

    let first = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    loader.retry().await;
    first.await.unwrap();

    assert_eq!(store.call_count(), 1);
    assert_eq!(loader.snapshot().phase, FetchPhase::Loaded);
}

mod common;
