//! Booklet export integration tests
//!
//! Tests cover:
//! - Empty selection never reaches the backend
//! - Single in-flight export; concurrent request is refused
//! - Failure clears the in-flight state; retry is a fresh request
//! - Saved file carries the fixed name

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{MockBackend, MockConfig, FAKE_PDF};
use nahbah_gallery::{save_booklet, BackendClient, BookletError, BookletExporter, BOOKLET_FILE_NAME};

fn client_for(mock: &MockBackend) -> BackendClient {
    BackendClient::new(&mock.base_url, Duration::from_secs(5)).expect("Should build client")
}

#[tokio::test]
async fn test_empty_selection_issues_no_request() {
    let mock = MockBackend::start(MockConfig::default()).await;
    let client = client_for(&mock);
    let exporter = BookletExporter::new();

    let result = exporter.request_booklet(&client, &[]).await;

    assert!(matches!(result, Err(BookletError::EmptySelection)));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_single_request_per_export() {
    let mock = MockBackend::start(MockConfig::default()).await;
    let client = client_for(&mock);
    let exporter = BookletExporter::new();

    let pdf = exporter.request_booklet(&client, &[5, 12, 7]).await.unwrap();

    assert_eq!(pdf, FAKE_PDF);
    let requests = mock.booklet_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query.as_deref(), Some("design_ids=5,12,7"));
    assert!(!exporter.is_in_flight());
}

#[tokio::test]
async fn test_concurrent_export_refused() {
    let mock = MockBackend::start(MockConfig {
        delay: Duration::from_millis(300),
        ..MockConfig::default()
    })
    .await;
    let client = client_for(&mock);
    let exporter = Arc::new(BookletExporter::new());

    let first = {
        let exporter = Arc::clone(&exporter);
        let client = client.clone();
        tokio::spawn(async move { exporter.request_booklet(&client, &[1]).await })
    };

    // Let the first export reach the backend
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(exporter.is_in_flight());

    let second = exporter.request_booklet(&client, &[2]).await;
    assert!(matches!(second, Err(BookletError::InProgress)));

    let first = first.await.unwrap();
    assert!(first.is_ok());
    assert!(!exporter.is_in_flight());
    assert_eq!(mock.booklet_requests().len(), 1);
}

#[tokio::test]
async fn test_failure_then_fresh_retry() {
    let mock = MockBackend::start(MockConfig {
        fail_booklet: true,
        ..MockConfig::default()
    })
    .await;
    let client = client_for(&mock);
    let exporter = BookletExporter::new();

    let first = exporter.request_booklet(&client, &[1, 3]).await;
    assert!(matches!(first, Err(BookletError::Generation(_))));
    assert!(!exporter.is_in_flight());

    // No automatic retry happened
    assert_eq!(mock.booklet_requests().len(), 1);

    let second = exporter.request_booklet(&client, &[1, 3]).await;
    assert!(matches!(second, Err(BookletError::Generation(_))));
    assert_eq!(mock.booklet_requests().len(), 2);
}

#[tokio::test]
async fn test_export_and_save() {
    let mock = MockBackend::start(MockConfig::default()).await;
    let client = client_for(&mock);
    let exporter = BookletExporter::new();
    let dir = tempfile::tempdir().unwrap();

    let pdf = exporter.request_booklet(&client, &[2]).await.unwrap();
    let path = save_booklet(dir.path(), &pdf).unwrap();

    assert_eq!(path, dir.path().join(BOOKLET_FILE_NAME));
    assert_eq!(std::fs::read(path).unwrap(), FAKE_PDF);
}
