//! Backend client integration tests against the mock backend
//!
//! Tests cover:
//! - Catalog accessors return backend order and every status
//! - Booklet request encoding (one GET, comma-joined design_ids)
//! - Backend errors and timeouts surface as ClientError

mod helpers;

use std::time::Duration;

use helpers::{MockBackend, MockConfig, FAKE_PDF};
use nahbah_common::DesignStatus;
use nahbah_gallery::{BackendClient, ClientError};

fn client_for(mock: &MockBackend) -> BackendClient {
    BackendClient::new(&mock.base_url, Duration::from_secs(5)).expect("Should build client")
}

#[tokio::test]
async fn test_list_materials_in_backend_order() {
    let mock = MockBackend::start(MockConfig::default()).await;
    let client = client_for(&mock);

    let materials = client.list_materials().await.unwrap();
    let names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(names, vec!["Wood", "Metal", "Textile"]);
    assert_eq!(materials[0].image.as_deref(), Some("/media/materials/wood.jpg"));
    assert!(materials[2].description.is_none());
}

#[tokio::test]
async fn test_list_designs_returns_every_status() {
    let mock = MockBackend::start(MockConfig::default()).await;
    let client = client_for(&mock);

    let designs = client.list_designs().await.unwrap();

    assert_eq!(designs.len(), 5);
    assert_eq!(designs[3].status, DesignStatus::Pending);
    assert_eq!(designs[4].status, DesignStatus::Rejected);
    assert!(designs[1].contributor.is_none());
}

#[tokio::test]
async fn test_backend_error_is_api_error() {
    let mock = MockBackend::start(MockConfig {
        fail_materials: true,
        ..MockConfig::default()
    })
    .await;
    let client = client_for(&mock);

    match client.list_materials().await {
        Err(ClientError::Api(status, body)) => {
            assert_eq!(status, 500);
            assert!(body.contains("materials unavailable"));
        }
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_booklet_request_encoding() {
    let mock = MockBackend::start(MockConfig::default()).await;
    let client = client_for(&mock);

    let pdf = client.download_booklet(&[5, 12, 7]).await.unwrap();
    assert_eq!(pdf, FAKE_PDF);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/designs/download_booklet/");
    assert_eq!(requests[0].query.as_deref(), Some("design_ids=5,12,7"));
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let mock = MockBackend::start(MockConfig {
        delay: Duration::from_secs(2),
        ..MockConfig::default()
    })
    .await;
    let client = BackendClient::new(&mock.base_url, Duration::from_millis(200)).unwrap();

    let result = client.list_designs().await;
    assert!(
        matches!(result, Err(ClientError::Timeout(_))),
        "Expected timeout, got {:?}",
        result
    );
}
