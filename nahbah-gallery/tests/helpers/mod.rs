//! Mock design library backend for integration tests
//!
//! Runs an axum server on an ephemeral localhost port that serves a fixed
//! catalog and records every request it receives.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

pub const FAKE_PDF: &[u8] = b"%PDF-1.4\n% mock booklet\n%%EOF";

/// Failure and latency knobs for the mock
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    pub fail_materials: bool,
    pub fail_designs: bool,
    pub fail_booklet: bool,
    /// Delay before any response is sent
    pub delay: Duration,
}

/// One request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
}

#[derive(Clone)]
struct MockState {
    config: Arc<Mutex<MockConfig>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Running mock backend
pub struct MockBackend {
    pub base_url: String,
    config: Arc<Mutex<MockConfig>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Start a mock serving the sample catalog
    pub async fn start(config: MockConfig) -> Self {
        let config = Arc::new(Mutex::new(config));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            config: Arc::clone(&config),
            requests: Arc::clone(&requests),
        };

        let router = Router::new()
            .route("/api/materials/", get(materials))
            .route("/api/designs/", get(designs))
            .route("/api/designs/download_booklet/", get(booklet))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Should bind mock backend");
        let addr = listener.local_addr().expect("Should have local address");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock backend failed");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            config,
            requests,
        }
    }

    /// Change failure and latency behavior for subsequent requests
    pub fn set_config(&self, config: MockConfig) {
        *self.config.lock().unwrap() = config;
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests to the booklet endpoint
    pub fn booklet_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == "/api/designs/download_booklet/")
            .collect()
    }
}

/// Record the request, apply the configured delay and return the config in effect
async fn record(state: &MockState, uri: &Uri) -> MockConfig {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
    });

    let config = state.config.lock().unwrap().clone();
    if !config.delay.is_zero() {
        tokio::time::sleep(config.delay).await;
    }
    config
}

async fn materials(State(state): State<MockState>, uri: Uri) -> Response {
    let config = record(&state, &uri).await;

    if config.fail_materials {
        return (StatusCode::INTERNAL_SERVER_ERROR, "materials unavailable").into_response();
    }

    Json(sample_materials()).into_response()
}

async fn designs(State(state): State<MockState>, uri: Uri) -> Response {
    let config = record(&state, &uri).await;

    if config.fail_designs {
        return (StatusCode::INTERNAL_SERVER_ERROR, "designs unavailable").into_response();
    }

    Json(sample_designs()).into_response()
}

async fn booklet(State(state): State<MockState>, uri: Uri) -> Response {
    let config = record(&state, &uri).await;

    if config.fail_booklet {
        return (StatusCode::INTERNAL_SERVER_ERROR, "pdf generation failed").into_response();
    }

    ([(header::CONTENT_TYPE, "application/pdf")], FAKE_PDF).into_response()
}

pub fn sample_materials() -> Value {
    json!([
        {"id": 1, "name": "Wood", "image": "/media/materials/wood.jpg", "description": "Reclaimed timber"},
        {"id": 2, "name": "Metal", "image": null, "description": null},
        {"id": 3, "name": "Textile"}
    ])
}

/// Designs 1-3 approved (Wood, Metal, Wood), 4 pending, 5 rejected
pub fn sample_designs() -> Value {
    json!([
        design(1, "Pallet cabin", 1, "Wood", "approved"),
        design(2, "Tin roof hut", 2, "Metal", "approved"),
        design(3, "Crate shelter", 1, "Wood", "approved"),
        design(4, "Plank lean-to", 1, "Wood", "pending"),
        design(5, "Tarp tent", 3, "Textile", "rejected")
    ])
}

fn design(id: i64, title: &str, material_id: i64, material: &str, status: &str) -> Value {
    // Even IDs are anonymous submissions
    let contributor = if id % 2 == 0 {
        Value::Null
    } else {
        json!({"id": 10 + id, "name": "Contributor"})
    };

    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "material": {"id": material_id, "name": material},
        "status": status,
        "design_file": format!("/media/designs/{}.pdf", id),
        "preview_image": null,
        "contributor": contributor,
        "submission_date": "2024-04-01T12:00:00Z"
    })
}
