//! nahbah-gallery library - design library service
//!
//! Serves the gallery UI and a JSON API over one browsing session: the
//! material filter, the booklet selection and booklet export.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use nahbah_common::Locale;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod booklet;
pub mod catalog;
pub mod client;
pub mod error;
pub mod session;

pub use crate::booklet::{save_booklet, BookletError, BookletExporter, BOOKLET_FILE_NAME};
pub use crate::client::{BackendClient, ClientError};
pub use crate::error::{ApiError, ApiResult};
pub use crate::session::{load_catalogs, GallerySession};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Backend HTTP client
    pub client: BackendClient,
    /// The browsing session (catalogs, filter, selection)
    pub session: Arc<RwLock<GallerySession>>,
    /// Single-flight booklet exporter
    pub booklet: Arc<BookletExporter>,
    /// Locale used when a request does not name one
    pub default_locale: Locale,
    /// Service startup timestamp
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(client: BackendClient, session: GallerySession, default_locale: Locale) -> Self {
        Self {
            client,
            session: Arc::new(RwLock::new(session)),
            booklet: Arc::new(BookletExporter::new()),
            default_locale,
            startup_time: Utc::now(),
        }
    }

    /// Reload both catalogs from the backend, keeping filter and selection
    pub async fn reload_catalogs(&self) {
        // Fetch without holding the session lock
        let (materials, designs) = load_catalogs(&self.client).await;
        self.session.write().await.apply_catalogs(materials, designs);
    }
}

/// Build identification line each binary logs right after tracing init
pub fn build_identification(binary: &str) -> String {
    format!(
        "{} v{} [{}] built {} ({})",
        binary,
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    )
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    let api = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/i18n", get(api::get_messages))
        .route("/api/materials", get(api::list_materials))
        .route("/api/designs", get(api::list_visible_designs))
        .route("/api/selection", get(api::get_selection))
        .route("/api/catalog/reload", post(api::reload_catalog))
        .route("/api/filters/toggle", post(api::toggle_material))
        .route("/api/filters/clear", post(api::clear_filters))
        .route("/api/selection/toggle", post(api::toggle_selection))
        .route("/api/selection/:id", delete(api::remove_selection))
        .route("/api/booklet", post(api::download_booklet));

    let ui = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js));

    Router::new()
        .merge(api)
        .merge(ui)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
