//! Catalog views
//!
//! Read endpoints derive their lists from the session on every call; the
//! derivations are pure functions of catalog + filter / selection.

use axum::{extract::State, Json};
use nahbah_common::{Design, Material};
use serde::Serialize;

use crate::catalog::CatalogStatus;
use crate::AppState;

/// Material catalog response
#[derive(Debug, Serialize)]
pub struct MaterialsResponse {
    pub status: CatalogStatus,
    pub materials: Vec<Material>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Visible designs with the state that produced them
#[derive(Debug, Serialize)]
pub struct DesignsResponse {
    pub status: CatalogStatus,
    pub designs: Vec<Design>,
    /// Active material filter (empty = show all)
    pub filter: Vec<String>,
    pub selected_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Booklet panel contents
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    /// Selection order
    pub selected_ids: Vec<i64>,
    /// Catalog order
    pub designs: Vec<Design>,
    pub export_in_progress: bool,
}

/// GET /api/materials
pub async fn list_materials(State(state): State<AppState>) -> Json<MaterialsResponse> {
    let session = state.session.read().await;

    Json(MaterialsResponse {
        status: session.materials.status(),
        materials: session.materials.items().to_vec(),
        error: session.materials.error().map(str::to_string),
    })
}

/// GET /api/designs
///
/// Approved designs passing the current material filter, in catalog order.
pub async fn list_visible_designs(State(state): State<AppState>) -> Json<DesignsResponse> {
    let session = state.session.read().await;

    Json(DesignsResponse {
        status: session.designs.status(),
        designs: session.visible_designs().into_iter().cloned().collect(),
        filter: session.filter.materials().map(str::to_string).collect(),
        selected_ids: session.selected_ids(),
        error: session.designs.error().map(str::to_string),
    })
}

/// GET /api/selection
pub async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let session = state.session.read().await;

    Json(SelectionResponse {
        selected_ids: session.selected_ids(),
        designs: session.selected_designs().into_iter().cloned().collect(),
        export_in_progress: state.booklet.is_in_flight(),
    })
}

/// POST /api/catalog/reload
///
/// Refetches both catalogs; returns the resulting material view.
pub async fn reload_catalog(State(state): State<AppState>) -> Json<MaterialsResponse> {
    state.reload_catalogs().await;
    list_materials(State(state)).await
}
