//! Material filter endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Body of POST /api/filters/toggle
#[derive(Debug, Deserialize)]
pub struct ToggleMaterialRequest {
    pub name: String,
}

/// Active filter after a change
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub materials: Vec<String>,
}

/// POST /api/filters/toggle
///
/// Names are not checked against the material catalog; an unknown name
/// simply matches no designs.
pub async fn toggle_material(
    State(state): State<AppState>,
    Json(request): Json<ToggleMaterialRequest>,
) -> ApiResult<Json<FilterResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Material name is empty".to_string()));
    }

    let mut session = state.session.write().await;
    session.toggle_material(&request.name);

    Ok(Json(FilterResponse {
        materials: session.filter.materials().map(str::to_string).collect(),
    }))
}

/// POST /api/filters/clear
pub async fn clear_filters(State(state): State<AppState>) -> Json<FilterResponse> {
    state.session.write().await.clear_filters();
    Json(FilterResponse { materials: vec![] })
}
