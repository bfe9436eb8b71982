//! Booklet selection endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::AppState;

/// Body of POST /api/selection/toggle
#[derive(Debug, Deserialize)]
pub struct ToggleSelectionRequest {
    pub id: i64,
}

/// Selection after a change
#[derive(Debug, Serialize)]
pub struct SelectionChange {
    pub id: i64,
    pub selected: bool,
    pub selected_ids: Vec<i64>,
}

/// POST /api/selection/toggle
pub async fn toggle_selection(
    State(state): State<AppState>,
    Json(request): Json<ToggleSelectionRequest>,
) -> ApiResult<Json<SelectionChange>> {
    let mut session = state.session.write().await;
    session.toggle_select(request.id)?;

    Ok(Json(SelectionChange {
        id: request.id,
        selected: session.selection.contains(request.id),
        selected_ids: session.selected_ids(),
    }))
}

/// DELETE /api/selection/:id
///
/// Removing an unselected ID is a no-op.
pub async fn remove_selection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<SelectionChange> {
    let mut session = state.session.write().await;
    session.remove_selected(id);

    Json(SelectionChange {
        id,
        selected: false,
        selected_ids: session.selected_ids(),
    })
}
