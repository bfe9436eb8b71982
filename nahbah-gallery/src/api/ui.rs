//! UI serving routes
//!
//! Serves the static HTML/JS gallery page and its translation table

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use nahbah_common::Locale;
use serde::Serialize;

use super::LangQuery;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// Translation table for one locale
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub locale: Locale,
    pub available: Vec<Locale>,
    pub messages: BTreeMap<&'static str, &'static str>,
}

/// GET /api/i18n?lang=hu
pub async fn get_messages(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
) -> Json<MessagesResponse> {
    let locale = lang.resolve(state.default_locale);

    Json(MessagesResponse {
        locale,
        available: Locale::ALL.to_vec(),
        messages: locale.messages(),
    })
}
