//! Booklet download endpoint

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use nahbah_common::Message;

use super::LangQuery;
use crate::booklet::{BookletError, BOOKLET_FILE_NAME};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /api/booklet
///
/// Exports the current selection as a PDF attachment named
/// `not_a_house_but_a_home.pdf`.
///
/// - 400 when nothing is selected (the backend is not contacted)
/// - 409 while another export is in flight
/// - 502 when the backend fails; the visitor may simply try again
pub async fn download_booklet(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
) -> ApiResult<Response> {
    let locale = lang.resolve(state.default_locale);

    // Copy the IDs out so the session lock is not held across the backend call
    let ids = state.session.read().await.selected_ids();

    match state.booklet.request_booklet(&state.client, &ids).await {
        Ok(pdf) => Ok((
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", BOOKLET_FILE_NAME),
                ),
            ],
            pdf,
        )
            .into_response()),
        Err(BookletError::EmptySelection) => Err(ApiError::BadRequest(
            locale.text(Message::BookletEmptySelection).to_string(),
        )),
        Err(BookletError::InProgress) => Err(ApiError::Conflict(
            locale.text(Message::BookletInProgress).to_string(),
        )),
        Err(BookletError::Generation(_)) | Err(BookletError::Io(_)) => Err(ApiError::BadGateway(
            locale.text(Message::BookletFailed).to_string(),
        )),
    }
}
