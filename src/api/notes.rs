//! Note endpoints
//!
//! Every handler validates its raw input before the service is called, so
//! rejected requests never reach storage.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Router,
};
use serde_json::Value;
use tracing::debug;

use super::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse, Path, Query};
use crate::domain::note::{
    validate_list_params, validate_note_id, validate_note_input, Note, RawListParams,
};

pub fn create_notes_router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/new", get(new_notes))
        .route("/notes/{note_id}", get(get_note))
}

/// GET /notes?skip=&limit=
pub async fn list_notes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let params = validate_list_params(RawListParams::from_pairs(pairs))?;
    debug!(skip = params.skip(), limit = params.limit(), "Listing notes");

    let notes = state.note_service.list(params).await?;

    Ok(Json(notes))
}

/// POST /notes
pub async fn create_note(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let input = validate_note_input(&raw)?;
    debug!(name = %input.name, "Creating note");

    let note = state.note_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/new
pub async fn new_notes() -> Json<MessageResponse> {
    Json(MessageResponse::new("Return new notes"))
}

/// GET /notes/{note_id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = validate_note_id(&note_id)?;
    debug!(id, "Getting note");

    let note = state.note_service.get(id).await?;

    Ok(Json(note))
}
