//! Health check endpoint

use axum::{extract::State, routing::get, Router};
use tracing::error;

use super::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};

pub const WELCOME_MESSAGE: &str = "Welcome to FastAPI!";

/// Detail returned when storage cannot be reached; the cause is only logged
pub const DATABASE_UNREACHABLE: &str = "Error connecting to the database";

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/api/healthchecker", get(healthchecker))
}

/// GET /api/healthchecker
///
/// Round-trips a trivial query against storage before answering.
pub async fn healthchecker(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.note_service.health_check().await.map_err(|e| {
        error!(error = %e, "Database health check failed");
        ApiError::internal(DATABASE_UNREACHABLE)
    })?;

    Ok(Json(MessageResponse::new(WELCOME_MESSAGE)))
}
