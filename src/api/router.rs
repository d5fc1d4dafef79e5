use axum::Router;
use tower_http::trace::TraceLayer;

use super::health;
use super::notes;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::create_health_router())
        .merge(notes::create_notes_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
