//! API layer - HTTP endpoints and extractors

pub mod health;
pub mod notes;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::AppState;
