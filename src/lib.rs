//! Notes API
//!
//! A small CRUD service for a single "Note" resource:
//! - Explicit request validation with field-level error reports
//! - PostgreSQL persistence with per-operation pooled connections
//! - In-memory storage for development and tests

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use api::state::AppState;
use config::StorageBackend;
use domain::NoteRepository;
use infrastructure::note::{InMemoryNoteRepository, PostgresNoteRepository};
use tracing::info;

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.database.backend);

    let repository: Arc<dyn NoteRepository> = match config.database.backend {
        StorageBackend::Memory => Arc::new(InMemoryNoteRepository::new()),
        StorageBackend::Postgres => {
            let url = config.database.resolve_url().context(
                "database.url or the DATABASE_URL environment variable is required for the postgres backend",
            )?;

            info!("Connecting to PostgreSQL...");
            let repository = PostgresNoteRepository::connect(&url, &config.database).await?;
            repository.ensure_schema().await?;

            Arc::new(repository)
        }
    };

    Ok(AppState::with_repository(repository))
}
