//! Note service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::note::{ListParams, Note, NoteInput, NoteRepository};
use crate::domain::DomainError;

/// Service for listing, creating and fetching notes
#[derive(Clone)]
pub struct NoteService {
    repository: Arc<dyn NoteRepository>,
}

impl std::fmt::Debug for NoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteService").finish_non_exhaustive()
    }
}

impl NoteService {
    /// Create a new note service
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }

    /// List a window of notes
    pub async fn list(&self, params: ListParams) -> Result<Vec<Note>, DomainError> {
        let notes = self.repository.list(params).await?;
        debug!(
            skip = params.skip(),
            limit = params.limit(),
            returned = notes.len(),
            "Listed notes"
        );
        Ok(notes)
    }

    /// Create a new note
    pub async fn create(&self, input: NoteInput) -> Result<Note, DomainError> {
        let note = self.repository.create(input).await?;
        info!(id = note.id(), "Created note");
        Ok(note)
    }

    /// Get a note by id, failing with `NotFound` when absent
    pub async fn get(&self, id: i64) -> Result<Note, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Note not found"))
    }

    /// Check that storage is reachable
    pub async fn health_check(&self) -> Result<(), DomainError> {
        self.repository.health_check().await
    }
}
