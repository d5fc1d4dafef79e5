//! Application state for shared services

use std::sync::Arc;

use crate::domain::NoteRepository;
use crate::infrastructure::note::NoteService;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub note_service: NoteService,
}

impl AppState {
    pub fn new(note_service: NoteService) -> Self {
        Self { note_service }
    }

    /// Build state around any note repository
    pub fn with_repository(repository: Arc<dyn NoteRepository>) -> Self {
        Self::new(NoteService::new(repository))
    }
}
