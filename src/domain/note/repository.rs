//! Note repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{ListParams, Note, NoteInput};
use crate::domain::DomainError;

/// Repository trait for note storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List up to `limit` notes after skipping `skip`, in insertion order
    async fn list(&self, params: ListParams) -> Result<Vec<Note>, DomainError>;

    /// Persist a new note and return it with its assigned id
    async fn create(&self, input: NoteInput) -> Result<Note, DomainError>;

    /// Get a note by id
    async fn get(&self, id: i64) -> Result<Option<Note>, DomainError>;

    /// Round-trip a trivial query against the store
    async fn health_check(&self) -> Result<(), DomainError>;
}
