//! In-memory note repository implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::note::{ListParams, Note, NoteInput, NoteRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory note repository
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn list(&self, params: ListParams) -> Result<Vec<Note>, DomainError> {
        let notes = self.notes.read().await;
        let skip = usize::try_from(params.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(params.limit()).unwrap_or(0);

        Ok(notes.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn create(&self, input: NoteInput) -> Result<Note, DomainError> {
        let mut notes = self.notes.write().await;

        let id = notes
            .last()
            .map_or(Some(1), |n| n.id().checked_add(1))
            .ok_or_else(|| DomainError::storage("Note id sequence exhausted"))?;

        let note = Note::new(id, input);
        notes.push(note.clone());

        Ok(note)
    }

    async fn get(&self, id: i64) -> Result<Option<Note>, DomainError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id() == id).cloned())
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::note::{validate_list_params, RawListParams};

    fn params(skip: i64, limit: i64) -> ListParams {
        validate_list_params(RawListParams {
            skip: Some(skip.to_string()),
            limit: Some(limit.to_string()),
        })
        .unwrap()
    }

    async fn seeded(count: usize) -> InMemoryNoteRepository {
        let repository = InMemoryNoteRepository::new();

        for i in 0..count {
            repository
                .create(NoteInput::new(format!("note-{}", i), "desc", i % 2 == 0))
                .await
                .unwrap();
        }

        repository
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repository = InMemoryNoteRepository::new();

        let first = repository.create(NoteInput::new("A", "B", false)).await.unwrap();
        let second = repository.create(NoteInput::new("C", "D", true)).await.unwrap();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(repository.get(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repository = seeded(2).await;
        assert!(repository.get(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_window() {
        let repository = seeded(25).await;

        let page = repository.list(params(0, 10)).await.unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id(), 1);

        let page = repository.list(params(20, 10)).await.unwrap();
        let ids: Vec<i64> = page.iter().map(Note::id).collect();
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);

        let page = repository.list(params(30, 10)).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_list_is_repeatable() {
        let repository = seeded(15).await;

        let first = repository.list(params(3, 10)).await.unwrap();
        let second = repository.list(params(3, 10)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(InMemoryNoteRepository::new().health_check().await.is_ok());
    }
}
