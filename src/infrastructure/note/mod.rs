//! Note infrastructure module
//!
//! Repository implementations backed by PostgreSQL or process memory, and
//! the service the HTTP layer talks to.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresNoteRepository;
pub use repository::InMemoryNoteRepository;
pub use service::NoteService;
