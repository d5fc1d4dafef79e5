//! Note domain
//!
//! Entity, request validation and the repository trait for the single
//! persisted resource.

mod entity;
mod repository;
mod validation;

pub use entity::{ListParams, Note, NoteInput, RawListParams};
pub use repository::NoteRepository;
pub use validation::{
    validate_list_params, validate_note_id, validate_note_input, DEFAULT_LIMIT, DEFAULT_SKIP,
    MAX_LIMIT, MAX_NOTE_ID, MIN_LIMIT,
};

#[cfg(test)]
pub use repository::MockNoteRepository;
