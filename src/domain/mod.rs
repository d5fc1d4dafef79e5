//! Domain layer - Core entities, validation and repository traits

pub mod error;
pub mod note;
pub mod user;
pub mod validation;

pub use error::DomainError;
pub use note::{ListParams, Note, NoteInput, NoteRepository, RawListParams};
pub use user::User;
pub use validation::{FieldError, FieldLocation, ValidationError};
