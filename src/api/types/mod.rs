//! Request extractors and response types shared by the handlers

pub mod error;
pub mod json;
pub mod message;
pub mod path;
pub mod query;

pub use error::{ApiError, ApiErrorResponse, ErrorDetail, FieldErrorBody};
pub use json::Json;
pub use message::MessageResponse;
pub use path::Path;
pub use query::Query;
