//! Infrastructure layer - Storage and process-level implementations

pub mod logging;
pub mod note;
