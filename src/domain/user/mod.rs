//! User domain
//!
//! A demonstration model that is validated but never stored.

mod entity;
mod validation;

pub use entity::{User, DEFAULT_FRIENDS};
pub use validation::validate_user;
