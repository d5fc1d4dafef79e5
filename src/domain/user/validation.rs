//! User validation

use serde_json::Value;
use validator::Validate;

use super::entity::{User, DEFAULT_FRIENDS};
use crate::domain::validation::{BodyFields, ValidationError};

/// Declaration order, used to keep reports stable
const USER_FIELDS: [&str; 5] = ["name", "email", "website", "age", "friends"];

/// Validate raw input and construct a [`User`]
///
/// Rules:
/// - `name`, `email` and `website` are required strings
/// - `name` cannot be empty
/// - `email` must be a syntactically valid address
/// - `website` must be an absolute URL with a scheme
/// - `age` is optional, 13 to 90 inclusive
/// - `friends` is optional, defaults to 0
///
/// Type errors and constraint errors are reported together; a field that
/// already failed its type check is not checked again.
pub fn validate_user(raw: &Value) -> Result<User, ValidationError> {
    let mut fields = BodyFields::new(raw);

    let name = fields.required_str("name");
    let email = fields.required_str("email");
    let website = fields.required_str("website");
    let age = fields.optional_int("age");
    let friends = fields
        .optional_int("friends")
        .map(|f| f.or(Some(DEFAULT_FRIENDS)));

    let typed = name.is_some()
        && email.is_some()
        && website.is_some()
        && age.is_some()
        && friends.is_some();

    let candidate = User {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        website: website.unwrap_or_default(),
        age: age.flatten(),
        friends: friends.flatten(),
    };

    let mut errors = fields.into_errors();

    if let Err(report) = candidate.validate() {
        for (field, violations) in report.field_errors() {
            let field = field.to_string();

            if errors.has_field(&field) {
                continue;
            }

            for violation in violations.iter() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));

                errors.push(&field, &violation.code, message);
            }
        }
    }

    if typed && errors.is_empty() {
        return Ok(candidate);
    }

    errors.sort_by_fields(&USER_FIELDS);
    Err(errors.into_error())
}
