//! User entity

use serde::Serialize;
use validator::Validate;

/// Default friend count when the field is omitted
pub const DEFAULT_FRIENDS: i64 = 0;

/// Profile-style user record
///
/// Never persisted. Fields are private and the only constructor is
/// [`validate_user`](super::validate_user), so every `User` in existence
/// satisfies the constraints below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct User {
    #[validate(length(
        min = 1,
        code = "string_too_short",
        message = "String should have at least 1 character"
    ))]
    pub(super) name: String,

    #[validate(email(code = "value_error", message = "value is not a valid email address"))]
    pub(super) email: String,

    #[validate(url(code = "url_parsing", message = "Input should be a valid URL"))]
    pub(super) website: String,

    #[validate(range(
        min = 13,
        max = 90,
        code = "range",
        message = "Input should be greater than or equal to 13 and less than or equal to 90"
    ))]
    pub(super) age: Option<i64>,

    pub(super) friends: Option<i64>,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn age(&self) -> Option<i64> {
        self.age
    }

    pub fn friends(&self) -> Option<i64> {
        self.friends
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User(name='{}', email='{}', website='{}', age={}, friends={})",
            self.name,
            self.email,
            self.website,
            display_opt(self.age),
            display_opt(self.friends)
        )
    }
}

fn display_opt(value: Option<i64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}
