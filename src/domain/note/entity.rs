//! Note entity and its input types

use serde::{Deserialize, Serialize};

/// A persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Assigned by storage on creation
    id: i64,
    name: String,
    description: String,
    done: bool,
}

impl Note {
    /// Rebuild a note from a stored row
    pub fn new(id: i64, input: NoteInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            done: input.done,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn done(&self) -> bool {
        self.done
    }
}

/// Validated body of a create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    pub name: String,
    pub description: String,
    pub done: bool,
}

impl NoteInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, done: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            done,
        }
    }
}

/// Untyped listing parameters as they arrive in the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawListParams {
    pub skip: Option<String>,
    pub limit: Option<String>,
}

impl RawListParams {
    /// Collect from decoded query pairs; a repeated key keeps its last value
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut raw = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "skip" => raw.skip = Some(value),
                "limit" => raw.limit = Some(value),
                _ => {}
            }
        }

        raw
    }
}

/// Offset/limit window for listing notes
///
/// Only obtainable through validation, so `skip >= 0` and
/// `10 <= limit <= 100` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    skip: i64,
    limit: i64,
}

impl ListParams {
    pub(crate) fn from_checked(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}
