//! Guards for note requests

use serde_json::Value;

use super::entity::{ListParams, NoteInput, RawListParams};
use crate::domain::validation::{BodyFields, FieldErrors, FieldLocation, ValidationError};

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MIN_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Note ids accepted by the fetch endpoint lie in `(0, MAX_NOTE_ID]`
pub const MAX_NOTE_ID: i64 = 10;

/// Validate the body of a create request
///
/// Rules:
/// - Body must be a JSON object
/// - `name` and `description` are required strings
/// - `done` is a required boolean (`0`/`1` and textual forms accepted)
pub fn validate_note_input(raw: &Value) -> Result<NoteInput, ValidationError> {
    let mut fields = BodyFields::new(raw);

    let name = fields.required_str("name");
    let description = fields.required_str("description");
    let done = fields.required_bool("done");

    match (name, description, done) {
        (Some(name), Some(description), Some(done)) => Ok(NoteInput {
            name,
            description,
            done,
        }),
        _ => Err(fields.into_errors().into_error()),
    }
}

/// Validate listing parameters
///
/// Rules:
/// - `skip` defaults to 0, must be an integer >= 0
/// - `limit` defaults to 10, must be an integer in [10, 100]
pub fn validate_list_params(raw: RawListParams) -> Result<ListParams, ValidationError> {
    let mut errors = FieldErrors::new(FieldLocation::Query);

    let skip = match raw.skip.as_deref() {
        None => Some(DEFAULT_SKIP),
        Some(text) => errors
            .int_from_text("skip", text)
            .and_then(|v| errors.at_least("skip", v, 0)),
    };

    let limit = match raw.limit.as_deref() {
        None => Some(DEFAULT_LIMIT),
        Some(text) => errors
            .int_from_text("limit", text)
            .and_then(|v| errors.at_least("limit", v, MIN_LIMIT))
            .and_then(|v| errors.at_most("limit", v, MAX_LIMIT)),
    };

    match (skip, limit) {
        (Some(skip), Some(limit)) => Ok(ListParams::from_checked(skip, limit)),
        _ => Err(errors.into_error()),
    }
}

/// Validate the note id path segment: an integer in `(0, 10]`
pub fn validate_note_id(raw: &str) -> Result<i64, ValidationError> {
    let mut errors = FieldErrors::new(FieldLocation::Path);

    errors
        .int_from_text("note_id", raw)
        .and_then(|v| errors.greater_than("note_id", v, 0))
        .and_then(|v| errors.at_most("note_id", v, MAX_NOTE_ID))
        .ok_or_else(|| errors.into_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(skip: Option<&str>, limit: Option<&str>) -> RawListParams {
        RawListParams {
            skip: skip.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_list_params_defaults() {
        let params = validate_list_params(RawListParams::default()).unwrap();
        assert_eq!(params.skip(), 0);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_list_params_bounds() {
        assert_eq!(validate_list_params(raw(None, Some("10"))).unwrap().limit(), 10);
        assert_eq!(validate_list_params(raw(None, Some("100"))).unwrap().limit(), 100);
        assert_eq!(validate_list_params(raw(Some("250"), None)).unwrap().skip(), 250);

        let err = validate_list_params(raw(None, Some("9"))).unwrap_err();
        assert_eq!(err.errors()[0].kind(), "greater_than_equal");
        assert_eq!(
            err.errors()[0].message(),
            "Input should be greater than or equal to 10"
        );

        let err = validate_list_params(raw(None, Some("101"))).unwrap_err();
        assert_eq!(err.errors()[0].kind(), "less_than_equal");
        assert_eq!(err.errors()[0].loc(), vec!["query", "limit"]);
    }

    #[test]
    fn test_list_params_negative_skip() {
        let err = validate_list_params(raw(Some("-1"), None)).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].field(), Some("skip"));
    }

    #[test]
    fn test_list_params_reports_every_field() {
        let err = validate_list_params(raw(Some("abc"), Some("1000"))).unwrap_err();

        assert_eq!(err.len(), 2);
        assert_eq!(err.errors()[0].field(), Some("skip"));
        assert_eq!(err.errors()[0].kind(), "int_parsing");
        assert_eq!(err.errors()[1].field(), Some("limit"));
    }

    #[test]
    fn test_note_id_range() {
        assert_eq!(validate_note_id("1").unwrap(), 1);
        assert_eq!(validate_note_id("10").unwrap(), 10);

        let err = validate_note_id("0").unwrap_err();
        assert_eq!(err.errors()[0].message(), "Input should be greater than 0");

        let err = validate_note_id("11").unwrap_err();
        assert_eq!(
            err.errors()[0].message(),
            "Input should be less than or equal to 10"
        );

        let err = validate_note_id("-4").unwrap_err();
        assert_eq!(err.errors()[0].kind(), "greater_than");
    }

    #[test]
    fn test_note_id_not_integer() {
        let err = validate_note_id("five").unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].kind(), "int_parsing");
        assert_eq!(err.errors()[0].loc(), vec!["path", "note_id"]);
    }

    #[test]
    fn test_note_input_valid() {
        let input =
            validate_note_input(&json!({"name": "A", "description": "B", "done": false})).unwrap();
        assert_eq!(input, NoteInput::new("A", "B", false));
    }

    #[test]
    fn test_note_input_lenient_bool() {
        let input =
            validate_note_input(&json!({"name": "A", "description": "B", "done": "yes"})).unwrap();
        assert!(input.done);

        let input =
            validate_note_input(&json!({"name": "A", "description": "B", "done": 0})).unwrap();
        assert!(!input.done);
    }

    #[test]
    fn test_note_input_missing_fields() {
        let err = validate_note_input(&json!({})).unwrap_err();

        assert_eq!(err.len(), 3);
        let fields: Vec<_> = err.errors().iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "description", "done"]);
        assert!(err.errors().iter().all(|e| e.kind() == "missing"));
    }

    #[test]
    fn test_note_input_wrong_types() {
        let err = validate_note_input(&json!({"name": 1, "description": "B", "done": "maybe"}))
            .unwrap_err();

        assert_eq!(err.len(), 2);
        assert_eq!(err.errors()[0].kind(), "string_type");
        assert_eq!(err.errors()[1].kind(), "bool_parsing");
    }

    #[test]
    fn test_note_input_not_an_object() {
        let err = validate_note_input(&json!("note")).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].loc(), vec!["body"]);
    }
}
