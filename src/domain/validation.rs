//! Field-level validation primitives shared by the note and user models
//!
//! Guard functions never stop at the first problem. They collect a
//! [`FieldError`] for every violated field and return them together as a
//! single [`ValidationError`], so callers can report everything at once.

use serde_json::{Map, Value};

/// Where a rejected value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    Body,
    Query,
    Path,
}

impl FieldLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Query => "query",
            Self::Path => "path",
        }
    }
}

impl std::fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    location: FieldLocation,
    /// `None` when the whole input is rejected (e.g. a body that is not an object)
    field: Option<String>,
    message: String,
    kind: String,
}

impl FieldError {
    pub fn new(
        location: FieldLocation,
        field: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location,
            field: Some(field.into()),
            message: message.into(),
            kind: kind.into(),
        }
    }

    /// Error that applies to the input as a whole rather than one field
    pub fn whole(
        location: FieldLocation,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location,
            field: None,
            message: message.into(),
            kind: kind.into(),
        }
    }

    pub fn location(&self) -> FieldLocation {
        self.location
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Location path, e.g. `["query", "limit"]`
    pub fn loc(&self) -> Vec<String> {
        let mut loc = vec![self.location.as_str().to_string()];

        if let Some(field) = &self.field {
            loc.push(field.clone());
        }

        loc
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc().join("."), self.message)
    }
}

/// Every constraint violated by one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any error targets the given field
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == Some(field))
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = if self.errors.len() == 1 { "" } else { "s" };
        write!(f, "{} validation error{}", self.errors.len(), suffix)?;

        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, error)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates field errors for one input location
#[derive(Debug)]
pub(crate) struct FieldErrors {
    location: FieldLocation,
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new(location: FieldLocation) -> Self {
        Self {
            location,
            errors: Vec::new(),
        }
    }

    pub fn push(&mut self, field: &str, kind: &str, message: impl Into<String>) {
        self.errors
            .push(FieldError::new(self.location, field, kind, message));
    }

    pub fn push_whole(&mut self, kind: &str, message: impl Into<String>) {
        self.errors
            .push(FieldError::whole(self.location, kind, message));
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == Some(field))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Orders errors by the position of their field in `order`
    pub fn sort_by_fields(&mut self, order: &[&str]) {
        self.errors.sort_by_key(|e| {
            e.field()
                .and_then(|f| order.iter().position(|o| *o == f))
                .unwrap_or(0)
        });
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError::new(self.errors)
    }

    /// Parses an integer from its textual form, recording a failure
    pub fn int_from_text(&mut self, field: &str, text: &str) -> Option<i64> {
        match parse_int(text) {
            Some(value) => Some(value),
            None => {
                self.push(
                    field,
                    "int_parsing",
                    "Input should be a valid integer, unable to parse string as an integer",
                );
                None
            }
        }
    }

    /// Checks `value >= min`
    pub fn at_least(&mut self, field: &str, value: i64, min: i64) -> Option<i64> {
        if value < min {
            self.push(
                field,
                "greater_than_equal",
                format!("Input should be greater than or equal to {}", min),
            );
            return None;
        }

        Some(value)
    }

    /// Checks `value > bound`
    pub fn greater_than(&mut self, field: &str, value: i64, bound: i64) -> Option<i64> {
        if value <= bound {
            self.push(
                field,
                "greater_than",
                format!("Input should be greater than {}", bound),
            );
            return None;
        }

        Some(value)
    }

    /// Checks `value <= max`
    pub fn at_most(&mut self, field: &str, value: i64, max: i64) -> Option<i64> {
        if value > max {
            self.push(
                field,
                "less_than_equal",
                format!("Input should be less than or equal to {}", max),
            );
            return None;
        }

        Some(value)
    }
}

/// Parses a base-10 integer, tolerating surrounding whitespace
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Typed access to the fields of a JSON object body
///
/// Each accessor returns `None` exactly when it has recorded an error,
/// so a fully populated set of results implies a clean report.
#[derive(Debug)]
pub(crate) struct BodyFields<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: FieldErrors,
}

impl<'a> BodyFields<'a> {
    pub fn new(raw: &'a Value) -> Self {
        let mut errors = FieldErrors::new(FieldLocation::Body);
        let object = raw.as_object();

        if object.is_none() {
            errors.push_whole(
                "model_attributes_type",
                "Input should be a valid dictionary or object to extract fields from",
            );
        }

        Self { object, errors }
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    fn lookup(&mut self, field: &str, required: bool) -> Lookup<'a> {
        let Some(object) = self.object else {
            return Lookup::Rejected;
        };

        match object.get(field) {
            Some(value) => Lookup::Present(value),
            None if required => {
                self.errors.push(field, "missing", "Field required");
                Lookup::Rejected
            }
            None => Lookup::Absent,
        }
    }

    pub fn required_str(&mut self, field: &str) -> Option<String> {
        match self.lookup(field, true) {
            Lookup::Present(Value::String(s)) => Some(s.clone()),
            Lookup::Present(_) => {
                self.errors
                    .push(field, "string_type", "Input should be a valid string");
                None
            }
            Lookup::Absent | Lookup::Rejected => None,
        }
    }

    pub fn required_bool(&mut self, field: &str) -> Option<bool> {
        match self.lookup(field, true) {
            Lookup::Present(value) => match coerce_bool(value) {
                Some(b) => Some(b),
                None => {
                    self.errors.push(
                        field,
                        "bool_parsing",
                        "Input should be a valid boolean, unable to interpret input",
                    );
                    None
                }
            },
            Lookup::Absent | Lookup::Rejected => None,
        }
    }

    /// Optional integer; `Some(None)` when absent or null
    pub fn optional_int(&mut self, field: &str) -> Option<Option<i64>> {
        match self.lookup(field, false) {
            Lookup::Present(Value::Null) | Lookup::Absent => Some(None),
            Lookup::Present(value) => self.coerce_int(field, value).map(Some),
            Lookup::Rejected => None,
        }
    }

    fn coerce_int(&mut self, field: &str, value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Some(i);
                }

                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
                    _ => {
                        self.errors.push(
                            field,
                            "int_from_float",
                            "Input should be a valid integer, got a number with a fractional part",
                        );
                        None
                    }
                }
            }
            Value::String(s) => self.errors.int_from_text(field, s),
            _ => {
                self.errors
                    .push(field, "int_type", "Input should be a valid integer");
                None
            }
        }
    }
}

enum Lookup<'a> {
    Present(&'a Value),
    Absent,
    /// Missing-but-required, or the body itself was rejected
    Rejected,
}

/// Lenient boolean coercion: JSON booleans, 0/1 and common textual forms
pub(crate) fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
