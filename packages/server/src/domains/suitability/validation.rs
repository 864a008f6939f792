//! Validation of JSON input against the form field table.

use std::fmt;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use super::models::FormRecord;
use super::schema::{is_known_field, FieldKind, FieldSpec, FORM_FIELDS};

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
}

/// Minimum digits for something to pass as a phone number.
const MIN_PHONE_DIGITS: usize = 7;

/// How strictly a record is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Model output: every field optional, types enforced, field set closed.
    Extraction,
    /// Form submission: every field required, non-empty and well-formed.
    Submission,
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path (`$` for the document root)
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Non-empty list of violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }

    /// Whether some violation names this field.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.field.as_str()).collect()
    }

    /// Prefix every field path, e.g. `email` -> `form.email`.
    pub fn nested_under(self, parent: &str) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|v| FieldViolation {
                    field: if v.field == "$" {
                        parent.to_string()
                    } else {
                        format!("{}.{}", parent, v.field)
                    },
                    message: v.message,
                })
                .collect(),
        )
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a JSON value against the form schema and convert it.
///
/// Every offending field is reported, not just the first.
pub fn validate(value: &Value, mode: ValidationMode) -> Result<FormRecord, ValidationErrors> {
    let Some(object) = value.as_object() else {
        return Err(ValidationErrors(vec![FieldViolation::new(
            "$",
            "expected a JSON object",
        )]));
    };

    let mut violations = Vec::new();

    for key in object.keys() {
        if !is_known_field(key) {
            violations.push(FieldViolation::new(key.as_str(), "unknown field"));
        }
    }

    for spec in FORM_FIELDS.iter() {
        if let Some(message) = check_field(spec, object, mode) {
            violations.push(FieldViolation::new(spec.name, message));
        }
    }

    if !violations.is_empty() {
        return Err(ValidationErrors(violations));
    }

    serde_json::from_value(value.clone())
        .map_err(|e| ValidationErrors(vec![FieldViolation::new("$", e.to_string())]))
}

fn check_field(spec: &FieldSpec, object: &Map<String, Value>, mode: ValidationMode) -> Option<String> {
    let strict = mode == ValidationMode::Submission;

    let value = match object.get(spec.name) {
        None | Some(Value::Null) => {
            return strict.then(|| "is required".to_string());
        }
        Some(value) => value,
    };

    if spec.kind.is_numeric() {
        let Some(number) = value.as_f64() else {
            return Some("expected a number".to_string());
        };
        if strict && number < 0.0 {
            return Some("must not be negative".to_string());
        }
        return None;
    }

    let Some(text) = value.as_str() else {
        return Some("expected a string".to_string());
    };

    if !strict {
        return None;
    }

    let text = text.trim();
    if text.is_empty() {
        return Some("is required".to_string());
    }

    match spec.kind {
        FieldKind::Date if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() => {
            Some("expected a date in YYYY-MM-DD format".to_string())
        }
        FieldKind::Email if !EMAIL_REGEX.is_match(text) => {
            Some("expected an email address".to_string())
        }
        FieldKind::Phone
            if text.chars().filter(|c| c.is_ascii_digit()).count() < MIN_PHONE_DIGITS =>
        {
            Some("expected a phone number".to_string())
        }
        _ => None,
    }
}
