//! Payload validation.
//!
//! Request bodies arrive as raw JSON. Each resource turns them into typed
//! records through [`Validate`], which reads every declared field with a
//! [`PayloadReader`] and reports all offending fields at once.

use std::num::{IntErrorKind, ParseIntError};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Types that can be built from an untrusted JSON payload.
pub trait Validate: Sized {
    fn validate(payload: &Value) -> Result<Self, ValidationError>;
}

/// One offending field in a rejected payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    /// Where the problem is, e.g. `["body", "rating"]`.
    pub loc: Vec<String>,

    /// Human-readable message.
    pub msg: String,

    /// Machine-readable category, e.g. `missing` or `float_type`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldIssue {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// A required body field that is absent.
    pub fn missing(field: &str) -> Self {
        Self::new(&["body", field], "Field required", "missing")
    }

    /// A body field holding a value of the wrong type.
    pub fn wrong_type(field: &str, msg: &str, kind: &str) -> Self {
        Self::new(&["body", field], msg, kind)
    }
}

/// A payload failed the required-field or type checks.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} invalid field(s): {}", .issues.len(), summary(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

fn summary(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} ({})", issue.loc.join("."), issue.msg))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Convenience constructor for a single issue.
    pub fn single(issue: FieldIssue) -> Self {
        Self::new(vec![issue])
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

/// `i64::MIN` as a float, exactly.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;

/// 2^63, the first float above `i64::MAX`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn is_overflow(err: &ParseIntError) -> bool {
    matches!(
        err.kind(),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
    )
}

fn too_big(field: &str) -> FieldIssue {
    FieldIssue::wrong_type(
        field,
        "Input should be a valid integer, exceeded maximum size",
        "int_parsing_size",
    )
}

/// Reads typed fields out of a JSON object, collecting issues as it goes.
///
/// Every accessor returns `None` and records an issue when the field is
/// missing or mistyped. Unknown fields are ignored.
pub struct PayloadReader<'a> {
    body: Option<&'a Map<String, Value>>,
    issues: Vec<FieldIssue>,
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a Value) -> Self {
        match payload.as_object() {
            Some(body) => Self {
                body: Some(body),
                issues: Vec::new(),
            },
            None => Self {
                body: None,
                issues: vec![FieldIssue::new(
                    &["body"],
                    "Input should be a valid dictionary or object to extract fields from",
                    "model_attributes_type",
                )],
            },
        }
    }

    fn field(&mut self, name: &str) -> Option<&'a Value> {
        let body = self.body?;
        let value = body.get(name);
        if value.is_none() {
            self.issues.push(FieldIssue::missing(name));
        }
        value
    }

    /// A required string field.
    pub fn string(&mut self, name: &str) -> Option<String> {
        let value = self.field(name)?;
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.issues.push(FieldIssue::wrong_type(
                    name,
                    "Input should be a valid string",
                    "string_type",
                ));
                None
            }
        }
    }

    /// A required floating-point field.
    ///
    /// Integers are accepted, as are strings holding a number.
    pub fn float(&mut self, name: &str) -> Option<f64> {
        let value = self.field(name)?;
        if let Some(n) = value.as_f64() {
            return Some(n);
        }

        let issue = match value.as_str() {
            Some(text) => match text.trim().parse::<f64>() {
                Ok(n) => return Some(n),
                Err(_) => FieldIssue::wrong_type(
                    name,
                    "Input should be a valid number, unable to parse string as a number",
                    "float_parsing",
                ),
            },
            None => FieldIssue::wrong_type(name, "Input should be a valid number", "float_type"),
        };
        self.issues.push(issue);
        None
    }

    /// A required integer field.
    ///
    /// Floats without a fractional part are accepted, as are strings holding
    /// an integer. Values outside the `i64` range are rejected.
    pub fn integer(&mut self, name: &str) -> Option<i64> {
        let value = self.field(name)?;
        if let Some(n) = value.as_i64() {
            return Some(n);
        }

        let issue = if let Some(text) = value.as_str() {
            match text.trim().parse::<i64>() {
                Ok(n) => return Some(n),
                Err(e) if is_overflow(&e) => too_big(name),
                Err(_) => FieldIssue::wrong_type(
                    name,
                    "Input should be a valid integer, unable to parse string as an integer",
                    "int_parsing",
                ),
            }
        } else if let Some(f) = value.as_f64() {
            if f.fract() != 0.0 {
                FieldIssue::wrong_type(
                    name,
                    "Input should be a valid integer, got a number with a fractional part",
                    "int_from_float",
                )
            } else if (I64_LOWER..I64_UPPER).contains(&f) {
                return Some(f as i64);
            } else {
                too_big(name)
            }
        } else {
            FieldIssue::wrong_type(name, "Input should be a valid integer", "int_type")
        };
        self.issues.push(issue);
        None
    }

    /// Whether no issue has been recorded so far.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Turn the collected issues into an error.
    pub fn into_error(self) -> ValidationError {
        ValidationError::new(self.issues)
    }
}
