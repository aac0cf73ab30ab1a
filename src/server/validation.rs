//! Field-level validation rules.
//!
//! Each validated type lists its rules through the `Validate` trait. Rules are plain
//! functions from the value to the violations they find, and `validate` runs every one of
//! them so a caller sees all violations at once rather than only the first.

use thiserror::Error;
use validator::ValidateEmail;

use crate::model::api::FieldErrorDto;

/// Maximum length accepted for an email address.
pub const MAX_EMAIL_LENGTH: usize = 256;

/// A single rule violation on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found while validating a value. Never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", describe(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if any violation was reported against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn into_dto(self) -> Vec<FieldErrorDto> {
        self.0
            .into_iter()
            .map(|e| FieldErrorDto {
                field: e.field,
                message: e.message,
            })
            .collect()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

/// A validation rule: inspects a value and returns the violations it finds.
pub type Rule<T> = fn(&T) -> Vec<FieldError>;

pub trait Validate: Sized {
    /// Rules applied by `validate`, in reporting order.
    fn rules() -> Vec<Rule<Self>>;

    /// Runs every rule and collects all violations.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = Self::rules()
            .into_iter()
            .flat_map(|rule| rule(self))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

pub fn not_blank(field: &str, value: Option<&str>) -> Option<FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(FieldError::new(field, "must not be blank")),
    }
}

pub fn max_length(field: &str, value: Option<&str>, max: usize) -> Option<FieldError> {
    match value {
        Some(v) if v.chars().count() > max => Some(FieldError::new(
            field,
            format!("must be at most {} characters", max),
        )),
        _ => None,
    }
}

/// Checks address syntax (HTML5 / RFC 5322 subset, IDN domains allowed). Absent values pass.
pub fn email(field: &str, value: Option<&str>) -> Option<FieldError> {
    let value = value?;

    if value.validate_email() {
        None
    } else {
        Some(FieldError::new(field, "must be a well-formed email address"))
    }
}
