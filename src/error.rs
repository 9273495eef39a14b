//! Validation Error Types
//!
//! Every failure a validator can produce is a `ValidationError`: a field,
//! a failure class, and the human-readable message shown next to the field.
//! Validators are total functions — malformed input yields an error value,
//! never a panic.

use serde_derive::Serialize;
use thiserror::Error;

use crate::models::registration::FieldId;

/// Result type for validation chains.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Closed taxonomy of validation failures.
///
/// All variants are recoverable by user correction; none represent a
/// system-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Value absent or blank.
    Required,
    /// Value present but unparseable (e.g. garbage where a date belongs).
    Malformed,
    /// Value parsed but outside accepted bounds (too short, underage).
    OutOfRange,
    /// Digit string does not match the country's phone pattern.
    FormatMismatch,
    /// Value contains characters outside the accepted charset.
    InvalidCharacters,
}

/// Validation error with the message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldId,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: FieldId, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    pub fn required(field: FieldId) -> Self {
        Self::new(field, ErrorKind::Required, format!("{} is required.", field))
    }

    pub fn too_short(field: FieldId, min: usize) -> Self {
        Self::new(
            field,
            ErrorKind::OutOfRange,
            format!("{} must be at least {} characters.", field, min),
        )
    }

    pub fn invalid_characters(field: FieldId) -> Self {
        Self::new(
            field,
            ErrorKind::InvalidCharacters,
            format!("{} can include letters and spaces only.", field),
        )
    }

    pub fn malformed_date(field: FieldId) -> Self {
        Self::new(field, ErrorKind::Malformed, "Please enter a valid date.")
    }

    pub fn not_in_past(field: FieldId) -> Self {
        Self::new(
            field,
            ErrorKind::OutOfRange,
            format!("{} must be in the past.", field),
        )
    }

    pub fn underage(field: FieldId, min_years: i32) -> Self {
        Self::new(
            field,
            ErrorKind::OutOfRange,
            format!("You must be at least {} years old.", min_years),
        )
    }

    pub fn format_mismatch(field: FieldId, hint: &str) -> Self {
        Self::new(
            field,
            ErrorKind::FormatMismatch,
            format!("Use a valid format: {}", hint),
        )
    }
}
