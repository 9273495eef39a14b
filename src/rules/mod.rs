//! Composable Validation Primitives
//!
//! Pure helper rules shared by the per-field validators. Each helper is a
//! total function parameterized by the field it reports against; regex
//! patterns are compiled once behind `Lazy` statics.

pub mod country;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::models::registration::FieldId;

/// ASCII letters and spaces only — no digits, punctuation, or non-Latin
/// scripts.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

/// Fail when `value` has fewer than `min` characters.
pub fn min_chars(field: FieldId, value: &str, min: usize) -> ValidationResult<()> {
    if value.chars().count() < min {
        return Err(ValidationError::too_short(field, min));
    }
    Ok(())
}

/// Fail when `value` contains anything outside ASCII letters and spaces.
///
/// The empty string is rejected too, but callers check a minimum length
/// first so the length message wins.
pub fn letters_and_spaces(field: FieldId, value: &str) -> ValidationResult<()> {
    if !NAME_REGEX.is_match(value) {
        return Err(ValidationError::invalid_characters(field));
    }
    Ok(())
}

/// Completed years between `dob` and `today`.
///
/// Standard age arithmetic: the year difference, decremented when the
/// birthday has not yet occurred in `today`'s year.
pub fn completed_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years
}

/// Keep only ASCII digits from raw phone input.
pub fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
