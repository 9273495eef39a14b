//! Per-field validators for the registration form.
//!
//! Each validator is a pure, total function from raw input to a
//! `ValidationResult`; the only ambient input is the current date, which
//! enters the date-of-birth check through an explicit `today` parameter on
//! the inner function.

use chrono::{Local, NaiveDate};

use crate::error::{ValidationError, ValidationResult};
use crate::models::registration::{FieldId, RegistrationInput};
use crate::rules::{self, country};

/// Minimum characters for the name fields, after trimming.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum characters for the address, after trimming.
pub const MIN_ADDRESS_CHARS: usize = 10;
/// Minimum age in completed years.
pub const MIN_AGE_YEARS: i32 = 13;

/// Date format the form submits (HTML date input).
const DOB_FORMAT: &str = "%Y-%m-%d";

/// Validate one field of the form. Dispatch is exhaustive over `FieldId`,
/// so adding a field without a validator fails to compile.
pub fn validate_field(input: &RegistrationInput, field: FieldId) -> ValidationResult<()> {
    match field {
        FieldId::FullName => validate_name(FieldId::FullName, &input.full_name),
        FieldId::FatherName => validate_name(FieldId::FatherName, &input.father_name),
        FieldId::Dob => validate_dob(&input.dob),
        FieldId::Address => validate_address(&input.address),
        FieldId::Phone => validate_phone(&input.phone, &input.country_code),
    }
}

/// Shared rule for the two name fields; `field` carries the label used in
/// the failure messages.
pub fn validate_name(field: FieldId, raw: &str) -> ValidationResult<()> {
    let clean = raw.trim();
    rules::min_chars(field, clean, MIN_NAME_CHARS)?;
    rules::letters_and_spaces(field, clean)?;
    Ok(())
}

/// Date of birth against the current local date.
pub fn validate_dob(raw: &str) -> ValidationResult<()> {
    validate_dob_at(raw, Local::now().date_naive())
}

/// Check order matters for which message is surfaced:
/// required, then parseable, then in the past, then old enough.
pub(crate) fn validate_dob_at(raw: &str, today: NaiveDate) -> ValidationResult<()> {
    let clean = raw.trim();
    if clean.is_empty() {
        return Err(ValidationError::required(FieldId::Dob));
    }
    let dob = NaiveDate::parse_from_str(clean, DOB_FORMAT)
        .map_err(|_| ValidationError::malformed_date(FieldId::Dob))?;
    if dob >= today {
        return Err(ValidationError::not_in_past(FieldId::Dob));
    }
    if rules::completed_years(dob, today) < MIN_AGE_YEARS {
        return Err(ValidationError::underage(FieldId::Dob, MIN_AGE_YEARS));
    }
    Ok(())
}

pub fn validate_address(raw: &str) -> ValidationResult<()> {
    rules::min_chars(FieldId::Address, raw.trim(), MIN_ADDRESS_CHARS)
}

/// Phone number under the supplied country context. Formatting characters
/// are stripped before matching; an unrecognized country takes the US rule.
pub fn validate_phone(raw: &str, country_id: &str) -> ValidationResult<()> {
    let digits = rules::digits_of(raw);
    if digits.is_empty() {
        return Err(ValidationError::required(FieldId::Phone));
    }
    let rule = country::rule_for(country_id);
    if !rule.matches(&digits) {
        return Err(ValidationError::format_mismatch(FieldId::Phone, rule.hint));
    }
    Ok(())
}
