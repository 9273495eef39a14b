//! Form Validation Engine
//!
//! Whole-form validation over the fixed field order. The engine walks every
//! field, collects one report per field, and exposes the aggregate outcome
//! the submission gate needs: overall validity and the first failing field
//! in submission order.

use std::collections::HashMap;

use itertools::Itertools;
use serde_derive::Serialize;

use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::models::registration::{validators, FieldId, RegistrationInput};

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Stop at the first failing field instead of sweeping the whole form.
    pub fail_fast: bool,
    /// Stop once this many errors have been collected.
    pub max_errors: Option<usize>,
}

impl Default for ValidationConfig {
    /// Defaults validate every field so multi-error reporting stays
    /// deterministic and complete.
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_errors: None,
        }
    }
}

/// Result of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: FieldId,
    pub error: Option<ValidationError>,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The user-facing message, empty when the field is valid.
    pub fn message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }
}

/// Aggregate outcome of a whole-form sweep.
///
/// Reports appear in submission order; with the default configuration the
/// outcome carries one report per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOutcome {
    pub reports: Vec<FieldReport>,
}

impl FormOutcome {
    /// Whether the form may be submitted.
    pub fn is_valid(&self) -> bool {
        self.reports.iter().all(FieldReport::is_valid)
    }

    /// First failing field in submission order — the focus target.
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.reports
            .iter()
            .find(|report| !report.is_valid())
            .map(|report| report.field)
    }

    /// All collected errors, in submission order.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.reports.iter().filter_map(|report| report.error.as_ref())
    }

    /// Messages joined with "; " for logs and summaries.
    pub fn error_summary(&self) -> String {
        self.errors().map(|e| e.message.as_str()).join("; ")
    }

    /// Collected errors grouped by failure class.
    pub fn errors_by_kind(&self) -> HashMap<ErrorKind, Vec<&ValidationError>> {
        self.errors().map(|e| (e.kind, e)).into_group_map()
    }
}

/// Stateless driver for single-field and whole-form validation.
#[derive(Debug, Clone, Default)]
pub struct FormEngine {
    config: ValidationConfig,
}

impl FormEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a single field of the input.
    pub fn validate_field(
        &self,
        input: &RegistrationInput,
        field: FieldId,
    ) -> ValidationResult<()> {
        validators::validate_field(input, field)
    }

    /// Validate the whole form in submission order.
    pub fn validate_form(&self, input: &RegistrationInput) -> FormOutcome {
        let mut reports = Vec::with_capacity(FieldId::ALL.len());
        let mut error_count = 0usize;

        for field in FieldId::ALL {
            let error = validators::validate_field(input, field).err();
            let failed = error.is_some();
            if let Some(err) = &error {
                log::debug!("{} rejected: {}", field, err.message);
                error_count += 1;
            }
            reports.push(FieldReport { field, error });

            if failed {
                if self.config.fail_fast {
                    break;
                }
                if let Some(max) = self.config.max_errors {
                    if error_count >= max {
                        break;
                    }
                }
            }
        }

        FormOutcome { reports }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            full_name: "Jane Doe".into(),
            father_name: "John Doe".into(),
            dob: "1990-01-01".into(),
            address: "123 Main Street".into(),
            phone: "4155552671".into(),
            country_code: "US".into(),
        }
    }

    #[test]
    fn valid_form_reports_every_field_in_order() {
        let outcome = FormEngine::new().validate_form(&valid_input());

        assert!(outcome.is_valid());
        assert_eq!(outcome.first_invalid(), None);
        assert_eq!(
            outcome.reports.iter().map(|r| r.field).collect::<Vec<_>>(),
            FieldId::ALL.to_vec()
        );
        assert_eq!(outcome.error_summary(), "");
    }

    #[test]
    fn invalid_phone_fails_the_aggregate() {
        let mut input = valid_input();
        input.phone = "123".into();

        let outcome = FormEngine::new().validate_form(&input);

        assert!(!outcome.is_valid());
        assert_eq!(outcome.first_invalid(), Some(FieldId::Phone));
        assert_eq!(outcome.reports.len(), FieldId::ALL.len());
        assert!(outcome.error_summary().starts_with("Use a valid format:"));
    }

    #[test]
    fn first_invalid_follows_submission_order() {
        let mut input = valid_input();
        input.dob = "not-a-date".into();
        input.phone = "123".into();

        let outcome = FormEngine::new().validate_form(&input);

        assert_eq!(outcome.first_invalid(), Some(FieldId::Dob));
        assert_eq!(outcome.errors().count(), 2);
    }

    #[test]
    fn fail_fast_stops_at_the_first_failure() {
        let mut input = valid_input();
        input.full_name = "J".into();
        input.phone = "123".into();

        let engine = FormEngine::with_config(ValidationConfig {
            fail_fast: true,
            max_errors: None,
        });
        let outcome = engine.validate_form(&input);

        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.first_invalid(), Some(FieldId::FullName));
    }

    #[test]
    fn max_errors_caps_the_sweep() {
        let mut input = valid_input();
        input.full_name = "J".into();
        input.father_name = "9".into();
        input.phone = "123".into();

        let engine = FormEngine::with_config(ValidationConfig {
            fail_fast: false,
            max_errors: Some(2),
        });
        let outcome = engine.validate_form(&input);

        assert_eq!(outcome.errors().count(), 2);
        assert_eq!(outcome.reports.len(), 2);
    }

    #[test]
    fn errors_group_by_kind() {
        let mut input = valid_input();
        input.full_name = "J".into(); // OutOfRange
        input.father_name = "J0hn".into(); // InvalidCharacters
        input.phone = "123".into(); // FormatMismatch

        let outcome = FormEngine::new().validate_form(&input);
        let grouped = outcome.errors_by_kind();

        assert_eq!(grouped[&ErrorKind::OutOfRange].len(), 1);
        assert_eq!(grouped[&ErrorKind::InvalidCharacters].len(), 1);
        assert_eq!(grouped[&ErrorKind::FormatMismatch].len(), 1);
    }
}
