//! Presentation-Layer Contract
//!
//! The rule engine never touches a rendering surface. A UI layer implements
//! `FormPresenter` (read raw values, reflect per-field state, banner, focus,
//! phone placeholder) and the `FormController` wires the three validation
//! triggers to it: single-field change, country change, and submission.

use crate::engine::{FormEngine, FormOutcome};
use crate::error::ValidationError;
use crate::models::registration::{FieldId, RegistrationInput};
use crate::rules::country::{self, CountryCode};

/// Surface the external presentation layer must provide.
///
/// `apply_field_state` receives `None` for a valid field (success state, no
/// message) or the error to display; implementations clear any prior state
/// first.
pub trait FormPresenter {
    /// Current raw value of a field.
    fn field_value(&self, field: FieldId) -> String;
    /// Current country context for the phone field.
    fn country_code(&self) -> String;

    fn apply_field_state(&mut self, field: FieldId, error: Option<&ValidationError>);
    fn clear_field_states(&mut self);
    fn reset_inputs(&mut self);

    fn show_success_banner(&mut self);
    fn hide_success_banner(&mut self);

    fn focus_field(&mut self, field: FieldId);
    fn update_phone_placeholder(&mut self, example: &str);
}

/// Drives validation against a presenter in response to external events.
pub struct FormController<P: FormPresenter> {
    presenter: P,
    engine: FormEngine,
}

impl<P: FormPresenter> FormController<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_engine(presenter, FormEngine::new())
    }

    pub fn with_engine(presenter: P, engine: FormEngine) -> Self {
        Self { presenter, engine }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Snapshot of every raw value the presenter currently holds.
    fn snapshot(&self) -> RegistrationInput {
        RegistrationInput {
            full_name: self.presenter.field_value(FieldId::FullName),
            father_name: self.presenter.field_value(FieldId::FatherName),
            dob: self.presenter.field_value(FieldId::Dob),
            address: self.presenter.field_value(FieldId::Address),
            phone: self.presenter.field_value(FieldId::Phone),
            country_code: self.presenter.country_code(),
        }
    }

    /// Validate a single field and reflect its state.
    pub fn field_changed(&mut self, field: FieldId) {
        let input = self.snapshot();
        let result = self.engine.validate_field(&input, field);
        log::debug!("field {} changed, valid: {}", field, result.is_ok());
        self.presenter
            .apply_field_state(field, result.err().as_ref());
    }

    /// React to a country-context change: refresh the phone placeholder
    /// from the rule's embedded example when the selection is recognized,
    /// then re-validate the phone field either way.
    pub fn country_changed(&mut self) {
        let id = self.presenter.country_code();
        match CountryCode::parse(&id) {
            Some(code) => {
                let rule = country::rule_for_code(code);
                self.presenter.update_phone_placeholder(rule.example());
            }
            None => log::warn!("unrecognized country {:?}, phone validates under the US rule", id),
        }
        self.field_changed(FieldId::Phone);
    }

    /// Validate the whole form as the submission gate.
    ///
    /// Every field's state is reflected. On failure the banner stays hidden
    /// and focus moves to the first failing field in submission order; on
    /// success the inputs and field states are cleared and the banner is
    /// shown.
    pub fn submit(&mut self) -> FormOutcome {
        self.presenter.hide_success_banner();

        let input = self.snapshot();
        let outcome = self.engine.validate_form(&input);
        for report in &outcome.reports {
            self.presenter
                .apply_field_state(report.field, report.error.as_ref());
        }

        match outcome.first_invalid() {
            Some(field) => {
                log::debug!("submission rejected: {}", outcome.error_summary());
                self.presenter.focus_field(field);
            }
            None => {
                log::debug!("submission accepted");
                self.presenter.reset_inputs();
                self.presenter.clear_field_states();
                self.presenter.show_success_banner();
            }
        }

        outcome
    }
}
