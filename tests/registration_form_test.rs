//! End-to-end validation flows through the public API: a presenter-backed
//! controller handling the submission gate, the country/phone cross-field
//! dependency, and the serde surface of the raw-input DTO.

use std::collections::HashMap;

use regform::{
    rule_for, FieldId, FormController, FormPresenter, RegistrationInput, ValidationError,
};

/// Minimal stand-in for a rendering surface: raw values in, state
/// transitions recorded for inspection.
#[derive(Default)]
struct PageStub {
    values: HashMap<FieldId, String>,
    country: String,
    messages: HashMap<FieldId, String>,
    success_fields: Vec<FieldId>,
    banner_visible: bool,
    focused: Option<FieldId>,
    placeholder: String,
}

impl PageStub {
    fn with_valid_form() -> Self {
        let mut page = Self {
            country: "US".into(),
            ..Self::default()
        };
        page.type_into(FieldId::FullName, "Jane Doe");
        page.type_into(FieldId::FatherName, "John Doe");
        page.type_into(FieldId::Dob, "1990-01-01");
        page.type_into(FieldId::Address, "123 Main Street");
        page.type_into(FieldId::Phone, "4155552671");
        page
    }

    fn type_into(&mut self, field: FieldId, value: &str) {
        self.values.insert(field, value.to_string());
    }
}

impl FormPresenter for PageStub {
    fn field_value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn country_code(&self) -> String {
        self.country.clone()
    }

    fn apply_field_state(&mut self, field: FieldId, error: Option<&ValidationError>) {
        // prior state is cleared before the new one is applied
        self.messages.remove(&field);
        self.success_fields.retain(|f| *f != field);
        match error {
            Some(err) => {
                self.messages.insert(field, err.message.clone());
            }
            None => self.success_fields.push(field),
        }
    }

    fn clear_field_states(&mut self) {
        self.messages.clear();
        self.success_fields.clear();
    }

    fn reset_inputs(&mut self) {
        self.values.clear();
    }

    fn show_success_banner(&mut self) {
        self.banner_visible = true;
    }

    fn hide_success_banner(&mut self) {
        self.banner_visible = false;
    }

    fn focus_field(&mut self, field: FieldId) {
        self.focused = Some(field);
    }

    fn update_phone_placeholder(&mut self, example: &str) {
        self.placeholder = example.to_string();
    }
}

#[test]
fn submitting_a_fully_valid_form_clears_and_celebrates() {
    let mut controller = FormController::new(PageStub::with_valid_form());

    let outcome = controller.submit();

    assert!(outcome.is_valid());
    let page = controller.into_presenter();
    assert!(page.banner_visible);
    assert!(page.values.is_empty(), "inputs are cleared on success");
    assert!(page.messages.is_empty());
    assert!(page.success_fields.is_empty(), "visual states are cleared too");
    assert_eq!(page.focused, None);
}

#[test]
fn submitting_with_a_bad_phone_focuses_it_and_keeps_the_banner_hidden() {
    let mut page = PageStub::with_valid_form();
    page.type_into(FieldId::Phone, "123");
    let mut controller = FormController::new(page);

    let outcome = controller.submit();

    assert!(!outcome.is_valid());
    assert_eq!(outcome.first_invalid(), Some(FieldId::Phone));

    let page = controller.into_presenter();
    assert!(!page.banner_visible);
    assert_eq!(page.focused, Some(FieldId::Phone));
    assert!(!page.values.is_empty(), "inputs survive a failed submit");
    let message = &page.messages[&FieldId::Phone];
    assert_eq!(
        message,
        "Use a valid format: 10 digits, cannot start with 0 or 1 (e.g. 4155552671)"
    );
    // the four valid fields still got their success state
    assert_eq!(page.success_fields.len(), 4);
}

#[test]
fn focus_lands_on_the_first_failing_field_in_submission_order() {
    let mut page = PageStub::with_valid_form();
    page.type_into(FieldId::FatherName, "J4ck");
    page.type_into(FieldId::Address, "short");
    let mut controller = FormController::new(page);

    let outcome = controller.submit();

    assert_eq!(outcome.first_invalid(), Some(FieldId::FatherName));
    assert_eq!(
        controller.presenter().focused,
        Some(FieldId::FatherName)
    );
}

#[test]
fn switching_country_retargets_the_phone_rule() {
    let mut page = PageStub::with_valid_form();
    page.type_into(FieldId::Phone, "412 345 678"); // AU mobile, spaced
    page.country = "AU".into();
    let mut controller = FormController::new(page);

    controller.country_changed();
    assert_eq!(controller.presenter().placeholder, "e.g. 412345678");
    assert!(controller.presenter().messages.is_empty());

    // same digits are rejected once the context flips to the UK
    controller.presenter_mut().country = "UK".into();
    controller.country_changed();
    let page = controller.presenter();
    assert_eq!(page.placeholder, "e.g. 7123456789");
    assert!(page.messages[&FieldId::Phone].starts_with("Use a valid format:"));
}

#[test]
fn unknown_country_falls_back_to_the_us_rule() {
    let rule = rule_for("XX");
    assert_eq!(rule.calling_code, "+1");
    assert!(rule.matches("4155552671"));
}

#[test]
fn camel_case_payload_deserializes_and_validates() {
    let payload = r#"{
        "fullName": "Jane Doe",
        "fatherName": "John Doe",
        "dob": "1990-01-01",
        "address": "123 Main Street",
        "phone": "(415) 555-2671",
        "countryCode": "US"
    }"#;

    let input: RegistrationInput = serde_json::from_str(payload).unwrap();
    assert_eq!(input.full_name, "Jane Doe");
    assert_eq!(input.country_code, "US");

    let outcome = regform::FormEngine::new().validate_form(&input);
    assert!(outcome.is_valid(), "{}", outcome.error_summary());
}

#[test]
fn partial_payload_reports_missing_fields_without_panicking() {
    let input: RegistrationInput = serde_json::from_str(r#"{"fullName": "Jane Doe"}"#).unwrap();

    let outcome = regform::FormEngine::new().validate_form(&input);

    assert!(!outcome.is_valid());
    assert_eq!(outcome.first_invalid(), Some(FieldId::FatherName));
    // dob and phone report as required, not as parse failures
    assert_eq!(outcome.reports[2].message(), "Date of birth is required.");
    assert_eq!(outcome.reports[4].message(), "Phone number is required.");
}
