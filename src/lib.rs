//! Registration-form validation core.
//!
//! Pure, synchronous field validation for a personal-data registration form
//! (name, parentage, date of birth, address, phone) with country-specific
//! phone-number rules. The crate owns the rule engine only: the mapping from
//! field identity to validation function, the country phone-rule table, and
//! the whole-form submission gate. Rendering stays behind the
//! [`presenter::FormPresenter`] trait so the engine is unit-testable without
//! any UI surface.

pub mod engine;
pub mod error;
pub mod models;
pub mod presenter;
pub mod rules;

pub use engine::{FieldReport, FormEngine, FormOutcome, ValidationConfig};
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use models::registration::{validators, FieldId, RegistrationInput};
pub use presenter::{FormController, FormPresenter};
pub use rules::country::{rule_for, rule_for_code, CountryCode, CountryPhoneRule};
