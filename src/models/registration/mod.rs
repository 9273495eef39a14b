//! Registration form model
//!
//! The closed set of validated fields and the raw-input DTO the engine
//! consumes. Field keys serialize to the form's wire names (camelCase ids).

pub mod validators;

use derive_more::Display;
use serde_derive::{Deserialize, Serialize};

/// Identifier of a validated form field.
///
/// The variant order is the fixed submission order, so multi-error
/// reporting and first-error focus are deterministic. The `Display`
/// label is the phrasing used in user-facing messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    #[display(fmt = "Full name")]
    FullName,
    #[display(fmt = "Father's name")]
    FatherName,
    #[display(fmt = "Date of birth")]
    Dob,
    #[display(fmt = "Address")]
    Address,
    #[display(fmt = "Phone number")]
    Phone,
}

impl FieldId {
    /// Every field, in submission order.
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::FatherName,
        FieldId::Dob,
        FieldId::Address,
        FieldId::Phone,
    ];
}

/// Raw form input as read from the presentation layer.
///
/// Values are untrimmed user text; `country_code` is the phone-rule
/// context and is not itself a validated field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationInput {
    pub full_name: String,
    pub father_name: String,
    pub dob: String,
    pub address: String,
    pub phone: String,
    pub country_code: String,
}

impl RegistrationInput {
    /// Raw value of a single field.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::FatherName => &self.father_name,
            FieldId::Dob => &self.dob,
            FieldId::Address => &self.address,
            FieldId::Phone => &self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_is_fixed() {
        assert_eq!(
            FieldId::ALL,
            [
                FieldId::FullName,
                FieldId::FatherName,
                FieldId::Dob,
                FieldId::Address,
                FieldId::Phone,
            ]
        );
    }

    #[test]
    fn labels_match_user_messages() {
        assert_eq!(FieldId::FullName.to_string(), "Full name");
        assert_eq!(FieldId::FatherName.to_string(), "Father's name");
        assert_eq!(FieldId::Phone.to_string(), "Phone number");
    }
}
