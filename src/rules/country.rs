//! Country Phone Rule Table
//!
//! Static mapping from country identifier to the national mobile-number
//! format rule: calling code, digits-only matching pattern, and the hint
//! text shown to the user. Built once behind a `Lazy` static; lookups for
//! identifiers outside the closed set fall back to the US rule rather than
//! failing.

use std::collections::HashMap;

use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

/// Closed set of countries with a phone rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    #[display(fmt = "US")]
    Us,
    #[display(fmt = "UK")]
    Uk,
    #[display(fmt = "CA")]
    Ca,
    #[display(fmt = "AU")]
    Au,
    #[display(fmt = "IN")]
    In,
    #[display(fmt = "PK")]
    Pk,
}

impl CountryCode {
    pub const ALL: [CountryCode; 6] = [
        CountryCode::Us,
        CountryCode::Uk,
        CountryCode::Ca,
        CountryCode::Au,
        CountryCode::In,
        CountryCode::Pk,
    ];

    /// Parse a country identifier. Matching is case-sensitive; anything
    /// outside the closed set is `None` and takes the US fallback at
    /// lookup time.
    pub fn parse(id: &str) -> Option<CountryCode> {
        match id {
            "US" => Some(CountryCode::Us),
            "UK" => Some(CountryCode::Uk),
            "CA" => Some(CountryCode::Ca),
            "AU" => Some(CountryCode::Au),
            "IN" => Some(CountryCode::In),
            "PK" => Some(CountryCode::Pk),
            _ => None,
        }
    }
}

/// Phone-number format rule for one country.
#[derive(Debug)]
pub struct CountryPhoneRule {
    /// International calling code, e.g. `+44`.
    pub calling_code: &'static str,
    /// Anchored pattern over the normalized (digits-only) national number.
    pub pattern: Regex,
    /// Human-readable description with an embedded example.
    pub hint: &'static str,
}

/// Extracts the parenthesized sample out of a hint text.
static EXAMPLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

impl CountryPhoneRule {
    fn new(calling_code: &'static str, pattern: &str, hint: &'static str) -> Self {
        Self {
            calling_code,
            pattern: Regex::new(pattern).unwrap(),
            hint,
        }
    }

    /// Whether a digits-only string is a well-formed national number.
    pub fn matches(&self, digits: &str) -> bool {
        self.pattern.is_match(digits)
    }

    /// The sample embedded in the hint, used as placeholder text.
    /// Falls back to the full hint when no sample is embedded.
    pub fn example(&self) -> &'static str {
        EXAMPLE_REGEX
            .captures(self.hint)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(self.hint)
    }
}

static RULES: Lazy<HashMap<CountryCode, CountryPhoneRule>> = Lazy::new(|| {
    HashMap::from([
        (
            CountryCode::Us,
            CountryPhoneRule::new(
                "+1",
                r"^[2-9]\d{9}$",
                "10 digits, cannot start with 0 or 1 (e.g. 4155552671)",
            ),
        ),
        (
            CountryCode::Uk,
            CountryPhoneRule::new(
                "+44",
                r"^7\d{9}$",
                "10 digits for mobiles without leading zero (e.g. 7123456789)",
            ),
        ),
        (
            CountryCode::Ca,
            CountryPhoneRule::new(
                "+1",
                r"^[2-9]\d{9}$",
                "10 digits, cannot start with 0 or 1 (e.g. 4385551234)",
            ),
        ),
        (
            CountryCode::Au,
            CountryPhoneRule::new(
                "+61",
                r"^4\d{8}$",
                "9 digits for mobiles without leading zero (e.g. 412345678)",
            ),
        ),
        (
            CountryCode::In,
            CountryPhoneRule::new(
                "+91",
                r"^[6-9]\d{9}$",
                "10 digits, start with 6-9 (e.g. 9876543210)",
            ),
        ),
        (
            CountryCode::Pk,
            CountryPhoneRule::new(
                "+92",
                r"^3\d{9}$",
                "10 digits for mobiles without leading zero (e.g. 3311234567)",
            ),
        ),
    ])
});

/// Rule for a member of the closed set.
pub fn rule_for_code(code: CountryCode) -> &'static CountryPhoneRule {
    &RULES[&code]
}

/// Rule for an arbitrary country identifier, defaulting to the US rule
/// when the identifier is unrecognized. Never fails.
pub fn rule_for(id: &str) -> &'static CountryPhoneRule {
    rule_for_code(CountryCode::parse(id).unwrap_or(CountryCode::Us))
}
