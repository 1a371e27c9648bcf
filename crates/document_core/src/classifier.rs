//! Document classification and the public validation surface
//!
//! The five validators here are the whole public contract of the core:
//! each one is a pure function from a string to a boolean. A document is
//! valid for a type exactly when it matches that type's anchored shape
//! and its control character equals the checksum the type's algorithm
//! computes for the numeric body.
//!
//! `validate_nif` and `validate_person_nif` classify first: the three
//! lexical shapes are mutually exclusive (a DNI starts with a digit, a
//! NIE with X/Y/Z, a CIF with an organization letter outside X/Y/Z), so
//! classification amounts to trying the shapes in order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::checksum;
use crate::error::DocumentError;
use crate::pattern;
use crate::tables::CIF_CONTROL_LETTERS;

/// Validates a DNI: 8 digits plus the mod-23 control letter.
pub fn validate_dni(input: &str) -> bool {
    match pattern::parse_dni(input) {
        Some(document) => document.control == checksum::person_control_letter(document.number),
        None => false,
    }
}

/// Validates a NIE: X/Y/Z prefix, 7 digits, and the mod-23 control
/// letter computed over the prefix-extended number.
pub fn validate_nie(input: &str) -> bool {
    let Some(document) = pattern::parse_nie(input) else {
        return false;
    };
    let Some(leading) = checksum::nie_leading_digit(document.prefix) else {
        return false;
    };

    let number = leading * 10_000_000 + document.body;
    document.control == checksum::person_control_letter(number)
}

/// Validates a CIF: organization letter, 7 digits, and the weighted-sum
/// control character.
///
/// When the leading letter mandates a letter control (P, Q, S, W) or the
/// body's province digits are "00", the control must equal the letter
/// form exactly. Otherwise either the digit form or the letter form of
/// the computed control is accepted.
pub fn validate_cif(input: &str) -> bool {
    let Some(document) = pattern::parse_cif(input) else {
        return false;
    };
    let Some(expected) = checksum::organization_control(&document.body) else {
        return false;
    };

    let letter_form = CIF_CONTROL_LETTERS[expected as usize];
    if checksum::requires_letter_control(document.leading, &document.body) {
        document.control == letter_form
    } else {
        let digit_form = (b'0' + expected) as char;
        document.control == digit_form || document.control == letter_form
    }
}

/// Validates a NIF: any of DNI, NIE, or CIF.
///
/// Tries the DNI shape first, then NIE; anything else falls through to
/// the full CIF check.
pub fn validate_nif(input: &str) -> bool {
    if pattern::matches_dni(input) {
        validate_dni(input)
    } else if pattern::matches_nie(input) {
        validate_nie(input)
    } else {
        validate_cif(input)
    }
}

/// Validates a person NIF: DNI or NIE only. A valid CIF never passes.
pub fn validate_person_nif(input: &str) -> bool {
    if pattern::matches_dni(input) {
        validate_dni(input)
    } else {
        validate_nie(input)
    }
}

/// The closed set of validation kinds a host can register for a field.
///
/// Dispatching through this enumeration replaces open-ended runtime tag
/// lookup: every kind maps to exactly one pure validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// National identity document (persons).
    Dni,
    /// Foreign resident identity document (persons).
    Nie,
    /// Tax identifier for legal entities (organizations).
    Cif,
    /// Any tax identifier: DNI, NIE, or CIF.
    Nif,
    /// Person tax identifier: DNI or NIE, never CIF.
    PersonNif,
}

impl DocumentKind {
    /// Runs the validator for this kind on `input`.
    pub fn validate(&self, input: &str) -> bool {
        match self {
            DocumentKind::Dni => validate_dni(input),
            DocumentKind::Nie => validate_nie(input),
            DocumentKind::Cif => validate_cif(input),
            DocumentKind::Nif => validate_nif(input),
            DocumentKind::PersonNif => validate_person_nif(input),
        }
    }

    /// The canonical lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Dni => "dni",
            DocumentKind::Nie => "nie",
            DocumentKind::Cif => "cif",
            DocumentKind::Nif => "nif",
            DocumentKind::PersonNif => "person_nif",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dni" => Ok(DocumentKind::Dni),
            "nie" => Ok(DocumentKind::Nie),
            "cif" => Ok(DocumentKind::Cif),
            "nif" => Ok(DocumentKind::Nif),
            "person_nif" => Ok(DocumentKind::PersonNif),
            other => Err(DocumentError::UnknownKind(other.to_string())),
        }
    }
}
