//! Accumulated validation outcome

use serde::{Deserialize, Serialize};

/// The generic error marker attached to a failing field.
///
/// Validation is binary, so there is exactly one code: the host decides
/// how to present it.
pub const INVALID: &str = "invalid";

/// An error marker attached to a named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field that failed validation
    pub field: String,
    /// Error marker, always [`INVALID`]
    pub code: String,
}

/// Result of running a rule set against a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether every applicable rule passed
    pub is_valid: bool,
    /// Error markers for the fields that failed
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Attaches the generic invalid marker to a field
    pub fn add_error(&mut self, field: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            code: INVALID.to_string(),
        });
        self.is_valid = false;
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
    }

    /// The error markers attached to the named field
    pub fn errors_on<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.errors.iter().filter(move |error| error.field == field)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}
