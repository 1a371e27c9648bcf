//! Rule evaluation errors

use thiserror::Error;

/// Errors that can occur while evaluating a rule set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A rule names an activation condition the record does not define
    #[error("Unknown activation condition: {0}")]
    UnknownCondition(String),
}
