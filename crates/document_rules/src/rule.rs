//! Field rules and activation conditions

use std::fmt;
use std::sync::Arc;

use document_core::DocumentKind;

use crate::error::RuleError;
use crate::record::DocumentRecord;

/// Decides whether a field rule applies to a given record.
///
/// Two capabilities cover the host patterns: a self-contained closure,
/// and a named condition resolved against the record at validation time.
#[derive(Clone)]
pub enum ActivationCondition {
    /// Closure-backed predicate, evaluated without the record.
    Closure(Arc<dyn Fn() -> bool + Send + Sync>),
    /// Name of a boolean accessor the record exposes through
    /// [`DocumentRecord::named_condition`].
    Named(String),
}

impl ActivationCondition {
    /// Wraps a closure as an activation condition.
    pub fn closure(predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        ActivationCondition::Closure(Arc::new(predicate))
    }

    /// References a named condition on the record.
    pub fn named(name: impl Into<String>) -> Self {
        ActivationCondition::Named(name.into())
    }

    /// Evaluates the condition against `record`.
    ///
    /// A named condition the record does not define is an error, not a
    /// silent skip: the rule set was written against a record shape the
    /// record does not have.
    pub fn should_validate<R>(&self, record: &R) -> Result<bool, RuleError>
    where
        R: DocumentRecord + ?Sized,
    {
        match self {
            ActivationCondition::Closure(predicate) => Ok(predicate()),
            ActivationCondition::Named(name) => record
                .named_condition(name)
                .ok_or_else(|| RuleError::UnknownCondition(name.clone())),
        }
    }
}

impl fmt::Debug for ActivationCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationCondition::Closure(_) => f.write_str("Closure(..)"),
            ActivationCondition::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

/// A single registered validation: one field, one document kind, and an
/// optional activation condition.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Name of the record field holding the document string
    pub field: String,
    /// Which validator applies to the field
    pub kind: DocumentKind,
    /// Optional gate deciding whether the rule runs at all
    pub condition: Option<ActivationCondition>,
}

impl FieldRule {
    /// Creates an unconditional rule for a field.
    pub fn new(field: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            field: field.into(),
            kind,
            condition: None,
        }
    }

    /// Gates the rule behind a closure.
    pub fn when(mut self, predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.condition = Some(ActivationCondition::closure(predicate));
        self
    }

    /// Gates the rule behind a named condition on the record.
    pub fn when_named(mut self, name: impl Into<String>) -> Self {
        self.condition = Some(ActivationCondition::named(name));
        self
    }
}
