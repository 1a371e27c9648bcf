//! Ordered rule sets and record validation

use document_core::DocumentKind;
use tracing::debug;

use crate::error::RuleError;
use crate::record::DocumentRecord;
use crate::result::ValidationResult;
use crate::rule::FieldRule;

/// An ordered list of field rules for one record shape.
///
/// Built once, usually at construction of the host type, and applied to
/// any number of records. Layering happens through [`RuleSet::merged`]:
/// a specialized record shape takes the base shape's rules and appends
/// its own, instead of walking a type hierarchy at validation time.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers a DNI check on a field.
    pub fn dni(self, field: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, DocumentKind::Dni))
    }

    /// Registers a NIE check on a field.
    pub fn nie(self, field: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, DocumentKind::Nie))
    }

    /// Registers a CIF check on a field.
    pub fn cif(self, field: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, DocumentKind::Cif))
    }

    /// Registers a NIF check (any document family) on a field.
    pub fn nif(self, field: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, DocumentKind::Nif))
    }

    /// Registers a person-NIF check (DNI or NIE) on a field.
    pub fn person_nif(self, field: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, DocumentKind::PersonNif))
    }

    /// The registered rules, in registration order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Returns a new set holding this set's rules followed by `other`'s.
    pub fn merged(&self, other: &RuleSet) -> RuleSet {
        let mut rules = self.rules.clone();
        rules.extend(other.rules.iter().cloned());
        RuleSet { rules }
    }

    /// Runs every applicable rule against `record`.
    ///
    /// A rule is skipped when its field is absent or blank, or when its
    /// activation condition resolves to false. Each failing rule attaches
    /// the generic invalid marker to its field name.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownCondition`] when a rule names an
    /// activation condition the record does not define.
    pub fn validate<R>(&self, record: &R) -> Result<ValidationResult, RuleError>
    where
        R: DocumentRecord + ?Sized,
    {
        let mut result = ValidationResult::ok();

        for rule in &self.rules {
            let value = match record.document_field(&rule.field) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    debug!(field = %rule.field, "field blank, skipping");
                    continue;
                }
            };

            if let Some(condition) = &rule.condition {
                if !condition.should_validate(record)? {
                    debug!(field = %rule.field, "condition off, skipping");
                    continue;
                }
            }

            if !rule.kind.validate(value) {
                debug!(field = %rule.field, kind = %rule.kind, "document failed validation");
                result.add_error(rule.field.as_str());
            }
        }

        Ok(result)
    }
}
