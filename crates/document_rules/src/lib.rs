//! Field rule registration for Spanish document validation
//!
//! This crate is the host-integration layer over [`document_core`]: a
//! record type declares which of its named fields hold which kind of
//! document, and a [`RuleSet`] runs those declarations against a record,
//! attaching a generic "invalid" marker to each failing field.
//!
//! Rule sets are explicit values. A type that wants to layer another
//! type's rules on top of its own merges the two sets at construction
//! time - there is no implicit inheritance chain to walk.
//!
//! # Examples
//!
//! ```rust
//! use document_rules::{DocumentRecord, RuleSet};
//!
//! struct Customer {
//!     tax_id: Option<String>,
//! }
//!
//! impl DocumentRecord for Customer {
//!     fn document_field(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "tax_id" => self.tax_id.as_deref(),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let rules = RuleSet::new().nif("tax_id");
//!
//! let customer = Customer { tax_id: Some("29032146M".to_string()) };
//! let result = rules.validate(&customer).unwrap();
//! assert!(result.is_valid);
//!
//! let customer = Customer { tax_id: Some("29032146X".to_string()) };
//! let result = rules.validate(&customer).unwrap();
//! assert_eq!(result.errors_on("tax_id").count(), 1);
//! ```

pub mod error;
pub mod record;
pub mod result;
pub mod rule;
pub mod ruleset;

pub use document_core::DocumentKind;
pub use error::RuleError;
pub use record::DocumentRecord;
pub use result::{FieldError, ValidationResult, INVALID};
pub use rule::{ActivationCondition, FieldRule};
pub use ruleset::RuleSet;
