//! Validation core for Spanish identification documents
//!
//! This crate validates the three families of Spanish tax identifiers by
//! format and checksum:
//!
//! - **DNI**: national identity number for Spanish citizens
//!   (8 digits + control letter, e.g. `29032146M`)
//! - **NIE**: identity number for foreign residents
//!   (X/Y/Z prefix + 7 digits + control letter, e.g. `Y5284410J`)
//! - **CIF**: tax identifier for legal entities
//!   (organization letter + 7 digits + control digit or letter,
//!   e.g. `A89464903`)
//!
//! Validation is pure, deterministic, and side-effect free: every check is
//! a function from a string to a boolean. Malformed input is an expected
//! case and yields `false`, never an error. Nothing here talks to any
//! registry - a valid checksum does not mean the document exists.
//!
//! # Examples
//!
//! ```rust
//! use document_core::{validate_dni, validate_nif, DocumentKind};
//!
//! assert!(validate_dni("29032146M"));
//! assert!(!validate_dni("29032146X")); // wrong control letter
//!
//! // NIF accepts any of the three families
//! assert!(validate_nif("R8693558B"));
//!
//! // Dispatch through the closed kind enumeration
//! let kind: DocumentKind = "person_nif".parse().unwrap();
//! assert!(kind.validate("Y5284410J"));
//! ```

pub mod checksum;
pub mod classifier;
pub mod error;
pub mod pattern;
pub mod tables;

pub use classifier::{
    validate_cif, validate_dni, validate_nie, validate_nif, validate_person_nif, DocumentKind,
};
pub use error::DocumentError;
