//! Lexical shapes of the three document families
//!
//! Each document type has one anchored pattern, compiled once on first use
//! and built from the letter tables in [`crate::tables`] so the pattern
//! and the checksum tables cannot drift apart. Matching is strict: the
//! whole input must conform, uppercase only, with at most the optional
//! hyphens the official formats allow. A string that merely *contains* a
//! document (say, two valid numbers joined by a space) does not match.
//!
//! This layer never fails loudly. Anything that does not fit a shape -
//! lowercase input, non-ASCII digits, embedded garbage, arbitrarily long
//! strings - simply does not match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tables::{
    CIF_CONTROL_LETTERS, CIF_ORGANIZATION_LETTERS, DNI_CONTROL_LETTERS, NIE_PREFIX_LETTERS,
};

fn letter_class(letters: &[char]) -> String {
    letters.iter().collect()
}

/// DNI: 8 digits, optional hyphen, control letter.
static DNI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^([0-9]{{8}})-?([{}])$",
        letter_class(&DNI_CONTROL_LETTERS)
    );
    Regex::new(&pattern).expect("DNI pattern is valid")
});

/// NIE: prefix letter, optional hyphen, 7 digits, control letter.
static NIE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^([{}])-?([0-9]{{7}})([{}])$",
        letter_class(&NIE_PREFIX_LETTERS),
        letter_class(&DNI_CONTROL_LETTERS)
    );
    Regex::new(&pattern).expect("NIE pattern is valid")
});

/// CIF: organization letter, optional hyphen, 7 digits, optional hyphen,
/// control digit or control letter.
static CIF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^([{}])-?([0-9]{{7}})-?([0-9{}])$",
        letter_class(&CIF_ORGANIZATION_LETTERS),
        letter_class(&CIF_CONTROL_LETTERS)
    );
    Regex::new(&pattern).expect("CIF pattern is valid")
});

/// A DNI split into its checksum inputs. Lives only for the duration of
/// one validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDni {
    /// The 8-digit numeric body.
    pub number: u32,
    /// The control letter as written.
    pub control: char,
}

/// A NIE split into its checksum inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNie {
    /// The X/Y/Z prefix letter.
    pub prefix: char,
    /// The 7-digit numeric body.
    pub body: u32,
    /// The control letter as written.
    pub control: char,
}

/// A CIF split into its checksum inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCif {
    /// The organization-type leading letter.
    pub leading: char,
    /// The 7-digit numeric body, digits preserved as written.
    pub body: String,
    /// The control character as written, digit or letter.
    pub control: char,
}

/// Reports whether `input` has the DNI shape. Format only, no checksum.
pub fn matches_dni(input: &str) -> bool {
    DNI_PATTERN.is_match(input)
}

/// Reports whether `input` has the NIE shape. Format only, no checksum.
pub fn matches_nie(input: &str) -> bool {
    NIE_PATTERN.is_match(input)
}

/// Reports whether `input` has the CIF shape. Format only, no checksum.
pub fn matches_cif(input: &str) -> bool {
    CIF_PATTERN.is_match(input)
}

/// Parses `input` as a DNI, or `None` when the shape does not match.
pub fn parse_dni(input: &str) -> Option<ParsedDni> {
    let captures = DNI_PATTERN.captures(input)?;
    Some(ParsedDni {
        number: captures.get(1)?.as_str().parse().ok()?,
        control: captures.get(2)?.as_str().chars().next()?,
    })
}

/// Parses `input` as a NIE, or `None` when the shape does not match.
pub fn parse_nie(input: &str) -> Option<ParsedNie> {
    let captures = NIE_PATTERN.captures(input)?;
    Some(ParsedNie {
        prefix: captures.get(1)?.as_str().chars().next()?,
        body: captures.get(2)?.as_str().parse().ok()?,
        control: captures.get(3)?.as_str().chars().next()?,
    })
}

/// Parses `input` as a CIF, or `None` when the shape does not match.
pub fn parse_cif(input: &str) -> Option<ParsedCif> {
    let captures = CIF_PATTERN.captures(input)?;
    Some(ParsedCif {
        leading: captures.get(1)?.as_str().chars().next()?,
        body: captures.get(2)?.as_str().to_string(),
        control: captures.get(3)?.as_str().chars().next()?,
    })
}
