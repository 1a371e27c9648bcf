//! Letter tables for document checksums
//!
//! These tables are fixed by the official document numbering schemes and
//! never change at runtime. They are plain constants with no mutation
//! path, so they are safe to read from any number of threads.

/// Control letters for persons, indexed by `number % 23`.
///
/// Shared by DNI and NIE: the checksum remainder selects the expected
/// control letter.
pub const DNI_CONTROL_LETTERS: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

/// Permitted NIE prefix letters.
///
/// The position of the prefix in this table becomes the leading digit of
/// the checksum number (X maps to 0, Y to 1, Z to 2).
pub const NIE_PREFIX_LETTERS: [char; 3] = ['X', 'Y', 'Z'];

/// Permitted leading letters for CIF organization identifiers.
pub const CIF_ORGANIZATION_LETTERS: [char; 17] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'N', 'P', 'Q', 'R', 'S', 'U', 'V', 'W',
];

/// Organization letters whose control character must be a letter,
/// never a digit.
pub const CIF_LETTER_CONTROL_LETTERS: [char; 4] = ['P', 'Q', 'S', 'W'];

/// Letter form of the CIF control character, indexed by the computed
/// decimal control 0-9.
pub const CIF_CONTROL_LETTERS: [char; 10] = ['J', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
