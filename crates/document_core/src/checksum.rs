//! Checksum algorithms for the document families
//!
//! Two algorithms cover all three document types:
//!
//! - **Persons** (DNI and NIE): the numeric body modulo 23 indexes the
//!   control-letter table. A NIE first turns its prefix letter into a
//!   leading digit (X=0, Y=1, Z=2), making the 7-digit body an
//!   8-digit-equivalent number.
//! - **Organizations** (CIF): a weighted digit sum over the 7-digit body.
//!   Digits at even positions (0-indexed, left to right) are doubled and
//!   digit-summed, digits at odd positions count as themselves. The last
//!   digit of the total determines the expected control value.

use crate::tables::{CIF_LETTER_CONTROL_LETTERS, DNI_CONTROL_LETTERS, NIE_PREFIX_LETTERS};

/// Expected control letter for a person document number.
pub fn person_control_letter(number: u32) -> char {
    DNI_CONTROL_LETTERS[(number % 23) as usize]
}

/// Leading digit for a NIE prefix letter, or `None` when the letter is
/// not a permitted prefix.
pub fn nie_leading_digit(prefix: char) -> Option<u32> {
    NIE_PREFIX_LETTERS
        .iter()
        .position(|&letter| letter == prefix)
        .map(|index| index as u32)
}

/// Expected numeric control (0-9) for a 7-digit CIF body, or `None` when
/// the body contains a non-digit.
///
/// Even positions contribute the digit sum of twice the digit (7 becomes
/// 14 becomes 1+4=5), odd positions contribute the digit unchanged. With
/// `decimal` the last digit of the total, the control is 0 when `decimal`
/// is 0 and `10 - decimal` otherwise.
pub fn organization_control(body: &str) -> Option<u8> {
    let mut total = 0u32;
    for (index, ch) in body.chars().enumerate() {
        let digit = ch.to_digit(10)?;
        total += if index % 2 == 0 {
            let doubled = digit * 2;
            doubled / 10 + doubled % 10
        } else {
            digit
        };
    }

    let decimal = total % 10;
    let control = if decimal == 0 { 0 } else { 10 - decimal };
    Some(control as u8)
}

/// Reports whether a CIF's control character is required to be a letter:
/// either the leading letter mandates it, or the body's first two digits
/// are "00".
pub fn requires_letter_control(leading: char, body: &str) -> bool {
    CIF_LETTER_CONTROL_LETTERS.contains(&leading) || body.starts_with("00")
}
