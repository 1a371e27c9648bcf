//! Fixture suite for the document validators
//!
//! The concrete documents here come from real reference fixtures; every
//! case exercises the public boolean surface only.

use document_core::{
    validate_cif, validate_dni, validate_nie, validate_nif, validate_person_nif, DocumentKind,
};

const VALID_DNI: &str = "29032146M";
const VALID_NIE: &str = "Y5284410J";
const VALID_CIF: &str = "R8693558B";
const VALID_CIF_NUMBER: &str = "A89464903";

mod dni_tests {
    use super::*;

    #[test]
    fn valid_dni_passes() {
        assert!(validate_dni(VALID_DNI));
    }

    #[test]
    fn hyphenated_dni_passes() {
        assert!(validate_dni("29032146-M"));
    }

    #[test]
    fn wrong_control_letter_fails() {
        assert!(!validate_dni("29032146X"));
    }

    #[test]
    fn trailing_characters_fail() {
        assert!(!validate_dni("29032146MX"));
    }

    #[test]
    fn two_documents_in_one_string_fail() {
        assert!(!validate_dni(&format!("{VALID_DNI} {VALID_DNI}")));
    }

    #[test]
    fn valid_nie_is_not_a_dni() {
        assert!(!validate_dni(VALID_NIE));
    }
}

mod nie_tests {
    use super::*;

    #[test]
    fn valid_nie_passes() {
        assert!(validate_nie(VALID_NIE));
    }

    #[test]
    fn hyphenated_nie_passes() {
        assert!(validate_nie("Y-5284410J"));
    }

    #[test]
    fn wrong_control_letter_fails() {
        assert!(!validate_nie("X0709831Q"));
    }

    #[test]
    fn two_documents_in_one_string_fail() {
        assert!(!validate_nie(&format!("{VALID_NIE} {VALID_NIE}")));
    }

    #[test]
    fn all_three_prefixes_validate() {
        // same 7-digit body, control recomputed per prefix offset
        assert!(validate_nie("X5284410E"));
        assert!(validate_nie("Y5284410J"));
        assert!(validate_nie("Z5284410G"));
    }

    #[test]
    fn valid_dni_is_not_a_nie() {
        assert!(!validate_nie(VALID_DNI));
    }
}

mod cif_tests {
    use super::*;

    #[test]
    fn letter_control_form_passes() {
        assert!(validate_cif(VALID_CIF));
    }

    #[test]
    fn digit_control_form_passes() {
        assert!(validate_cif(VALID_CIF_NUMBER));
    }

    #[test]
    fn hyphenated_forms_pass() {
        assert!(validate_cif("R-8693558B"));
        assert!(validate_cif("R8693558-B"));
        assert!(validate_cif("A-8946490-3"));
    }

    #[test]
    fn correct_control_under_invalid_leading_letter_fails() {
        // X is a NIE prefix, not an organization letter
        assert!(!validate_cif("X52168135"));
    }

    #[test]
    fn wrong_control_character_fails() {
        assert!(!validate_cif("E93339490"));
    }

    #[test]
    fn two_documents_in_one_string_fail() {
        assert!(!validate_cif(&format!("{VALID_CIF} {VALID_CIF}")));
    }

    #[test]
    fn letter_mandating_leading_letter_rejects_digit_control() {
        // body 8693558 computes control 2 / letter B
        assert!(validate_cif("P8693558B"));
        assert!(!validate_cif("P86935582"));
        assert!(validate_cif("Q8693558B"));
        assert!(validate_cif("S8693558B"));
        assert!(validate_cif("W8693558B"));
    }
}

mod nif_tests {
    use super::*;

    #[test]
    fn accepts_every_document_family() {
        assert!(validate_nif(VALID_DNI));
        assert!(validate_nif(VALID_NIE));
        assert!(validate_nif(VALID_CIF));
        assert!(validate_nif(VALID_CIF_NUMBER));
    }

    #[test]
    fn rejects_invalid_members_of_every_family() {
        assert!(!validate_nif("29032146X"));
        assert!(!validate_nif("X0709831Q"));
        assert!(!validate_nif("E93339490"));
        assert!(!validate_nif(&format!("{VALID_DNI}X")));
    }

    #[test]
    fn agrees_with_the_union_of_single_type_checks() {
        for candidate in [
            VALID_DNI,
            VALID_NIE,
            VALID_CIF,
            VALID_CIF_NUMBER,
            "29032146X",
            "X52168135",
            "",
            "garbage",
        ] {
            let union =
                validate_dni(candidate) || validate_nie(candidate) || validate_cif(candidate);
            assert_eq!(validate_nif(candidate), union, "input: {candidate:?}");
        }
    }
}

mod person_nif_tests {
    use super::*;

    #[test]
    fn accepts_dni_and_nie() {
        assert!(validate_person_nif(VALID_DNI));
        assert!(validate_person_nif(VALID_NIE));
    }

    #[test]
    fn rejects_valid_cif() {
        assert!(!validate_person_nif(VALID_CIF));
        assert!(!validate_person_nif(VALID_CIF_NUMBER));
    }

    #[test]
    fn rejects_invalid_person_documents() {
        assert!(!validate_person_nif(&format!("{VALID_DNI}X")));
        assert!(!validate_person_nif("X0709831Q"));
    }
}

mod adversarial_tests {
    use super::*;

    const ALL_KINDS: [DocumentKind; 5] = [
        DocumentKind::Dni,
        DocumentKind::Nie,
        DocumentKind::Cif,
        DocumentKind::Nif,
        DocumentKind::PersonNif,
    ];

    #[test]
    fn empty_string_fails_every_kind() {
        for kind in ALL_KINDS {
            assert!(!kind.validate(""));
        }
    }

    #[test]
    fn very_long_input_fails_without_panicking() {
        let long = "29032146M".repeat(50_000);
        for kind in ALL_KINDS {
            assert!(!kind.validate(&long));
        }
    }

    #[test]
    fn non_ascii_input_fails_without_panicking() {
        for input in ["２９０３２１４６M", "ñ9032146M", "29032146Ḿ", "🦀"] {
            for kind in ALL_KINDS {
                assert!(!kind.validate(input), "input: {input:?}");
            }
        }
    }

    #[test]
    fn surrounding_whitespace_is_not_trimmed() {
        for input in [" 29032146M", "29032146M ", "\t29032146M", "29032146M\n"] {
            assert!(!validate_dni(input), "input: {input:?}");
        }
    }
}
