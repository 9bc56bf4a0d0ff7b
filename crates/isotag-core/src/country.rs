//! # Country Code
//!
//! ISO 3166-1 alpha-2 country code, plus the reserved `t1` literal used
//! by geolocation feeds to mark traffic exiting an anonymization network
//! (e.g. a Tor exit node). The sentinel is deliberate configuration of
//! this kind only — it does not apply to [`LanguageCode`](crate::LanguageCode)
//! even though both kinds are otherwise two ASCII letters.

use crate::lower::{ascii_alpha, code_type};

/// Reserved code for traffic exiting an anonymization network.
const ANONYMIZING_EXIT: &str = "t1";

fn valid_country(raw: &str) -> bool {
    ascii_alpha(raw, 2) || raw.eq_ignore_ascii_case(ANONYMIZING_EXIT)
}

code_type! {
    /// ISO 3166-1 alpha-2 country code.
    ///
    /// Accepts exactly two ASCII letters in either case, or the reserved
    /// literal `t1`/`T1` for anonymization-network exit nodes. Stored in
    /// canonical lowercase form; the empty value is the unset sentinel.
    CountryCode {
        predicate: valid_country,
        message: "invalid country code",
        unset: allowed,
    }
}

impl CountryCode {
    /// Whether this is the reserved anonymization-network exit marker.
    pub fn is_anonymizing_exit(&self) -> bool {
        self.as_str() == ANONYMIZING_EXIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_code_folds_to_lowercase() {
        let code = CountryCode::new("Fo").unwrap();
        assert_eq!(code.as_str(), "fo");
    }

    #[test]
    fn already_lowercase_unchanged() {
        let code = CountryCode::new("fo").unwrap();
        assert_eq!(code.as_str(), "fo");
    }

    #[test]
    fn case_variants_are_equal() {
        assert_eq!(
            CountryCode::new("FO").unwrap(),
            CountryCode::new("fo").unwrap()
        );
    }

    #[test]
    fn empty_is_unset() {
        let code = CountryCode::new("").unwrap();
        assert!(code.is_unset());
        assert_eq!(code, CountryCode::default());
    }

    #[test]
    fn rejects_wrong_length_and_alphabet() {
        assert!(CountryCode::new("Foo").is_err());
        assert!(CountryCode::new("f").is_err());
        assert!(CountryCode::new("12").is_err());
        assert!(CountryCode::new("f1").is_err());
    }

    #[test]
    fn error_carries_offending_input() {
        let err = CountryCode::new("Foo").unwrap_err();
        assert_eq!(err.to_string(), "invalid country code: Foo");
        assert_eq!(err.input(), "Foo");
    }

    #[test]
    fn anonymizing_exit_sentinel_accepted() {
        for raw in ["t1", "T1"] {
            let code = CountryCode::new(raw).unwrap();
            assert_eq!(code.as_str(), "t1");
            assert!(code.is_anonymizing_exit());
        }
    }

    #[test]
    fn ordinary_code_is_not_exit_marker() {
        assert!(!CountryCode::new("de").unwrap().is_anonymizing_exit());
        assert!(!CountryCode::unset().is_anonymizing_exit());
    }

    #[test]
    fn display_and_fromstr_roundtrip() {
        let code: CountryCode = "Fo".parse().unwrap();
        assert_eq!(format!("{code}"), "fo");
        assert_eq!("fo".parse::<CountryCode>().unwrap(), code);
    }

    #[test]
    fn json_encodes_lowercase_string() {
        let code = CountryCode::new("Fo").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"fo\"");
    }

    #[test]
    fn json_unset_encodes_as_null() {
        assert_eq!(
            serde_json::to_string(&CountryCode::unset()).unwrap(),
            "null"
        );
    }

    #[test]
    fn json_null_decodes_to_unset() {
        let code: CountryCode = serde_json::from_str("null").unwrap();
        assert!(code.is_unset());
    }

    #[test]
    fn json_decode_validates() {
        let code: CountryCode = serde_json::from_str("\"fo\"").unwrap();
        assert_eq!(code.as_str(), "fo");
        assert!(serde_json::from_str::<CountryCode>("\"Foo\"").is_err());
        assert!(serde_json::from_str::<CountryCode>("42").is_err());
    }

    #[test]
    fn binary_matches_text() {
        let code = CountryCode::new("Fo").unwrap();
        assert_eq!(code.as_bytes(), b"fo");
        assert_eq!(CountryCode::from_bytes(b"Fo").unwrap(), code);
    }

    #[test]
    fn binary_rejects_invalid_utf8() {
        assert!(CountryCode::from_bytes(&[0xff, 0xfe]).is_err());
    }
}
