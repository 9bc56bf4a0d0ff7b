//! # Language Code
//!
//! ISO 639-1 language code: exactly two ASCII letters. Unlike
//! [`CountryCode`](crate::CountryCode), there is no `t1` sentinel here —
//! an anonymization exit node is a place, not a language.

use crate::lower::{ascii_alpha, code_type};

fn valid_language(raw: &str) -> bool {
    ascii_alpha(raw, 2)
}

code_type! {
    /// ISO 639-1 language code.
    ///
    /// Accepts exactly two ASCII letters in either case. Stored in
    /// canonical lowercase form; the empty value is the unset sentinel.
    LanguageCode {
        predicate: valid_language,
        message: "invalid language",
        unset: allowed,
    }
}
