//! # Currency Code
//!
//! ISO 4217 alphabetic currency code: exactly three ASCII letters.

use crate::lower::{ascii_alpha, code_type};

fn valid_currency(raw: &str) -> bool {
    ascii_alpha(raw, 3)
}

code_type! {
    /// ISO 4217 alphabetic currency code.
    ///
    /// Accepts exactly three ASCII letters in either case. Stored in
    /// canonical lowercase form; the empty value is the unset sentinel.
    CurrencyCode {
        predicate: valid_currency,
        message: "invalid currency",
        unset: allowed,
    }
}
