//! # isotag-core — Validated Canonical Code Types
//!
//! Small value types for codes that travel across text, JSON, binary,
//! and SQL boundaries: [`CountryCode`] (ISO 3166-1 alpha-2),
//! [`CurrencyCode`] (ISO 4217), and [`LanguageCode`] (ISO 639-1).
//!
//! ## Key Design Principles
//!
//! 1. **One primitive, many kinds.** [`LowerString`] owns case folding
//!    and the absent-value representation. Each kind wraps exactly one
//!    `LowerString` and adds only configuration: a format predicate, an
//!    error message, and an empty-value policy. Kinds are distinct types
//!    — a `CountryCode` is never accepted where a `LanguageCode` is
//!    expected, even though both are two letters.
//!
//! 2. **Every entry point validates.** Constructor, `FromStr`, serde
//!    deserialization, byte decoding, and SQL column decoding all funnel
//!    through the same validating constructor. There is no non-validating
//!    path, so a constructed value always satisfies its kind's predicate
//!    and is always lowercase. Encoding is therefore infallible.
//!
//! 3. **The absent value is explicit configuration.** Kinds declared
//!    `unset: allowed` treat the empty string as a valid "unset"
//!    sentinel: it encodes as JSON `null` and SQL `NULL`, and both
//!    decode back to it without error. The `unset: required` policy
//!    rejects emptiness everywhere instead.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Errors are returned, never logged; this crate has no I/O of its own.

#![forbid(unsafe_code)]

pub mod country;
pub mod currency;
pub mod error;
pub mod language;
pub mod lower;
#[cfg(feature = "rusqlite")]
pub mod sql;

// Re-export primary types for ergonomic imports.
pub use country::CountryCode;
pub use currency::CurrencyCode;
pub use error::ValidationError;
pub use language::LanguageCode;
pub use lower::LowerString;
#[cfg(feature = "rusqlite")]
pub use sql::UnexpectedSqlType;
