//! # Error Types
//!
//! Errors returned by the code-type constructors and codecs. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations
//! and are returned synchronously to the immediate caller — nothing is
//! logged or swallowed inside this crate.

use thiserror::Error;

/// A raw input failed its kind's format predicate.
///
/// Carries the kind-specific message fragment and the offending input,
/// with the original casing preserved for diagnostics. Construction either
/// produces a fully canonicalized value or fails as a whole; there is no
/// partially validated state to clean up, and the failure is never retried
/// internally — it signals caller-supplied bad data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}: {input}")]
pub struct ValidationError {
    message: &'static str,
    input: String,
}

impl ValidationError {
    pub(crate) fn new(message: &'static str, input: String) -> Self {
        Self { message, input }
    }

    /// The kind-specific message fragment, e.g. `invalid currency`.
    pub fn message(&self) -> &str {
        self.message
    }

    /// The input that failed validation, exactly as supplied.
    pub fn input(&self) -> &str {
        &self.input
    }
}
