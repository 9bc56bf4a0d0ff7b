//! # Canonical Lowercase Primitive
//!
//! [`LowerString`] is the one canonicalized-string primitive every code
//! kind in this crate composes. It owns the case-folding rule and the
//! absent-value representation (the empty string); the concrete kinds
//! add a format predicate on top via the [`code_type!`] macro and
//! delegate storage and codecs to the primitive.
//!
//! ## Invariants
//!
//! - The wrapped string is lowercase from the moment of construction.
//!   No code path can produce or retain mixed-case content.
//! - The empty string represents the absent/unset value.
//!
//! `LowerString` itself applies no format predicate — it canonicalizes
//! anything. Validation is the kinds' job, and every kind entry point
//! (constructor, text, JSON, binary, SQL) funnels through the kind's
//! validating constructor before the value reaches the primitive.

use serde::{Deserialize, Serialize};

/// A string that is lowercase by construction.
///
/// The empty value is the unset sentinel. JSON encodes the empty value
/// as `""` and decodes `null` to it; the SQL boundary maps it to `NULL`
/// (see the `sql` module).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LowerString(String);

impl LowerString {
    /// Fold `raw` to lowercase and wrap it. Infallible: the primitive
    /// imposes no format restrictions.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    /// The canonical lowercase text. Empty when unset.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical text as raw bytes. The binary representation is
    /// defined to be identical to the text representation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Whether this is the absent/unset value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for LowerString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LowerString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for LowerString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LowerString {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for LowerString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for LowerString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // The primitive keeps the `""` convention for the empty value;
        // the kinds encode it as `null` instead.
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LowerString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // `null` decodes to the unset value without error.
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(raw) => Ok(Self::new(raw)),
        }
    }
}

/// Whether `raw` is exactly `len` ASCII letters.
pub(crate) fn ascii_alpha(raw: &str, len: usize) -> bool {
    raw.len() == len && raw.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Defines a validated code kind on top of [`LowerString`].
///
/// A kind is pure configuration: a format predicate, the message used
/// when the predicate rejects, and the policy for the empty value
/// (`unset: allowed` treats `""` as a valid absent sentinel; `unset:
/// required` rejects it). Everything else — the validating constructor
/// and the text, JSON, binary, and SQL codecs — is stamped out here so
/// that every entry point funnels through the same validate-then-fold
/// path and no format can bypass the invariant.
macro_rules! code_type {
    (
        $(#[$meta:meta])*
        $name:ident {
            predicate: $predicate:expr,
            message: $message:expr,
            unset: allowed $(,)?
        }
    ) => {
        code_type! {
            @base
            $(#[$meta])*
            $name { predicate: $predicate, message: $message }
        }

        impl $name {
            /// Validate `raw` and store it in canonical lowercase form.
            ///
            /// The empty string is the unset sentinel for this kind and
            /// bypasses the predicate.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError`](crate::error::ValidationError)
            /// carrying the offending input if the predicate rejects it.
            pub fn new(raw: impl Into<String>) -> Result<Self, $crate::error::ValidationError> {
                let raw = raw.into();
                if raw.is_empty() {
                    return Ok(Self::unset());
                }
                Self::validated(raw)
            }

            /// The absent/unset value.
            pub fn unset() -> Self {
                Self($crate::lower::LowerString::default())
            }

            /// Whether this is the absent/unset value.
            pub fn is_unset(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::unset()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                if self.0.is_empty() {
                    serializer.serialize_none()
                } else {
                    serializer.serialize_str(self.as_str())
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                match <Option<String> as ::serde::Deserialize>::deserialize(deserializer)? {
                    None => Ok(Self::unset()),
                    Some(raw) => Self::new(raw).map_err(::serde::de::Error::custom),
                }
            }
        }

        #[cfg(feature = "rusqlite")]
        impl ::rusqlite::types::ToSql for $name {
            fn to_sql(&self) -> ::rusqlite::Result<::rusqlite::types::ToSqlOutput<'_>> {
                Ok($crate::sql::to_sql_output(&self.0))
            }
        }

        #[cfg(feature = "rusqlite")]
        impl ::rusqlite::types::FromSql for $name {
            fn column_result(
                value: ::rusqlite::types::ValueRef<'_>,
            ) -> ::rusqlite::types::FromSqlResult<Self> {
                match $crate::sql::text_or_null(value, stringify!($name))? {
                    None => Ok(Self::unset()),
                    Some(text) => Self::new(text).map_err($crate::sql::invalid),
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident {
            predicate: $predicate:expr,
            message: $message:expr,
            unset: required $(,)?
        }
    ) => {
        code_type! {
            @base
            $(#[$meta])*
            $name { predicate: $predicate, message: $message }
        }

        impl $name {
            /// Validate `raw` and store it in canonical lowercase form.
            ///
            /// This kind has no unset sentinel: the empty string is
            /// rejected like any other invalid input.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError`](crate::error::ValidationError)
            /// carrying the offending input if the predicate rejects it.
            pub fn new(raw: impl Into<String>) -> Result<Self, $crate::error::ValidationError> {
                let raw = raw.into();
                if raw.is_empty() {
                    return Err($crate::error::ValidationError::new($message, raw));
                }
                Self::validated(raw)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                // No unset sentinel: `null` is rejected by the string
                // deserializer rather than mapped to a zero value.
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(::serde::de::Error::custom)
            }
        }

        #[cfg(feature = "rusqlite")]
        impl ::rusqlite::types::ToSql for $name {
            fn to_sql(&self) -> ::rusqlite::Result<::rusqlite::types::ToSqlOutput<'_>> {
                Ok($crate::sql::to_sql_output(&self.0))
            }
        }

        #[cfg(feature = "rusqlite")]
        impl ::rusqlite::types::FromSql for $name {
            fn column_result(
                value: ::rusqlite::types::ValueRef<'_>,
            ) -> ::rusqlite::types::FromSqlResult<Self> {
                match $crate::sql::text_or_null(value, stringify!($name))? {
                    None => Err($crate::sql::invalid($crate::error::ValidationError::new(
                        $message,
                        String::new(),
                    ))),
                    Some(text) => Self::new(text).map_err($crate::sql::invalid),
                }
            }
        }
    };

    (
        @base
        $(#[$meta:meta])*
        $name:ident { predicate: $predicate:expr, message: $message:expr }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::lower::LowerString);

        impl $name {
            fn validated(raw: String) -> Result<Self, $crate::error::ValidationError> {
                if !($predicate)(raw.as_str()) {
                    return Err($crate::error::ValidationError::new($message, raw));
                }
                Ok(Self($crate::lower::LowerString::new(raw)))
            }

            /// The canonical lowercase text.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// The canonical text as raw bytes. The binary representation
            /// is identical to the text representation.
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }

            /// Decode from raw bytes, equivalent to [`Self::new`] on the
            /// decoded string. Bytes that are not valid UTF-8 fail
            /// validation.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, $crate::error::ValidationError> {
                match std::str::from_utf8(bytes) {
                    Ok(text) => Self::new(text),
                    Err(_) => Err($crate::error::ValidationError::new(
                        $message,
                        String::from_utf8_lossy(bytes).into_owned(),
                    )),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(raw: &str) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

pub(crate) use code_type;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_folds_to_lowercase() {
        assert_eq!(LowerString::new("FoO").as_str(), "foo");
        assert_eq!(LowerString::new("already lower").as_str(), "already lower");
    }

    #[test]
    fn default_is_empty() {
        let lower = LowerString::default();
        assert!(lower.is_empty());
        assert_eq!(lower.as_str(), "");
    }

    #[test]
    fn display_matches_canonical_text() {
        let lower = LowerString::new("AbC");
        assert_eq!(format!("{lower}"), "abc");
    }

    #[test]
    fn bytes_match_text() {
        let lower = LowerString::new("Fo");
        assert_eq!(lower.as_bytes(), b"fo");
    }

    #[test]
    fn json_empty_encodes_as_empty_string() {
        let json = serde_json::to_string(&LowerString::default()).unwrap();
        assert_eq!(json, "\"\"");
    }

    #[test]
    fn json_null_decodes_to_empty() {
        let lower: LowerString = serde_json::from_str("null").unwrap();
        assert!(lower.is_empty());
    }

    #[test]
    fn json_roundtrip_folds_case() {
        let lower: LowerString = serde_json::from_str("\"FoO\"").unwrap();
        assert_eq!(lower.as_str(), "foo");
        assert_eq!(serde_json::to_string(&lower).unwrap(), "\"foo\"");
    }

    #[test]
    fn ascii_alpha_checks_length_and_alphabet() {
        assert!(ascii_alpha("fo", 2));
        assert!(ascii_alpha("FO", 2));
        assert!(!ascii_alpha("f", 2));
        assert!(!ascii_alpha("foo", 2));
        assert!(!ascii_alpha("f1", 2));
        assert!(!ascii_alpha("", 2));
        assert!(!ascii_alpha("fö", 2));
    }

    // A kind with the `unset: required` policy, defined here so the
    // rejecting branch of the empty-value configuration stays covered.
    fn strict_alpha2(raw: &str) -> bool {
        ascii_alpha(raw, 2)
    }

    code_type! {
        /// Two-letter code with no unset sentinel.
        StrictCode {
            predicate: strict_alpha2,
            message: "invalid strict code",
            unset: required,
        }
    }

    #[test]
    fn required_policy_rejects_empty() {
        let err = StrictCode::new("").unwrap_err();
        assert_eq!(err.to_string(), "invalid strict code: ");
    }

    #[test]
    fn required_policy_accepts_valid_code() {
        let code = StrictCode::new("Fo").unwrap();
        assert_eq!(code.as_str(), "fo");
    }

    #[test]
    fn required_policy_rejects_json_null() {
        assert!(serde_json::from_str::<StrictCode>("null").is_err());
    }

    #[test]
    fn required_policy_json_roundtrip() {
        let code: StrictCode = serde_json::from_str("\"Fo\"").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"fo\"");
    }

    #[cfg(feature = "rusqlite")]
    #[test]
    fn required_policy_rejects_sql_null() {
        use rusqlite::types::{FromSql, ValueRef};

        let err = StrictCode::column_result(ValueRef::Null).unwrap_err();
        assert!(err.to_string().contains("invalid strict code"));
    }
}
