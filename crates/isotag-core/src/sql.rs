//! # SQL Boundary
//!
//! `ToSql`/`FromSql` glue shared by every code kind, plus the impls for
//! the [`LowerString`] primitive itself. The mapping is uniform:
//!
//! - unset value ⇄ SQL `NULL`
//! - non-empty value ⇄ `TEXT` holding the canonical lowercase form
//! - any other storage class on decode → [`UnexpectedSqlType`]
//!
//! Decoding a kind routes the column text through the kind's validating
//! constructor, so a row written by a non-conforming producer cannot
//! smuggle an invalid code into the process. The primitive applies no
//! predicate; it only case-folds.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Type, Value, ValueRef};
use thiserror::Error;

use crate::error::ValidationError;
use crate::lower::LowerString;

/// A database decode received a storage class that is neither `NULL`
/// nor `TEXT`.
///
/// Signals a schema or driver mismatch rather than bad data; the
/// operation fails as a whole and is not retryable.
#[derive(Debug, Error)]
#[error("cannot convert {found} column to {target}")]
pub struct UnexpectedSqlType {
    /// Name of the type the column was being decoded into.
    pub target: &'static str,
    /// The storage class actually present in the column.
    pub found: Type,
}

pub(crate) fn to_sql_output(value: &LowerString) -> ToSqlOutput<'_> {
    if value.is_empty() {
        ToSqlOutput::Owned(Value::Null)
    } else {
        ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes()))
    }
}

/// Decode a column as `NULL` (`Ok(None)`) or `TEXT` (`Ok(Some(_))`);
/// anything else is an [`UnexpectedSqlType`] naming the storage class.
pub(crate) fn text_or_null<'a>(
    value: ValueRef<'a>,
    target: &'static str,
) -> FromSqlResult<Option<&'a str>> {
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(Some)
            .map_err(|err| FromSqlError::Other(Box::new(err))),
        other => Err(FromSqlError::Other(Box::new(UnexpectedSqlType {
            target,
            found: other.data_type(),
        }))),
    }
}

pub(crate) fn invalid(err: ValidationError) -> FromSqlError {
    FromSqlError::Other(Box::new(err))
}

impl ToSql for LowerString {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(to_sql_output(self))
    }
}

impl FromSql for LowerString {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match text_or_null(value, "LowerString")? {
            None => Ok(Self::default()),
            Some(text) => Ok(Self::new(text)),
        }
    }
}
