//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. This module provides
//! the [`Dialect`] trait, the strategy every backend implements, and one
//! implementation per supported backend.

mod mysql;
mod postgres;
mod sqlite;
mod standard;

use std::fmt;
use std::str::FromStr;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;
pub use standard::StandardDialect;

use crate::column::{ColumnMapping, ColumnOption, ColumnType};
use crate::error::{DialectError, Result};

/// Default maximum identifier length, in bytes.
pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 64;

/// Kind of statement a `RETURNING` clause is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `INSERT`
    Insert,
    /// `UPDATE`
    Update,
}

impl StatementKind {
    /// Returns the lowercase keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
        }
    }
}

impl FromStr for StatementKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "insert" => Ok(Self::Insert),
            "update" => Ok(Self::Update),
            _ => Err(DialectError::UnknownStatementKind(s.to_string())),
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for SQL dialect-specific behavior.
///
/// Implementations are stateless and shared as `static` singletons, see
/// [`crate::registry::resolve`].
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the maximum identifier length in bytes.
    fn max_identifier_len(&self) -> usize {
        DEFAULT_MAX_IDENTIFIER_LEN
    }

    /// Returns whether `c` may appear in a quoted identifier.
    ///
    /// The quote character and control characters must never be allowed.
    fn is_identifier_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// Quotes an identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty, longer than
    /// [`Dialect::max_identifier_len`], or contains a character rejected by
    /// [`Dialect::is_identifier_char`].
    fn quote(&self, identifier: &str) -> Result<String> {
        if identifier.is_empty() {
            return Err(DialectError::EmptyIdentifier);
        }
        let max = self.max_identifier_len();
        if identifier.len() > max {
            return Err(DialectError::IdentifierTooLong {
                identifier: identifier.to_string(),
                len: identifier.len(),
                max,
            });
        }
        let quote = self.identifier_quote();
        if let Some(character) = identifier
            .chars()
            .find(|&c| c == quote || c.is_control() || !self.is_identifier_char(c))
        {
            return Err(DialectError::DisallowedCharacter {
                identifier: identifier.to_string(),
                character,
            });
        }
        Ok(format!("{quote}{identifier}{quote}"))
    }

    /// Quotes an identifier unless it is already quoted.
    ///
    /// Input starting with [`Dialect::identifier_quote`] is returned unchanged.
    /// Anything else is assumed to be wrapped in some other marker, which is
    /// stripped (first and last character) before quoting.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Dialect::quote`] for the stripped identifier.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` is empty.
    fn quoted(&self, identifier: &str) -> Result<String> {
        assert!(
            !identifier.is_empty(),
            "Dialect::quoted requires a non-empty identifier"
        );
        if identifier.starts_with(self.identifier_quote()) {
            return Ok(identifier.to_string());
        }
        let mut inner = identifier.chars();
        inner.next();
        inner.next_back();
        self.quote(inner.as_str())
    }

    /// Returns the placeholder for the bound parameter at 1-based `position`.
    ///
    /// `None` means the dialect has no syntax for the requested mode.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0.
    fn parameter(&self, named: bool, position: usize) -> Option<String>;

    /// Returns a clause that yields `column` after an insert or update.
    ///
    /// `Ok(None)` means the dialect has no such construct and the caller must
    /// fetch the value some other way.
    ///
    /// # Errors
    ///
    /// Returns an error if `column` cannot be quoted.
    fn returning(&self, kind: StatementKind, column: &str) -> Result<Option<String>>;

    /// Maps a column description to a SQL type and default clause.
    fn mapping(&self, ty: &ColumnType, max_size: usize, option: ColumnOption) -> ColumnMapping;
}

/// Enforces the 1-based precondition of [`Dialect::parameter`].
fn check_position(position: usize) {
    assert!(position > 0, "Dialect::parameter positions are 1-based");
}

/// Formats the `RETURNING <column>` clause shared by dialects that support it.
fn returning_clause<D: Dialect + ?Sized>(dialect: &D, column: &str) -> Result<Option<String>> {
    Ok(Some(format!("RETURNING {}", dialect.quote(column)?)))
}

/// Zero-value override: only [`ColumnOption::ZeroValue`] replaces the option's
/// default with the type's zero literal.
fn zero_or(option: ColumnOption, zero: &str, option_default: Option<String>) -> Option<String> {
    if option == ColumnOption::ZeroValue {
        Some(zero.to_string())
    } else {
        option_default
    }
}
