//! # oxide-dialect
//!
//! Dialect-aware SQL fragments for query and schema builders.
//!
//! This crate provides:
//! - A [`Dialect`] trait with standard SQL, MySQL, PostgreSQL and SQLite
//!   implementations
//! - Identifier quoting that rejects names it cannot quote safely
//! - Bound-parameter placeholders and `RETURNING` clauses
//! - Mapping of a language-neutral column description to a SQL type and
//!   default clause
//!
//! Everything here is pure: dialects are stateless singletons and every
//! operation depends only on its arguments.
//!
//! ## Example
//!
//! ```rust
//! use oxide_dialect::{ColumnOption, ColumnType, resolve};
//!
//! let dialect = resolve("postgres");
//! assert_eq!(dialect.quote("users").unwrap(), "\"users\"");
//! assert_eq!(dialect.parameter(false, 2).as_deref(), Some("$2"));
//!
//! let id = dialect.mapping(&ColumnType::Int64, 0, ColumnOption::AutoIncrement);
//! assert_eq!(id.sql_type, "BIGINT");
//! assert_eq!(id.default.as_deref(), Some("GENERATED BY DEFAULT AS IDENTITY"));
//!
//! // Unknown names fall back to standard SQL
//! assert_eq!(resolve("oracle").name(), "standard");
//! ```

pub mod column;
pub mod dialect;
pub mod error;
pub mod registry;

pub use column::{ColumnMapping, ColumnOption, ColumnType, MAX_SIZED_LENGTH, SizeClass};
pub use dialect::{
    Dialect, MySqlDialect, PostgresDialect, SqliteDialect, StandardDialect, StatementKind,
};
pub use error::{DialectError, Result};
pub use registry::{DialectKind, resolve};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::column::{ColumnMapping, ColumnOption, ColumnType, SizeClass};
    pub use crate::dialect::{Dialect, StatementKind};
    pub use crate::error::{DialectError, Result};
    pub use crate::registry::{DialectKind, resolve};
}
