//! Dialect lookup by name.
//!
//! Unknown names fall back to [`StandardDialect`], so a lookup always yields a
//! usable dialect.

use std::fmt;

use crate::dialect::{Dialect, MySqlDialect, PostgresDialect, SqliteDialect, StandardDialect};

static STANDARD: StandardDialect = StandardDialect::new();
static MYSQL: MySqlDialect = MySqlDialect::new();
static POSTGRES: PostgresDialect = PostgresDialect::new();
static SQLITE: SqliteDialect = SqliteDialect::new();

/// The known dialects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectKind {
    /// ANSI SQL, the fallback.
    #[default]
    Standard,
    /// MySQL.
    MySql,
    /// PostgreSQL.
    Postgres,
    /// SQLite.
    Sqlite,
}

impl DialectKind {
    /// All dialect kinds.
    pub const ALL: [Self; 4] = [Self::Standard, Self::MySql, Self::Postgres, Self::Sqlite];

    /// Selects a dialect by token, falling back to [`DialectKind::Standard`].
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "mysql" => Self::MySql,
            "postgres" => Self::Postgres,
            "sqlite" => Self::Sqlite,
            _ => Self::Standard,
        }
    }

    /// Returns the canonical token, equal to the dialect's [`Dialect::name`].
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }

    /// Returns the shared dialect instance.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Standard => &STANDARD,
            Self::MySql => &MYSQL,
            Self::Postgres => &POSTGRES,
            Self::Sqlite => &SQLITE,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returns the dialect for `token`, or the standard dialect if it is unknown.
#[must_use]
pub fn resolve(token: &str) -> &'static dyn Dialect {
    DialectKind::from_token(token).dialect()
}
