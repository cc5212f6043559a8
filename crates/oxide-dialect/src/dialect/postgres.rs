//! PostgreSQL dialect implementation.

use super::{Dialect, StatementKind, check_position, returning_clause, zero_or};
use crate::column::{ColumnMapping, ColumnOption, ColumnType, SizeClass};
use crate::dialect::standard::EPOCH_LITERAL;
use crate::error::Result;

/// `NAMEDATALEN - 1`; longer names are silently truncated by the server.
const MAX_IDENTIFIER_LEN: usize = 63;

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn option_default(ty: &ColumnType, option: ColumnOption) -> Option<String> {
    match option {
        ColumnOption::ZeroValue => None,
        ColumnOption::AutoIncrement => Some("GENERATED BY DEFAULT AS IDENTITY".to_string()),
        ColumnOption::Version => Some("DEFAULT 1".to_string()),
        o if o.is_auto_timestamp() && ty.is_time() => {
            Some("DEFAULT CURRENT_TIMESTAMP".to_string())
        }
        ColumnOption::AutoNow | ColumnOption::AutoNowAdd => Some("DEFAULT 0".to_string()),
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn max_identifier_len(&self) -> usize {
        MAX_IDENTIFIER_LEN
    }

    fn parameter(&self, _named: bool, position: usize) -> Option<String> {
        check_position(position);
        // Numbered placeholders serve both modes
        Some(format!("${position}"))
    }

    fn returning(&self, _kind: StatementKind, column: &str) -> Result<Option<String>> {
        returning_clause(self, column)
    }

    fn mapping(&self, ty: &ColumnType, max_size: usize, option: ColumnOption) -> ColumnMapping {
        let default = option_default(ty, option);
        match ty {
            ColumnType::Bool => ColumnMapping::new("BOOLEAN", zero_or(option, "FALSE", default)),
            t if t.is_small_integer() => {
                ColumnMapping::new("SMALLINT", zero_or(option, "0", default))
            }
            t if t.is_wide_integer() => {
                ColumnMapping::new("BIGINT", zero_or(option, "0", default))
            }
            t if t.is_standard_integer() => {
                ColumnMapping::new("INTEGER", zero_or(option, "0", default))
            }
            ColumnType::Float32 => ColumnMapping::new("REAL", zero_or(option, "0", default)),
            ColumnType::Float64 => {
                ColumnMapping::new("DOUBLE PRECISION", zero_or(option, "0", default))
            }
            ColumnType::Time => ColumnMapping::new(
                "TIMESTAMP WITH TIME ZONE",
                zero_or(option, EPOCH_LITERAL, default),
            ),
            // BYTEA has no length modifier
            t if t.is_binary() => ColumnMapping::new("BYTEA", default),
            _ => {
                let sql_type = match SizeClass::of(max_size) {
                    SizeClass::Unspecified => "VARCHAR(255)".to_string(),
                    SizeClass::Sized(n) => format!("VARCHAR({n})"),
                    SizeClass::Large => "TEXT".to_string(),
                };
                let default = if *ty == ColumnType::String {
                    zero_or(option, "''", default)
                } else {
                    default
                };
                ColumnMapping::new(sql_type, default)
            }
        }
    }
}
