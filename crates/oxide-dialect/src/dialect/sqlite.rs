//! SQLite dialect implementation.

use super::{Dialect, StatementKind, check_position, returning_clause, zero_or};
use crate::column::{ColumnMapping, ColumnOption, ColumnType};
use crate::error::Result;

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn option_default(ty: &ColumnType, option: ColumnOption) -> Option<String> {
    match option {
        ColumnOption::ZeroValue => None,
        // Only valid on an INTEGER column
        ColumnOption::AutoIncrement => Some("PRIMARY KEY AUTOINCREMENT".to_string()),
        ColumnOption::Version => Some("DEFAULT 1".to_string()),
        o if o.is_auto_timestamp() && ty.is_time() => {
            Some("DEFAULT CURRENT_TIMESTAMP".to_string())
        }
        ColumnOption::AutoNow | ColumnOption::AutoNowAdd => Some("DEFAULT 0".to_string()),
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn identifier_quote(&self) -> char {
        '"' // SQLite also accepts backticks, but double quotes are standard
    }

    fn parameter(&self, named: bool, position: usize) -> Option<String> {
        check_position(position);
        if named {
            Some(format!("?{position}"))
        } else {
            Some("?".to_string())
        }
    }

    fn returning(&self, _kind: StatementKind, column: &str) -> Result<Option<String>> {
        // SQLite 3.35.0+
        returning_clause(self, column)
    }

    fn mapping(&self, ty: &ColumnType, _max_size: usize, option: ColumnOption) -> ColumnMapping {
        // SQLite has dynamic typing with type affinity; sizes are not enforced
        let default = option_default(ty, option);
        match ty {
            ColumnType::Bool => ColumnMapping::new("INTEGER", zero_or(option, "0", default)),
            t if t.is_small_integer() || t.is_standard_integer() => {
                ColumnMapping::new("INTEGER", zero_or(option, "0", default))
            }
            ColumnType::Float32 | ColumnType::Float64 => {
                ColumnMapping::new("REAL", zero_or(option, "0", default))
            }
            ColumnType::Time => ColumnMapping::new(
                "TEXT",
                zero_or(option, "'1970-01-01 00:00:00'", default),
            ),
            t if t.is_binary() => ColumnMapping::new("BLOB", default),
            ColumnType::String => ColumnMapping::new("TEXT", zero_or(option, "''", default)),
            _ => ColumnMapping::new("TEXT", default),
        }
    }
}
