//! MySQL dialect implementation.

use super::{Dialect, StatementKind, check_position, zero_or};
use crate::column::{ColumnMapping, ColumnOption, ColumnType, SizeClass};
use crate::error::Result;

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn option_default(ty: &ColumnType, option: ColumnOption) -> Option<String> {
    match option {
        ColumnOption::ZeroValue => None,
        ColumnOption::AutoIncrement => Some("AUTO_INCREMENT".to_string()),
        ColumnOption::AutoNow if ty.is_time() => {
            Some("DEFAULT CURRENT_TIMESTAMP(6) ON UPDATE CURRENT_TIMESTAMP(6)".to_string())
        }
        ColumnOption::Version => Some("DEFAULT 1".to_string()),
        o if o.is_auto_timestamp() && ty.is_time() => {
            Some("DEFAULT CURRENT_TIMESTAMP(6)".to_string())
        }
        ColumnOption::AutoNow | ColumnOption::AutoNowAdd => Some("DEFAULT 0".to_string()),
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn parameter(&self, named: bool, position: usize) -> Option<String> {
        check_position(position);
        // No named placeholders in the MySQL protocol
        if named { None } else { Some("?".to_string()) }
    }

    fn returning(&self, _kind: StatementKind, _column: &str) -> Result<Option<String>> {
        Ok(None)
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
                ColumnMapping::new("INT", zero_or(option, "0", default))
            }
            ColumnType::Float32 => ColumnMapping::new("FLOAT", zero_or(option, "0", default)),
            ColumnType::Float64 => ColumnMapping::new("DOUBLE", zero_or(option, "0", default)),
            ColumnType::Time => ColumnMapping::new(
                "DATETIME(6)",
                zero_or(option, "'1970-01-01 00:00:00'", default),
            ),
            t if t.is_binary() => {
                let sql_type = match SizeClass::of(max_size) {
                    SizeClass::Sized(n) => format!("VARBINARY({n})"),
                    SizeClass::Unspecified | SizeClass::Large => "LONGBLOB".to_string(),
                };
                ColumnMapping::new(sql_type, default)
            }
            _ => {
                // TEXT columns cannot carry a literal default before MySQL 8.0.13
                let (sql_type, has_default) = match SizeClass::of(max_size) {
                    SizeClass::Unspecified => ("VARCHAR(255)".to_string(), true),
                    SizeClass::Sized(n) => (format!("VARCHAR({n})"), true),
                    SizeClass::Large => ("LONGTEXT".to_string(), false),
                };
                let default = if *ty == ColumnType::String && has_default {
                    zero_or(option, "''", default)
                } else {
                    default
                };
                ColumnMapping::new(sql_type, default)
            }
        }
    }
}
