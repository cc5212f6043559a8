//! Standard SQL dialect.

use super::{Dialect, StatementKind, check_position, zero_or};
use crate::column::{ColumnMapping, ColumnOption, ColumnType, SizeClass};
use crate::error::Result;

/// Zero value of a timestamp column.
pub(crate) const EPOCH_LITERAL: &str = "'1970-01-01T00:00:00Z'";

/// The reference dialect, using ANSI SQL standards.
///
/// Every other dialect keeps its input/output contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDialect;

impl StandardDialect {
    /// Creates a new standard dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Default clause implied by the option alone, before the type is considered.
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

impl Dialect for StandardDialect {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn parameter(&self, named: bool, position: usize) -> Option<String> {
        check_position(position);
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
            t if t.is_binary() => {
                let sql_type = match SizeClass::of(max_size) {
                    SizeClass::Sized(n) => format!("BINARY LARGE OBJECT({n})"),
                    SizeClass::Unspecified | SizeClass::Large => "BINARY LARGE OBJECT".to_string(),
                };
                ColumnMapping::new(sql_type, default)
            }
            _ => {
                let sql_type = match SizeClass::of(max_size) {
                    SizeClass::Unspecified => "CHARACTER VARYING(255)".to_string(),
                    SizeClass::Sized(n) => format!("CHARACTER VARYING({n})"),
                    SizeClass::Large => "CHARACTER LARGE OBJECT".to_string(),
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
