#![allow(dead_code)]

use oxide_dialect::{ColumnOption, ColumnType, Dialect, resolve};

/// Maps a column through the dialect named `token`, returning
/// `(sql_type, default)` with a missing default rendered as `""`.
pub fn map(token: &str, tag: &str, max_size: usize, option: ColumnOption) -> (String, String) {
    let mapping = resolve(token).mapping(&ColumnType::from(tag), max_size, option);
    let default = mapping.default_or_empty().to_string();
    (mapping.sql_type, default)
}

pub fn standard(tag: &str, max_size: usize, option: ColumnOption) -> (String, String) {
    map("standard", tag, max_size, option)
}

pub fn quote(dialect: &dyn Dialect, identifier: &str) -> String {
    dialect
        .quote(identifier)
        .unwrap_or_else(|e| panic!("Failed to quote: {identifier:?}\nError: {e}"))
}

pub fn pair(sql_type: &str, default: &str) -> (String, String) {
    (sql_type.to_string(), default.to_string())
}

pub const ALL_TAGS: &[&str] = &[
    "bool", "int8", "int16", "int32", "int64", "int", "uint8", "uint16", "uint32", "uint64",
    "uint", "float32", "float64", "time", "bytes", "gob", "string", "json", "",
];

pub const DIALECTS: &[&str] = &["standard", "mysql", "postgres", "sqlite"];
