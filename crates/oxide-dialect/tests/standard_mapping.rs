//! Tests for the reference column mapping.

mod common;
use common::*;

use oxide_dialect::ColumnOption::{AutoIncrement, AutoNow, AutoNowAdd, Version, ZeroValue};

#[test]
fn mapping_bool_zero_value() {
    assert_eq!(standard("bool", 0, ZeroValue), pair("BOOLEAN", "FALSE"));
}

#[test]
fn mapping_int64_auto_increment() {
    assert_eq!(
        standard("int64", 0, AutoIncrement),
        pair("INTEGER", "GENERATED BY DEFAULT AS IDENTITY")
    );
}

#[test]
fn mapping_time_auto_now_add() {
    assert_eq!(
        standard("time", 0, AutoNowAdd),
        pair("TIMESTAMP WITH TIME ZONE", "DEFAULT CURRENT_TIMESTAMP")
    );
}

#[test]
fn mapping_string_default_size() {
    assert_eq!(
        standard("string", 0, ZeroValue),
        pair("CHARACTER VARYING(255)", "''")
    );
}

#[test]
fn mapping_bytes_sized() {
    assert_eq!(
        standard("bytes", 100, ZeroValue),
        pair("BINARY LARGE OBJECT(100)", "")
    );
}

#[test]
fn mapping_string_large() {
    assert_eq!(
        standard("string", 1000, ZeroValue),
        pair("CHARACTER LARGE OBJECT", "''")
    );
}

#[test]
fn mapping_size_buckets() {
    assert_eq!(standard("string", 1, ZeroValue).0, "CHARACTER VARYING(1)");
    assert_eq!(standard("string", 255, ZeroValue).0, "CHARACTER VARYING(255)");
    assert_eq!(standard("string", 256, ZeroValue).0, "CHARACTER LARGE OBJECT");
    assert_eq!(standard("gob", 0, ZeroValue).0, "BINARY LARGE OBJECT");
    assert_eq!(standard("gob", 1, ZeroValue).0, "BINARY LARGE OBJECT(1)");
    assert_eq!(standard("gob", 255, ZeroValue).0, "BINARY LARGE OBJECT(255)");
    assert_eq!(standard("gob", 256, ZeroValue).0, "BINARY LARGE OBJECT");
}

#[test]
fn mapping_integer_width_is_ignored() {
    for tag in ["int32", "int64", "int", "uint32", "uint64", "uint"] {
        assert_eq!(standard(tag, 0, ZeroValue), pair("INTEGER", "0"), "{tag}");
    }
    for tag in ["int8", "int16", "uint8", "uint16"] {
        assert_eq!(standard(tag, 0, ZeroValue), pair("SMALLINT", "0"), "{tag}");
    }
}

#[test]
fn mapping_non_time_auto_timestamp() {
    assert_eq!(standard("int64", 0, AutoNow), pair("INTEGER", "DEFAULT 0"));
    assert_eq!(
        standard("string", 0, AutoNowAdd),
        pair("CHARACTER VARYING(255)", "DEFAULT 0")
    );
}

#[test]
fn mapping_version_counter() {
    assert_eq!(standard("int64", 0, Version), pair("INTEGER", "DEFAULT 1"));
    assert_eq!(standard("bytes", 0, Version), pair("BINARY LARGE OBJECT", "DEFAULT 1"));
}

#[test]
fn mapping_other_types_fall_back_to_character() {
    assert_eq!(standard("json", 0, ZeroValue), pair("CHARACTER VARYING(255)", ""));
    assert_eq!(standard("xml", 64, ZeroValue), pair("CHARACTER VARYING(64)", ""));
    assert_eq!(standard("", 4096, ZeroValue), pair("CHARACTER LARGE OBJECT", ""));
}

#[test]
fn mapping_is_pure() {
    for token in DIALECTS {
        for tag in ALL_TAGS {
            for size in [0, 1, 100, 255, 256, 10_000] {
                for option in oxide_dialect::ColumnOption::ALL {
                    let first = map(token, tag, size, option);
                    let second = map(token, tag, size, option);
                    assert_eq!(first, second, "{token} {tag} {size} {option}");
                    assert!(!first.0.is_empty(), "{token} {tag} has no SQL type");
                }
            }
        }
    }
}
