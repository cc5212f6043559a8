//! End-to-end tests for the oxide-dialect CLI

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn dialect_cli() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("oxide-dialect"));
    cmd.env_remove("OXIDE_DIALECT");
    cmd
}

#[test]
fn lists_dialects() {
    dialect_cli()
        .arg("dialects")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("mysql"))
        .stdout(predicate::str::contains("postgres"))
        .stdout(predicate::str::contains("sqlite"));
}

#[test]
fn quotes_with_dialect_quote_char() {
    dialect_cli()
        .args(["--dialect", "mysql", "quote", "users"])
        .assert()
        .success()
        .stdout("`users`\n");

    dialect_cli()
        .args(["quote", "users"])
        .assert()
        .success()
        .stdout("\"users\"\n");
}

#[test]
fn rejects_unquotable_identifier() {
    dialect_cli()
        .args(["quote", "users; DROP TABLE users"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disallowed character"));
}

#[test]
fn dialect_from_environment() {
    dialect_cli()
        .env("OXIDE_DIALECT", "postgres")
        .args(["param", "3"])
        .assert()
        .success()
        .stdout("$3\n");
}

#[test]
fn unknown_dialect_falls_back_to_standard() {
    dialect_cli()
        .args(["--dialect", "oracle", "param", "3"])
        .assert()
        .success()
        .stdout("?\n");
}

#[test]
fn unsupported_named_parameter_is_not_an_error() {
    dialect_cli()
        .args(["param", "1", "--named"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no named parameter syntax"));
}

#[test]
fn returning_clause() {
    dialect_cli()
        .args(["--dialect", "sqlite", "returning", "insert", "id"])
        .assert()
        .success()
        .stdout("RETURNING \"id\"\n");

    dialect_cli()
        .args(["--json", "returning", "update", "id"])
        .assert()
        .success()
        .stdout("{\"value\":null}\n");
}

#[test]
fn maps_column() {
    dialect_cli()
        .args(["map", "int64", "--option", "auto_increment"])
        .assert()
        .success()
        .stdout("INTEGER GENERATED BY DEFAULT AS IDENTITY\n");

    dialect_cli()
        .args(["map", "bytes", "--max-size", "100"])
        .assert()
        .success()
        .stdout("BINARY LARGE OBJECT(100)\n");
}

#[test]
fn maps_column_as_json() {
    dialect_cli()
        .args(["--json", "map", "string", "-m", "1000"])
        .assert()
        .success()
        .stdout("{\"sql_type\":\"CHARACTER LARGE OBJECT\",\"default\":\"''\"}\n");
}

#[test]
fn rejects_unknown_option() {
    dialect_cli()
        .args(["map", "int64", "--option", "serial"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown column option"));
}

#[test]
fn quoted_keeps_already_quoted_identifier() {
    dialect_cli()
        .args(["quoted", "\"users\""])
        .assert()
        .success()
        .stdout("\"users\"\n");
}

#[test]
fn quoted_requotes_for_dialect() {
    dialect_cli()
        .args(["--dialect", "mysql", "quoted", "\"users\""])
        .assert()
        .success()
        .stdout("`users`\n");
}

#[test]
fn quoted_rejects_empty_identifier() {
    dialect_cli()
        .args(["quoted", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Identifier is empty"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn param_rejects_position_zero() {
    dialect_cli()
        .args(["--dialect", "postgres", "param", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parameter positions start at 1"))
        .stderr(predicate::str::contains("panicked").not());
}
