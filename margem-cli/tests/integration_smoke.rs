//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn margem() -> Command {
    let mut cmd = Command::cargo_bin("margem").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("MARGEM_BIND")
        .env_remove("MARGEM_ALLOWED_ORIGINS")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_help_lists_commands() {
    margem()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    margem()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"))
        .stdout(predicate::str::contains("--allowed-origin"));
}

// === Migrate Command Tests ===

#[test]
fn test_migrate_sqlite_memory() {
    margem()
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema up to date (sqlite)"));
}

#[test]
fn test_migrate_memory_store() {
    margem()
        .args(["migrate", "--database-url", "memory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(memory)"));
}

#[test]
fn test_migrate_rejects_unknown_scheme() {
    margem()
        .args(["migrate", "--database-url", "mysql://localhost/vendas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid DATABASE_URL"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    margem()
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}
