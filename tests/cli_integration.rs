//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! `init` and inline password values need no interactive input, so the
//! whole add/get/update/delete flow can run non-interactively; prompts
//! that do require a terminal are only checked for clean failure.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

/// Helper: run `init` in a temp dir and return the vault dir argument.
fn init_vault(tmp: &TempDir) -> String {
    let vault_dir = tmp.path().join(".passvault").to_str().unwrap().to_string();
    passvault()
        .args(["init", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success();
    vault_dir
}

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password manager"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_creates_key_and_database() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = init_vault(&tmp);

    let dir = std::path::Path::new(&vault_dir);
    assert!(dir.join("key.key").exists());
    assert!(dir.join("passwords.db").exists());
}

#[test]
fn init_twice_fails() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = init_vault(&tmp);

    passvault()
        .args(["init", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn add_then_get_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = init_vault(&tmp);

    passvault()
        .args(["add", "github", "alice", "p@ss", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success();

    passvault()
        .args(["get", "github", "alice", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("p@ss"));
}

#[test]
fn get_missing_entry_reports_not_found() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = init_vault(&tmp);

    // Not an error — exit 0 with an informational message.
    passvault()
        .args(["get", "nosuch", "nouser", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No password found"));
}

#[test]
fn update_changes_stored_password() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = init_vault(&tmp);

    passvault()
        .args(["add", "github", "alice", "old", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success();

    passvault()
        .args(["update", "github", "alice", "new", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    passvault()
        .args(["get", "github", "alice", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("new"));
}

#[test]
fn update_missing_entry_reports_no_match() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = init_vault(&tmp);

    passvault()
        .args(["update", "github", "ghost", "x", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No matching entry"));
}

#[test]
fn delete_force_removes_entry() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = init_vault(&tmp);

    passvault()
        .args(["add", "github", "alice", "p@ss", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success();

    passvault()
        .args([
            "delete", "github", "alice", "--force", "--vault-dir", &vault_dir,
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 entry"));

    passvault()
        .args(["get", "github", "alice", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No password found"));
}

#[test]
fn operation_without_key_fails_when_prompt_unavailable() {
    let tmp = TempDir::new().unwrap();
    let vault_dir = tmp.path().join(".passvault").to_str().unwrap().to_string();

    // No `init` was run: the vault is uninitialized, and with no
    // terminal attached the generate-key offer cannot be answered.
    passvault()
        .args(["get", "github", "alice", "--vault-dir", &vault_dir])
        .current_dir(tmp.path())
        .write_stdin("n\n")
        .assert()
        .failure();
}
