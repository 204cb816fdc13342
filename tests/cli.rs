//! End-to-end tests for the inertia-setup binary
//!
//! Only paths that terminate before any external command is spawned are
//! exercised here; the full flow is covered in `setup_flow.rs` with a
//! recording runner.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("inertia-setup").unwrap()
}

#[test]
fn fails_outside_a_rails_application() {
    let dir = TempDir::new().unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Gemfile found"));
}

#[test]
fn rejects_an_unknown_framework() {
    let dir = TempDir::new().unwrap();

    bin()
        .current_dir(dir.path())
        .arg("angular")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'angular'"));
}

#[test]
fn rejects_an_unknown_flag() {
    let dir = TempDir::new().unwrap();

    bin()
        .current_dir(dir.path())
        .arg("--coffeescript")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn help_lists_the_supported_options() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--typescript")
                .and(predicate::str::contains("--tailwind"))
                .and(predicate::str::contains("react")),
        );
}
