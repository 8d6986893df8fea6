//! Behavioral specs for `mergeguard init`.

use crate::prelude::*;

/// Spec: docs/specs/01-cli.md#mergeguard-init
///
/// > mergeguard init creates mergeguard.toml in the current directory
#[test]
fn init_creates_mergeguard_toml() {
    let temp = Project::empty();

    mergeguard_cmd()
        .args(["init"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Created mergeguard.toml"));

    assert!(temp.path().join("mergeguard.toml").exists());
}

/// Spec: docs/specs/01-cli.md#mergeguard-init
///
/// > Refuses to overwrite an existing mergeguard.toml without --force
#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = Project::empty();
    temp.config("# existing\n");

    mergeguard_cmd()
        .args(["init"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));

    assert_eq!(temp.read("mergeguard.toml"), "# existing\n");
}

/// Spec: docs/specs/01-cli.md#mergeguard-init
///
/// > --force overwrites an existing mergeguard.toml
#[test]
fn init_force_overwrites_existing_config() {
    let temp = Project::empty();
    temp.config("# existing content\n");

    mergeguard_cmd()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config = temp.read("mergeguard.toml");
    assert!(!config.contains("# existing content"), "should overwrite");
    assert!(config.contains("patterns"));
}

/// Spec: docs/specs/01-cli.md#mergeguard-init
///
/// > The starter config is immediately usable
#[test]
fn init_starter_config_passes_a_clean_check() {
    let temp = Project::empty();
    temp.file("src/main.js", "function main() {}\n");

    mergeguard_cmd().args(["init"]).current_dir(temp.path()).assert().success();

    // The starter names "nomerge" inside its own pattern list; the gate
    // must not trip over its own configuration.
    mergeguard_cmd().args(["check"]).current_dir(temp.path()).assert().success();
}
