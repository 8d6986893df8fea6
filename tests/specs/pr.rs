//! Behavioral specs for `mergeguard pr`.
//!
//! The scan logic behind this command is covered by unit tests against an
//! in-memory remote; these specs pin the CLI surface and the fatal-error
//! path, which need no live API.

use crate::prelude::*;

/// Spec: docs/specs/03-remote.md#cli
///
/// > mergeguard pr requires a repository
#[test]
fn pr_requires_a_repository() {
    mergeguard_cmd()
        .args(["pr", "7"])
        .env_remove("GITHUB_REPOSITORY")
        .assert()
        .failure()
        .stderr(predicates::str::contains("--repo"));
}

/// Spec: docs/specs/03-remote.md#cli
///
/// > An unreachable API is a fatal error, reported on stderr
#[test]
fn pr_reports_fatal_error_when_api_is_unreachable() {
    let temp = Project::empty();

    mergeguard_cmd()
        .args([
            "pr",
            "7",
            "--repo",
            "octocat/hello",
            "--api-url",
            "http://127.0.0.1:1",
        ])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot fetch pull request #7"));
}

/// Spec: docs/specs/03-remote.md#cli
///
/// > The token is optional; public repositories need none
#[test]
fn pr_help_documents_the_surface() {
    mergeguard_cmd()
        .args(["pr", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("--repo"))
        .stdout(predicates::str::contains("--token"))
        .stdout(predicates::str::contains("--pattern"));
}
