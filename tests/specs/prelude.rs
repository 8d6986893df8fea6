//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the mergeguard binary
pub fn mergeguard_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mergeguard"))
}

/// A disposable project directory for gate runs.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// An empty project. The `.git` marker keeps config discovery from
    /// walking above the temp directory.
    pub fn empty() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Write the project's mergeguard.toml.
    pub fn config(&self, content: &str) {
        self.file("mergeguard.toml", content);
    }

    /// Read a file back as text.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }
}
