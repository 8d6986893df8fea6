// SPDX-License-Identifier: MIT

//! Configuration loading and discovery for mergeguard.toml.
//!
//! Configuration trouble never fails a run: a missing, unreadable, or
//! unparseable file degrades to the documented defaults with a warning, so
//! a broken config cannot hold merges hostage.

pub mod defaults;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// The reserved configuration filename: discovered upward from the working
/// directory, and never itself scanned at the root.
pub const CONFIG_FILE_NAME: &str = "mergeguard.toml";

/// The `patterns` key accepts either a bare string or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Patterns::One(pattern) => vec![pattern],
            Patterns::Many(patterns) => patterns,
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Patterns::Many(defaults::patterns())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Forbidden patterns. Literal substrings, never regexes.
    pub patterns: Patterns,
    /// Match patterns case-sensitively.
    pub case_sensitive: bool,
    /// Glob rules for paths excluded from scanning.
    #[serde(alias = "exclude")]
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: Patterns::default(),
            case_sensitive: defaults::CASE_SENSITIVE,
            ignore: Vec::new(),
        }
    }
}

/// Parse config content. Missing keys take their defaults; unknown keys
/// are tolerated so configs can carry notes for other tooling.
pub fn parse(content: &str, path: &Path) -> anyhow::Result<Config> {
    toml::from_str(content).with_context(|| format!("invalid config {}", path.display()))
}

/// Load configuration for a run.
///
/// An explicit `--config` path wins; otherwise the file is discovered from
/// `start_dir` upward. Any failure to read or parse degrades to defaults.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Config {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(|| find_config(start_dir)) else {
        return Config::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => match parse(&content, &path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err:#}; using defaults");
                Config::default()
            }
        },
        Err(err) => {
            tracing::warn!("cannot read {}: {err}; using defaults", path.display());
            Config::default()
        }
    }
}

/// Find mergeguard.toml starting from `start_dir` and walking up to the
/// git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
