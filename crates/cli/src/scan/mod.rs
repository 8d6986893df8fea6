// SPDX-License-Identifier: MIT

//! Source scanning and per-source match reports.
//!
//! Both scan modes produce the same report shape: the local mode walks a
//! directory tree, the remote mode iterates a changed-file list fetched
//! through [`remote::RemoteSource`].

pub mod local;
pub mod remote;

use serde::Serialize;

use crate::pattern::{PatternMatch, PatternSet};

/// Which patterns matched within one source, and how often.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// Path of the source relative to the scan root, forward-slash
    /// separated on every platform.
    pub path: String,
    /// Distinct (pattern, matched text) entries in first-encounter order.
    pub matches: Vec<PatternMatch>,
    /// Sum of all entry counts.
    pub total_count: usize,
}

/// Failures that prevent determining which sources to scan. Per-source
/// trouble (binary content, one failed fetch) is skipped, not raised.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan root {0:?} is not a directory")]
    RootNotFound(std::path::PathBuf),
    #[error("failed to list changed files")]
    ListFiles(#[source] remote::FetchError),
}

/// Scan one source's content. Returns a report only when something matched.
pub(crate) fn scan_content(path: &str, content: &str, patterns: &PatternSet) -> Option<SourceReport> {
    let matches = patterns.find_matches(content);
    if matches.is_empty() {
        return None;
    }
    let total_count = matches.iter().map(|m| m.count).sum();
    Some(SourceReport { path: path.to_string(), matches, total_count })
}
