// SPDX-License-Identifier: MIT

//! Changed-file scanning against a remote source.
//!
//! The remote collaborator is a trait so the scan can be exercised with
//! in-memory fakes; the production implementation lives in `crate::github`.

use rayon::prelude::*;

use crate::config::CONFIG_FILE_NAME;
use crate::exclude::IgnoreRules;
use crate::pattern::PatternSet;

use super::{ScanError, SourceReport, scan_content};

/// Whether a changed file still exists on the head revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Present,
    Removed,
}

/// One entry in a changed-file list.
#[derive(Debug, Clone)]
pub struct ChangedFile {
    /// Repository-relative path, forward-slash separated.
    pub path: String,
    pub status: FileStatus,
    /// Version identity handed back to [`RemoteSource::content`] so every
    /// fetch reads the same revision the list described.
    pub reference: String,
}

/// Content-fetch failures. `NotText` is the remote counterpart of a local
/// binary file and is skipped without noise; everything else is logged.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The body was not decodable as UTF-8 text.
    #[error("content is not text")]
    NotText,
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// Transport-level failure: timeout, refused connection, bad body.
    #[error("request failed: {0}")]
    Transport(String),
}

/// Capability to list a unit of work's changed files and fetch their
/// contents at a fixed revision.
pub trait RemoteSource: Sync {
    fn changed_files(&self) -> Result<Vec<ChangedFile>, FetchError>;
    fn content(&self, path: &str, reference: &str) -> Result<String, FetchError>;
}

/// Scan every listed file that is still present and not ignored.
///
/// A fetch failure for one file is logged and skipped so a flaky blob
/// endpoint cannot block the verdict on everything else. Failing to obtain
/// the list itself is fatal, since it leaves nothing trustworthy to scan.
pub fn scan_changed(
    source: &dyn RemoteSource,
    patterns: &PatternSet,
    ignore_rules: &IgnoreRules,
) -> Result<Vec<SourceReport>, ScanError> {
    let files = source.changed_files().map_err(ScanError::ListFiles)?;

    let candidates: Vec<&ChangedFile> = files
        .iter()
        .filter(|file| file.status == FileStatus::Present)
        .filter(|file| file.path != CONFIG_FILE_NAME)
        .filter(|file| !ignore_rules.is_ignored(&file.path))
        .collect();

    // Each file costs a network round trip; fetch on the rayon pool and
    // let collect() reassemble the reports in list order.
    let reports = candidates
        .par_iter()
        .filter_map(|file| {
            let content = match source.content(&file.path, &file.reference) {
                Ok(content) => content,
                Err(FetchError::NotText) => {
                    tracing::debug!("skipping {}: not text", file.path);
                    return None;
                }
                Err(err) => {
                    tracing::warn!("could not check {}: {err}", file.path);
                    return None;
                }
            };
            scan_content(&file.path, &content, patterns)
        })
        .collect();

    Ok(reports)
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
