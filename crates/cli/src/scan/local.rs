// SPDX-License-Identifier: MIT

//! Local-tree scanning.

use std::path::Path;

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::config::CONFIG_FILE_NAME;
use crate::exclude::IgnoreRules;
use crate::file_reader::FileContent;
use crate::pattern::PatternSet;

use super::{ScanError, SourceReport, scan_content};

/// Directory names never descended into, regardless of ignore rules.
const SKIPPED_DIRS: [&str; 2] = [".git", "node_modules"];

/// Scan every file under `root`.
///
/// The walk visits hidden files, skips [`SKIPPED_DIRS`] without descending,
/// and never reports the configuration file at the root. Reports come back
/// in traversal order, which is sorted and therefore stable across runs.
pub fn scan_tree(
    root: &Path,
    patterns: &PatternSet,
    ignore_rules: &IgnoreRules,
) -> Result<Vec<SourceReport>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    // Collect paths first so content scanning can fan out on the rayon
    // pool while collect() keeps the reports in traversal order.
    let mut files: Vec<(String, std::path::PathBuf)> = Vec::new();
    let walker = WalkBuilder::new(root)
        // No gitignore or hidden-file filtering; the ignore rules are the
        // only configurable filter.
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let skipped = entry.file_type().is_some_and(|t| t.is_dir())
                && entry.file_name().to_str().is_some_and(|name| SKIPPED_DIRS.contains(&name));
            !skipped
        })
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Some(rel) = relative_path(entry.path(), root) else {
            continue;
        };
        // The gate's own configuration would otherwise flag itself.
        if rel == CONFIG_FILE_NAME {
            continue;
        }
        if ignore_rules.is_ignored(&rel) {
            continue;
        }
        files.push((rel, entry.into_path()));
    }

    let reports = files
        .par_iter()
        .filter_map(|(rel, path)| {
            let content = match FileContent::read(path) {
                Ok(content) => content,
                Err(err) => {
                    tracing::debug!("skipping {rel}: {err}");
                    return None;
                }
            };
            // Binary content cannot carry marker text.
            let text = content.as_str()?;
            scan_content(rel, text, patterns)
        })
        .collect();

    Ok(reports)
}

/// Path relative to the scan root, forward-slash separated. None when the
/// path is the root itself or is not valid Unicode.
fn relative_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in rel.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(component.as_os_str().to_str()?);
    }
    (!out.is_empty()).then_some(out)
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
