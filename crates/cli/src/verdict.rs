// SPDX-License-Identifier: MIT

//! Run verdicts: folds source reports and the description check into a
//! single pass/fail outcome with a printable summary.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::pattern::PatternSet;
use crate::scan::SourceReport;

/// Fenced code blocks, matched non-greedily so two blocks in one
/// description do not swallow the prose between them.
#[allow(clippy::expect_used)]
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex pattern"));

/// Inline code spans: single backticks with no backtick between them.
#[allow(clippy::expect_used)]
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`").expect("valid regex pattern"));

/// Complete outcome of one gate run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Per-source reports, only for sources where something matched.
    pub reports: Vec<SourceReport>,
    /// Whether the description matched after code spans were stripped.
    pub description_matched: bool,
    /// True exactly when no source and no description matched.
    pub passed: bool,
    /// Human-readable verdict naming every matching source.
    pub summary: String,
}

/// Evaluate a finished scan. `description` is checked with code spans
/// stripped first, so a description may quote a forbidden pattern inside
/// backticks without failing the gate.
pub fn evaluate(
    description: Option<&str>,
    patterns: &PatternSet,
    reports: Vec<SourceReport>,
) -> RunResult {
    let description_matched =
        description.is_some_and(|text| patterns.contains(&strip_code(text)));
    let passed = !description_matched && reports.is_empty();
    let summary = render_summary(description_matched, &reports);
    RunResult { reports, description_matched, passed, summary }
}

/// Remove fenced code blocks, then inline code spans. An unpaired backtick
/// strips nothing; the text is checked as written.
fn strip_code(text: &str) -> String {
    let without_blocks = FENCED_BLOCK.replace_all(text, "");
    CODE_SPAN.replace_all(&without_blocks, "").into_owned()
}

fn render_summary(description_matched: bool, reports: &[SourceReport]) -> String {
    if !description_matched && reports.is_empty() {
        return "no forbidden patterns found".to_string();
    }

    let mut lines = vec!["forbidden patterns found:".to_string()];
    if description_matched {
        lines.push("  description contains a forbidden pattern".to_string());
    }
    for report in reports {
        let spellings = report
            .matches
            .iter()
            .map(|m| format!("{:?} x{}", m.matched, m.count))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  {}: {} (total {})", report.path, spellings, report.total_count));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
