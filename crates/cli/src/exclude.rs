// SPDX-License-Identifier: MIT

//! Glob-style ignore rules for excluding paths from scanning.
//!
//! Rules support three wildcards: `*` matches any run of characters within
//! one path segment, `**` matches any run of characters including `/`, and
//! `?` matches exactly one character other than `/`. Everything else in a
//! rule is literal. A path is ignored when any rule matches it in full.

use regex::Regex;

/// Stand-in for `**` while single `*` wildcards are being expanded.
const GLOBSTAR: &str = "\u{0}";

/// A compiled list of ignore rules. Matching any rule ignores the path.
pub struct IgnoreRules {
    rules: Vec<CompiledRule>,
}

/// One rule: the normalized text for exact comparison plus the compiled
/// glob regex. `regex` is None when the translation is not a valid
/// expression; such a rule still matches exactly.
struct CompiledRule {
    text: String,
    regex: Option<Regex>,
}

impl IgnoreRules {
    /// Compile a rule list. A rule that does not translate to a valid
    /// expression degrades to exact matching with a warning rather than
    /// failing the run.
    pub fn new(rules: &[String]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| {
                let text = normalize(rule).to_string();
                let regex = match Regex::new(&glob_to_regex(&text)) {
                    Ok(regex) => Some(regex),
                    Err(err) => {
                        tracing::warn!("invalid ignore rule {rule:?}: {err}");
                        None
                    }
                };
                CompiledRule { text, regex }
            })
            .collect();
        Self { rules }
    }

    /// Whether any rule matches the path. Exact equality is checked before
    /// glob expansion, so a rule naming a path verbatim always ignores it.
    pub fn is_ignored(&self, path: &str) -> bool {
        let path = normalize(path);
        self.rules
            .iter()
            .any(|rule| rule.text == path || rule.regex.as_ref().is_some_and(|re| re.is_match(path)))
    }
}

/// Strip a single leading `./` so rules and paths compare in the same form.
fn normalize(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

/// Translate one glob rule into an anchored regular expression.
///
/// The substitution order is load-bearing: dots are escaped before the
/// wildcard expansions introduce regex text of their own, and `**` is
/// tokenized away before single `*` substitution can see its halves.
pub(crate) fn glob_to_regex(rule: &str) -> String {
    let expanded = rule
        .replace('.', r"\.")
        .replace("**", GLOBSTAR)
        .replace('*', "[^/]*")
        .replace(GLOBSTAR, ".*")
        .replace('?', "[^/]");
    format!("^{expanded}$")
}

#[cfg(test)]
#[path = "exclude_tests.rs"]
mod tests;
