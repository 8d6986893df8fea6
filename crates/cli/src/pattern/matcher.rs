// SPDX-License-Identifier: MIT

//! Literal pattern compilation and matching.

use aho_corasick::AhoCorasick;
use memchr::memmem;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// All occurrences of one matched spelling of a pattern within a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    /// The configured pattern.
    pub pattern: String,
    /// The text actually found. Differs from `pattern` only in letter case,
    /// and only when matching case-insensitively.
    pub matched: String,
    /// Non-overlapping occurrence count, always at least 1.
    pub count: usize,
}

/// A set of forbidden patterns compiled once per run.
///
/// Patterns are literal substrings. Regex metacharacters they contain are
/// escaped at compile time, so `rate*` matches the five characters `rate*`
/// and nothing else.
pub struct PatternSet {
    entries: Vec<Entry>,
    engine: ContainsEngine,
}

struct Entry {
    pattern: String,
    regex: Regex,
}

/// Fast paths for [`PatternSet::contains`]. All three tiers answer the same
/// question; only the cost differs.
enum ContainsEngine {
    Literal(memmem::Finder<'static>),
    Automaton(AhoCorasick),
    Regexes,
}

impl PatternSet {
    /// Compile `patterns` for matching. Empty patterns are dropped with a
    /// warning; a zero-length forbidden pattern would match everywhere.
    pub fn new(patterns: &[String], case_sensitive: bool) -> Self {
        let entries: Vec<Entry> = patterns
            .iter()
            .filter_map(|pattern| {
                if pattern.is_empty() {
                    tracing::warn!("dropping empty pattern");
                    return None;
                }
                let built = RegexBuilder::new(&regex::escape(pattern))
                    .case_insensitive(!case_sensitive)
                    .build();
                match built {
                    Ok(regex) => Some(Entry { pattern: pattern.clone(), regex }),
                    Err(err) => {
                        tracing::warn!("dropping unmatchable pattern {pattern:?}: {err}");
                        None
                    }
                }
            })
            .collect();

        let engine = if case_sensitive {
            match entries.as_slice() {
                [] => ContainsEngine::Regexes,
                [only] => ContainsEngine::Literal(
                    memmem::Finder::new(only.pattern.as_bytes()).into_owned(),
                ),
                _ => match AhoCorasick::new(entries.iter().map(|e| e.pattern.as_bytes())) {
                    Ok(automaton) => ContainsEngine::Automaton(automaton),
                    Err(err) => {
                        tracing::debug!("automaton build failed, using regexes: {err}");
                        ContainsEngine::Regexes
                    }
                },
            }
        } else {
            // Case folding needs the regex tier.
            ContainsEngine::Regexes
        };

        Self { entries, engine }
    }

    /// Whether no patterns survived compilation. An empty set never matches.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any pattern occurs anywhere in `text`.
    pub fn contains(&self, text: &str) -> bool {
        match &self.engine {
            ContainsEngine::Literal(finder) => finder.find(text.as_bytes()).is_some(),
            ContainsEngine::Automaton(automaton) => automaton.is_match(text),
            ContainsEngine::Regexes => self.entries.iter().any(|e| e.regex.is_match(text)),
        }
    }

    /// Every distinct (pattern, matched text) pair in `text` with its
    /// non-overlapping occurrence count.
    ///
    /// Entries keep first-encounter order: patterns in configured order,
    /// and within one pattern, spellings in the order they first appear.
    pub fn find_matches(&self, text: &str) -> Vec<PatternMatch> {
        let mut matches: Vec<PatternMatch> = Vec::new();
        for entry in &self.entries {
            let mut spellings: Vec<PatternMatch> = Vec::new();
            for found in entry.regex.find_iter(text) {
                let actual = found.as_str();
                match spellings.iter().position(|m| m.matched == actual) {
                    Some(i) => spellings[i].count += 1,
                    None => spellings.push(PatternMatch {
                        pattern: entry.pattern.clone(),
                        matched: actual.to_string(),
                        count: 1,
                    }),
                }
            }
            matches.extend(spellings);
        }
        matches
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
