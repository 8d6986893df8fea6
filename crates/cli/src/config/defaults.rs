// SPDX-License-Identifier: MIT

//! Centralized default values for configuration.

/// Matching ignores letter case unless configured otherwise.
pub const CASE_SENSITIVE: bool = false;

/// Default forbidden patterns when no configuration is present.
pub fn patterns() -> Vec<String> {
    vec!["nomerge".to_string()]
}

/// Starter configuration written by `mergeguard init`.
pub const STARTER: &str = r#"# Forbidden patterns: literal text that blocks a merge when found.
patterns = ["nomerge"]

# Match patterns case-sensitively.
# case_sensitive = false

# Paths excluded from scanning. Supports *, ** and ? wildcards.
# ignore = ["dist/**", "*.lock"]
"#;
