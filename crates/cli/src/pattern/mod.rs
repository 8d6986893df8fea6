// SPDX-License-Identifier: MIT

//! Forbidden-pattern matching.
//!
//! Containment checks pick the cheapest engine for the compiled set:
//! - Single literal, case-sensitive: memchr::memmem
//! - Multiple literals, case-sensitive: aho-corasick
//! - Case-insensitive: escaped-literal regex

pub mod matcher;

pub use matcher::{PatternMatch, PatternSet};
