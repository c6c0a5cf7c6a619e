// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fallback matcher: a single pass over source bytes, checking every
//! rule in a table against the prefix starting at each offset.
//!
//! This is the AST-free extraction path (`Strategy::PatternOnly`, and the
//! degraded half of `Strategy::TreeSitterWithFallback` when parsing fails).
//! It never builds a tree, never allocates per-node, and reports every
//! match it sees — overlapping matches at the same offset are not merged
//! or ranked here; that's the orchestrator's job.

use super::PatternRule;

/// One occurrence of a [`PatternRule`] in a source file.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    pub rule: &'static PatternRule,
    /// 1-based source line.
    pub line: u32,
    /// Byte offset from the start of `line` (0-based).
    pub column: u32,
    /// The full current line the match occurred on.
    pub context: String,
}

/// Scan `source` once, testing every rule in `table` against the byte
/// prefix at each offset. A rule may match more than once per file, and
/// several rules may match at the same offset — all such matches are
/// reported; the matcher performs no deduplication.
pub fn find_matches(source: &str, table: &'static [PatternRule]) -> Vec<PatternMatch> {
    let bytes = source.as_bytes();
    let mut matches = Vec::new();
    let mut line: u32 = 1;
    let mut line_start = 0usize;

    let mut offset = 0usize;
    while offset < bytes.len() {
        for rule in table {
            let pattern = rule.pattern.as_bytes();
            if bytes[offset..].starts_with(pattern) {
                let line_end = source[line_start..]
                    .find('\n')
                    .map_or(source.len(), |rel| line_start + rel);
                let context = source[line_start..line_end].to_string();
                let column = (offset - line_start) as u32;
                matches.push(PatternMatch { rule, line, column, context });
            }
        }

        if bytes[offset] == b'\n' {
            line += 1;
            line_start = offset + 1;
        }
        offset += 1;
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use clew_core::Language;

    #[test]
    fn finds_rule_at_correct_line_and_column() {
        let table = crate::patterns::table_for(Language::Rust);
        let source = "fn main() {\n    unsafe {}\n}\n";
        let matches = find_matches(source, table);
        let unsafe_match = matches
            .iter()
            .find(|m| m.rule.pattern == "unsafe ")
            .expect("expected an unsafe match");
        assert_eq!(unsafe_match.line, 2);
        assert_eq!(unsafe_match.column, 4);
        assert_eq!(unsafe_match.context, "    unsafe {}");
    }

    #[test]
    fn overlapping_rules_all_reported_without_dedup() {
        let table = crate::patterns::table_for(Language::Rust);
        let source = "fn f() -> Option<Result<u32, ()>> {}\n";
        let matches = find_matches(source, table);
        assert!(matches.iter().any(|m| m.rule.pattern == "fn "));
        assert!(matches.iter().any(|m| m.rule.pattern == "Option<"));
        assert!(matches.iter().any(|m| m.rule.pattern == "Result<"));
    }

    #[test]
    fn empty_source_has_no_matches() {
        let table = crate::patterns::table_for(Language::Python);
        assert!(find_matches("", table).is_empty());
    }

    #[test]
    fn repeated_pattern_is_matched_each_time() {
        let table = crate::patterns::table_for(Language::Python);
        let source = "def a():\n    pass\ndef b():\n    pass\n";
        let matches: Vec<_> = find_matches(source, table)
            .into_iter()
            .filter(|m| m.rule.pattern == "def ")
            .collect();
        assert_eq!(matches.len(), 2);
    }
}
