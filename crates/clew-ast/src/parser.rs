// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::tree::Tree;
use clew_core::{ClewError, Language, Result};

/// Parse `source` as `language`, returning a [`Tree`] whose root may still
/// report [`Tree::has_error`] on structurally damaged input.
///
/// This function itself only fails for a grammar/runtime ABI mismatch (see
/// [`clew_languages::grammar_for`]) or if tree-sitter's parser is cancelled
/// mid-parse and produces no tree at all — ordinary syntax errors are
/// recovered into an error-flagged tree, never surfaced as an `Err` here.
/// The caller (the orchestrator) decides whether `has_error()` should be
/// treated as fatal for the selected strategy.
pub fn parse(language: Language, source: &str) -> Result<Tree> {
    let grammar = clew_languages::grammar_for(language)?;
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&grammar).map_err(|e| {
        ClewError::ParseError {
            language: language.to_string(),
            message: e.to_string(),
        }
    })?;
    let inner = parser
        .parse(source, None)
        .ok_or_else(|| ClewError::AllocationFailure(format!("tree-sitter returned no tree for {language}")))?;
    Ok(Tree::new(inner, source.to_string(), language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_source_without_error() {
        let tree = parse(Language::Rust, "fn main() {}").unwrap();
        assert!(!tree.has_error());
    }

    #[test]
    fn malformed_source_still_yields_a_tree() {
        let tree = parse(Language::Rust, "fn main( {{{").unwrap();
        assert!(tree.has_error());
    }

    #[test]
    fn empty_source_parses_without_error() {
        let tree = parse(Language::Python, "").unwrap();
        assert!(!tree.has_error());
        assert_eq!(tree.root().named_child_count(), 0);
    }
}
