// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C3: per-language extractors, hosting both the AST-based walks and the
//! pattern-only fallback path. `clew-engine` is the only intended caller —
//! this crate has no opinion about strategy selection or deduplication.

pub mod extractors;
pub mod patterns;

use clew_ast::Node;
use clew_core::{ConstraintSet, Language, StringInterner};

/// Run every pattern-only extraction path for one source file: the
/// line-based `SyntaxStructure` projection plus the raw table-matcher
/// projection, concatenated in that order.
pub fn extract_patterns(language: Language, source: &str, interner: &mut StringInterner) -> ConstraintSet {
    let structure = extractors::line_based::extract(language, source);
    let mut set = extractors::pattern_constraints::from_syntax_structure(&structure, interner);

    let table = patterns::table_for(language);
    let matches = patterns::find_matches(source, table);
    set.extend(extractors::pattern_constraints::from_pattern_matches(&matches, interner));

    set
}

/// Run every AST-based extraction path for one parsed tree: identifier
/// extraction followed by the type-constraint analyzer.
pub fn extract_ast(root: Node<'_>, language: Language, interner: &mut StringInterner) -> ConstraintSet {
    let mut set = extractors::ast_identifiers::extract(root, language, interner);
    let analysis = extractors::type_analysis::analyze(root, language);
    set.extend(extractors::type_analysis::to_constraints(analysis, language, interner));
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_extraction_is_non_empty_for_simple_rust_source() {
        let mut interner = StringInterner::new();
        let set = extract_patterns(Language::Rust, "pub fn run() -> Result<(), ()> {\n    Ok(())\n}\n", &mut interner);
        assert!(!set.is_empty());
    }

    #[test]
    fn ast_extraction_is_non_empty_for_simple_rust_source() {
        let tree = clew_ast::parse(Language::Rust, "pub fn run() -> Option<u32> { None }\n").unwrap();
        let mut interner = StringInterner::new();
        let set = extract_ast(tree.root(), Language::Rust, &mut interner);
        assert!(!set.is_empty());
    }
}
