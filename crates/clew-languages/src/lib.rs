// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree-sitter grammar registry.
//!
//! This crate's only job is the mapping from a [`clew_core::Language`] tag
//! to a concrete, version-pinned `tree_sitter::Language`. Every grammar
//! crate dependency here is pinned to an exact version in `Cargo.toml`;
//! [`grammar_for`] fails loudly with [`ClewError::GrammarVersionMismatch`]
//! if a pinned grammar's ABI ever drifts outside the range the linked
//! `tree-sitter` runtime accepts, rather than letting every extractor see
//! silent zero-count results.

use clew_core::{ClewError, Language, Result};

/// Look up the tree-sitter grammar for `language`.
///
/// # Errors
/// Returns [`ClewError::GrammarVersionMismatch`] if the grammar's ABI
/// version falls outside `tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION
/// ..= tree_sitter::LANGUAGE_VERSION`.
pub fn grammar_for(language: Language) -> Result<tree_sitter::Language> {
    let grammar = match language {
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        Language::Python => tree_sitter_python::LANGUAGE.into(),
        Language::Rust => tree_sitter_rust::LANGUAGE.into(),
        Language::Go => tree_sitter_go::LANGUAGE.into(),
        Language::Zig => tree_sitter_zig::LANGUAGE.into(),
        Language::C => tree_sitter_c::LANGUAGE.into(),
        Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        Language::Java => tree_sitter_java::LANGUAGE.into(),
    };
    check_abi(language, &grammar)?;
    Ok(grammar)
}

fn check_abi(language: Language, grammar: &tree_sitter::Language) -> Result<()> {
    let abi = grammar.abi_version();
    let min = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION;
    let max = tree_sitter::LANGUAGE_VERSION;
    if abi < min || abi > max {
        return Err(ClewError::GrammarVersionMismatch {
            language: language.to_string(),
            grammar_abi: abi,
            min_abi: min,
            max_abi: max,
        });
    }
    Ok(())
}

/// The node-type strings each extractor and hole detector targets, per
/// language. This inventory is documentation, not code executed at
/// runtime: it exists so a grammar upgrade that renames a node type
/// (`fn_item` vs `function_item`) is easy to audit against what the
/// extractors actually match on.
pub mod node_types {
    /// Function-like declaration node kinds, keyed by language tag.
    pub const FUNCTION_LIKE: &[(&str, &[&str])] = &[
        ("python", &["function_definition", "async_function_definition"]),
        (
            "typescript",
            &["function_declaration", "method_definition", "arrow_function"],
        ),
        (
            "javascript",
            &["function_declaration", "method_definition", "arrow_function"],
        ),
        ("rust", &["function_item", "function_signature_item"]),
        ("zig", &["FnProto", "TestDecl"]),
        ("go", &["function_declaration", "method_declaration"]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_language_resolves_a_grammar() {
        for lang in Language::ALL {
            grammar_for(lang).unwrap_or_else(|e| panic!("{lang}: {e}"));
        }
    }
}
