// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-language pattern rule tables: literal substrings classified by
//! category, used by the AST-free fallback matcher.

mod matcher;
mod tables;

pub use matcher::{find_matches, PatternMatch};

use clew_core::ConstraintKind;

/// Which kind of syntactic signal a [`PatternRule`] is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCategory {
    FunctionDecl,
    TypeAnnotation,
    AsyncPattern,
    ErrorHandling,
    Imports,
    ClassStruct,
    Metadata,
    MemoryManagement,
}

/// A single literal substring classified by language, category, and
/// constraint kind. Rules are compile-time constants; [`matcher`] never
/// owns or mutates them.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub category: PatternCategory,
    pub kind: ConstraintKind,
    pub description: &'static str,
}

/// The pattern table for one language, as a flat slice of rules across all
/// eight categories.
pub fn table_for(language: clew_core::Language) -> &'static [PatternRule] {
    tables::table_for(language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clew_core::Language;

    #[test]
    fn every_supported_language_has_a_non_empty_table() {
        for lang in Language::ALL {
            assert!(
                !table_for(lang).is_empty(),
                "expected a pattern table for {lang}"
            );
        }
    }
}
