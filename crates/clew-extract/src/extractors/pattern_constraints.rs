// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Projects the pattern-only staging data — [`SyntaxStructure`] and raw
//! [`PatternMatch`]es — into summary [`Constraint`]s.

use crate::patterns::{PatternCategory, PatternMatch};
use clew_core::{
    Constraint, ConstraintKind, ConstraintSet, ConstraintSource, Severity, StringInterner,
    SyntaxStructure, PATTERN_CONFIDENCE,
};

/// Project a [`SyntaxStructure`] into the six summary constraints described
/// by the structure→constraint table, skipping any row whose count is zero.
pub fn from_syntax_structure(structure: &SyntaxStructure, interner: &mut StringInterner) -> ConstraintSet {
    let mut set = ConstraintSet::labeled("syntax_structure");

    let total = structure.functions.len();
    if total > 0 {
        let async_count = structure.async_count();
        let typed_count = structure.typed_count();
        set.add(Constraint {
            kind: ConstraintKind::Syntactic,
            severity: Severity::Info,
            name: interner.intern("function_structure"),
            description: interner.intern(&format!(
                "Code contains {total} function definitions ({async_count} async, {typed_count} typed)"
            )),
            source: ConstraintSource::AstPattern,
            confidence: PATTERN_CONFIDENCE,
            frequency: total as u32,
            origin_line: None,
        });

        let typed_ratio = structure.typed_ratio();
        if typed_ratio > 0.5 {
            set.add(Constraint {
                kind: ConstraintKind::TypeSafety,
                severity: Severity::Info,
                name: interner.intern("typed_functions"),
                description: interner.intern(&format!("{typed_count} of {total} functions carry a return type")),
                source: ConstraintSource::AstPattern,
                confidence: typed_ratio,
                frequency: typed_count as u32,
                origin_line: None,
            });
        }

        let error_handling_count = structure.error_handling_count();
        if error_handling_count > 0 {
            set.add(Constraint {
                kind: ConstraintKind::Semantic,
                severity: Severity::Info,
                name: interner.intern("error_handling"),
                description: interner.intern(&format!("{error_handling_count} functions carry error-handling signals")),
                source: ConstraintSource::ControlFlow,
                confidence: PATTERN_CONFIDENCE,
                frequency: error_handling_count as u32,
                origin_line: None,
            });
        }

        if async_count > 0 {
            set.add(Constraint {
                kind: ConstraintKind::Semantic,
                severity: Severity::Info,
                name: interner.intern("async_functions"),
                description: interner.intern(&format!("{async_count} functions are async")),
                source: ConstraintSource::ControlFlow,
                confidence: PATTERN_CONFIDENCE,
                frequency: async_count as u32,
                origin_line: None,
            });
        }
    }

    if !structure.types.is_empty() {
        set.add(Constraint {
            kind: ConstraintKind::TypeSafety,
            severity: Severity::Info,
            name: interner.intern("type_definitions"),
            description: interner.intern(&format!("Code declares {} types", structure.types.len())),
            source: ConstraintSource::AstPattern,
            confidence: PATTERN_CONFIDENCE,
            frequency: structure.types.len() as u32,
            origin_line: None,
        });
    }

    if !structure.imports.is_empty() {
        set.add(Constraint {
            kind: ConstraintKind::Architectural,
            severity: Severity::Info,
            name: interner.intern("modularity"),
            description: interner.intern(&format!("Code imports {} modules", structure.imports.len())),
            source: ConstraintSource::AstPattern,
            confidence: PATTERN_CONFIDENCE,
            frequency: structure.imports.len() as u32,
            origin_line: None,
        });
    }

    set
}

fn category_kind(category: PatternCategory) -> ConstraintKind {
    match category {
        PatternCategory::FunctionDecl => ConstraintKind::Syntactic,
        PatternCategory::TypeAnnotation => ConstraintKind::TypeSafety,
        PatternCategory::AsyncPattern => ConstraintKind::Semantic,
        PatternCategory::ErrorHandling => ConstraintKind::Semantic,
        PatternCategory::Imports => ConstraintKind::Architectural,
        PatternCategory::ClassStruct => ConstraintKind::TypeSafety,
        PatternCategory::Metadata => ConstraintKind::Operational,
        PatternCategory::MemoryManagement => ConstraintKind::Security,
    }
}

/// Turn raw matcher output into one constraint per match, preserving scan
/// order and each rule's own `kind`/`description`. No aggregation happens
/// here — identical repeated matches (e.g. ten `fn ` hits) become ten
/// constraints; deduplication by `(name, kind)` is the orchestrator's job
/// in `Combined` mode.
pub fn from_pattern_matches(matches: &[PatternMatch], interner: &mut StringInterner) -> ConstraintSet {
    let mut set = ConstraintSet::labeled("pattern_matches");
    for m in matches {
        set.add(Constraint {
            kind: category_kind(m.rule.category),
            severity: Severity::Info,
            name: interner.intern(m.rule.pattern),
            description: interner.intern(m.rule.description),
            source: ConstraintSource::AstPattern,
            confidence: PATTERN_CONFIDENCE,
            frequency: 1,
            origin_line: Some(m.line),
        });
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use clew_core::{DeclKind, FunctionDecl, ImportDecl, TypeDecl};

    fn func(is_async: bool, typed: bool, err: bool) -> FunctionDecl {
        FunctionDecl {
            name: "f".to_string(),
            line: 1,
            is_async,
            is_public: true,
            return_type: typed.then(|| "T".to_string()),
            has_error_handling: err,
        }
    }

    #[test]
    fn empty_structure_emits_nothing() {
        let mut interner = StringInterner::new();
        let set = from_syntax_structure(&SyntaxStructure::new(), &mut interner);
        assert!(set.is_empty());
    }

    #[test]
    fn typed_ratio_above_half_emits_typed_functions() {
        let mut interner = StringInterner::new();
        let mut structure = SyntaxStructure::new();
        structure.functions.push(func(false, true, false));
        structure.functions.push(func(false, true, false));
        structure.functions.push(func(false, false, false));
        let set = from_syntax_structure(&structure, &mut interner);
        assert!(set.iter().any(|c| interner.resolve(c.name) == "typed_functions"));
    }

    #[test]
    fn typed_ratio_at_half_does_not_emit() {
        let mut interner = StringInterner::new();
        let mut structure = SyntaxStructure::new();
        structure.functions.push(func(false, true, false));
        structure.functions.push(func(false, false, false));
        let set = from_syntax_structure(&structure, &mut interner);
        assert!(!set.iter().any(|c| interner.resolve(c.name) == "typed_functions"));
    }

    #[test]
    fn types_and_imports_emit_independently_of_functions() {
        let mut interner = StringInterner::new();
        let mut structure = SyntaxStructure::new();
        structure.types.push(TypeDecl { name: "Widget".to_string(), line: 1, kind: DeclKind::Struct });
        structure.imports.push(ImportDecl { path: "std::fmt".to_string(), line: 1 });
        let set = from_syntax_structure(&structure, &mut interner);
        assert_eq!(set.len(), 2);
    }
}
