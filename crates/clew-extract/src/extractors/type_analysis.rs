// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The AST-based type-constraint analyzer: a walk over type-annotation
//! nodes that sets four flags (`any`, `optional`, `null`, `union`) plus a
//! total annotation count. Keyword matches are word-bounded so `"any"`
//! never matches inside `"many"`.

use clew_ast::{pre_order, Node, VisitControl};
use clew_core::{
    Constraint, ConstraintKind, ConstraintSet, ConstraintSource, Language, Severity, StringInterner,
    GENERIC_TYPE_CONFIDENCE, RICH_TYPE_CONFIDENCE,
};

const TYPE_NODE_KINDS: &[&str] = &[
    "type_annotation",
    "type",
    "type_identifier",
    "generic_type",
    "union_type",
    "optional_type",
    "primitive_type",
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TypeAnalysis {
    pub has_any_types: bool,
    pub has_optional_types: bool,
    pub has_null_types: bool,
    pub has_union_types: bool,
    pub type_annotation_count: u32,
}

/// Whether `needle` occurs in `haystack` as a whole word — neither
/// preceded nor followed by an alphanumeric or `_` character.
fn contains_word(haystack: &str, needle: &str) -> bool {
    let bytes = haystack.as_bytes();
    let needle_bytes = needle.as_bytes();
    let mut start = 0;
    while let Some(rel) = haystack[start..].find(needle) {
        let idx = start + rel;
        let before_ok = idx == 0 || !is_word_byte(bytes[idx - 1]);
        let after_idx = idx + needle_bytes.len();
        let after_ok = after_idx >= bytes.len() || !is_word_byte(bytes[after_idx]);
        if before_ok && after_ok {
            return true;
        }
        start = idx + 1;
    }
    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn analyze_text(text: &str, language: Language, analysis: &mut TypeAnalysis) {
    let has_any = match language {
        Language::TypeScript | Language::Tsx | Language::JavaScript => {
            contains_word(text, "any") || contains_word(text, "unknown")
        }
        Language::Python => contains_word(text, "Any"),
        _ => false,
    };
    let has_optional = match language {
        Language::TypeScript | Language::Tsx | Language::JavaScript => {
            text.contains('?') || contains_word(text, "undefined")
        }
        Language::Python => contains_word(text, "Optional") || text.contains("| None"),
        _ => false,
    };
    let has_null = contains_word(text, "null") || contains_word(text, "None");
    let has_union = text.contains('|') || contains_word(text, "Union");

    analysis.has_any_types |= has_any;
    analysis.has_optional_types |= has_optional;
    analysis.has_null_types |= has_null;
    analysis.has_union_types |= has_union;
}

/// Walk `root` collecting type-annotation signal across every node whose
/// `kind()` looks like a type node for `language`.
pub fn analyze(root: Node<'_>, language: Language) -> TypeAnalysis {
    let mut analysis = TypeAnalysis::default();
    pre_order(root, &mut |node| {
        if TYPE_NODE_KINDS.contains(&node.kind()) {
            analysis.type_annotation_count += 1;
            analyze_text(node.text(), language, &mut analysis);
        }
        VisitControl::Continue
    });
    analysis
}

fn confidence_for(language: Language) -> f32 {
    match language {
        Language::TypeScript | Language::Tsx | Language::Python => RICH_TYPE_CONFIDENCE,
        _ => GENERIC_TYPE_CONFIDENCE,
    }
}

/// Project a [`TypeAnalysis`] into constraints, one per set flag plus a
/// total-count constraint when any annotations were seen at all.
pub fn to_constraints(analysis: TypeAnalysis, language: Language, interner: &mut StringInterner) -> ConstraintSet {
    let mut set = ConstraintSet::labeled("type_analysis");
    if analysis.type_annotation_count == 0 {
        return set;
    }
    let confidence = confidence_for(language);

    set.add(Constraint {
        kind: ConstraintKind::TypeSafety,
        severity: Severity::Info,
        name: interner.intern("type_annotation_count"),
        description: interner.intern(&format!("{} type annotations observed", analysis.type_annotation_count)),
        source: ConstraintSource::TypeSystem,
        confidence,
        frequency: analysis.type_annotation_count,
        origin_line: None,
    });

    let mut flag = |present: bool, name: &str, description: &str| {
        if present {
            set.add(Constraint {
                kind: ConstraintKind::TypeSafety,
                severity: Severity::Info,
                name: interner.intern(name),
                description: interner.intern(description),
                source: ConstraintSource::TypeSystem,
                confidence,
                frequency: 1,
                origin_line: None,
            });
        }
    };

    flag(analysis.has_any_types, "has_any_types", "Type annotations include an untyped escape hatch");
    flag(analysis.has_optional_types, "has_optional_types", "Type annotations include optional types");
    flag(analysis.has_null_types, "has_null_types", "Type annotations include an explicit null/None type");
    flag(analysis.has_union_types, "has_union_types", "Type annotations include union types");

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundary_excludes_substring_matches() {
        assert!(!contains_word("many", "any"));
        assert!(contains_word("x: any", "any"));
        assert!(contains_word("any", "any"));
    }

    #[test]
    fn union_detection_via_pipe_or_keyword() {
        let mut a = TypeAnalysis::default();
        analyze_text("string | number", Language::TypeScript, &mut a);
        assert!(a.has_union_types);

        let mut b = TypeAnalysis::default();
        analyze_text("Union[int, str]", Language::Python, &mut b);
        assert!(b.has_union_types);
    }

    #[test]
    fn python_optional_bracket_and_pipe_none_both_detected() {
        let mut a = TypeAnalysis::default();
        analyze_text("Optional[int]", Language::Python, &mut a);
        assert!(a.has_optional_types);

        let mut b = TypeAnalysis::default();
        analyze_text("int | None", Language::Python, &mut b);
        assert!(b.has_optional_types);
    }

    #[test]
    fn empty_analysis_emits_no_constraints() {
        let mut interner = StringInterner::new();
        let set = to_constraints(TypeAnalysis::default(), Language::Rust, &mut interner);
        assert!(set.is_empty());
    }
}
