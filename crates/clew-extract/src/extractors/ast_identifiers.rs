// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AST-based identifier extraction: one constraint per function or type
//! declaration, named via field lookup with language-shaped fallbacks.

use clew_ast::{find_by_types, Node};
use clew_core::{
    Constraint, ConstraintKind, ConstraintSet, ConstraintSource, Language, Severity, StringInterner,
    AST_CONFIDENCE,
};
use std::collections::HashSet;

const FUNCTION_NODE_TYPES: &[(Language, &[&str])] = &[
    (Language::Python, &["function_definition", "async_function_definition"]),
    (Language::TypeScript, &["function_declaration", "method_definition", "arrow_function"]),
    (Language::Tsx, &["function_declaration", "method_definition", "arrow_function"]),
    (Language::JavaScript, &["function_declaration", "method_definition", "arrow_function"]),
    (Language::Rust, &["function_item", "function_signature_item"]),
    (Language::Zig, &["FnProto", "TestDecl"]),
    (Language::Go, &["function_declaration", "method_declaration"]),
    (Language::C, &["function_definition"]),
    (Language::Cpp, &["function_definition"]),
    (Language::Java, &["method_declaration", "constructor_declaration"]),
];

const TYPE_NODE_TYPES: &[(Language, &[&str])] = &[
    (Language::Python, &["class_definition"]),
    (Language::TypeScript, &["class_declaration", "interface_declaration", "type_alias_declaration", "enum_declaration"]),
    (Language::Tsx, &["class_declaration", "interface_declaration", "type_alias_declaration", "enum_declaration"]),
    (Language::JavaScript, &["class_declaration"]),
    (Language::Rust, &["struct_item", "enum_item", "trait_item", "union_item"]),
    (Language::Zig, &["ContainerDecl"]),
    (Language::Go, &["type_declaration"]),
    (Language::C, &["struct_specifier", "union_specifier", "enum_specifier"]),
    (Language::Cpp, &["class_specifier", "struct_specifier", "union_specifier", "enum_specifier"]),
    (Language::Java, &["class_declaration", "interface_declaration", "enum_declaration"]),
];

fn node_types_for(
    language: Language,
    table: &'static [(Language, &'static [&'static str])],
) -> HashSet<&'static str> {
    table
        .iter()
        .find(|(l, _)| *l == language)
        .map(|(_, types)| types.iter().copied().collect())
        .unwrap_or_default()
}

/// Whether `kind` names a type declaration for which a `type_identifier`
/// child (rather than a plain `identifier`) holds the name.
fn prefers_type_identifier(kind: &str) -> bool {
    matches!(
        kind,
        "class_declaration"
            | "class_definition"
            | "class_specifier"
            | "interface_declaration"
            | "type_alias_declaration"
            | "enum_declaration"
            | "enum_item"
            | "enum_specifier"
            | "struct_item"
            | "trait_item"
    )
}

/// Resolve a declaration node's name via, in order: `childByFieldName("name")`,
/// a Python `class NAME` text fallback, then a type-vs-term child-kind
/// fallback (`type_identifier` for class/interface/enum/alias kinds,
/// `identifier` otherwise).
fn resolve_name(node: Node<'_>) -> Option<String> {
    if let Some(name_node) = node.child_by_field_name("name") {
        return Some(name_node.text().to_string());
    }

    if node.kind() == "class_definition" {
        if let Some(name) = python_class_name_fallback(node.text()) {
            return Some(name);
        }
    }

    let wanted = if prefers_type_identifier(node.kind()) {
        "type_identifier"
    } else {
        "identifier"
    };
    node.named_children().find(|c| c.kind() == wanted).map(|c| c.text().to_string())
}

fn python_class_name_fallback(text: &str) -> Option<String> {
    let rest = text.strip_prefix("class ")?;
    let name: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!name.is_empty()).then_some(name)
}

/// Walk `root`, emitting one `syntactic`/`info` constraint per function and
/// type declaration found, named via [`resolve_name`].
pub fn extract(root: Node<'_>, language: Language, interner: &mut StringInterner) -> ConstraintSet {
    let mut set = ConstraintSet::labeled("ast_identifiers");

    let function_types = node_types_for(language, FUNCTION_NODE_TYPES);
    let type_types = node_types_for(language, TYPE_NODE_TYPES);
    let mut all_types = function_types.clone();
    all_types.extend(&type_types);
    if all_types.is_empty() {
        return set;
    }

    let grouped = find_by_types(root, &all_types);

    for (kind, nodes) in &grouped {
        let is_function = function_types.contains(kind.as_str());
        for node in nodes {
            let Some(name) = resolve_name(*node) else { continue };
            let description = if is_function {
                format!("Function declaration: {name}")
            } else {
                format!("Type declaration: {name}")
            };
            set.add(Constraint {
                kind: if is_function { ConstraintKind::Syntactic } else { ConstraintKind::TypeSafety },
                severity: Severity::Info,
                name: interner.intern(&name),
                description: interner.intern(&description),
                source: ConstraintSource::AstPattern,
                confidence: AST_CONFIDENCE,
                frequency: 1,
                origin_line: Some(node.start_position().line),
            });
        }
    }

    set
}
