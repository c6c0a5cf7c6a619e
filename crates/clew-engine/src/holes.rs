// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C4's other half: the semantic hole detector. Walks a parsed AST looking
//! for four families of incompleteness — empty function bodies,
//! unimplemented-method markers, non-exhaustive matches, and missing type
//! annotations — each with language-specific node types and text checks.

use clew_ast::{pre_order, Node, VisitControl};
use clew_core::{Hole, HoleKind, HoleLocation, HoleOrigin, HoleScale, Language, Provenance};
use std::time::{SystemTime, UNIX_EPOCH};

const FUNCTION_NODE_TYPES: &[(Language, &[&str])] = &[
    (Language::Python, &["function_definition", "async_function_definition"]),
    (Language::TypeScript, &["function_declaration", "method_definition", "arrow_function"]),
    (Language::Tsx, &["function_declaration", "method_definition", "arrow_function"]),
    (Language::JavaScript, &["function_declaration", "method_definition", "arrow_function"]),
    (Language::Rust, &["function_item", "function_signature_item"]),
    (Language::Zig, &["FnProto", "TestDecl"]),
    (Language::Go, &["function_declaration", "method_declaration"]),
];

fn function_node_types(language: Language) -> &'static [&'static str] {
    FUNCTION_NODE_TYPES
        .iter()
        .find(|(l, _)| *l == language)
        .map_or(&[], |(_, types)| *types)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Placeholder provenance built during the AST walk. The walk itself never
/// reads the clock — `timestamp` is stamped once, for the whole batch, after
/// [`detect`] returns — so re-running detection against unchanged source is
/// deterministic and replayable, not just id-stable.
fn provenance(file: &str) -> Provenance {
    Provenance {
        creator: "clew-hole-detector".to_string(),
        timestamp: 0,
        source_artifact: file.to_string(),
    }
}

fn location(file: &str, node: Node<'_>) -> HoleLocation {
    let start = node.start_position();
    let end = node.end_position();
    HoleLocation {
        file: file.to_string(),
        start_line: start.line,
        start_column: start.column,
        end_line: end.line,
        end_column: end.column,
    }
}

fn make_hole(
    file: &str,
    node: Node<'_>,
    scale: HoleScale,
    origin: HoleOrigin,
    kind: HoleKind,
    context: &str,
    confidence: f32,
) -> Hole {
    let start = node.start_position();
    Hole {
        id: Hole::compute_id(file, start.line, start.column),
        scale,
        origin,
        location: location(file, node),
        provenance: provenance(file),
        kind,
        expected_type: None,
        context: context.to_string(),
        confidence,
    }
}

/// Retrieve a function node's body: `childByFieldName("body")` first,
/// falling back to a `Block` named child for grammars (Zig) that don't tag
/// the body field by name.
fn body_of(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("body")
        .or_else(|| node.named_children().find(|c| c.kind() == "Block"))
}

fn inner_text(body: Node<'_>) -> &str {
    body.text().trim_start_matches('{').trim_end_matches('}').trim()
}

fn is_empty_body(body: Node<'_>, language: Language) -> bool {
    let inner = inner_text(body);
    match language {
        Language::Python => matches!(inner, "pass" | "..." | ""),
        Language::TypeScript | Language::Tsx | Language::JavaScript | Language::Zig => {
            inner.is_empty() || (language == Language::Zig && inner == "unreachable")
        }
        Language::Rust => inner.is_empty() || inner.contains("unimplemented!()") || inner.contains("todo!()"),
        _ => inner.is_empty(),
    }
}

fn detect_empty_function_bodies(root: Node<'_>, language: Language, file: &str, holes: &mut Vec<Hole>) {
    let types = function_node_types(language);
    if types.is_empty() {
        return;
    }
    pre_order(root, &mut |node| {
        if types.contains(&node.kind()) {
            if let Some(body) = body_of(node) {
                if is_empty_body(body, language) {
                    holes.push(make_hole(
                        file,
                        node,
                        HoleScale::Function,
                        HoleOrigin::Inferred,
                        HoleKind::EmptyFunctionBody,
                        "empty function body",
                        0.95,
                    ));
                }
            }
        }
        VisitControl::Continue
    });
}

fn detect_unimplemented_methods(root: Node<'_>, language: Language, file: &str, holes: &mut Vec<Hole>) {
    let (node_kind, needles, confidence): (&str, &[&str], f32) = match language {
        Language::Python => ("raise_statement", &["NotImplementedError"], 0.98),
        Language::Rust => ("macro_invocation", &["unimplemented!", "todo!"], 0.98),
        Language::TypeScript | Language::Tsx | Language::JavaScript => {
            ("throw_statement", &["TODO", "Not implemented", "NotImplementedError"], 0.90)
        }
        Language::Zig => ("builtin_call_expr", &["@panic"], 0.95),
        _ => return,
    };

    pre_order(root, &mut |node| {
        if node.kind() == node_kind {
            let text = node.text();
            let matched = if language == Language::Zig {
                text.contains("@panic") && (text.contains("TODO") || text.contains("not implemented"))
            } else {
                needles.iter().any(|n| text.contains(n))
            };
            if matched {
                holes.push(make_hole(
                    file,
                    node,
                    HoleScale::Statement,
                    HoleOrigin::UserMarked,
                    HoleKind::UnimplementedMethod,
                    text,
                    confidence,
                ));
            }
        }
        VisitControl::Continue
    });
}

fn detect_incomplete_match(root: Node<'_>, language: Language, file: &str, holes: &mut Vec<Hole>) {
    let node_kind = match language {
        Language::Python => "match_statement",
        Language::Rust => "match_expression",
        Language::TypeScript | Language::Tsx | Language::JavaScript => "switch_statement",
        Language::Zig => "switch_expr",
        _ => return,
    };

    pre_order(root, &mut |node| {
        if node.kind() == node_kind {
            let text = node.text();
            let incomplete = match language {
                Language::Python => !text.contains("case _:"),
                Language::Rust => text.contains("_ =>") && text.contains("todo!()"),
                Language::TypeScript | Language::Tsx | Language::JavaScript => !text.contains("default:"),
                Language::Zig => text.contains("else =>") && text.contains("unreachable"),
                _ => false,
            };
            if incomplete {
                let confidence = match language {
                    Language::Python => 0.70,
                    Language::Rust => 0.95,
                    Language::TypeScript | Language::Tsx | Language::JavaScript => 0.65,
                    Language::Zig => 0.90,
                    _ => 0.0,
                };
                holes.push(make_hole(
                    file,
                    node,
                    HoleScale::Statement,
                    HoleOrigin::Inferred,
                    HoleKind::IncompleteMatch,
                    "non-exhaustive match",
                    confidence,
                ));
            }
        }
        VisitControl::Continue
    });
}

fn detect_missing_type_annotations(root: Node<'_>, language: Language, file: &str, holes: &mut Vec<Hole>) {
    let (node_kind, needle, confidence) = match language {
        Language::Zig => ("ParamDecl", "anytype", 0.75),
        Language::Rust => ("parameter", ": _", 0.80),
        _ => return,
    };

    pre_order(root, &mut |node| {
        if node.kind() == node_kind && node.text().contains(needle) {
            holes.push(make_hole(
                file,
                node,
                HoleScale::Expression,
                HoleOrigin::Inferred,
                HoleKind::MissingTypeAnnotation,
                node.text(),
                confidence,
            ));
        }
        VisitControl::Continue
    });
}

/// Run every detection family over `root`, tagging results with `file` for
/// hole-id computation. `file` need not be a real path — it's a stable key,
/// not an I/O target.
pub fn detect(root: Node<'_>, language: Language, file: &str) -> Vec<Hole> {
    let mut holes = Vec::new();
    detect_empty_function_bodies(root, language, file, &mut holes);
    detect_unimplemented_methods(root, language, file, &mut holes);
    detect_incomplete_match(root, language, file, &mut holes);
    detect_missing_type_annotations(root, language, file, &mut holes);
    let timestamp = now_unix_seconds();
    for hole in &mut holes {
        hole.provenance.timestamp = timestamp;
    }
    holes
}

/// Parse `source` as `language_tag` and run the hole detector against it.
/// Unsupported language tags and grammar/parse failures yield an empty
/// hole list — the detector never panics on bad input.
pub fn detect_holes(source: &str, language_tag: &str) -> Vec<Hole> {
    let Ok(language) = Language::parse_tag(language_tag) else {
        return Vec::new();
    };
    let Ok(tree) = clew_ast::parse(language, source) else {
        return Vec::new();
    };
    detect(tree.root(), language, "<input>")
}
