// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end extraction/hole-detection scenarios exercising the public
//! `Orchestrator::extract`/`detect_holes` surface against realistic
//! per-language snippets.

use clew_core::{ConstraintKind, ConstraintSource};
use clew_engine::{detect_holes, Orchestrator, Strategy};

fn resolved_names(result: &clew_engine::ExtractionResult, orchestrator: &Orchestrator) -> Vec<String> {
    result.constraints.iter().map(|c| orchestrator.resolve(c.name).to_string()).collect()
}

#[test]
fn typescript_prime_generator_combined_mode() {
    let source = r#"
function generatePrimes(limit: number): number[] {
    const sieve: boolean[] = new Array(limit + 1).fill(true);
    const primes: number[] = [];
    for (let i = 2; i <= limit; i++) {
        if (sieve[i]) {
            for (let j = i * i; j <= limit; j += i) {
                sieve[j] = false;
            }
        }
    }
    for (let i = 2; i <= limit; i++) {
        if (sieve[i]) {
            primes.push(i);
        }
    }
    return primes;
}
"#;
    let mut orchestrator = Orchestrator::new();
    let result = orchestrator.extract(source, "typescript", Strategy::Combined);

    let generate_primes = result
        .constraints
        .iter()
        .find(|c| orchestrator.resolve(c.name) == "generatePrimes")
        .expect("generatePrimes constraint");
    assert_eq!(generate_primes.kind, ConstraintKind::Syntactic);
    assert!((generate_primes.confidence - 0.95).abs() < f32::EPSILON);

    let function_structure = result
        .constraints
        .iter()
        .find(|c| orchestrator.resolve(c.name) == "function_structure")
        .expect("function_structure summary constraint");
    assert_eq!(function_structure.frequency, 1);

    let typed_functions = result
        .constraints
        .iter()
        .find(|c| orchestrator.resolve(c.name) == "typed_functions")
        .expect("typed_functions constraint");
    assert!(typed_functions.confidence >= 0.5);

    assert!(!resolved_names(&result, &orchestrator).iter().any(|n| n == "has_any_types"));
}

#[test]
fn typescript_rate_limiter_class_combined_mode() {
    let source = r#"
class RateLimiter {
    constructor(capacity: number) {
    }

    tryAcquire(tokens: number = 1): boolean {
        return true;
    }

    private refill(): void {
    }
}
"#;
    let mut orchestrator = Orchestrator::new();
    let result = orchestrator.extract(source, "typescript", Strategy::Combined);
    let names = resolved_names(&result, &orchestrator);

    let rate_limiter = result
        .constraints
        .iter()
        .find(|c| orchestrator.resolve(c.name) == "RateLimiter")
        .expect("RateLimiter constraint");
    assert_eq!(rate_limiter.kind, ConstraintKind::TypeSafety);

    let try_acquire = result
        .constraints
        .iter()
        .find(|c| orchestrator.resolve(c.name) == "tryAcquire")
        .expect("tryAcquire constraint");
    assert_eq!(try_acquire.kind, ConstraintKind::Syntactic);

    let refill = result
        .constraints
        .iter()
        .find(|c| orchestrator.resolve(c.name) == "refill")
        .expect("refill constraint");
    assert_eq!(refill.kind, ConstraintKind::Syntactic);

    let function_identifier_count =
        names.iter().filter(|n| matches!(n.as_str(), "constructor" | "tryAcquire" | "refill")).count();
    assert_eq!(function_identifier_count, 3);

    let type_definitions = result
        .constraints
        .iter()
        .find(|c| orchestrator.resolve(c.name) == "type_definitions")
        .expect("type_definitions summary constraint");
    assert_eq!(type_definitions.frequency, 1);
}

#[test]
fn python_not_implemented_stub_is_an_unimplemented_method_hole() {
    let source = "def area(self):\n    raise NotImplementedError\n";
    let holes = detect_holes(source, "python");
    let hole = holes
        .iter()
        .find(|h| h.kind == clew_core::HoleKind::UnimplementedMethod)
        .expect("unimplemented_method hole");
    assert!((hole.confidence - 0.98).abs() < f32::EPSILON);
    assert_eq!(hole.location.start_line, 2);
}

#[test]
fn rust_non_exhaustive_match_with_todo_is_an_incomplete_match_hole() {
    let source = "fn f(x: i32) -> &'static str {\n    match x {\n        0 => \"zero\",\n        _ => todo!(),\n    }\n}\n";
    let holes = detect_holes(source, "rust");
    let hole = holes
        .iter()
        .find(|h| h.kind == clew_core::HoleKind::IncompleteMatch)
        .expect("incomplete_match hole");
    assert!((hole.confidence - 0.95).abs() < f32::EPSILON);
}

#[test]
fn zig_empty_function_body_is_a_hole_but_error_union_body_is_not() {
    let source = "fn foo() void {\n}\nfn bar() !void {\n    return error.Oops;\n}\n";
    let holes = detect_holes(source, "zig");
    let empty_body_lines: Vec<u32> =
        holes.iter().filter(|h| h.kind == clew_core::HoleKind::EmptyFunctionBody).map(|h| h.location.start_line).collect();
    assert!(empty_body_lines.contains(&1), "fn foo should be flagged empty: {empty_body_lines:?}");
    assert!(!empty_body_lines.contains(&3), "fn bar has a real body and must not be flagged: {empty_body_lines:?}");
}

#[test]
fn unsupported_language_tag_is_silent_under_fallback_but_an_error_under_ast_only() {
    let mut orchestrator = Orchestrator::new();

    let fallback = orchestrator.extract("print(1)", "cobol", Strategy::TreeSitterWithFallback);
    assert!(fallback.constraints.is_empty());
    assert!(!fallback.tree_sitter_available);
    assert!(fallback.tree_sitter_errors.is_none());

    let ast_only = orchestrator.extract("print(1)", "cobol", Strategy::TreeSitterOnly);
    assert!(ast_only.constraints.is_empty());
    let error = ast_only.tree_sitter_errors.expect("UnsupportedLanguage error string");
    assert!(error.contains("cobol"));
    assert_eq!(ast_only.constraints.iter().find(|c| c.source == ConstraintSource::LlmAnalysis), None);
}
