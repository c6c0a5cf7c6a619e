// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C4: the hybrid orchestrator. Selects among four extraction strategies,
//! merges AST and pattern results with `(name, kind)` deduplication, and
//! owns the per-instance string interner and extraction cache.

use clew_core::{CacheKey, Constraint, ExtractionCache, Language, StringInterner};
use std::collections::HashSet;

/// Which extraction path(s) to run for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// AST-only. Fatal (recorded as an error string, no fallback) if the
    /// language is unsupported or the parse has structural errors.
    TreeSitterOnly,
    /// Pattern-only. Never touches the AST front end.
    PatternOnly,
    /// AST first; falls back to pattern extraction if parsing fails or the
    /// resulting tree reports `has_error()`. The default.
    TreeSitterWithFallback,
    /// Runs both paths and merges them, AST-sourced entries winning any
    /// `(name, kind)` collision.
    Combined,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::TreeSitterWithFallback
    }
}

/// The result of one `extract` call.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub constraints: Vec<Constraint>,
    pub strategy_used: Strategy,
    pub tree_sitter_available: bool,
    pub tree_sitter_errors: Option<String>,
}

/// Owns the per-run [`StringInterner`] and [`ExtractionCache`] backing
/// repeated `extract` calls. Each `Orchestrator` is independent — no state
/// is shared across instances, matching the core's per-run isolation
/// contract (independent `(source, language)` extractions may run in
/// parallel only if each has its own orchestrator).
pub struct Orchestrator {
    interner: StringInterner,
    cache: ExtractionCache<Vec<Constraint>>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::with_cache_capacity(256)
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            interner: StringInterner::new(),
            cache: ExtractionCache::new(capacity),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Resolve every interned `name`/`description` in a result to owned
    /// strings, for callers (the CLI report, tests) that want plain text
    /// rather than symbols.
    pub fn resolve(&self, symbol: clew_core::Symbol) -> &str {
        self.interner.resolve(symbol)
    }

    /// Run `strategy` against `source` tagged `language_tag`. Never panics
    /// or returns `Err` for a recoverable condition (unsupported language,
    /// parse error, grammar mismatch) — those are folded into
    /// `tree_sitter_errors` and an empty or degraded constraint list.
    pub fn extract(&mut self, source: &str, language_tag: &str, strategy: Strategy) -> ExtractionResult {
        let language = match Language::parse_tag(language_tag) {
            Ok(lang) => lang,
            Err(err) => {
                tracing::debug!(tag = language_tag, "unsupported language tag");
                let tree_sitter_errors = match strategy {
                    Strategy::TreeSitterOnly => Some(err.to_string()),
                    _ => None,
                };
                return ExtractionResult {
                    constraints: Vec::new(),
                    strategy_used: strategy,
                    tree_sitter_available: false,
                    tree_sitter_errors,
                };
            }
        };

        let cache_key = CacheKey::new(source, language, strategy as u8);
        if let Some(constraints) = self.cache.get(&cache_key) {
            tracing::debug!(%language, "cache hit");
            return ExtractionResult {
                constraints,
                strategy_used: strategy,
                tree_sitter_available: true,
                tree_sitter_errors: None,
            };
        }

        let result = match strategy {
            Strategy::TreeSitterOnly => self.extract_ast_only(source, language),
            Strategy::PatternOnly => self.extract_pattern_only(source, language),
            Strategy::TreeSitterWithFallback => self.extract_with_fallback(source, language),
            Strategy::Combined => self.extract_combined(source, language),
        };

        self.cache.put(cache_key, result.constraints.clone());
        result
    }

    fn extract_ast_only(&mut self, source: &str, language: Language) -> ExtractionResult {
        match clew_ast::parse(language, source) {
            Ok(tree) if !tree.has_error() => ExtractionResult {
                constraints: clew_extract::extract_ast(tree.root(), language, &mut self.interner).into_vec(),
                strategy_used: Strategy::TreeSitterOnly,
                tree_sitter_available: true,
                tree_sitter_errors: None,
            },
            Ok(_) => ExtractionResult {
                constraints: Vec::new(),
                strategy_used: Strategy::TreeSitterOnly,
                tree_sitter_available: true,
                tree_sitter_errors: Some(format!("parse error: {language} source has structural errors")),
            },
            Err(err) => {
                tracing::warn!(%language, %err, "tree-sitter unavailable");
                ExtractionResult {
                    constraints: Vec::new(),
                    strategy_used: Strategy::TreeSitterOnly,
                    tree_sitter_available: false,
                    tree_sitter_errors: Some(err.to_string()),
                }
            }
        }
    }

    fn extract_pattern_only(&mut self, source: &str, language: Language) -> ExtractionResult {
        ExtractionResult {
            constraints: clew_extract::extract_patterns(language, source, &mut self.interner).into_vec(),
            strategy_used: Strategy::PatternOnly,
            tree_sitter_available: false,
            tree_sitter_errors: None,
        }
    }

    fn extract_with_fallback(&mut self, source: &str, language: Language) -> ExtractionResult {
        match clew_ast::parse(language, source) {
            Ok(tree) if !tree.has_error() => ExtractionResult {
                constraints: clew_extract::extract_ast(tree.root(), language, &mut self.interner).into_vec(),
                strategy_used: Strategy::TreeSitterWithFallback,
                tree_sitter_available: true,
                tree_sitter_errors: None,
            },
            Ok(_) => {
                tracing::debug!(%language, "parse error, falling back to pattern extraction");
                ExtractionResult {
                    constraints: clew_extract::extract_patterns(language, source, &mut self.interner).into_vec(),
                    strategy_used: Strategy::TreeSitterWithFallback,
                    tree_sitter_available: true,
                    tree_sitter_errors: Some(format!("parse error: {language} source has structural errors; used pattern fallback")),
                }
            }
            Err(err) => {
                tracing::warn!(%language, %err, "tree-sitter unavailable, falling back to pattern extraction");
                ExtractionResult {
                    constraints: clew_extract::extract_patterns(language, source, &mut self.interner).into_vec(),
                    strategy_used: Strategy::TreeSitterWithFallback,
                    tree_sitter_available: false,
                    tree_sitter_errors: Some(err.to_string()),
                }
            }
        }
    }

    fn extract_combined(&mut self, source: &str, language: Language) -> ExtractionResult {
        let (ast_constraints, tree_sitter_available, tree_sitter_errors) = match clew_ast::parse(language, source) {
            Ok(tree) => {
                let constraints = clew_extract::extract_ast(tree.root(), language, &mut self.interner).into_vec();
                let error = tree
                    .has_error()
                    .then(|| format!("parse error: {language} source has structural errors"));
                (constraints, true, error)
            }
            Err(err) => {
                tracing::warn!(%language, %err, "tree-sitter unavailable in combined mode");
                (Vec::new(), false, Some(err.to_string()))
            }
        };

        let pattern_constraints = clew_extract::extract_patterns(language, source, &mut self.interner).into_vec();

        let seen: HashSet<(clew_core::Symbol, clew_core::ConstraintKind)> =
            ast_constraints.iter().map(Constraint::dedup_key).collect();
        let merged_pattern: Vec<Constraint> = pattern_constraints
            .into_iter()
            .filter(|c| !seen.contains(&c.dedup_key()))
            .collect();

        let mut constraints = ast_constraints;
        constraints.extend(merged_pattern);

        ExtractionResult {
            constraints,
            strategy_used: Strategy::Combined,
            tree_sitter_available,
            tree_sitter_errors,
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `extract` with a fresh, throwaway [`Orchestrator`] — the free-function
/// entry point for callers that don't need cross-call caching or symbol
/// resolution. Each call gets its own interner, matching the per-run
/// isolation contract; repeat calls on the same source re-intern strings
/// rather than sharing them.
pub fn extract(source: &str, language_tag: &str, strategy: Strategy) -> ExtractionResult {
    Orchestrator::new().extract(source, language_tag, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_language_is_empty_without_error_under_fallback() {
        let result = extract("print(1)", "cobol", Strategy::TreeSitterWithFallback);
        assert!(result.constraints.is_empty());
        assert!(!result.tree_sitter_available);
        assert!(result.tree_sitter_errors.is_none());
    }

    #[test]
    fn unsupported_language_is_an_error_under_ast_only() {
        let result = extract("print(1)", "cobol", Strategy::TreeSitterOnly);
        assert!(result.tree_sitter_errors.is_some());
    }

    #[test]
    fn combined_mode_has_no_duplicate_name_kind_pairs() {
        let source = "pub fn run() -> Result<(), ()> {\n    Ok(())\n}\n";
        let result = extract(source, "rust", Strategy::Combined);
        let mut seen = HashSet::new();
        for c in &result.constraints {
            assert!(seen.insert(c.dedup_key()), "duplicate (name, kind) in combined output");
        }
    }

    #[test]
    fn ast_constraints_precede_pattern_constraints_in_combined_mode() {
        let source = "pub fn run() -> Option<u32> { None }\n";
        let mut orchestrator = Orchestrator::new();
        let ast_only = orchestrator.extract(source, "rust", Strategy::TreeSitterOnly);
        let combined = orchestrator.extract(source, "rust", Strategy::Combined);
        assert!(combined.constraints.len() >= ast_only.constraints.len());
    }

    #[test]
    fn empty_source_yields_empty_constraints_for_every_strategy() {
        for strategy in [
            Strategy::TreeSitterOnly,
            Strategy::PatternOnly,
            Strategy::TreeSitterWithFallback,
            Strategy::Combined,
        ] {
            let result = extract("", "rust", strategy);
            assert!(result.constraints.is_empty(), "{strategy:?} produced constraints on empty source");
        }
    }

    #[test]
    fn repeated_extraction_is_idempotent() {
        let source = "pub fn run() -> Result<(), ()> { Ok(()) }\n";
        let mut orchestrator = Orchestrator::new();
        let first = orchestrator.extract(source, "rust", Strategy::Combined);
        let second = orchestrator.extract(source, "rust", Strategy::Combined);
        assert_eq!(first.constraints.len(), second.constraints.len());
    }

    #[test]
    fn cache_hit_skips_recomputation_but_preserves_output() {
        let source = "pub fn run() {}\n";
        let mut orchestrator = Orchestrator::new();
        let first = orchestrator.extract(source, "rust", Strategy::PatternOnly);
        let second = orchestrator.extract(source, "rust", Strategy::PatternOnly);
        assert_eq!(first.constraints.len(), second.constraints.len());
    }
}
