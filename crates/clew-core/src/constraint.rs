// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::interner::Symbol;

/// The broad category a [`Constraint`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintKind {
    Syntactic,
    TypeSafety,
    Semantic,
    Architectural,
    Operational,
    Security,
}

/// How seriously a downstream consumer should weigh a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

/// Which extraction mechanism produced a [`Constraint`].
///
/// `LlmAnalysis` and `Telemetry` are never produced by this crate; they are
/// accepted on inbound merges from external collaborators (see
/// `clew-engine::Orchestrator::merge_external`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintSource {
    AstPattern,
    TypeSystem,
    LlmAnalysis,
    Telemetry,
    ControlFlow,
    StaticAnalysis,
}

/// Confidence conventionally assigned to AST-sourced constraints.
pub const AST_CONFIDENCE: f32 = 0.95;
/// Confidence conventionally assigned to pattern-sourced constraints.
pub const PATTERN_CONFIDENCE: f32 = 0.75;
/// Confidence assigned to generic-language (non TS/Python) type analysis.
pub const GENERIC_TYPE_CONFIDENCE: f32 = 0.80;
/// Confidence assigned to TypeScript/Python type analysis, which has richer
/// grammar-level type syntax to anchor on.
pub const RICH_TYPE_CONFIDENCE: f32 = 0.95;

/// A single typed fact mined from source code.
///
/// `name` and `description` are interner [`Symbol`]s rather than owned
/// strings: constraints are produced in bulk and are highly repetitive
/// (the same `"function_structure"` name recurs across every file), so
/// [`Constraint`] stays `Copy` and the bytes live once in the
/// [`crate::StringInterner`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub severity: Severity,
    pub name: Symbol,
    pub description: Symbol,
    pub source: ConstraintSource,
    pub confidence: f32,
    pub frequency: u32,
    pub origin_line: Option<u32>,
}

impl Constraint {
    /// Two constraints are duplicates under the Combined-strategy merge
    /// rule iff `name` and `kind` match; confidence and description
    /// differences are immaterial.
    pub fn dedup_key(&self) -> (Symbol, ConstraintKind) {
        (self.name, self.kind)
    }
}

/// A labeled, insertion-ordered collection of [`Constraint`]s.
///
/// No uniqueness invariant is enforced here — deduplication is a
/// merge-time policy that belongs to the orchestrator, not the set.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    label: Option<String>,
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            constraints: Vec::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn add(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn extend(&mut self, constraints: impl IntoIterator<Item = Constraint>) {
        self.constraints.extend(constraints);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn into_vec(self) -> Vec<Constraint> {
        self.constraints
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Drop every constraint, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.constraints.clear();
    }
}

impl IntoIterator for ConstraintSet {
    type Item = Constraint;
    type IntoIter = std::vec::IntoIter<Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Constraint>>(iter: T) -> Self {
        Self {
            label: None,
            constraints: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    fn dummy(interner: &mut StringInterner, name: &str) -> Constraint {
        Constraint {
            kind: ConstraintKind::Syntactic,
            severity: Severity::Info,
            name: interner.intern(name),
            description: interner.intern("d"),
            source: ConstraintSource::AstPattern,
            confidence: AST_CONFIDENCE,
            frequency: 1,
            origin_line: None,
        }
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut interner = StringInterner::new();
        let mut set = ConstraintSet::new();
        set.add(dummy(&mut interner, "a"));
        set.add(dummy(&mut interner, "b"));
        set.add(dummy(&mut interner, "c"));
        let names: Vec<_> = set.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                interner.intern("a"),
                interner.intern("b"),
                interner.intern("c"),
            ]
        );
    }

    #[test]
    fn set_allows_duplicates() {
        let mut interner = StringInterner::new();
        let mut set = ConstraintSet::new();
        set.add(dummy(&mut interner, "a"));
        set.add(dummy(&mut interner, "a"));
        assert_eq!(set.len(), 2);
    }
}
