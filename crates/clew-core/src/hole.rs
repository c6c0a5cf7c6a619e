// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed placeholders ("holes") discovered in source via AST inspection.

/// The syntactic scale at which a [`Hole`] was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoleScale {
    Expression,
    Statement,
    Function,
    Module,
}

/// Whether a hole was explicitly marked by the author (a `TODO`, a raised
/// `NotImplementedError`) or inferred from structure alone (an empty body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoleOrigin {
    UserMarked,
    Inferred,
}

/// What kind of incompleteness a [`Hole`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoleKind {
    EmptyFunctionBody,
    UnimplementedMethod,
    IncompleteMatch,
    MissingTypeAnnotation,
    MissingAwait,
    UnhandledError,
}

/// A 1-based source span, plus the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoleLocation {
    pub file: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

/// Who (or what) produced a [`Hole`] record, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Provenance {
    pub creator: String,
    /// Unix timestamp in seconds. Callers stamp this after the detector
    /// returns (the detector itself never reads the clock, so that runs
    /// stay deterministic and replayable).
    pub timestamp: u64,
    pub source_artifact: String,
}

/// A typed placeholder discovered in source: an empty function body, a
/// raised `NotImplementedError`, a non-exhaustive match, a missing type
/// annotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole {
    /// Content-addressed hash of `(file, start_line, start_column)`. Stable
    /// across runs for the same location — re-running detection on an
    /// unchanged file reproduces the same `id`s byte-for-byte.
    pub id: u64,
    pub scale: HoleScale,
    pub origin: HoleOrigin,
    pub location: HoleLocation,
    pub provenance: Provenance,
    pub kind: HoleKind,
    pub expected_type: Option<String>,
    pub context: String,
    pub confidence: f32,
}

impl Hole {
    /// Compute the content-addressed id for a hole at `(file, line, column)`.
    ///
    /// Uses the same `blake3`-backed hashing primitive as the extraction
    /// cache key (see [`crate::CacheKey`]) truncated to 64 bits, so two
    /// detector runs over byte-identical source always agree on `id`.
    pub fn compute_id(file: &str, start_line: u32, start_column: u32) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(file.as_bytes());
        hasher.update(&start_line.to_le_bytes());
        hasher.update(&start_column.to_le_bytes());
        let digest = hasher.finalize();
        u64::from_le_bytes(digest.as_bytes()[0..8].try_into().expect("8 bytes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_for_same_location() {
        let a = Hole::compute_id("foo.py", 3, 4);
        let b = Hole::compute_id("foo.py", 3, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn id_depends_on_all_three_components() {
        let base = Hole::compute_id("foo.py", 3, 4);
        assert_ne!(base, Hole::compute_id("bar.py", 3, 4));
        assert_ne!(base, Hole::compute_id("foo.py", 4, 4));
        assert_ne!(base, Hole::compute_id("foo.py", 3, 5));
    }
}
