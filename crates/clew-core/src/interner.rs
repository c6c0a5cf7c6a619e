// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content-addressed string interning for constraint `name`/`description`
//! values.
//!
//! Constraint names and descriptions are highly repetitive across a run
//! (`"function_structure"` recurs once per file; `"Function declaration: foo"`
//! recurs across every overload named `foo`). Interning collapses equal
//! strings to a single backing allocation and hands callers a small `Copy`
//! handle instead.

use string_interner::{backend::StringBackend, StringInterner as Backend, Symbol as _};

/// A stable handle to an interned string. Equal inputs to
/// [`StringInterner::intern`] always yield an equal `Symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(string_interner::DefaultSymbol);

/// Observability counters for a [`StringInterner`] instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of distinct strings interned.
    pub unique_strings: usize,
    /// Total bytes that would have been duplicated had every `intern` call
    /// allocated independently, i.e. bytes saved by interning repeats.
    pub bytes_saved: usize,
}

/// Owns every interned `name`/`description` string for one extraction run.
///
/// The interner outlives any single [`crate::Constraint`] it produced
/// symbols for; it is tied to the orchestrator's lifetime (see
/// `clew-engine::Orchestrator`), not to any individual extraction call.
pub struct StringInterner {
    backend: Backend<StringBackend>,
    stats: InternerStats,
}

impl StringInterner {
    pub fn new() -> Self {
        Self {
            backend: Backend::new(),
            stats: InternerStats::default(),
        }
    }

    /// Intern `s`, returning a handle stable for the lifetime of this
    /// interner. Equal byte sequences always produce an equal [`Symbol`],
    /// and interning an already-seen string costs no additional bytes.
    pub fn intern(&mut self, s: &str) -> Symbol {
        let before = self.backend.len();
        let sym = self.backend.get_or_intern(s);
        if self.backend.len() == before {
            // Already present: this call saved exactly `s`'s bytes.
            self.stats.bytes_saved += s.len();
        } else {
            self.stats.unique_strings += 1;
        }
        Symbol(sym)
    }

    /// Resolve a handle back to its string. Panics if `sym` was not
    /// produced by this interner — symbols never cross interner instances
    /// by design (each extraction run owns its own interner, per the
    /// per-run isolation contract).
    pub fn resolve(&self, sym: Symbol) -> &str {
        self.backend
            .resolve(sym.0)
            .expect("symbol must have been produced by this interner")
    }

    pub fn stats(&self) -> InternerStats {
        self.stats
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

// Exposed so callers that need raw symbol indices (e.g. dedup key hashing)
// can get at them without round-tripping through `string-interner` directly.
impl Symbol {
    pub fn to_usize(self) -> usize {
        self.0.to_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_intern_to_equal_symbols() {
        let mut interner = StringInterner::new();
        let a = interner.intern("function_structure");
        let b = interner.intern("function_structure");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_strings_intern_to_distinct_symbols() {
        let mut interner = StringInterner::new();
        let a = interner.intern("function_structure");
        let b = interner.intern("type_definitions");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut interner = StringInterner::new();
        let sym = interner.intern("typed_functions");
        assert_eq!(interner.resolve(sym), "typed_functions");
    }

    #[test]
    fn repeated_interns_count_as_bytes_saved() {
        let mut interner = StringInterner::new();
        interner.intern("async_functions");
        interner.intern("async_functions");
        interner.intern("async_functions");
        let stats = interner.stats();
        assert_eq!(stats.unique_strings, 1);
        assert_eq!(stats.bytes_saved, "async_functions".len() * 2);
    }
}
