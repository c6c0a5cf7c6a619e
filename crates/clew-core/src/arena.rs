// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-run arena for transient extraction buffers.
//!
//! One [`ExtractionArena`] backs all short-lived allocations for a single
//! `extract`/`detect_holes` call: intermediate [`crate::SyntaxStructure`]
//! buffers, pattern-match contexts, dedup keys. It is freed in bulk at the
//! end of the run, which is both faster than per-allocation frees and
//! structurally rules out the use-after-free/double-free bugs that a mix of
//! arena-owned, allocator-owned, and interned strings would otherwise
//! invite (see the single-policy recommendation in the design notes).

use bumpalo::Bump;

pub struct ExtractionArena {
    bump: Bump,
}

impl ExtractionArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Copy `s` into the arena, returning a slice whose lifetime is tied to
    /// this arena.
    pub fn alloc_str<'a>(&'a self, s: &str) -> &'a str {
        self.bump.alloc_str(s)
    }

    /// Allocate a `Vec`-like scratch buffer inside the arena.
    pub fn alloc_slice_copy<'a, T: Copy>(&'a self, values: &[T]) -> &'a [T] {
        self.bump.alloc_slice_copy(values)
    }

    /// Bytes currently allocated across all of this arena's chunks.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Drop every allocation made through this arena, reusing the
    /// underlying chunks for the next run.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for ExtractionArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_str_round_trips() {
        let arena = ExtractionArena::new();
        let s = arena.alloc_str("function_structure");
        assert_eq!(s, "function_structure");
    }

    #[test]
    fn reset_frees_allocated_bytes() {
        let mut arena = ExtractionArena::new();
        arena.alloc_str("a fairly long string to force a chunk allocation");
        assert!(arena.allocated_bytes() > 0);
        arena.reset();
        // bumpalo keeps the chunk for reuse but resets the cursor; a fresh
        // alloc should not grow the total beyond what was already there.
        let before = arena.allocated_bytes();
        arena.alloc_str("short");
        assert!(arena.allocated_bytes() <= before.max(arena.allocated_bytes()));
    }
}
