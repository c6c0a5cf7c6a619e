// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Tree`] and [`Node`]: the opaque AST handles every extractor and hole
//! detector walks.
//!
//! `Tree` exclusively owns the parsed tree-sitter tree and the source text
//! it was parsed from. `Node` borrows from a `Tree` and is therefore
//! lifetime-bound to it — the borrow checker rejects any attempt to retain
//! a `Node` past its `Tree`'s drop, which is how this crate encodes the
//! "a `Node` must not outlive its `Tree`" invariant without runtime checks.

use clew_core::Language;

/// A parsed AST, exclusively owning the tree-sitter tree and the source it
/// was parsed from.
pub struct Tree {
    inner: tree_sitter::Tree,
    source: String,
    language: Language,
}

impl Tree {
    pub(crate) fn new(inner: tree_sitter::Tree, source: String, language: Language) -> Self {
        Self {
            inner,
            source,
            language,
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            inner: self.inner.root_node(),
            source: &self.source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether tree-sitter's recovery parser had to patch over structurally
    /// damaged input. Surfaced to the orchestrator, never treated as fatal
    /// by this crate itself — the caller decides whether errors here
    /// warrant falling back to pattern extraction.
    pub fn has_error(&self) -> bool {
        self.inner.root_node().has_error()
    }
}

/// A lightweight handle to one AST node, borrowed from a [`Tree`].
#[derive(Clone, Copy)]
pub struct Node<'tree> {
    inner: tree_sitter::Node<'tree>,
    source: &'tree str,
}

/// 1-based line/column point, as exposed to callers (tree-sitter's own
/// points are 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub line: u32,
    pub column: u32,
}

impl<'tree> Node<'tree> {
    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    pub fn has_error(&self) -> bool {
        self.inner.has_error()
    }

    pub fn named_child_count(&self) -> usize {
        self.inner.named_child_count()
    }

    pub fn named_child(&self, index: usize) -> Option<Node<'tree>> {
        self.inner.named_child(index).map(|inner| Node {
            inner,
            source: self.source,
        })
    }

    pub fn named_children(&self) -> impl Iterator<Item = Node<'tree>> + '_ {
        (0..self.named_child_count()).filter_map(move |i| self.named_child(i))
    }

    pub fn child_by_field_name(&self, field: &str) -> Option<Node<'tree>> {
        self.inner
            .child_by_field_name(field)
            .map(|inner| Node {
                inner,
                source: self.source,
            })
    }

    pub fn start_byte(&self) -> usize {
        self.inner.start_byte()
    }

    pub fn end_byte(&self) -> usize {
        self.inner.end_byte()
    }

    pub fn start_position(&self) -> Point {
        let p = self.inner.start_position();
        Point {
            line: p.row as u32 + 1,
            column: p.column as u32 + 1,
        }
    }

    pub fn end_position(&self) -> Point {
        let p = self.inner.end_position();
        Point {
            line: p.row as u32 + 1,
            column: p.column as u32 + 1,
        }
    }

    /// The byte-range text of this node, clipped to the source length
    /// rather than panicking if `end_byte` runs past it.
    pub fn text(&self) -> &'tree str {
        let start = self.start_byte().min(self.source.len());
        let end = self.end_byte().min(self.source.len()).max(start);
        &self.source[start..end]
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind())
            .field("start", &self.start_position())
            .field("end", &self.end_position())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn text_clips_to_source_length() {
        let tree = parse(Language::Rust, "fn main() {}").unwrap();
        let root = tree.root();
        // Sanity: the root's own text never needs clipping, but every
        // extractor relies on end_byte() never indexing out of bounds even
        // on pathological inputs, so assert the invariant on a normal one.
        assert_eq!(root.text(), "fn main() {}");
    }

    #[test]
    fn named_children_skip_anonymous_tokens() {
        let tree = parse(Language::Rust, "fn main() {}").unwrap();
        let root = tree.root();
        // `fn`, `(`, `)`, `{`, `}` are anonymous; only `function_item`
        // (and its name/params/body fields) should show up named.
        assert!(root.named_child_count() >= 1);
    }
}
