// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The AST front end: parsing, node/tree handles, and traversal.
//!
//! This crate wraps `tree-sitter` directly rather than a pattern-matching
//! DSL on top of it — Clew's own extractors (`clew-extract`) and hole
//! detector (`clew-engine`) are the only AST consumers, and they need
//! uniform `Node`/`Tree` navigation, not a query language.

mod parser;
mod traversal;
mod tree;

pub use parser::parse;
pub use traversal::{bfs, find_all, find_by_type, find_by_types, find_first, post_order, pre_order, VisitControl};
pub use tree::{Node, Point, Tree};
