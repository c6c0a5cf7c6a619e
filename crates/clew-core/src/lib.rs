// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data model and support infrastructure shared by every Clew component.
//!
//! This crate has no opinion about tree-sitter or extraction strategy; it
//! only defines the types that flow between components (`Constraint`,
//! `Hole`, `SyntaxStructure`) and the per-run infrastructure that makes
//! repeated extraction cheap (`StringInterner`, `RingQueue`, `ExtractionArena`,
//! `ExtractionCache`).

mod arena;
mod cache;
mod constraint;
mod error;
mod hole;
mod interner;
mod lang;
mod ring_queue;
mod syntax;

pub use arena::ExtractionArena;
pub use cache::{CacheKey, ExtractionCache};
pub use constraint::{
    Constraint, ConstraintKind, ConstraintSet, ConstraintSource, Severity, AST_CONFIDENCE,
    GENERIC_TYPE_CONFIDENCE, PATTERN_CONFIDENCE, RICH_TYPE_CONFIDENCE,
};
pub use error::{ClewError, Result};
pub use hole::{Hole, HoleKind, HoleLocation, HoleOrigin, HoleScale, Provenance};
pub use interner::{InternerStats, StringInterner, Symbol};
pub use lang::Language;
pub use ring_queue::RingQueue;
pub use syntax::{DeclKind, FunctionDecl, ImportDecl, SyntaxStructure, TypeDecl};
