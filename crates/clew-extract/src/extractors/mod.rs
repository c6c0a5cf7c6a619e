// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C3: the extractors. Given an AST root or raw text for a language,
//! produce a typed [`clew_core::Constraint`] list.

pub mod ast_identifiers;
pub mod line_based;
pub mod pattern_constraints;
pub mod type_analysis;
