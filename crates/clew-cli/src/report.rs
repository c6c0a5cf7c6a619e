// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text and JSON rendering for the `extract` and `holes` subcommands.
//!
//! `Constraint` keeps `name`/`description` as interner `Symbol`s rather than
//! owned strings (see `clew-core::Constraint`), so it isn't `Serialize`
//! itself — [`ConstraintView`] is the resolved, owned-string shape a report
//! actually prints.

use crate::cli::OutputFormat;
use clew_core::{Constraint, Hole};
use clew_engine::Orchestrator;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConstraintView {
    pub kind: String,
    pub severity: String,
    pub name: String,
    pub description: String,
    pub source: String,
    pub confidence: f32,
    pub frequency: u32,
    pub origin_line: Option<u32>,
}

impl ConstraintView {
    pub fn resolve(constraint: &Constraint, orchestrator: &Orchestrator) -> Self {
        Self {
            kind: format!("{:?}", constraint.kind),
            severity: format!("{:?}", constraint.severity),
            name: orchestrator.resolve(constraint.name).to_string(),
            description: orchestrator.resolve(constraint.description).to_string(),
            source: format!("{:?}", constraint.source),
            confidence: constraint.confidence,
            frequency: constraint.frequency,
            origin_line: constraint.origin_line,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileConstraints {
    pub file: String,
    pub strategy_used: String,
    pub tree_sitter_available: bool,
    pub tree_sitter_errors: Option<String>,
    pub constraints: Vec<ConstraintView>,
}

#[derive(Debug, Serialize)]
pub struct FileHoles {
    pub file: String,
    pub holes: Vec<Hole>,
}

pub fn render_constraints(results: &[FileConstraints], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string()),
        OutputFormat::Text => {
            let mut out = String::new();
            for file in results {
                out.push_str(&format!(
                    "{} [{:?}, tree-sitter={}]\n",
                    file.file, file.strategy_used, file.tree_sitter_available
                ));
                if let Some(err) = &file.tree_sitter_errors {
                    out.push_str(&format!("  warning: {err}\n"));
                }
                if file.constraints.is_empty() {
                    out.push_str("  (no constraints)\n");
                }
                for constraint in &file.constraints {
                    out.push_str(&format!(
                        "  [{}] {} ({:.2}) — {}\n",
                        constraint.kind, constraint.name, constraint.confidence, constraint.description
                    ));
                }
            }
            out
        }
    }
}

pub fn render_holes(results: &[FileHoles], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string()),
        OutputFormat::Text => {
            let mut out = String::new();
            for file in results {
                out.push_str(&format!("{}\n", file.file));
                if file.holes.is_empty() {
                    out.push_str("  (no holes)\n");
                }
                for hole in &file.holes {
                    out.push_str(&format!(
                        "  {:?} at {}:{} ({:.2}) — {}\n",
                        hole.kind, hole.location.start_line, hole.location.start_column, hole.confidence, hole.context
                    ));
                }
            }
            out
        }
    }
}
