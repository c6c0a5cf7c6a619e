// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// The error taxonomy shared across every Clew component.
///
/// Most of these are recoverable at the orchestrator level (see
/// `clew-engine::Strategy`); only [`ClewError::AllocationFailure`] and
/// [`ClewError::GrammarVersionMismatch`] are meant to propagate all the way
/// to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClewError {
    #[error("unsupported language tag: {0:?}")]
    UnsupportedLanguage(String),

    #[error("parse error in {language}: {message}")]
    ParseError { language: String, message: String },

    #[error(
        "grammar version mismatch for {language}: grammar ABI {grammar_abi} is outside the \
         range the linked tree-sitter runtime accepts ({min_abi}..={max_abi})"
    )]
    GrammarVersionMismatch {
        language: String,
        grammar_abi: usize,
        min_abi: usize,
        max_abi: usize,
    },

    #[error("allocation failure: {0}")]
    AllocationFailure(String),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// CLI-level file-read failures; never produced by this crate or any
    /// other library component, only by the `clew-cli` binary boundary
    /// wrapping a `std::io::Error` before it bubbles through `anyhow`.
    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, ClewError>;
