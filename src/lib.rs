//! Clew — multi-language semantic constraint and typed-hole extraction.
//!
//! This is the facade crate that re-exports the component crates in the
//! workspace. Most consumers only need [`extract`] and [`detect_holes`],
//! re-exported here from [`clew_engine`].

pub use clew_core as core;
pub use clew_ast as ast;
pub use clew_languages as languages;
pub use clew_extract as extract_impl;
pub use clew_engine as engine;

pub use clew_engine::{detect_holes, extract, ExtractionResult, Strategy};

/// Crate version, exposed for CLI `--version` output and bug reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
