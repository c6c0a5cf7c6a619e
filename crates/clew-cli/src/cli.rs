// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clap argument definitions for the `clew` binary.

use clap::{Parser, Subcommand, ValueEnum};
use clew_engine::Strategy;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "clew", about = "Mine semantic constraints and typed holes from source code", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the configured log level (also settable via `RUST_LOG` or `CLEW_LOG_LEVEL`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract constraints from a file or directory.
    Extract(ExtractArgs),
    /// Detect semantic holes (empty bodies, unimplemented stubs, ...) in a file or directory.
    Holes(HolesArgs),
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// File or directory to extract from.
    pub path: PathBuf,

    /// Language tag to force (skips extension-based detection).
    #[arg(long)]
    pub language: Option<String>,

    /// Extraction strategy.
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Parser)]
pub struct HolesArgs {
    /// File or directory to scan for holes.
    pub path: PathBuf,

    /// Language tag to force (skips extension-based detection).
    #[arg(long)]
    pub language: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Ast,
    Pattern,
    Fallback,
    Combined,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Ast => Strategy::TreeSitterOnly,
            StrategyArg::Pattern => Strategy::PatternOnly,
            StrategyArg::Fallback => Strategy::TreeSitterWithFallback,
            StrategyArg::Combined => Strategy::Combined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
