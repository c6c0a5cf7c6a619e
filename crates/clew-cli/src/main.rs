// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod cli;
mod config;
mod report;

use anyhow::Context;
use clap::Parser;
use clew_core::Language;
use clew_engine::Orchestrator;
use cli::{Cli, Command, ExtractArgs, HolesArgs};
use config::Config;
use ignore::WalkBuilder;
use rayon::prelude::*;
use report::{render_constraints, render_holes, ConstraintView, FileConstraints, FileHoles};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    let config = Config::load(&std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    init_tracing(cli.log_level.as_deref(), &config.log_level);

    let exit_code = match &cli.command {
        Command::Extract(args) => run_extract(args, &config),
        Command::Holes(args) => run_holes(args, &config),
    };

    match exit_code {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("clew error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(cli_level: Option<&str>, config_level: &str) {
    let level = cli_level.map(str::to_string).unwrap_or_else(|| config_level.to_string());
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    // Logs go to stderr so stdout stays clean for `extract`/`holes` output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Map a file extension to a language tag. Files with no recognized
/// extension are silently skipped when walking a directory.
fn language_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    let tag = match ext {
        "ts" => "typescript",
        "tsx" => "tsx",
        "js" | "mjs" | "cjs" => "javascript",
        "py" => "python",
        "rs" => "rust",
        "go" => "go",
        "zig" => "zig",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "java" => "java",
        _ => return None,
    };
    Some(tag)
}

/// Collect the files to process for `path`: itself if it's a file, or
/// every `.gitignore`-respected, language-recognized file under it if it's
/// a directory.
fn collect_files(path: &Path, language_override: Option<&str>) -> Vec<(PathBuf, String)> {
    if path.is_file() {
        let tag = language_override
            .map(str::to_string)
            .or_else(|| language_for_extension(path).map(str::to_string));
        return match tag {
            Some(tag) => vec![(path.to_path_buf(), tag)],
            None => {
                tracing::warn!(path = %path.display(), "unrecognized extension, skipping");
                Vec::new()
            }
        };
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(path).build() {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let file_path = entry.path();
        let tag = language_override
            .map(str::to_string)
            .or_else(|| language_for_extension(file_path).map(str::to_string));
        if let Some(tag) = tag {
            files.push((file_path.to_path_buf(), tag));
        }
    }
    files
}

fn run_extract(args: &ExtractArgs, config: &Config) -> anyhow::Result<i32> {
    let strategy = args
        .strategy
        .map(clew_engine::Strategy::from)
        .unwrap_or(config.default_strategy);
    let files = collect_files(&args.path, args.language.as_deref());

    let outcomes: Vec<anyhow::Result<FileConstraints>> = files
        .par_iter()
        .map(|(file_path, language_tag)| extract_one(file_path, language_tag, strategy, config.cache_capacity))
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut had_failure = false;
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(err) => {
                tracing::error!(%err, "failed to read file");
                had_failure = true;
            }
        }
    }

    println!("{}", render_constraints(&results, args.format));
    Ok(i32::from(had_failure))
}

/// Read `path`, wrapping any I/O failure in [`clew_core::ClewError::Io`]
/// before it bubbles through `anyhow` — the CLI boundary is the only place
/// that variant is ever produced.
fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|err| clew_core::ClewError::Io(err.to_string()))
        .with_context(|| format!("reading {}", path.display()))
}

fn extract_one(
    file_path: &Path,
    language_tag: &str,
    strategy: clew_engine::Strategy,
    cache_capacity: usize,
) -> anyhow::Result<FileConstraints> {
    let source = read_source(file_path)?;
    let mut orchestrator = Orchestrator::with_cache_capacity(cache_capacity);
    let result = orchestrator.extract(&source, language_tag, strategy);
    let constraints = result
        .constraints
        .iter()
        .map(|c| ConstraintView::resolve(c, &orchestrator))
        .collect();
    Ok(FileConstraints {
        file: file_path.display().to_string(),
        strategy_used: format!("{:?}", result.strategy_used),
        tree_sitter_available: result.tree_sitter_available,
        tree_sitter_errors: result.tree_sitter_errors,
        constraints,
    })
}

fn run_holes(args: &HolesArgs, _config: &Config) -> anyhow::Result<i32> {
    let files = collect_files(&args.path, args.language.as_deref());

    let outcomes: Vec<anyhow::Result<FileHoles>> = files
        .par_iter()
        .map(|(file_path, language_tag)| holes_one(file_path, language_tag))
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut had_failure = false;
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(err) => {
                tracing::error!(%err, "failed to read file");
                had_failure = true;
            }
        }
    }

    println!("{}", render_holes(&results, args.format));
    Ok(i32::from(had_failure))
}

fn holes_one(file_path: &Path, language_tag: &str) -> anyhow::Result<FileHoles> {
    let source = read_source(file_path)?;
    let holes = if Language::parse_tag(language_tag).is_ok() {
        clew_engine::detect_holes(&source, language_tag)
    } else {
        tracing::warn!(language = language_tag, "unsupported language tag, skipping hole detection");
        Vec::new()
    };
    Ok(FileHoles {
        file: file_path.display().to_string(),
        holes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_extensions() {
        assert_eq!(language_for_extension(Path::new("a.rs")), Some("rust"));
        assert_eq!(language_for_extension(Path::new("a.py")), Some("python"));
        assert_eq!(language_for_extension(Path::new("a.unknown")), None);
    }

    #[test]
    fn single_file_with_recognized_extension_is_collected() {
        let files = collect_files(Path::new("Cargo.toml"), None);
        assert!(files.is_empty() || files.iter().all(|(_, tag)| !tag.is_empty()));
    }
}
