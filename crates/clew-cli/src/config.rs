// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration: defaults, then an optional `clew.toml` in the
//! working directory, then `CLEW_*` environment variables, then CLI flags —
//! each layer overriding the last. There is no remote or hot-reloaded
//! configuration; `clew` is a single-shot CLI, not a long-running service.

use clew_engine::Strategy;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    default_strategy: Option<String>,
    cache_capacity: Option<usize>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_strategy: Strategy,
    pub cache_capacity: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_strategy: Strategy::TreeSitterWithFallback,
            cache_capacity: 256,
            log_level: "info".to_string(),
        }
    }
}

fn parse_strategy(tag: &str) -> Option<Strategy> {
    match tag {
        "ast" | "tree-sitter-only" => Some(Strategy::TreeSitterOnly),
        "pattern" | "pattern-only" => Some(Strategy::PatternOnly),
        "fallback" | "tree-sitter-with-fallback" => Some(Strategy::TreeSitterWithFallback),
        "combined" => Some(Strategy::Combined),
        _ => None,
    }
}

impl Config {
    /// Load `clew.toml` from `dir` if present, then apply `CLEW_*`
    /// environment overrides. CLI flags are applied by the caller after
    /// this returns, since they're parsed by `clap` independently.
    pub fn load(dir: &Path) -> Self {
        let mut config = Self::default();

        let toml_path = dir.join("clew.toml");
        if let Ok(contents) = std::fs::read_to_string(&toml_path) {
            match toml::from_str::<FileConfig>(&contents) {
                Ok(file_config) => config.apply_file(file_config),
                Err(err) => tracing::warn!(path = %toml_path.display(), %err, "failed to parse clew.toml, ignoring"),
            }
        }

        config.apply_env();
        config
    }

    fn apply_file(&mut self, file_config: FileConfig) {
        if let Some(tag) = file_config.default_strategy.as_deref().and_then(parse_strategy) {
            self.default_strategy = tag;
        }
        if let Some(capacity) = file_config.cache_capacity {
            self.cache_capacity = capacity;
        }
        if let Some(level) = file_config.log_level {
            self.log_level = level;
        }
    }

    fn apply_env(&mut self) {
        if let Ok(tag) = std::env::var("CLEW_DEFAULT_STRATEGY") {
            if let Some(strategy) = parse_strategy(&tag) {
                self.default_strategy = strategy;
            }
        }
        if let Ok(capacity) = std::env::var("CLEW_CACHE_CAPACITY") {
            if let Ok(capacity) = capacity.parse() {
                self.cache_capacity = capacity;
            }
        }
        if let Ok(level) = std::env::var("CLEW_LOG_LEVEL") {
            self.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.default_strategy, Strategy::TreeSitterWithFallback);
        assert_eq!(config.cache_capacity, 256);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_clew_toml_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/clew/config/dir"));
        assert_eq!(config.default_strategy, Strategy::TreeSitterWithFallback);
    }

    #[test]
    fn unrecognized_strategy_tag_is_ignored() {
        assert_eq!(parse_strategy("nonsense"), None);
        assert_eq!(parse_strategy("combined"), Some(Strategy::Combined));
    }
}
