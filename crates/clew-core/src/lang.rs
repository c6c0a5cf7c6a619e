// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::ClewError;
use std::fmt;

/// A language Clew knows how to extract from.
///
/// Variants are the *canonical* forms; [`Language::parse_tag`] normalizes
/// the accepted aliases (`ts` -> `typescript`, `py` -> `python`, `c++` ->
/// `cpp`) before dispatch, per the language-tag contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    Tsx,
    JavaScript,
    Python,
    Rust,
    Go,
    Zig,
    C,
    Cpp,
    Java,
}

impl Language {
    /// All languages the AST front end and pattern tables support.
    pub const ALL: [Language; 10] = [
        Language::TypeScript,
        Language::Tsx,
        Language::JavaScript,
        Language::Python,
        Language::Rust,
        Language::Go,
        Language::Zig,
        Language::C,
        Language::Cpp,
        Language::Java,
    ];

    /// Parse a case-sensitive language tag, normalizing the accepted
    /// aliases (`ts`, `py`, `js`, `rs`, `c++`) to their canonical form.
    ///
    /// # Errors
    /// Returns [`ClewError::UnsupportedLanguage`] for any tag not in the
    /// accepted set.
    pub fn parse_tag(tag: &str) -> Result<Self, ClewError> {
        let lang = match tag {
            "typescript" | "ts" => Language::TypeScript,
            "tsx" | "jsx" => Language::Tsx,
            "javascript" | "js" => Language::JavaScript,
            "python" | "py" => Language::Python,
            "rust" | "rs" => Language::Rust,
            "go" => Language::Go,
            "zig" => Language::Zig,
            "c" => Language::C,
            "cpp" | "c++" => Language::Cpp,
            "java" => Language::Java,
            other => return Err(ClewError::UnsupportedLanguage(other.to_string())),
        };
        Ok(lang)
    }

    /// The canonical tag for this language, as accepted by [`Language::parse_tag`].
    pub const fn canonical_tag(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Zig => "zig",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_tag())
    }
}
