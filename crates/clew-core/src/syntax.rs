// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The intermediate staging record the line-based pattern extractors build
//! before projecting it into summary [`crate::Constraint`]s.

/// A declared type's shape, as recognized by the line-based extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Struct,
    Class,
    Interface,
    Enum,
    Union,
}

/// A single function or method declaration found while walking source
/// line by line.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    /// 1-based source line.
    pub line: u32,
    pub is_async: bool,
    pub is_public: bool,
    pub return_type: Option<String>,
    pub has_error_handling: bool,
}

/// A single type declaration (struct/class/interface/enum/union/...).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub line: u32,
    pub kind: DeclKind,
}

/// A single import/use/include statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub path: String,
    pub line: u32,
}

/// The ordered sequences of declarations a per-language line-based
/// extractor produces from one source file. This is a staging area: it
/// carries no constraint-kind or confidence opinions of its own — those
/// belong to the projection step that turns counts here into summary
/// constraints.
#[derive(Debug, Clone, Default)]
pub struct SyntaxStructure {
    pub functions: Vec<FunctionDecl>,
    pub types: Vec<TypeDecl>,
    pub imports: Vec<ImportDecl>,
}

impl SyntaxStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn async_count(&self) -> usize {
        self.functions.iter().filter(|f| f.is_async).count()
    }

    pub fn typed_count(&self) -> usize {
        self.functions
            .iter()
            .filter(|f| f.return_type.is_some())
            .count()
    }

    pub fn error_handling_count(&self) -> usize {
        self.functions
            .iter()
            .filter(|f| f.has_error_handling)
            .count()
    }

    /// `typed_count / functions.len()`, or `0.0` when there are no functions.
    pub fn typed_ratio(&self) -> f32 {
        if self.functions.is_empty() {
            0.0
        } else {
            self.typed_count() as f32 / self.functions.len() as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str, is_async: bool, typed: bool, err: bool) -> FunctionDecl {
        FunctionDecl {
            name: name.to_string(),
            line: 1,
            is_async,
            is_public: true,
            return_type: typed.then(|| "void".to_string()),
            has_error_handling: err,
        }
    }

    #[test]
    fn counts_are_zero_on_empty_structure() {
        let s = SyntaxStructure::new();
        assert_eq!(s.async_count(), 0);
        assert_eq!(s.typed_count(), 0);
        assert_eq!(s.error_handling_count(), 0);
        assert_eq!(s.typed_ratio(), 0.0);
    }

    #[test]
    fn typed_ratio_matches_fraction() {
        let mut s = SyntaxStructure::new();
        s.functions.push(func("a", false, true, false));
        s.functions.push(func("b", false, true, false));
        s.functions.push(func("c", false, false, false));
        assert!((s.typed_ratio() - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn async_and_error_handling_counts() {
        let mut s = SyntaxStructure::new();
        s.functions.push(func("a", true, false, true));
        s.functions.push(func("b", false, false, false));
        assert_eq!(s.async_count(), 1);
        assert_eq!(s.error_handling_count(), 1);
    }
}
