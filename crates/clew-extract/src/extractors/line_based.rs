// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-language line-level parser: a lightweight pass over source text
//! (no AST) that builds a [`SyntaxStructure`] by recognizing function,
//! type, and import lines through keyword and punctuation heuristics.
//!
//! This is deliberately shallower than the AST extractors in
//! [`crate::extractors::ast_identifiers`] — it exists so pattern-only
//! extraction still yields a structural summary when a grammar isn't
//! available at all.

use clew_core::{DeclKind, FunctionDecl, ImportDecl, Language, SyntaxStructure, TypeDecl};

struct Profile {
    line_comment: &'static str,
    function_keywords: &'static [&'static str],
    async_prefix: Option<&'static str>,
    public_markers: &'static [&'static str],
    /// Default visibility when no marker is present (Python/JS: public by
    /// convention unless the name starts with `_`).
    default_public: bool,
    type_keywords: &'static [(&'static str, DeclKind)],
    import_keywords: &'static [&'static str],
    control_flow_keywords: &'static [&'static str],
    error_signals: &'static [&'static str],
}

const TYPESCRIPT: Profile = Profile {
    line_comment: "//",
    function_keywords: &["function "],
    async_prefix: Some("async "),
    public_markers: &["export ", "public "],
    default_public: false,
    type_keywords: &[
        ("class ", DeclKind::Class),
        ("interface ", DeclKind::Interface),
        ("enum ", DeclKind::Enum),
    ],
    import_keywords: &["import "],
    control_flow_keywords: &["if (", "if(", "while (", "while(", "for (", "for(", "switch (", "switch("],
    error_signals: &["try {", "catch (", "throw "],
};

const JAVASCRIPT: Profile = Profile {
    line_comment: "//",
    function_keywords: &["function "],
    async_prefix: Some("async "),
    public_markers: &["export "],
    default_public: false,
    type_keywords: &[("class ", DeclKind::Class)],
    import_keywords: &["import ", "require("],
    control_flow_keywords: &["if (", "if(", "while (", "while(", "for (", "for(", "switch (", "switch("],
    error_signals: &["try {", "catch (", "throw "],
};

const PYTHON: Profile = Profile {
    line_comment: "#",
    function_keywords: &["def "],
    async_prefix: Some("async "),
    public_markers: &[],
    default_public: true,
    type_keywords: &[("class ", DeclKind::Class)],
    import_keywords: &["import ", "from "],
    control_flow_keywords: &["if ", "while ", "for ", "elif "],
    error_signals: &["try:", "except ", "raise "],
};

const RUST: Profile = Profile {
    line_comment: "//",
    function_keywords: &["fn "],
    async_prefix: Some("async "),
    public_markers: &["pub "],
    default_public: false,
    type_keywords: &[
        ("struct ", DeclKind::Struct),
        ("enum ", DeclKind::Enum),
        ("trait ", DeclKind::Interface),
        ("union ", DeclKind::Union),
    ],
    import_keywords: &["use "],
    control_flow_keywords: &["if ", "while ", "for ", "match "],
    error_signals: &["Result<", "?;", "?."],
};

const GO: Profile = Profile {
    line_comment: "//",
    function_keywords: &["func "],
    async_prefix: None,
    public_markers: &[],
    default_public: false,
    type_keywords: &[("type ", DeclKind::Struct), ("interface {", DeclKind::Interface)],
    import_keywords: &["import "],
    control_flow_keywords: &["if ", "for ", "switch "],
    error_signals: &["error", "err != nil"],
};

const ZIG: Profile = Profile {
    line_comment: "//",
    function_keywords: &["fn "],
    async_prefix: None,
    public_markers: &["pub "],
    default_public: false,
    type_keywords: &[("struct {", DeclKind::Struct), ("union(", DeclKind::Union), ("enum ", DeclKind::Enum)],
    import_keywords: &["@import("],
    control_flow_keywords: &["if (", "while (", "for ("],
    error_signals: &["!", "try ", "catch ", "error{"],
};

const C: Profile = Profile {
    line_comment: "//",
    function_keywords: &[],
    async_prefix: None,
    public_markers: &[],
    default_public: true,
    type_keywords: &[
        ("struct ", DeclKind::Struct),
        ("union ", DeclKind::Union),
        ("enum ", DeclKind::Enum),
    ],
    import_keywords: &["#include"],
    control_flow_keywords: &["if (", "while (", "for (", "switch ("],
    error_signals: &["NULL", "errno"],
};

const CPP: Profile = Profile {
    line_comment: "//",
    function_keywords: &[],
    async_prefix: None,
    public_markers: &["public:"],
    default_public: true,
    type_keywords: &[
        ("class ", DeclKind::Class),
        ("struct ", DeclKind::Struct),
        ("union ", DeclKind::Union),
        ("enum ", DeclKind::Enum),
    ],
    import_keywords: &["#include"],
    control_flow_keywords: &["if (", "while (", "for (", "switch ("],
    error_signals: &["throw ", "catch (", "noexcept"],
};

const JAVA: Profile = Profile {
    line_comment: "//",
    function_keywords: &[],
    async_prefix: None,
    public_markers: &["public "],
    default_public: false,
    type_keywords: &[
        ("class ", DeclKind::Class),
        ("interface ", DeclKind::Interface),
        ("enum ", DeclKind::Enum),
    ],
    import_keywords: &["import "],
    control_flow_keywords: &["if (", "while (", "for (", "switch ("],
    error_signals: &["throws ", "try {", "catch ("],
};

fn profile_for(language: Language) -> &'static Profile {
    match language {
        Language::TypeScript | Language::Tsx => &TYPESCRIPT,
        Language::JavaScript => &JAVASCRIPT,
        Language::Python => &PYTHON,
        Language::Rust => &RUST,
        Language::Go => &GO,
        Language::Zig => &ZIG,
        Language::C => &C,
        Language::Cpp => &CPP,
        Language::Java => &JAVA,
    }
}

/// Strip a trailing line comment, then trim whitespace. Block comments are
/// not tracked across lines — a conservative choice that only risks a rare
/// false-positive match inside a multi-line comment, never a missed
/// declaration.
fn clean_line<'a>(line: &'a str, profile: &Profile) -> &'a str {
    let without_comment = match line.find(profile.line_comment) {
        Some(idx) => &line[..idx],
        None => line,
    };
    without_comment.trim()
}

fn is_control_flow(line: &str, profile: &Profile) -> bool {
    profile.control_flow_keywords.iter().any(|kw| line.starts_with(kw))
}

fn zig_type_name_before(line: &str, keyword: &str) -> Option<String> {
    let keyword_idx = line.find(keyword)?;
    let before = line[..keyword_idx].trim_end();
    let before = before.strip_suffix('=')?.trim_end();
    let name: String = before
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    (!name.is_empty()).then_some(name)
}

fn extract_name_after(line: &str, keyword: &str) -> Option<String> {
    let rest = &line[line.find(keyword)? + keyword.len()..];
    let name: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!name.is_empty()).then_some(name)
}

fn extract_return_type(line: &str, language: Language) -> Option<String> {
    match language {
        Language::Rust | Language::Python | Language::Zig => {
            let (_, rest) = line.split_once("->")?;
            let end = rest.find([':', '{', ';']).unwrap_or(rest.len());
            let ty = rest[..end].trim();
            (!ty.is_empty()).then(|| ty.to_string())
        }
        Language::TypeScript | Language::Tsx => {
            let close_paren = line.rfind(')')?;
            let rest = &line[close_paren + 1..];
            let rest = rest.strip_prefix(':')?;
            let end = rest.find('{').unwrap_or(rest.len());
            let ty = rest[..end].trim();
            (!ty.is_empty()).then(|| ty.to_string())
        }
        _ => None,
    }
}

fn has_error_handling(line: &str, profile: &Profile, language: Language) -> bool {
    match language {
        Language::Zig => {
            // Only the return-type span between `)` and `{` counts — a bare
            // `!` there marks an error-union return; `!` used elsewhere on
            // the line (boolean negation, `!=`) must not trigger this.
            let Some(close_paren) = line.find(')') else { return false };
            let brace = line[close_paren..].find('{').map(|i| close_paren + i);
            let span = match brace {
                Some(b) => &line[close_paren..b],
                None => &line[close_paren..],
            };
            span.contains('!') || profile.error_signals.iter().any(|s| *s != "!" && span.contains(s))
        }
        Language::Go => line.contains("error") && (line.ends_with(')') || line.contains("(error)") || line.contains(") error")),
        _ => profile.error_signals.iter().any(|s| line.contains(s)),
    }
}

fn is_public(line: &str, name: &str, profile: &Profile, language: Language) -> bool {
    if language == Language::Go {
        return name.chars().next().is_some_and(char::is_uppercase);
    }
    if profile.public_markers.iter().any(|m| line.starts_with(m) || line.contains(m)) {
        return true;
    }
    if profile.public_markers.is_empty() {
        return profile.default_public;
    }
    profile.default_public
}

/// Walk `source` line by line, recognizing imports, type declarations, and
/// function/method declarations for `language`.
pub fn extract(language: Language, source: &str) -> SyntaxStructure {
    let profile = profile_for(language);
    let mut structure = SyntaxStructure::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = (idx + 1) as u32;
        let line = clean_line(raw_line, profile);
        if line.is_empty() {
            continue;
        }

        if let Some(path_kw) = profile.import_keywords.iter().find(|kw| line.starts_with(**kw)) {
            structure.imports.push(ImportDecl {
                path: line[path_kw.len()..].trim_matches(|c: char| c == '"' || c == ';' || c.is_whitespace()).to_string(),
                line: line_no,
            });
            continue;
        }

        if is_control_flow(line, profile) {
            continue;
        }

        if let Some((kw, kind)) = profile.type_keywords.iter().find(|(kw, _)| line.contains(kw)) {
            // Zig names its struct/union/enum types via `const NAME = struct
            // {`, not `struct NAME {` — the name precedes the keyword.
            let name = if language == Language::Zig {
                zig_type_name_before(line, kw)
            } else {
                extract_name_after(line, kw)
            };
            if let Some(name) = name {
                structure.types.push(TypeDecl { name, line: line_no, kind: *kind });
                continue;
            }
        }

        let func_kw = profile.function_keywords.iter().find(|kw| line.contains(**kw));

        if let Some(kw) = func_kw {
            if let Some(name) = extract_name_after(line, kw) {
                let is_async = profile.async_prefix.is_some_and(|p| line.starts_with(p));
                structure.functions.push(FunctionDecl {
                    is_public: is_public(line, &name, profile, language),
                    is_async,
                    return_type: extract_return_type(line, language),
                    has_error_handling: has_error_handling(line, profile, language),
                    name,
                    line: line_no,
                });
            }
            continue;
        }

        if matches!(language, Language::C | Language::Cpp) {
            if let Some(name) = c_like_function_name(line) {
                structure.functions.push(FunctionDecl {
                    is_public: is_public(line, &name, profile, language),
                    is_async: false,
                    return_type: c_like_return_type(line, &name),
                    has_error_handling: has_error_handling(line, profile, language),
                    name,
                    line: line_no,
                });
            }
        }
    }

    structure
}

/// C/C++ has no function-introducing keyword, so a function definition is
/// recognized structurally: `NAME(...) {` (or `) {` at end-of-line after a
/// multi-line parameter list) that isn't a control-flow construct, a
/// declaration (terminated by `;`), or a macro invocation.
fn c_like_function_name(line: &str) -> Option<String> {
    if line.ends_with(';') || line.starts_with('#') {
        return None;
    }
    if !(line.ends_with('{') || line.ends_with(") {")) {
        return None;
    }
    let open_paren = line.find('(')?;
    let before = &line[..open_paren];
    let name: String = before
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    (!name.is_empty()).then_some(name)
}

fn c_like_return_type(line: &str, name: &str) -> Option<String> {
    let name_start = line.find(name)?;
    let ty = line[..name_start].trim();
    (!ty.is_empty()).then(|| ty.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_finds_functions_and_visibility() {
        let src = "pub fn run() -> Result<(), Error> {\n}\nfn helper() {}\n";
        let structure = extract(Language::Rust, src);
        assert_eq!(structure.functions.len(), 2);
        assert!(structure.functions[0].is_public);
        assert!(structure.functions[0].has_error_handling);
        assert!(!structure.functions[1].is_public);
    }

    #[test]
    fn control_flow_lines_are_not_mistaken_for_declarations() {
        let src = "fn f() {\n    if (x) {}\n    while (y) {}\n}\n";
        let structure = extract(Language::Rust, src);
        assert_eq!(structure.functions.len(), 1);
    }

    #[test]
    fn go_visibility_follows_leading_case() {
        let src = "func Public() {}\nfunc private() {}\n";
        let structure = extract(Language::Go, src);
        assert!(structure.functions[0].is_public);
        assert!(!structure.functions[1].is_public);
    }

    #[test]
    fn zig_error_union_only_detected_in_return_type_span() {
        let with_error = "fn run() !void {\n";
        let without = "fn eq(a: bool) bool {\n    return !a;\n}\n";
        let profile = profile_for(Language::Zig);
        assert!(has_error_handling(with_error.trim_end_matches('\n'), profile, Language::Zig));
        let second_line = without.lines().nth(1).unwrap();
        assert!(!has_error_handling(second_line, profile, Language::Zig));
    }

    #[test]
    fn python_imports_and_classes() {
        let src = "import os\nfrom typing import Optional\n\nclass Widget:\n    def render(self) -> str:\n        pass\n";
        let structure = extract(Language::Python, src);
        assert_eq!(structure.imports.len(), 2);
        assert_eq!(structure.types.len(), 1);
        assert_eq!(structure.functions.len(), 1);
        assert_eq!(structure.functions[0].return_type.as_deref(), Some("str"));
    }
}
