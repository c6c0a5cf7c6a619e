// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compile-time pattern tables, one per supported language. Each entry is
//! `{pattern, category, kind, description}`. These are read-only
//! process-global data — no per-run mutation is possible.

use super::{PatternCategory as Cat, PatternRule as Rule};
use clew_core::ConstraintKind as Kind;
use clew_core::Language;

macro_rules! rule {
    ($pattern:expr, $cat:ident, $kind:ident, $desc:expr) => {
        Rule {
            pattern: $pattern,
            category: Cat::$cat,
            kind: Kind::$kind,
            description: $desc,
        }
    };
}

static TYPESCRIPT: &[Rule] = &[
    rule!("function ", FunctionDecl, Syntactic, "function declaration"),
    rule!("=> ", FunctionDecl, Syntactic, "arrow function"),
    rule!(": string", TypeAnnotation, TypeSafety, "string type annotation"),
    rule!(": number", TypeAnnotation, TypeSafety, "number type annotation"),
    rule!("?: ", TypeAnnotation, TypeSafety, "optional property"),
    rule!("async ", AsyncPattern, Semantic, "async function"),
    rule!("await ", AsyncPattern, Semantic, "await expression"),
    rule!("try {", ErrorHandling, Semantic, "try block"),
    rule!("catch (", ErrorHandling, Semantic, "catch clause"),
    rule!("import ", Imports, Architectural, "import statement"),
    rule!("export ", Imports, Architectural, "export statement"),
    rule!("class ", ClassStruct, TypeSafety, "class declaration"),
    rule!("interface ", ClassStruct, TypeSafety, "interface declaration"),
    rule!("@deprecated", Metadata, Operational, "deprecation annotation"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

static JAVASCRIPT: &[Rule] = &[
    rule!("function ", FunctionDecl, Syntactic, "function declaration"),
    rule!("=> ", FunctionDecl, Syntactic, "arrow function"),
    rule!("async ", AsyncPattern, Semantic, "async function"),
    rule!("await ", AsyncPattern, Semantic, "await expression"),
    rule!("try {", ErrorHandling, Semantic, "try block"),
    rule!("catch (", ErrorHandling, Semantic, "catch clause"),
    rule!("require(", Imports, Architectural, "CommonJS require"),
    rule!("import ", Imports, Architectural, "ES module import"),
    rule!("class ", ClassStruct, TypeSafety, "class declaration"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

static PYTHON: &[Rule] = &[
    rule!("def ", FunctionDecl, Syntactic, "function definition"),
    rule!("async def ", AsyncPattern, Semantic, "async function definition"),
    rule!("await ", AsyncPattern, Semantic, "await expression"),
    rule!(": int", TypeAnnotation, TypeSafety, "int type annotation"),
    rule!(": str", TypeAnnotation, TypeSafety, "str type annotation"),
    rule!("Optional[", TypeAnnotation, TypeSafety, "optional type annotation"),
    rule!("try:", ErrorHandling, Semantic, "try block"),
    rule!("except ", ErrorHandling, Semantic, "except clause"),
    rule!("raise ", ErrorHandling, Semantic, "raise statement"),
    rule!("import ", Imports, Architectural, "import statement"),
    rule!("from ", Imports, Architectural, "from-import statement"),
    rule!("class ", ClassStruct, TypeSafety, "class definition"),
    rule!("# TODO", Metadata, Operational, "TODO marker"),
];

static RUST: &[Rule] = &[
    rule!("fn ", FunctionDecl, Syntactic, "function declaration"),
    rule!("async fn ", AsyncPattern, Semantic, "async function"),
    rule!(".await", AsyncPattern, Semantic, "await expression"),
    rule!("Result<", ErrorHandling, Semantic, "Result return type"),
    rule!("Option<", TypeAnnotation, TypeSafety, "Option type"),
    rule!("?;", ErrorHandling, Semantic, "question-mark error propagation"),
    rule!("use ", Imports, Architectural, "use declaration"),
    rule!("struct ", ClassStruct, TypeSafety, "struct declaration"),
    rule!("enum ", ClassStruct, TypeSafety, "enum declaration"),
    rule!("trait ", ClassStruct, TypeSafety, "trait declaration"),
    rule!("unsafe ", MemoryManagement, Security, "unsafe block"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

static GO: &[Rule] = &[
    rule!("func ", FunctionDecl, Syntactic, "function declaration"),
    rule!("go func", AsyncPattern, Semantic, "goroutine launch"),
    rule!("chan ", AsyncPattern, Semantic, "channel type"),
    rule!("error", ErrorHandling, Semantic, "error return value"),
    rule!("import ", Imports, Architectural, "import declaration"),
    rule!("type ", ClassStruct, TypeSafety, "type declaration"),
    rule!("struct {", ClassStruct, TypeSafety, "struct literal"),
    rule!("interface {", ClassStruct, TypeSafety, "interface declaration"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

static ZIG: &[Rule] = &[
    rule!("fn ", FunctionDecl, Syntactic, "function declaration"),
    rule!("!void", ErrorHandling, Semantic, "error-union return type"),
    rule!("error{", ErrorHandling, Semantic, "error set declaration"),
    rule!("try ", ErrorHandling, Semantic, "try expression"),
    rule!("catch ", ErrorHandling, Semantic, "catch expression"),
    rule!("?", TypeAnnotation, TypeSafety, "optional type sigil"),
    rule!("const ", Imports, Architectural, "const declaration/import"),
    rule!("struct {", ClassStruct, TypeSafety, "struct declaration"),
    rule!("union(", ClassStruct, TypeSafety, "union declaration"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

static C: &[Rule] = &[
    rule!("(void)", FunctionDecl, Syntactic, "void-parameter function"),
    rule!("#include", Imports, Architectural, "include directive"),
    rule!("struct ", ClassStruct, TypeSafety, "struct declaration"),
    rule!("union ", ClassStruct, TypeSafety, "union declaration"),
    rule!("enum ", ClassStruct, TypeSafety, "enum declaration"),
    rule!("malloc(", MemoryManagement, Operational, "heap allocation"),
    rule!("free(", MemoryManagement, Operational, "heap deallocation"),
    rule!("NULL", TypeAnnotation, Semantic, "null pointer constant"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

static CPP: &[Rule] = &[
    rule!("#include", Imports, Architectural, "include directive"),
    rule!("class ", ClassStruct, TypeSafety, "class declaration"),
    rule!("struct ", ClassStruct, TypeSafety, "struct declaration"),
    rule!("template<", TypeAnnotation, TypeSafety, "template declaration"),
    rule!("throw ", ErrorHandling, Semantic, "throw expression"),
    rule!("noexcept", ErrorHandling, Semantic, "noexcept specifier"),
    rule!("try {", ErrorHandling, Semantic, "try block"),
    rule!("catch (", ErrorHandling, Semantic, "catch clause"),
    rule!("new ", MemoryManagement, Operational, "heap allocation"),
    rule!("delete ", MemoryManagement, Operational, "heap deallocation"),
    rule!("std::unique_ptr", MemoryManagement, Semantic, "owning smart pointer"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

static JAVA: &[Rule] = &[
    rule!("public ", FunctionDecl, Syntactic, "public visibility modifier"),
    rule!("private ", FunctionDecl, Syntactic, "private visibility modifier"),
    rule!("throws ", ErrorHandling, Semantic, "throws clause"),
    rule!("try {", ErrorHandling, Semantic, "try block"),
    rule!("catch (", ErrorHandling, Semantic, "catch clause"),
    rule!("import ", Imports, Architectural, "import statement"),
    rule!("class ", ClassStruct, TypeSafety, "class declaration"),
    rule!("interface ", ClassStruct, TypeSafety, "interface declaration"),
    rule!("enum ", ClassStruct, TypeSafety, "enum declaration"),
    rule!("@Override", Metadata, Operational, "override annotation"),
    rule!("// TODO", Metadata, Operational, "TODO marker"),
];

pub fn table_for(language: Language) -> &'static [Rule] {
    match language {
        Language::TypeScript | Language::Tsx => TYPESCRIPT,
        Language::JavaScript => JAVASCRIPT,
        Language::Python => PYTHON,
        Language::Rust => RUST,
        Language::Go => GO,
        Language::Zig => ZIG,
        Language::C => C,
        Language::Cpp => CPP,
        Language::Java => JAVA,
    }
}
