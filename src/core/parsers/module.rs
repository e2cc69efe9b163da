use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result, anyhow};
use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};

use crate::core::syntax::{SyntaxTree, lower_module};

/// A parsed module: its paths and its lowered syntax tree.
#[derive(Debug, Clone)]
pub struct SourceModule {
    /// Path relative to the source root, `/`-separated. Used in reports.
    pub path: String,
    /// Full path as read from disk, `/`-separated. Used for locale detection.
    pub full_path: String,
    pub tree: SyntaxTree,
    /// Errors the parser recovered from. The tree is still usable.
    pub recovered_errors: Vec<String>,
}

/// Whether files with this path should be parsed with JSX enabled.
///
/// Plain `.ts` files keep JSX off so that `<T>(x)` casts and generic arrows parse.
fn wants_jsx(file_path: &str) -> bool {
    !matches!(
        Path::new(file_path).extension().and_then(|e| e.to_str()),
        Some("ts" | "mts" | "cts")
    )
}

/// `path` as a string with `/` separators on every platform.
fn slash_path(path: &Path) -> String {
    let path = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        path.into_owned()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Parse a module from a source string with a private `SourceMap`.
///
/// `file_path` serves as both the relative and the full path.
pub fn parse_module_source(code: String, file_path: &str) -> Result<SourceModule> {
    parse_module_with(
        code,
        file_path,
        file_path.to_string(),
        Arc::new(SourceMap::default()),
    )
}

/// Read and parse `full_path`, reporting it as `file_path`.
///
/// Accepts a shared `SourceMap` so files can be parsed in parallel.
pub fn parse_module_file(
    full_path: &Path,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<SourceModule> {
    let code = fs::read_to_string(full_path)
        .with_context(|| format!("Failed to read source file: {}", full_path.display()))?;
    parse_module_with(code, file_path, slash_path(full_path), source_map)
}

fn parse_module_with(
    code: String,
    file_path: &str,
    full_path: String,
    source_map: Arc<SourceMap>,
) -> Result<SourceModule> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: wants_jsx(file_path),
            decorators: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!(describe_error(&e, &source_map)))?;

        let recovered_errors = parser
            .take_errors()
            .iter()
            .map(|e| describe_error(e, &source_map))
            .collect();

        Ok(SourceModule {
            path: file_path.to_string(),
            full_path,
            tree: lower_module(&module, &source_map),
            recovered_errors,
        })
    })
}

/// `line N: message`, with the one-based line of the error.
fn describe_error(error: &SwcError, source_map: &SourceMap) -> String {
    let line = source_map.lookup_char_pos(error.span().lo).line;
    format!("line {}: {}", line, error.kind().msg())
}
