//! Source-tree provider: scans a source root and parses every module.

use std::{path::Path, sync::Arc};

use anyhow::{Result, bail};
use rayon::prelude::*;
use swc_common::SourceMap;
use tracing::{debug, warn};

use crate::core::{
    file_scanner::scan_files,
    parsers::{SourceModule, parse_module_file},
};
use crate::issues::ParseErrorIssue;

/// Every module under a source root, parsed and lowered.
#[derive(Debug)]
pub struct Project {
    /// Successfully parsed modules, sorted by path.
    pub modules: Vec<SourceModule>,
    /// Files that could not be read or parsed, and errors the parser recovered from.
    pub parse_errors: Vec<ParseErrorIssue>,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

/// Scan `root` and parse every source file in parallel.
///
/// Fails only when `root` itself is unusable. Individual file failures are
/// collected in `parse_errors`.
pub fn load_project(root: &Path, includes: &[String], ignores: &[String]) -> Result<Project> {
    if !root.exists() {
        bail!(
            "Source root '{}' does not exist.\n\
             Hint: Check your '--source-root' argument or 'sourceRoot' setting.",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let scan = scan_files(root, includes, ignores);
    debug!(files = scan.files.len(), root = %root.display(), "scanned source root");

    let source_map: Arc<SourceMap> = Default::default();
    let parse_results: Vec<_> = scan
        .files
        .par_iter()
        .map(|file| {
            let result = parse_module_file(&file.full_path, &file.rel_path, source_map.clone());
            (file.rel_path.clone(), result)
        })
        .collect();

    let mut modules = Vec::with_capacity(parse_results.len());
    let mut parse_errors = Vec::new();
    for (file_path, result) in parse_results {
        match result {
            Ok(module) => {
                for error in &module.recovered_errors {
                    warn!(path = %file_path, "recovered from parse error: {}", error);
                    parse_errors.push(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: error.clone(),
                    });
                }
                modules.push(module);
            }
            Err(e) => {
                warn!(path = %file_path, "failed to parse: {}", e);
                parse_errors.push(ParseErrorIssue {
                    file_path,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(Project {
        modules,
        parse_errors,
        skipped_count: scan.skipped_count,
    })
}
