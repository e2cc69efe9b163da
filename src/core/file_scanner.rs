use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use tracing::warn;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// A file selected for parsing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScannedFile {
    /// Path relative to the scan root, `/`-separated.
    pub rel_path: String,
    pub full_path: PathBuf,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Selected files, sorted by relative path.
    pub files: Vec<ScannedFile>,
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &Path, includes: &[String], ignore_patterns: &[String]) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn!(pattern = %p, "invalid ignore pattern: {}", e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|entry| entry.is_dir())),
                    Err(e) => warn!(pattern = %inc, "invalid include pattern: {}", e),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    warn!(path = %path.display(), "include path does not exist");
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn!("cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_scannable_file(path) {
                files.push(ScannedFile {
                    rel_path: relative_path(base_dir, path),
                    full_path: path.to_path_buf(),
                });
            }
        }
    }

    // Overlapping includes may reach the same file twice.
    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

/// `path` relative to `base_dir`, joined with `/` regardless of platform.
fn relative_path(base_dir: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base_dir).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js" | "mts" | "cts" | "mjs" | "cjs")
    )
}
