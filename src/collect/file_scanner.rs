use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use super::CollectOptions;

/// Check if a pattern contains glob syntax (`*`, `?` or `[`).
/// Patterns without wildcards are treated as literal paths relative to the root.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of scanning files.
#[derive(Debug)]
pub struct ScanResult {
    /// Matching files in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    /// Paths that could not be accessed (only with `keep_going`).
    pub skipped_count: usize,
}

pub fn scan_files(root: &Path, options: &CollectOptions) -> Result<ScanResult> {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in &options.ignores {
        if is_glob_pattern(p) {
            let pattern =
                Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))?;
            glob_patterns.push(pattern);
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    // Hidden entries and literal ignores are pruned before descending; the
    // root itself is always walked, even when it is `..` or a dot directory.
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !(is_hidden(entry)
                    || literal_ignore_paths
                        .iter()
                        .any(|ignore_path| entry.path().starts_with(ignore_path)))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if options.keep_going => {
                skipped_count += 1;
                eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to walk {}", root.display()));
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path.is_file() && is_scannable_file(path, &options.extensions) {
            files.push(path.to_path_buf());
        }
    }

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Extension match is exact and case-sensitive: `x.H` is not an `h` file.
pub fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
