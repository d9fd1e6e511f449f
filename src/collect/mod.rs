//! Include collection: walk a source tree and gather its angle-bracket includes.
//!
//! The pass is single-threaded and strictly ordered:
//! 1. **Scan**: enumerate matching files under the root (`file_scanner`)
//! 2. **Match**: read each file line by line and capture include names (`directive`)
//! 3. **Sort**: de-duplicate and order names case-insensitively (`header_set`)
//!
//! Any I/O failure aborts the pass unless [`CollectOptions::keep_going`] is set,
//! in which case the offending path is reported and counted as skipped.

pub mod directive;
pub mod file_scanner;
pub mod header_set;

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

pub use directive::{extract_includes, parse_include};
pub use file_scanner::{ScanResult, scan_files};
pub use header_set::{HeaderSet, compare_names};

/// Extensions scanned when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["h", "cpp"];

/// Default traversal root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "..";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    /// File extensions to scan, without the leading dot.
    pub extensions: Vec<String>,
    /// Glob patterns or root-relative literal paths to exclude.
    pub ignores: Vec<String>,
    /// Report unreadable paths as warnings instead of failing.
    pub keep_going: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignores: Vec::new(),
            keep_going: false,
        }
    }
}

/// Outcome of one collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Unique header names in case-insensitive order.
    pub headers: Vec<String>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

/// Collect every angle-bracket include under `root`.
pub fn collect_includes(root: &Path, options: &CollectOptions) -> Result<Collection> {
    let scan = scan_files(root, options)?;
    let mut collection = collect_from_files(&scan.files, options.keep_going)?;
    collection.skipped_count += scan.skipped_count;
    Ok(collection)
}

/// Collect includes from an explicit list of files.
pub fn collect_from_files(files: &[PathBuf], keep_going: bool) -> Result<Collection> {
    let mut headers = HeaderSet::new();
    let mut files_scanned = 0;
    let mut skipped_count = 0;

    for path in files {
        match read_file_includes(path, &mut headers) {
            Ok(_) => files_scanned += 1,
            Err(err) if keep_going => {
                skipped_count += 1;
                eprintln!("{} {:#}", "warning:".bold().yellow(), err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(Collection {
        headers: headers.into_sorted(),
        files_scanned,
        skipped_count,
    })
}

/// Record the includes of one file. The handle is closed before returning.
pub fn read_file_includes(path: &Path, headers: &mut HeaderSet) -> Result<usize> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    extract_includes(BufReader::new(file), headers)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
