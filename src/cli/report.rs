//! Output rendering and the verbose summary.
//!
//! The header list is the only thing ever written to stdout; diagnostics go
//! to stderr so the output can be redirected straight into a header file.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Write `headers` as include directives, optionally inside an include guard.
///
/// ```text
/// #ifndef STABLE_H
/// #define STABLE_H
///
/// #include <QString>
///
/// #endif // STABLE_H
/// ```
pub fn render_to<W: Write>(
    headers: &[String],
    guard: Option<&str>,
    writer: &mut W,
) -> io::Result<()> {
    if let Some(guard) = guard {
        writeln!(writer, "#ifndef {}", guard)?;
        writeln!(writer, "#define {}", guard)?;
        writeln!(writer)?;
    }

    for header in headers {
        writeln!(writer, "#include <{}>", header)?;
    }

    if let Some(guard) = guard {
        if !headers.is_empty() {
            writeln!(writer)?;
        }
        writeln!(writer, "#endif // {}", guard)?;
    }

    Ok(())
}

/// Print the verbose summary to stderr.
pub fn print_summary(result: &RunResult) {
    print_summary_to(result, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(result: &RunResult, writer: &mut W) {
    if let Some(path) = &result.config_path {
        let _ = writeln!(writer, "{} {}", "config:".bold(), path.display());
    }

    let collection = &result.collection;
    let mut msg = format!(
        "{} Collected {} unique {} from {} {}",
        SUCCESS_MARK.green(),
        collection.headers.len(),
        plural(collection.headers.len(), "header", "headers"),
        collection.files_scanned,
        plural(collection.files_scanned, "file", "files"),
    );
    if collection.skipped_count > 0 {
        msg.push_str(&format!(" ({} skipped)", collection.skipped_count));
    }
    if let Some(path) = &result.output {
        msg.push_str(&format!(" into {}", path.display()));
    }
    let _ = writeln!(writer, "{}", msg);
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
