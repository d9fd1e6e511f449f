//! Matching of angle-bracket include directives.
//!
//! Only the exact single-line form is recognized:
//! - `#include <foo.h>` - matched
//! - `#include<foo.h>` / `#include <foo.h>  ` - matched
//! - `  #include <foo.h>` - leading whitespace, not matched
//! - `#include <foo.h> // comment` - trailing text, not matched
//! - `#include "foo.h"` - quoted include, not matched

use std::io::{self, BufRead};
use std::sync::LazyLock;

use regex::bytes::Regex;

use super::header_set::HeaderSet;

// Byte-oriented with Unicode disabled so header names that are not valid
// UTF-8 still match; `\s` is ASCII whitespace, which also absorbs a CRLF `\r`.
static INCLUDE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^#include\s*<([^>]+)>\s*$").unwrap());

/// Return the header name of an angle-bracket include line, if the line is one.
///
/// `line` must not contain the trailing `\n`.
pub fn parse_include(line: &[u8]) -> Option<&[u8]> {
    INCLUDE_REGEX
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_bytes())
}

/// Read `reader` line by line and record every include directive into `headers`.
///
/// Returns the number of matching lines, duplicates included.
pub fn extract_includes<R: BufRead>(reader: R, headers: &mut HeaderSet) -> io::Result<usize> {
    let mut matched = 0;

    for line in reader.split(b'\n') {
        let line = line?;
        if let Some(name) = parse_include(&line) {
            headers.insert_bytes(name);
            matched += 1;
        }
    }

    Ok(matched)
}
