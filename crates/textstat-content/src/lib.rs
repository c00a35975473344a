//! # textstat-content
//!
//! Helpers that get text in and out of files before and after analysis.
//! None of these are part of the statistics pipeline; they surface their
//! own I/O errors with path context and never retry.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Control characters removed by [`strip_control_chars`] when no pattern is
/// given.
pub const CONTROL_CHAR_PATTERN: &str = r"[\t\n\r\f]+";

/// Read a whole file as UTF-8, removing every occurrence of `strip`.
pub fn read_text(path: &Path, strip: Option<&str>) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(remove_all(text, strip))
}

/// Read all of `reader` as UTF-8, removing every occurrence of `strip`.
pub fn read_stream<R: Read>(mut reader: R, strip: Option<&str>) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read input stream as UTF-8 text")?;
    Ok(remove_all(text, strip))
}

/// Append `text` to `path`, creating the file when it does not exist.
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for appending", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to append to {}", path.display()))?;
    Ok(())
}

/// Delete every match of `pattern` (default [`CONTROL_CHAR_PATTERN`]).
///
/// Matches are removed, not replaced, so `"a\nb"` becomes `"ab"`.
pub fn strip_control_chars(text: &str, pattern: Option<&str>) -> Result<String> {
    let pattern = pattern.unwrap_or(CONTROL_CHAR_PATTERN);
    let re = Regex::new(pattern).with_context(|| format!("Invalid strip pattern {pattern:?}"))?;
    Ok(re.replace_all(text, "").into_owned())
}

fn remove_all(text: String, strip: Option<&str>) -> String {
    match strip {
        Some(needle) if !needle.is_empty() => text.replace(needle, ""),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_removes_tabs_and_newlines() {
        let got = strip_control_chars("a\tb\r\nc\x0cd", None).unwrap();
        assert_eq!(got, "abcd");
    }

    #[test]
    fn custom_pattern_is_used() {
        let got = strip_control_chars("a1b22c", Some("[0-9]+")).unwrap();
        assert_eq!(got, "abc");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = strip_control_chars("abc", Some("(")).unwrap_err();
        assert!(err.to_string().contains("Invalid strip pattern"));
    }

    #[test]
    fn empty_strip_needle_is_ignored() {
        assert_eq!(remove_all("abc".into(), Some("")), "abc");
    }

    #[test]
    fn read_stream_strips_needle() {
        let got = read_stream("x--y--z".as_bytes(), Some("--")).unwrap();
        assert_eq!(got, "xyz");
    }
}
