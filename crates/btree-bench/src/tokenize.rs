// File: crates/btree-bench/src/tokenize.rs
// Summary: Splits a text file into lowercase word keys.

use std::fs;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Whitespace and punctuation that separate words.
pub const DELIMITERS: &[char] = &[
    ' ', '\t', '\n', '\r', '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '\'', '"',
];

/// Words of `text` in order, ASCII-lowercased. Repeated words are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(DELIMITERS).filter(|t| !t.is_empty()).map(str::to_ascii_lowercase).collect()
}

/// Invalid UTF-8 is replaced rather than rejected.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| BenchError::ReadText { path: path.to_path_buf(), source })?;
    let tokens = tokenize(&String::from_utf8_lossy(&bytes));
    log::debug!("{}: {} bytes, {} tokens", path.display(), bytes.len(), tokens.len());
    Ok(tokens)
}
