#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte range of a token within its source text.
///
/// `begin` is inclusive, `end` exclusive, so a token's value is always
/// `source[begin..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

/// Resolves a byte offset to a 1-based line number and the full text of
/// that line (without its newline).
///
/// The line number is the count of newline characters strictly before the
/// offset, plus one. Offsets past the end of the source resolve to the
/// last line.
pub fn get_line_at_offset(source: &str, offset: usize) -> (usize, String) {
    let offset = offset.min(source.len());
    let line_index = source[..offset].matches('\n').count();
    let line_text = source
        .split('\n')
        .nth(line_index)
        .unwrap_or("")
        .to_string();

    (line_index + 1, line_text)
}
