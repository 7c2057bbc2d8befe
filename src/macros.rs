//! Utility macros for the lexer.
//!
//! This module defines helper macros used to build the token catalog:
//!
//! - `MK_PATTERN!` - Creates a catalog entry from a raw pattern
//! - `MK_KEYWORD!` - Creates a word-boundary-anchored keyword entry
//!
//! These macros reduce boilerplate in the catalog definition.

/// Creates a `(TokenKind, Regex)` catalog entry.
///
/// The pattern is wrapped in the catalog's capturing-group convention and
/// anchored at the start of the haystack, so it can only match exactly at
/// the cursor offset.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Plus, r"\+")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $pattern:literal) => {
        (
            $kind,
            Regex::new(concat!(r"\A(", $pattern, ")")).unwrap(),
        )
    };
}

/// Creates a `(TokenKind, Regex)` catalog entry for a reserved word.
///
/// Like `MK_PATTERN!`, but with a trailing word-boundary anchor so that
/// `if` never claims the front of `iffy`. The boundary sits outside the
/// capturing group and is not part of the token.
///
/// # Example
///
/// ```ignore
/// MK_KEYWORD!(TokenKind::Public, "public")
/// ```
#[macro_export]
macro_rules! MK_KEYWORD {
    ($kind:expr, $word:literal) => {
        (
            $kind,
            Regex::new(concat!(r"\A(", $word, r")\b")).unwrap(),
        )
    };
}
