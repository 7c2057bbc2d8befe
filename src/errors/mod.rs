//! Error types and error handling for the lexer.
//!
//! This module defines the error taxonomy surfaced by a lex session.
//! It includes:
//!
//! - Lexical errors (no token kind matched at the cursor)
//! - Structural bracket errors (missing open, wrong close, unclosed at EOF)
//! - Contract violations (out-of-bounds cursor)
//! - Resolved line context for positional diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
