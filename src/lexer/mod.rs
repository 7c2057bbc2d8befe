//! Lexical analysis for a Java-like source language.
//!
//! This module converts raw source text into a stream of typed tokens and
//! validates bracket nesting while it scans. It handles:
//!
//! - A priority-ordered token catalog matched anchored at the cursor
//! - Keywords, identifiers, literals, operators, comments and whitespace
//! - A bracket-balance stack with positional error reporting
//! - Byte-accurate token spans covering the whole input

pub mod lexer;
pub mod tokens;
