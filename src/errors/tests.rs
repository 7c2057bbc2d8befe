//! Unit tests for error handling.
//!
//! This module contains tests for error construction, naming, line
//! context and display formatting.

use crate::errors::errors::{Error, ErrorImpl, LineInfo};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken { offset: 10 },
        Some(LineInfo {
            number: 2,
            text: "int @;".to_string(),
        }),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line().unwrap().number, 2);
    assert_eq!(error.get_line().unwrap().text, "int @;");
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::UnrecognisedToken { offset: 0 },
            "UnrecognisedToken",
        ),
        (
            ErrorImpl::MissingOpenBracket {
                found: ")".to_string(),
            },
            "MissingOpenBracket",
        ),
        (
            ErrorImpl::IncorrectCloseBracket {
                found: "}".to_string(),
                required: ')',
            },
            "IncorrectCloseBracket",
        ),
        (
            ErrorImpl::MissingCloseBracket {
                open: "{".to_string(),
            },
            "MissingCloseBracket",
        ),
        (
            ErrorImpl::IndexOutOfBounds {
                index: 5,
                length: 3,
            },
            "IndexOutOfBounds",
        ),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, None).get_error_name(), name);
    }
}

#[test]
fn test_error_display_includes_line() {
    let error = Error::new(
        ErrorImpl::MissingCloseBracket {
            open: "{".to_string(),
        },
        Some(LineInfo {
            number: 3,
            text: "public void run() {".to_string(),
        }),
    );

    let message = error.to_string();
    assert!(message.contains("missing close bracket"));
    assert!(message.contains("line 3"));
    assert!(message.contains("public void run() {"));
}

#[test]
fn test_contract_error_has_no_line() {
    let error = Error::new(
        ErrorImpl::IndexOutOfBounds {
            index: 9,
            length: 4,
        },
        None,
    );

    assert!(error.get_line().is_none());
    assert_eq!(
        error.to_string(),
        "index 9 out of bounds for source of length 4"
    );
}
