use std::fmt::Display;

use thiserror::Error;

/// The line a diagnostic points at: 1-based number plus the full line
/// text, resolved while the source is still at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: Option<LineInfo>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: Option<LineInfo>) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> Option<&LineInfo> {
        self.line.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MissingOpenBracket { .. } => "MissingOpenBracket",
            ErrorImpl::IncorrectCloseBracket { .. } => "IncorrectCloseBracket",
            ErrorImpl::MissingCloseBracket { .. } => "MissingCloseBracket",
            ErrorImpl::IndexOutOfBounds { .. } => "IndexOutOfBounds",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)?;
        if let Some(line) = &self.line {
            write!(f, "! line {}:\n{}", line.number, line.text)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token at offset {offset}")]
    UnrecognisedToken { offset: usize },
    #[error("missing open bracket for {found:?}")]
    MissingOpenBracket { found: String },
    #[error("incorrect close bracket {found:?}, must be {required:?}")]
    IncorrectCloseBracket { found: String, required: char },
    #[error("missing close bracket for {open:?}")]
    MissingCloseBracket { open: String },
    #[error("index {index} out of bounds for source of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },
}
