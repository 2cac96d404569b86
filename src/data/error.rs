use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Fatal parse errors
// ---------------------------------------------------------------------------

/// Errors that abort a parse. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A token could not be read as a floating-point number.
    #[error("line {line}: '{token}' is not a number")]
    Conversion { line: usize, token: String },

    /// A coordinate line appeared before any neighbourhood name.
    #[error("line {line}: coordinates '{text}' have no neighbourhood name before them")]
    Structure { line: usize, text: String },

    #[error("reading input")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Recoverable diagnostics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// One pair inside a bracketed line was skipped.
    InvalidPair,
    /// A whole single-coordinate line was skipped.
    InvalidLine,
    /// A name was declared again; its earlier coordinates were discarded.
    DuplicateName,
}

/// A problem the parser stepped over without aborting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseWarning {
    pub line: usize,
    /// The offending pair, line, or name.
    pub text: String,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::InvalidPair => {
                write!(f, "line {}: skipped pair '{}'", self.line, self.text)
            }
            WarningKind::InvalidLine => {
                write!(f, "line {}: skipped line '{}'", self.line, self.text)
            }
            WarningKind::DuplicateName => write!(
                f,
                "line {}: '{}' declared again, earlier coordinates discarded",
                self.line, self.text
            ),
        }
    }
}
