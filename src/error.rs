//! Error types for mention/hashtag rendering.
//!
//! Tokenizing never fails. Errors only come from the edges: writing styled
//! output to a terminal and parsing user-supplied colors or flags.

use std::fmt;
use std::io;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for output and configuration parsing.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// A command-line flag received a value it cannot use.
    InvalidArgument { flag: String, value: String },
    /// A command-line flag that expects a value was given none.
    MissingValue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidArgument { flag, value } => {
                write!(f, "invalid value for {flag}: {value}")
            }
            Self::MissingValue(flag) => write!(f, "{flag} requires a value"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
