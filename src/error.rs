//! Error types for lettersort.

use std::fmt;
use std::io;

/// Result type alias for lettersort operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lettersort operations.
///
/// Sorting and rendering never fail; errors only come from loading a
/// document and from the command line.
#[derive(Debug)]
pub enum Error {
    /// I/O error from reading input or driving the terminal.
    Io(io::Error),
    /// Markup could not be parsed (e.g., a tag that never closes).
    Parse { offset: usize, reason: String },
    /// Invalid command-line argument.
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { offset, reason } => {
                write!(f, "markup parse error at byte {offset}: {reason}")
            }
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
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
