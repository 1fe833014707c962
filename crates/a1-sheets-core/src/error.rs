//! Error types for a1-sheets-core

use thiserror::Error;

use crate::cell::CellRange;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in a1-sheets-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Bad column or row label text
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Range text does not match the A1 grammar, or start > end on a bounded axis
    #[error("Malformed range: {0}")]
    MalformedRange(String),

    /// A deletion removed the entire bounded span of a range.
    ///
    /// Carries the range degenerated to a single line at the deletion point.
    #[error("Range collapsed to {0}")]
    RangeCollapsed(Box<CellRange>),

    /// A requested shape conflicts with the grid limits
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}

impl Error {
    /// Create a malformed range error for the given input
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedRange(msg.into())
    }

    /// The collapsed range, if this is a [`Error::RangeCollapsed`]
    pub fn collapsed_range(&self) -> Option<&CellRange> {
        match self {
            Error::RangeCollapsed(range) => Some(range),
            _ => None,
        }
    }
}
