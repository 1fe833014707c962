//! Error types for a1-sheets-batch

use a1_sheets_core::CellRange;
use thiserror::Error;

use crate::builder::TrackedRangeId;
use crate::transport::TransportFailure;

/// Result type alias using [`BatchError`]
pub type Result<T> = std::result::Result<T, BatchError>;

/// Errors raised while queueing or executing a batch
#[derive(Debug, Error)]
pub enum BatchError {
    /// Range parsing or shifting failed
    #[error(transparent)]
    Core(#[from] a1_sheets_core::Error),

    /// A structural edit would leave the sheet outside the grid limits
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// A structural edit would delete every line of a tracked range
    #[error("Tracked range {id} would collapse to {collapsed}")]
    RangeCollapsed {
        id: TrackedRangeId,
        collapsed: CellRange,
    },

    /// A value range names a different sheet than the builder is bound to
    #[error("Range {found} is not on sheet '{expected}'")]
    SheetMismatch { expected: String, found: CellRange },

    /// A values block has more rows or columns than its bounded range
    #[error("{rows}x{columns} values do not fit in {range}")]
    ValuesExceedRange {
        range: CellRange,
        rows: usize,
        columns: usize,
    },

    /// The session provider or transport reported a failure
    #[error("Batch failed: {0}")]
    BatchFailure(#[from] TransportFailure),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
