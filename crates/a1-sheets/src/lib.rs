//! # a1-sheets
//!
//! A1 range notation and batched mutations for spreadsheet grid APIs.
//!
//! ## Features
//!
//! - Column/row label codec (`A` = 1, `AA` = 27, `ZZZ` = 18278)
//! - Parse and format A1 ranges, including sheet-qualified, quoted and
//!   unbounded forms (`'My Sheet'!B:D`, `3:3`, `A45:46`)
//! - R1C1 construction from integer coordinates
//! - Shift stored ranges through row/column insertions and deletions
//! - Queue structural and value edits for one sheet and send them as one
//!   atomic request through your own transport
//!
//! ## Example
//!
//! ```rust
//! use a1_sheets::prelude::*;
//!
//! # fn main() -> a1_sheets::BatchResult<()> {
//! let range: CellRange = "Sheet1!A1:B5".parse()?;
//! assert_eq!(range.cell_count(), Some(10));
//!
//! let mut sheet = SheetHandle::new("abc123", 0, "Sheet1", 5, 2);
//! let mut transport = RecordingTransport::new();
//!
//! let mut batch = sheet.batch();
//! let table = batch.track(range);
//! batch
//!     .insert_dimension(Dimension::Rows, 1, 1, false)?
//!     .set_values("A1:B1".parse()?, Dimension::Rows, vec![vec!["Name".into(), "Total".into()]])?;
//! assert_eq!(batch.tracked(table).unwrap().to_string(), "Sheet1!A2:B6");
//!
//! batch.execute(&StaticSession::new("token"), &mut transport)?;
//! assert_eq!(transport.requests().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod prelude;

// Re-export core types
pub use a1_sheets_core::{
    codec, r1c1, shift_range, CellAddress, CellRange, Dimension, Error, RangeEdit, Result,
    MAX_CELLS, MAX_COLUMNS, MAX_COLUMN_LETTERS,
};

// Re-export batch types
pub use a1_sheets_batch::{
    BatchError, BatchOptions, BatchRequest, BatchResponse, BuilderState, CellScalar,
    DateTimeRenderOption, MutationBuilder, Operation, OperationResult, RecordingTransport,
    Request, ServiceHandle, SessionProvider, SheetHandle, SheetShape, Spreadsheet,
    StaticSession, StructuralOperation, TrackedRangeId, Transport, TransportFailure,
    ValueInputOption, ValueOperation, ValueRenderOption,
};

/// Result type for batch operations
pub type BatchResult<T> = a1_sheets_batch::Result<T>;

/// Wire request entries
pub mod request {
    pub use a1_sheets_batch::{
        AppendDimensionRequest, ClearValuesRequest, DeleteDimensionRequest, DimensionRange,
        GetValuesRequest, GridProperties, InsertDimensionRequest, SheetProperties,
        UpdateSheetPropertiesRequest, UpdateValuesRequest, ValueRange,
    };
}
