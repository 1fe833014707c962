//! Batched mutations for one sheet of a remote spreadsheet.
//!
//! A [`MutationBuilder`] queues structural edits (adding, removing and
//! reshaping rows and columns) and value edits (reading, writing and
//! clearing ranges), then sends them as one atomic request through a
//! caller-supplied [`Transport`].
//!
//! The builder keeps a projected sheet shape and a set of tracked ranges.
//! Every structural edit is checked against the shape and applied to the
//! tracked ranges as it is queued, so a range stays pointed at the same
//! cells. A failed request rolls both back to the last committed state.
//!
//! # Example
//!
//! ```rust
//! use a1_sheets_batch::{RecordingTransport, SheetHandle, StaticSession};
//! use a1_sheets_core::{CellRange, Dimension};
//!
//! # fn main() -> a1_sheets_batch::Result<()> {
//! let mut sheet = SheetHandle::new("abc123", 0, "Sheet1", 5, 2);
//! let session = StaticSession::new("token");
//! let mut transport = RecordingTransport::new();
//!
//! let mut batch = sheet.batch();
//! let totals = batch.track(CellRange::parse("A1:B5")?);
//! batch
//!     .expand_dimensions(1, Dimension::Rows)?
//!     .set_values(
//!         CellRange::parse("A6:B6")?,
//!         Dimension::Rows,
//!         vec![vec!["total".into(), 42.0.into()]],
//!     )?;
//! batch.execute(&session, &mut transport)?;
//!
//! assert!(batch.is_empty());
//! assert_eq!(batch.tracked(totals).map(|r| r.to_string()), Some("A1:B5".to_string()));
//! drop(batch);
//! assert_eq!(sheet.row_count, 6);
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod ops;
mod options;
mod request;
mod sheet;
mod transport;
mod value;

pub use builder::{BuilderState, MutationBuilder, TrackedRangeId};
pub use error::{BatchError, Result};
pub use ops::{Operation, StructuralOperation, ValueOperation};
pub use options::{BatchOptions, DateTimeRenderOption, ValueInputOption, ValueRenderOption};
pub use request::{
    AppendDimensionRequest, BatchRequest, BatchResponse, ClearValuesRequest,
    DeleteDimensionRequest, DimensionRange, GetValuesRequest, GridProperties,
    InsertDimensionRequest, OperationResult, Request, SheetProperties,
    UpdateSheetPropertiesRequest, UpdateValuesRequest, ValueRange,
};
pub use sheet::{SheetHandle, SheetShape, Spreadsheet};
pub use transport::{
    RecordingTransport, ServiceHandle, SessionProvider, StaticSession, Transport,
    TransportFailure,
};
pub use value::CellScalar;
