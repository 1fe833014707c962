//! Prelude module - common imports for a1-sheets users
//!
//! ```rust
//! use a1_sheets::prelude::*;
//! ```

pub use crate::{
    // Batch types
    BatchError,
    BatchOptions,
    BatchResponse,
    // Range types
    CellAddress,
    CellRange,
    CellScalar,
    Dimension,
    // Error types
    Error,
    MutationBuilder,
    RangeEdit,
    // In-process collaborators
    RecordingTransport,
    Result,
    // Collaborator traits
    SessionProvider,
    SheetHandle,
    StaticSession,
    Transport,
    // Functions
    shift_range,
};
