//! # a1-sheets-core
//!
//! A1 range notation for spreadsheet services.
//!
//! This crate provides the addressing layer used throughout a1-sheets:
//! - [`codec`] - Column letter and row number labels (`A` = 1, `AA` = 27)
//! - [`CellAddress`] and [`CellRange`] - Parsing and formatting A1 ranges,
//!   including unbounded forms such as `B:D` and `3:3`
//! - [`RangeEdit`] and [`shift_range`] - How a range moves when rows or
//!   columns are inserted or deleted
//!
//! ## Example
//!
//! ```rust
//! use a1_sheets_core::{shift_range, CellRange, Dimension, RangeEdit};
//!
//! let range: CellRange = "Sheet1!B2:C5".parse().unwrap();
//! assert_eq!(range.row_count(), Some(4));
//!
//! // Insert two rows above row 3
//! let edit = RangeEdit::insert(Dimension::Rows, 3, 2);
//! let shifted = shift_range(&range, &edit).unwrap();
//! assert_eq!(shifted.to_string(), "Sheet1!B2:C7");
//!
//! // Integer coordinates, R1C1 style
//! let range = CellRange::from_coordinates(Some(2), Some(3), Some(5), Some(4)).unwrap();
//! assert_eq!(range.to_string(), "C2:D5");
//! assert_eq!(range.to_r1c1(), "R2C3:R5C4");
//! ```

pub mod cell;
pub mod codec;
pub mod dimension;
pub mod error;
pub mod r1c1;
pub mod shift;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange};
pub use dimension::Dimension;
pub use error::{Error, Result};
pub use shift::{shift_range, RangeEdit};

/// Maximum number of columns in a sheet (`ZZZ`)
pub const MAX_COLUMNS: u32 = 18_278;

/// Maximum number of letters in a column label
pub const MAX_COLUMN_LETTERS: usize = 3;

/// Maximum number of cells in a spreadsheet
pub const MAX_CELLS: u64 = 10_000_000;
