//! Cell addressing
//!
//! This module contains:
//! - [`CellAddress`] - One endpoint of a range (e.g., "B2", "B", "2")
//! - [`CellRange`] - A possibly sheet-qualified range (e.g., "Sheet1!A1:B10")

mod address;
pub(crate) mod range;

pub use address::CellAddress;
pub use range::CellRange;
