//! Queued batch operations

use std::fmt;

use a1_sheets_core::{CellRange, Dimension, RangeEdit};
use serde::{Deserialize, Serialize};

use crate::error::{BatchError, Result};
use crate::sheet::SheetShape;
use crate::value::CellScalar;

/// An edit to the row/column structure of a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuralOperation {
    /// Append `count` lines at the end
    ExpandDimensions { count: u32, dimension: Dimension },
    /// Remove `count` lines from the end
    ReduceDimension { count: u32, dimension: Dimension },
    /// Set the row and column counts outright
    ReshapeDimensions { rows: u32, columns: u32 },
    /// Insert `count` lines before line `at`
    InsertDimension {
        dimension: Dimension,
        at: u32,
        count: u32,
        #[serde(default)]
        inherit_from_before: bool,
    },
    /// Delete `count` lines starting at line `at`
    DeleteDimension {
        dimension: Dimension,
        at: u32,
        count: u32,
    },
}

impl StructuralOperation {
    /// Zero-count edits leave the sheet unchanged
    pub fn is_noop(&self) -> bool {
        match *self {
            StructuralOperation::ExpandDimensions { count, .. }
            | StructuralOperation::ReduceDimension { count, .. }
            | StructuralOperation::InsertDimension { count, .. }
            | StructuralOperation::DeleteDimension { count, .. } => count == 0,
            StructuralOperation::ReshapeDimensions { .. } => false,
        }
    }

    /// The line edits this operation makes to a sheet of shape `before`
    ///
    /// Appends become insertions past the last line and truncations become
    /// deletions of the trailing block, so stored ranges can be shifted with
    /// [`a1_sheets_core::shift_range`].
    pub fn range_edits(&self, before: SheetShape) -> Vec<RangeEdit> {
        match *self {
            StructuralOperation::ExpandDimensions { count, dimension } => {
                vec![RangeEdit::insert(
                    dimension,
                    before.extent(dimension).saturating_add(1),
                    count,
                )]
            }
            StructuralOperation::ReduceDimension { count, dimension } => {
                let extent = before.extent(dimension);
                let count = count.min(extent);
                vec![RangeEdit::delete(dimension, extent - count + 1, count)]
            }
            StructuralOperation::ReshapeDimensions { rows, columns } => [
                (Dimension::Rows, rows),
                (Dimension::Columns, columns),
            ]
            .into_iter()
            .filter_map(|(dimension, target)| {
                let extent = before.extent(dimension);
                if target > extent {
                    Some(RangeEdit::insert(dimension, extent + 1, target - extent))
                } else if target < extent {
                    Some(RangeEdit::delete(dimension, target + 1, extent - target))
                } else {
                    None
                }
            })
            .collect(),
            StructuralOperation::InsertDimension {
                dimension,
                at,
                count,
                ..
            } => vec![RangeEdit::insert(dimension, at, count)],
            StructuralOperation::DeleteDimension {
                dimension,
                at,
                count,
            } => vec![RangeEdit::delete(dimension, at, count)],
        }
    }
}

impl fmt::Display for StructuralOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralOperation::ExpandDimensions { count, dimension } => {
                write!(f, "expand {} {}", count, dimension)
            }
            StructuralOperation::ReduceDimension { count, dimension } => {
                write!(f, "reduce {} {}", count, dimension)
            }
            StructuralOperation::ReshapeDimensions { rows, columns } => {
                write!(f, "reshape to {}x{}", rows, columns)
            }
            StructuralOperation::InsertDimension {
                dimension,
                at,
                count,
                ..
            } => write!(f, "insert {} {} at {}", count, dimension, at),
            StructuralOperation::DeleteDimension {
                dimension,
                at,
                count,
            } => write!(f, "delete {} {} at {}", count, dimension, at),
        }
    }
}

/// A read or write of cell values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueOperation {
    GetValues {
        range: CellRange,
        #[serde(default)]
        major_dimension: Dimension,
    },
    /// Write a block of values; short lines are padded with empty cells when sent
    SetValues {
        range: CellRange,
        #[serde(default)]
        major_dimension: Dimension,
        values: Vec<Vec<CellScalar>>,
    },
    ClearValues { range: CellRange },
}

impl ValueOperation {
    /// The range read, written or cleared
    pub fn range(&self) -> &CellRange {
        match self {
            ValueOperation::GetValues { range, .. }
            | ValueOperation::SetValues { range, .. }
            | ValueOperation::ClearValues { range } => range,
        }
    }

    fn range_mut(&mut self) -> &mut CellRange {
        match self {
            ValueOperation::GetValues { range, .. }
            | ValueOperation::SetValues { range, .. }
            | ValueOperation::ClearValues { range } => range,
        }
    }

    /// Bind the range to sheet `title`
    ///
    /// Unqualified ranges get the title; ranges on another sheet are
    /// rejected. A values block must fit the bounded axes of its range.
    pub fn qualified(mut self, title: &str) -> Result<Self> {
        let range = self.range().qualified(title);
        if range.sheet() != Some(title) {
            return Err(BatchError::SheetMismatch {
                expected: title.to_string(),
                found: range,
            });
        }
        *self.range_mut() = range;

        if let ValueOperation::SetValues {
            range,
            major_dimension,
            values,
        } = &self
        {
            check_values_fit(range, *major_dimension, values)?;
        }
        Ok(self)
    }
}

fn check_values_fit(
    range: &CellRange,
    major_dimension: Dimension,
    values: &[Vec<CellScalar>],
) -> Result<()> {
    let outer = values.len();
    let inner = values.iter().map(Vec::len).max().unwrap_or(0);

    let fits = |dimension: Dimension, n: usize| {
        range
            .line_count(dimension)
            .map_or(true, |limit| n <= limit as usize)
    };
    if fits(major_dimension, outer) && fits(major_dimension.other(), inner) {
        return Ok(());
    }

    let (rows, columns) = match major_dimension {
        Dimension::Rows => (outer, inner),
        Dimension::Columns => (inner, outer),
    };
    Err(BatchError::ValuesExceedRange {
        range: range.clone(),
        rows,
        columns,
    })
}

impl fmt::Display for ValueOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueOperation::GetValues { range, .. } => write!(f, "get {}", range),
            ValueOperation::SetValues { range, values, .. } => {
                write!(f, "set {} ({} lines)", range, values.len())
            }
            ValueOperation::ClearValues { range } => write!(f, "clear {}", range),
        }
    }
}

/// Any queued operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operation {
    Structural(StructuralOperation),
    Value(ValueOperation),
}

impl From<StructuralOperation> for Operation {
    fn from(op: StructuralOperation) -> Self {
        Operation::Structural(op)
    }
}

impl From<ValueOperation> for Operation {
    fn from(op: ValueOperation) -> Self {
        Operation::Value(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Structural(op) => write!(f, "{}", op),
            Operation::Value(op) => write!(f, "{}", op),
        }
    }
}
