//! Sheet handles and shape projection

use a1_sheets_core::{Dimension, MAX_CELLS, MAX_COLUMNS};
use serde::{Deserialize, Serialize};

use crate::builder::MutationBuilder;
use crate::error::{BatchError, Result};
use crate::ops::StructuralOperation;
use crate::options::BatchOptions;

/// Row and column counts of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetShape {
    #[serde(rename = "rowCount")]
    pub rows: u32,
    #[serde(rename = "columnCount")]
    pub columns: u32,
}

impl SheetShape {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Number of lines along `dimension`
    pub fn extent(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Rows => self.rows,
            Dimension::Columns => self.columns,
        }
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    fn with_extent(&self, dimension: Dimension, extent: u32) -> Self {
        match dimension {
            Dimension::Rows => Self::new(extent, self.columns),
            Dimension::Columns => Self::new(self.rows, extent),
        }
    }

    /// Project the shape after `op`, enforcing the grid limits
    pub fn apply(&self, op: &StructuralOperation) -> Result<SheetShape> {
        let shape = match *op {
            StructuralOperation::ExpandDimensions { count, dimension } => {
                self.with_extent(dimension, self.grown(dimension, count)?)
            }
            StructuralOperation::ReduceDimension { count, dimension } => {
                let extent = self.extent(dimension);
                if count >= extent {
                    return Err(BatchError::InvalidShape(format!(
                        "cannot remove {} of {} {}; at least one must remain",
                        count, extent, dimension
                    )));
                }
                self.with_extent(dimension, extent - count)
            }
            StructuralOperation::ReshapeDimensions { rows, columns } => {
                if rows < 1 || columns < 1 {
                    return Err(BatchError::InvalidShape(format!(
                        "cannot reshape to {}x{}; both counts must be at least 1",
                        rows, columns
                    )));
                }
                Self::new(rows, columns)
            }
            StructuralOperation::InsertDimension {
                dimension,
                at,
                count,
                ..
            } => {
                let extent = self.extent(dimension);
                if at < 1 || at > extent.saturating_add(1) {
                    return Err(BatchError::InvalidShape(format!(
                        "cannot insert at {} {} in a sheet with {}",
                        dimension, at, extent
                    )));
                }
                self.with_extent(dimension, self.grown(dimension, count)?)
            }
            StructuralOperation::DeleteDimension {
                dimension,
                at,
                count,
            } => {
                let extent = self.extent(dimension);
                let last = (u64::from(at) + u64::from(count)).saturating_sub(1);
                if at < 1 || last > u64::from(extent) {
                    return Err(BatchError::InvalidShape(format!(
                        "cannot delete {} {} from {} in a sheet with {}",
                        count, dimension, at, extent
                    )));
                }
                if count >= extent {
                    return Err(BatchError::InvalidShape(format!(
                        "cannot delete all {} {}",
                        extent, dimension
                    )));
                }
                self.with_extent(dimension, extent - count)
            }
        };
        shape.check_limits()?;
        Ok(shape)
    }

    fn grown(&self, dimension: Dimension, count: u32) -> Result<u32> {
        self.extent(dimension).checked_add(count).ok_or_else(|| {
            BatchError::InvalidShape(format!("adding {} {} overflows", count, dimension))
        })
    }

    fn check_limits(&self) -> Result<()> {
        if self.columns > MAX_COLUMNS {
            return Err(BatchError::InvalidShape(format!(
                "{} columns exceeds the limit of {}",
                self.columns, MAX_COLUMNS
            )));
        }
        if self.cell_count() > MAX_CELLS {
            return Err(BatchError::InvalidShape(format!(
                "{}x{} is {} cells, over the limit of {}",
                self.rows,
                self.columns,
                self.cell_count(),
                MAX_CELLS
            )));
        }
        Ok(())
    }
}

/// One sheet of a remote spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetHandle {
    pub spreadsheet_id: String,
    pub sheet_id: u32,
    pub title: String,
    pub row_count: u32,
    pub column_count: u32,
}

impl SheetHandle {
    pub fn new<S: Into<String>, T: Into<String>>(
        spreadsheet_id: S,
        sheet_id: u32,
        title: T,
        row_count: u32,
        column_count: u32,
    ) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_id,
            title: title.into(),
            row_count,
            column_count,
        }
    }

    /// Current row and column counts
    pub fn shape(&self) -> SheetShape {
        SheetShape::new(self.row_count, self.column_count)
    }

    /// Start a batch with default options
    pub fn batch(&mut self) -> MutationBuilder<'_> {
        MutationBuilder::new(self, BatchOptions::default())
    }

    /// Start a batch with the given options
    pub fn batch_with(&mut self, options: BatchOptions) -> MutationBuilder<'_> {
        MutationBuilder::new(self, options)
    }

    pub(crate) fn set_shape(&mut self, shape: SheetShape) {
        self.row_count = shape.rows;
        self.column_count = shape.columns;
    }
}

/// A spreadsheet and its sheets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    pub id: String,
    pub title: String,
    pub sheets: Vec<SheetHandle>,
}

impl Spreadsheet {
    pub fn new<S: Into<String>, T: Into<String>>(id: S, title: T) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sheets: Vec::new(),
        }
    }

    /// Add a sheet, returning its index
    pub fn add_sheet<S: Into<String>>(
        &mut self,
        sheet_id: u32,
        title: S,
        row_count: u32,
        column_count: u32,
    ) -> usize {
        self.sheets.push(SheetHandle::new(
            self.id.clone(),
            sheet_id,
            title,
            row_count,
            column_count,
        ));
        self.sheets.len() - 1
    }

    /// Find a sheet by title
    pub fn sheet(&self, title: &str) -> Option<&SheetHandle> {
        self.sheets.iter().find(|s| s.title == title)
    }

    /// Find a sheet by title (mutable)
    pub fn sheet_mut(&mut self, title: &str) -> Option<&mut SheetHandle> {
        self.sheets.iter_mut().find(|s| s.title == title)
    }

    pub fn sheet_by_index(&self, index: usize) -> Option<&SheetHandle> {
        self.sheets.get(index)
    }

    pub fn sheet_by_index_mut(&mut self, index: usize) -> Option<&mut SheetHandle> {
        self.sheets.get_mut(index)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> SheetShape {
        SheetShape::new(1000, 26)
    }

    #[test]
    fn test_expand() {
        let op = StructuralOperation::ExpandDimensions {
            count: 5,
            dimension: Dimension::Rows,
        };
        assert_eq!(shape().apply(&op).unwrap(), SheetShape::new(1005, 26));

        let op = StructuralOperation::ExpandDimensions {
            count: MAX_COLUMNS,
            dimension: Dimension::Columns,
        };
        assert!(matches!(shape().apply(&op), Err(BatchError::InvalidShape(_))));

        let op = StructuralOperation::ExpandDimensions {
            count: 400_000,
            dimension: Dimension::Rows,
        };
        assert!(matches!(shape().apply(&op), Err(BatchError::InvalidShape(_))));
    }

    #[test]
    fn test_reduce() {
        let op = StructuralOperation::ReduceDimension {
            count: 6,
            dimension: Dimension::Columns,
        };
        assert_eq!(shape().apply(&op).unwrap(), SheetShape::new(1000, 20));

        let op = StructuralOperation::ReduceDimension {
            count: 26,
            dimension: Dimension::Columns,
        };
        assert!(matches!(shape().apply(&op), Err(BatchError::InvalidShape(_))));
    }

    #[test]
    fn test_reshape() {
        let op = StructuralOperation::ReshapeDimensions {
            rows: 10,
            columns: 3,
        };
        assert_eq!(shape().apply(&op).unwrap(), SheetShape::new(10, 3));

        for (rows, columns) in [(0, 3), (3, 0), (1, MAX_COLUMNS + 1), (10_000, 10_000)] {
            let op = StructuralOperation::ReshapeDimensions { rows, columns };
            assert!(matches!(shape().apply(&op), Err(BatchError::InvalidShape(_))));
        }
    }

    #[test]
    fn test_insert_and_delete() {
        let insert = StructuralOperation::InsertDimension {
            dimension: Dimension::Rows,
            at: 1001,
            count: 2,
            inherit_from_before: true,
        };
        assert_eq!(shape().apply(&insert).unwrap(), SheetShape::new(1002, 26));

        let insert = StructuralOperation::InsertDimension {
            dimension: Dimension::Rows,
            at: 1002,
            count: 2,
            inherit_from_before: false,
        };
        assert!(shape().apply(&insert).is_err());

        let delete = StructuralOperation::DeleteDimension {
            dimension: Dimension::Columns,
            at: 20,
            count: 7,
        };
        assert_eq!(shape().apply(&delete).unwrap(), SheetShape::new(1000, 19));

        let delete = StructuralOperation::DeleteDimension {
            dimension: Dimension::Columns,
            at: 21,
            count: 7,
        };
        assert!(shape().apply(&delete).is_err());

        let delete = StructuralOperation::DeleteDimension {
            dimension: Dimension::Columns,
            at: 1,
            count: 26,
        };
        assert!(shape().apply(&delete).is_err());
    }

    #[test]
    fn test_spreadsheet_lookup() {
        let mut spreadsheet = Spreadsheet::new("abc", "Budget");
        spreadsheet.add_sheet(0, "Sheet1", 1000, 26);
        spreadsheet.add_sheet(7, "Totals", 10, 4);

        assert_eq!(spreadsheet.sheet_count(), 2);
        assert_eq!(spreadsheet.sheet("Totals").map(|s| s.sheet_id), Some(7));
        assert_eq!(spreadsheet.sheet_by_index(0).map(|s| s.title.as_str()), Some("Sheet1"));
        assert!(spreadsheet.sheet("Missing").is_none());

        let sheet = spreadsheet.sheet_mut("Totals").unwrap();
        assert_eq!(sheet.spreadsheet_id, "abc");
        assert_eq!(sheet.shape(), SheetShape::new(10, 4));
    }
}
