//! Wire shapes for batch requests and responses
//!
//! Field names follow the remote API (camelCase JSON). Dimension ranges are
//! 0-based and half-open; everything else in this crate is 1-based.

use a1_sheets_core::{CellRange, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ops::{Operation, StructuralOperation, ValueOperation};
use crate::options::{BatchOptions, DateTimeRenderOption, ValueInputOption, ValueRenderOption};
use crate::sheet::{SheetHandle, SheetShape};
use crate::value::CellScalar;

/// One atomic request covering every queued operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub spreadsheet_id: String,
    pub sheet_id: u32,
    pub requests: Vec<Request>,
    pub value_input_option: ValueInputOption,
    pub include_spreadsheet_in_response: bool,
    pub response_ranges: Vec<CellRange>,
    pub response_include_grid_data: bool,
}

impl BatchRequest {
    /// Serialize `operations` in order for a sheet starting at `shape`
    ///
    /// Shape-dependent entries (truncation, reshape) are resolved against the
    /// shape projected up to that point in the batch.
    pub fn from_operations(
        sheet: &SheetHandle,
        shape: SheetShape,
        operations: &[Operation],
        options: &BatchOptions,
    ) -> Result<Self> {
        let mut shape = shape;
        let mut requests = Vec::with_capacity(operations.len());

        for operation in operations {
            match operation {
                Operation::Structural(op) => {
                    requests.push(Request::structural(sheet.sheet_id, shape, op));
                    shape = shape.apply(op)?;
                }
                Operation::Value(op) => requests.push(Request::value(op, options)),
            }
        }

        Ok(Self {
            spreadsheet_id: sheet.spreadsheet_id.clone(),
            sheet_id: sheet.sheet_id,
            requests,
            value_input_option: options.value_input_option,
            include_spreadsheet_in_response: options.include_spreadsheet_in_response,
            response_ranges: options.response_ranges.clone(),
            response_include_grid_data: options.response_include_grid_data,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A single entry of a batch request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    AppendDimension(AppendDimensionRequest),
    DeleteDimension(DeleteDimensionRequest),
    InsertDimension(InsertDimensionRequest),
    UpdateSheetProperties(UpdateSheetPropertiesRequest),
    GetValues(GetValuesRequest),
    UpdateValues(UpdateValuesRequest),
    ClearValues(ClearValuesRequest),
}

impl Request {
    fn structural(sheet_id: u32, shape: SheetShape, op: &StructuralOperation) -> Self {
        match *op {
            StructuralOperation::ExpandDimensions { count, dimension } => {
                Request::AppendDimension(AppendDimensionRequest {
                    sheet_id,
                    dimension,
                    length: count,
                })
            }
            StructuralOperation::ReduceDimension { count, dimension } => {
                let extent = shape.extent(dimension);
                Request::DeleteDimension(DeleteDimensionRequest {
                    range: DimensionRange {
                        sheet_id,
                        dimension,
                        start_index: extent.saturating_sub(count),
                        end_index: extent,
                    },
                })
            }
            StructuralOperation::ReshapeDimensions { rows, columns } => {
                Request::UpdateSheetProperties(UpdateSheetPropertiesRequest {
                    properties: SheetProperties {
                        sheet_id,
                        grid_properties: GridProperties {
                            row_count: rows,
                            column_count: columns,
                        },
                    },
                    fields: "gridProperties(rowCount,columnCount)".to_string(),
                })
            }
            StructuralOperation::InsertDimension {
                dimension,
                at,
                count,
                inherit_from_before,
            } => Request::InsertDimension(InsertDimensionRequest {
                range: DimensionRange::lines(sheet_id, dimension, at, count),
                inherit_from_before,
            }),
            StructuralOperation::DeleteDimension {
                dimension,
                at,
                count,
            } => Request::DeleteDimension(DeleteDimensionRequest {
                range: DimensionRange::lines(sheet_id, dimension, at, count),
            }),
        }
    }

    fn value(op: &ValueOperation, options: &BatchOptions) -> Self {
        match op {
            ValueOperation::GetValues {
                range,
                major_dimension,
            } => Request::GetValues(GetValuesRequest {
                range: range.clone(),
                major_dimension: *major_dimension,
                value_render_option: options.value_render_option,
                date_time_render_option: options.date_time_render_option,
            }),
            ValueOperation::SetValues {
                range,
                major_dimension,
                values,
            } => {
                let include = options.include_values_in_response;
                Request::UpdateValues(UpdateValuesRequest {
                    data: ValueRange {
                        range: range.clone(),
                        major_dimension: *major_dimension,
                        values: padded(range, *major_dimension, values),
                    },
                    include_values_in_response: include,
                    response_value_render_option: include.then_some(options.value_render_option),
                    response_date_time_render_option: include
                        .then_some(options.date_time_render_option),
                })
            }
            ValueOperation::ClearValues { range } => {
                Request::ClearValues(ClearValuesRequest {
                    range: range.clone(),
                })
            }
        }
    }
}

/// Pad short inner lines with empty cells
///
/// Lines are padded to the range's extent along the inner axis when that is
/// bounded, otherwise to the longest line in the block.
fn padded(
    range: &CellRange,
    major_dimension: Dimension,
    values: &[Vec<CellScalar>],
) -> Vec<Vec<CellScalar>> {
    let extent = range.line_count(major_dimension.other());
    let longest = values.iter().map(Vec::len).max().unwrap_or(0);
    let width = extent.map_or(longest, |n| longest.max(n as usize));

    values
        .iter()
        .map(|line| {
            let mut line = line.clone();
            line.resize(width, CellScalar::Empty);
            line
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendDimensionRequest {
    pub sheet_id: u32,
    pub dimension: Dimension,
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDimensionRequest {
    pub range: DimensionRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDimensionRequest {
    pub range: DimensionRange,
    pub inherit_from_before: bool,
}

/// Lines `start_index..end_index` (0-based, half-open) along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    pub sheet_id: u32,
    pub dimension: Dimension,
    pub start_index: u32,
    pub end_index: u32,
}

impl DimensionRange {
    /// `count` lines starting at 1-based line `at`
    pub fn lines(sheet_id: u32, dimension: Dimension, at: u32, count: u32) -> Self {
        let start_index = at.saturating_sub(1);
        Self {
            sheet_id,
            dimension,
            start_index,
            end_index: start_index.saturating_add(count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSheetPropertiesRequest {
    pub properties: SheetProperties,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: u32,
    pub grid_properties: GridProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    pub row_count: u32,
    pub column_count: u32,
}

/// A range with its values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: CellRange,
    pub major_dimension: Dimension,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<CellScalar>>,
}

/// Read the values of one range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetValuesRequest {
    pub range: CellRange,
    pub major_dimension: Dimension,
    pub value_render_option: ValueRenderOption,
    pub date_time_render_option: DateTimeRenderOption,
}

/// Write the values of one range
///
/// The response render options are only sent when written values are
/// echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesRequest {
    #[serde(flatten)]
    pub data: ValueRange,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_values_in_response: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_value_render_option: Option<ValueRenderOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_date_time_render_option: Option<DateTimeRenderOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearValuesRequest {
    pub range: CellRange,
}

/// The service's answer to a batch request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub spreadsheet_id: String,
    /// One reply per request entry, in order
    #[serde(default)]
    pub replies: Vec<OperationResult>,
}

impl BatchResponse {
    /// A response with no replies, as returned for an empty batch
    pub fn empty<S: Into<String>>(spreadsheet_id: S) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            replies: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

/// The reply to one request entry
///
/// Structural entries reply with nothing; reads carry their range and values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<CellRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<CellScalar>>,
}
