//! Grid dimension (rows or columns)

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One axis of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Rows (the vertical axis)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ROWS", alias = "rows"))]
    Rows,
    /// Columns (the horizontal axis)
    #[cfg_attr(
        feature = "serde",
        serde(rename = "COLUMNS", alias = "columns", alias = "COLS", alias = "cols")
    )]
    Columns,
}

impl Dimension {
    /// Name used in request payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Rows => "ROWS",
            Dimension::Columns => "COLUMNS",
        }
    }

    /// The other axis
    pub fn other(&self) -> Dimension {
        match self {
            Dimension::Rows => Dimension::Columns,
            Dimension::Columns => Dimension::Rows,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ROWS" | "ROW" => Ok(Dimension::Rows),
            "COLUMNS" | "COLUMN" | "COLS" | "COL" => Ok(Dimension::Columns),
            other => Err(Error::InvalidLabel(format!(
                "dimension must be ROWS or COLUMNS, not '{}'",
                other
            ))),
        }
    }
}
