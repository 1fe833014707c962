//! Cell address type (one endpoint of a range)

use crate::codec;
use crate::error::{Error, Result};
use crate::{MAX_COLUMNS, MAX_COLUMN_LETTERS};
use std::fmt;
use std::str::FromStr;

/// One endpoint of a range (e.g. "B2", "B", "2")
///
/// Both components are 1-based. `None` is the unbounded marker: on the start
/// of a range it means "from the beginning", on the end "to the end".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellAddress {
    /// Column index (A = 1), `None` when unbounded
    pub col: Option<u32>,
    /// Row index (1-based), `None` when unbounded
    pub row: Option<u32>,
}

impl CellAddress {
    /// Create an address from optional components
    pub fn new(col: Option<u32>, row: Option<u32>) -> Self {
        Self { col, row }
    }

    /// Create a fully bounded address
    pub fn cell(col: u32, row: u32) -> Self {
        Self {
            col: Some(col),
            row: Some(row),
        }
    }

    /// Create a column-only address (row unbounded)
    pub fn column(col: u32) -> Self {
        Self {
            col: Some(col),
            row: None,
        }
    }

    /// Create a row-only address (column unbounded)
    pub fn row(row: u32) -> Self {
        Self {
            col: None,
            row: Some(row),
        }
    }

    /// Both components are concrete
    pub fn is_bounded(&self) -> bool {
        self.col.is_some() && self.row.is_some()
    }

    /// Neither component is concrete
    pub fn is_unbounded(&self) -> bool {
        self.col.is_none() && self.row.is_none()
    }

    /// Parse one endpoint of an A1 range (`B2`, `$B$2`, `B`, `2`)
    ///
    /// At least one of the column and row must be present. Column labels are
    /// limited to three letters (`ZZZ`) and rows must be >= 1.
    ///
    /// # Examples
    /// ```
    /// use a1_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B2").unwrap();
    /// assert_eq!(addr, CellAddress::cell(2, 2));
    ///
    /// let addr = CellAddress::parse("AA").unwrap();
    /// assert_eq!(addr.col, Some(27));
    /// assert_eq!(addr.row, None);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::malformed("empty cell reference"));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        let col_absolute = bytes.first() == Some(&b'$');
        if col_absolute {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        let col_str = &s[col_start..pos];

        // A lone leading '$' before digits belongs to the row
        if bytes.get(pos) == Some(&b'$') && !(col_absolute && col_str.is_empty()) {
            pos += 1;
        }

        let row_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let row_str = &s[row_start..pos];

        if pos != bytes.len() || (col_str.is_empty() && row_str.is_empty()) {
            return Err(Error::malformed(format!("invalid cell reference '{}'", s)));
        }

        let col = if col_str.is_empty() {
            None
        } else {
            if col_str.len() > MAX_COLUMN_LETTERS {
                return Err(Error::malformed(format!(
                    "column '{}' is beyond ZZZ in '{}'",
                    col_str, s
                )));
            }
            let col = codec::decode_column(col_str)
                .map_err(|e| Error::malformed(format!("{} in '{}'", e, s)))?;
            Some(col)
        };

        let row = if row_str.is_empty() {
            None
        } else {
            let row = codec::decode_row(row_str)
                .map_err(|e| Error::malformed(format!("{} in '{}'", e, s)))?;
            Some(row)
        };

        Ok(Self { col, row })
    }

    /// Format as A1 text, omitting unbounded components
    ///
    /// A fully unbounded address formats as the empty string.
    pub fn to_a1_string(&self) -> String {
        let mut result = String::new();
        if let Some(col) = self.col {
            match codec::encode_column(col) {
                Ok(letters) => result.push_str(&letters),
                // Only column 0 has no label, and range validation rejects it
                Err(_) => debug_assert!(false, "column 0 has no A1 label"),
            }
        }
        if let Some(row) = self.row {
            result.push_str(&row.to_string());
        }
        result
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.col == Some(0) || self.row == Some(0) {
            return Err(Error::malformed("indices are 1-based, got 0"));
        }
        if let Some(col) = self.col {
            if col > MAX_COLUMNS {
                return Err(Error::malformed(format!(
                    "column {} is beyond ZZZ ({})",
                    col, MAX_COLUMNS
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
