//! Column and row label codec
//!
//! Columns use bijective base-26 over `A`-`Z` (no zero digit), so `A` = 1,
//! `Z` = 26, `AA` = 27, `ZZ` = 702 and `AAA` = 703. Rows are plain decimal.
//! All indices are 1-based.

use crate::error::{Error, Result};

/// Convert a 1-based column index to its letter label (1 = A, 27 = AA, etc.)
///
/// # Examples
/// ```
/// use a1_sheets_core::codec::encode_column;
///
/// assert_eq!(encode_column(1).unwrap(), "A");
/// assert_eq!(encode_column(28).unwrap(), "AB");
/// assert_eq!(encode_column(703).unwrap(), "AAA");
/// ```
pub fn encode_column(index: u32) -> Result<String> {
    if index == 0 {
        return Err(Error::InvalidLabel("column index must be >= 1".into()));
    }

    let mut letters = Vec::new();
    let mut n = index;
    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }
    letters.reverse();

    Ok(letters.into_iter().map(char::from).collect())
}

/// Convert a column label to its 1-based index (A = 1, AA = 27, etc.)
///
/// Input is case-insensitive.
pub fn decode_column(label: &str) -> Result<u32> {
    if label.is_empty() {
        return Err(Error::InvalidLabel("empty column label".into()));
    }

    let mut index: u32 = 0;
    for c in label.chars() {
        let upper = c.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(Error::InvalidLabel(format!(
                "invalid column letter '{}' in '{}'",
                c, label
            )));
        }
        index = index
            .checked_mul(26)
            .and_then(|n| n.checked_add(upper as u32 - 'A' as u32 + 1))
            .ok_or_else(|| Error::InvalidLabel(format!("column '{}' is too large", label)))?;
    }

    Ok(index)
}

/// Format a 1-based row index
pub fn encode_row(index: u32) -> Result<String> {
    if index == 0 {
        return Err(Error::InvalidLabel("row index must be >= 1".into()));
    }
    Ok(index.to_string())
}

/// Parse a row label into its 1-based index
pub fn decode_row(label: &str) -> Result<u32> {
    if label.is_empty() {
        return Err(Error::InvalidLabel("empty row label".into()));
    }
    if !label.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidLabel(format!("invalid row number '{}'", label)));
    }

    let row: u32 = label
        .parse()
        .map_err(|_| Error::InvalidLabel(format!("row '{}' is too large", label)))?;
    if row == 0 {
        return Err(Error::InvalidLabel(format!(
            "row number must be >= 1 in '{}'",
            label
        )));
    }

    Ok(row)
}
