//! Integer coordinate (R1C1) construction of ranges
//!
//! `R2C3:R5C4` is the same range as `C2:D5`; `R2:R5` is rows 2 to 5 and
//! `C2:C4` columns B to D.

use crate::cell::range::{needs_quotes, quote_sheet_name, split_sheet};
use crate::cell::{CellAddress, CellRange};
use crate::error::{Error, Result};

impl CellRange {
    /// Build a range from 1-based row/column coordinates
    ///
    /// `None` components are unbounded. When every end component is `None`
    /// the range is the single cell (or line) given by the start.
    ///
    /// # Examples
    /// ```
    /// use a1_sheets_core::CellRange;
    ///
    /// let range = CellRange::from_coordinates(Some(2), Some(3), Some(5), Some(4)).unwrap();
    /// assert_eq!(range.to_string(), "C2:D5");
    ///
    /// let rows = CellRange::from_coordinates(Some(2), None, Some(5), None).unwrap();
    /// assert_eq!(rows.to_string(), "2:5");
    /// ```
    pub fn from_coordinates(
        start_row: Option<u32>,
        start_col: Option<u32>,
        end_row: Option<u32>,
        end_col: Option<u32>,
    ) -> Result<Self> {
        let start = CellAddress::new(start_col, start_row);
        let end = CellAddress::new(end_col, end_row);
        if end.is_unbounded() {
            return Self::new(start, start);
        }
        Self::new(start, end)
    }

    /// Parse `R<row>C<col>` notation, optionally sheet-qualified
    pub fn parse_r1c1(s: &str) -> Result<Self> {
        parse_r1c1(s)
    }

    /// Format as `R<row>C<col>` text
    ///
    /// Unbounded components are omitted the same way as in A1 output.
    pub fn to_r1c1(&self) -> String {
        if self.is_whole_sheet() {
            return self.to_a1_string();
        }

        let mut result = String::new();
        if let Some(sheet) = self.sheet() {
            if needs_quotes(sheet) {
                result.push_str(&quote_sheet_name(sheet));
            } else {
                result.push_str(sheet);
            }
            result.push('!');
        }

        let start = self.start();
        let end = self.end();
        result.push_str(&format_endpoint(start));
        if start != end || !start.is_bounded() {
            result.push(':');
            result.push_str(&format_endpoint(end));
        }
        result
    }
}

/// Parse `R<row>C<col>` notation, optionally sheet-qualified
///
/// # Examples
/// ```
/// use a1_sheets_core::{r1c1::parse_r1c1, CellRange};
///
/// let range = parse_r1c1("R2C3:R5C4").unwrap();
/// assert_eq!(range, CellRange::parse("C2:D5").unwrap());
/// ```
pub fn parse_r1c1(s: &str) -> Result<CellRange> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::malformed("empty range"));
    }

    let (sheet, cells) = split_sheet(s)?;
    let cells = match cells {
        Some(cells) if !cells.trim().is_empty() => cells,
        _ => match sheet {
            Some(sheet) => return Ok(CellRange::whole_sheet(sheet)),
            None => return Err(Error::malformed(format!("invalid range '{}'", s))),
        },
    };

    let (start, end) = match cells.split_once(':') {
        None => {
            let addr = parse_endpoint(cells)?;
            (addr, addr)
        }
        Some((start, end)) => (parse_endpoint(start)?, parse_endpoint(end)?),
    };

    let range =
        CellRange::new(start, end).map_err(|e| Error::malformed(format!("{} in '{}'", e, s)))?;
    Ok(match sheet {
        Some(sheet) => range.with_sheet(sheet),
        None => range,
    })
}

fn parse_endpoint(s: &str) -> Result<CellAddress> {
    let s = s.trim();
    let mut rest = s;

    let row = take_component(&mut rest, 'R', s)?;
    let col = take_component(&mut rest, 'C', s)?;

    if !rest.is_empty() || (row.is_none() && col.is_none()) {
        return Err(Error::malformed(format!("invalid R1C1 reference '{}'", s)));
    }
    Ok(CellAddress::new(col, row))
}

/// Consume `<marker><digits>` from the front of `rest`
fn take_component(rest: &mut &str, marker: char, whole: &str) -> Result<Option<u32>> {
    let Some(first) = rest.chars().next() else {
        return Ok(None);
    };
    if first.to_ascii_uppercase() != marker {
        return Ok(None);
    }

    let after = &rest[1..];
    let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return Err(Error::malformed(format!(
            "'{}' needs a number in '{}'",
            marker, whole
        )));
    }
    let value = after[..digits]
        .parse::<u32>()
        .map_err(|_| Error::malformed(format!("index too large in '{}'", whole)))?;
    *rest = &after[digits..];
    Ok(Some(value))
}

fn format_endpoint(addr: CellAddress) -> String {
    let mut result = String::new();
    if let Some(row) = addr.row {
        result.push('R');
        result.push_str(&row.to_string());
    }
    if let Some(col) = addr.col {
        result.push('C');
        result.push_str(&col.to_string());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_coordinates() {
        let range = CellRange::from_coordinates(Some(2), Some(3), Some(5), Some(4)).unwrap();
        assert_eq!(range, CellRange::parse("C2:D5").unwrap());

        let cell = CellRange::from_coordinates(Some(3), Some(1), None, None).unwrap();
        assert_eq!(cell, CellRange::parse("A3").unwrap());

        let open = CellRange::from_coordinates(Some(45), Some(1), Some(46), None).unwrap();
        assert_eq!(open.to_string(), "A45:46");

        assert!(CellRange::from_coordinates(Some(5), Some(1), Some(2), Some(1)).is_err());
        assert!(CellRange::from_coordinates(None, None, None, None).is_err());
        assert!(CellRange::from_coordinates(Some(0), Some(1), None, None).is_err());
    }

    #[test]
    fn test_parse_r1c1_matches_a1() {
        let pairs = [
            ("R2C3:R5C4", "C2:D5"),
            ("R2:R5", "2:5"),
            ("C2:C4", "B:D"),
            ("R3C1", "A3"),
            ("r3c1", "A3"),
            ("Sheet1!R1C1:R10C26", "Sheet1!A1:Z10"),
            ("'My Sheet'!C3", "'My Sheet'!C:C"),
        ];
        for (r1c1, a1) in pairs {
            assert_eq!(
                parse_r1c1(r1c1).unwrap(),
                CellRange::parse(a1).unwrap(),
                "{} vs {}",
                r1c1,
                a1
            );
        }
    }

    #[test]
    fn test_parse_r1c1_errors() {
        for bad in ["", "R", "C", "RC", "R2X", "C3R2", "R5:R2", "R0C1", "R1C18279", ":"] {
            assert!(
                matches!(parse_r1c1(bad), Err(Error::MalformedRange(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_to_r1c1() {
        let range = CellRange::parse("C2:D5").unwrap();
        assert_eq!(range.to_r1c1(), "R2C3:R5C4");
        assert_eq!(CellRange::parse("A3").unwrap().to_r1c1(), "R3C1");
        assert_eq!(CellRange::parse("2:5").unwrap().to_r1c1(), "R2:R5");
        assert_eq!(CellRange::parse("B:D").unwrap().to_r1c1(), "C2:C4");
        assert_eq!(
            CellRange::parse("'Q1 plan'!B2").unwrap().to_r1c1(),
            "'Q1 plan'!R2C2"
        );
        assert_eq!(CellRange::whole_sheet("Data").to_r1c1(), "Data");
    }
}
