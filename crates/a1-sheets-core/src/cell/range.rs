//! Cell range type and A1 range notation
//!
//! The general form is `<sheet>!<start col><start row>:<end col><end row>`:
//!
//! - `B2:C5` is a bounded block
//! - `B:D` is columns B through D, every row
//! - `3:3` is row 3, every column
//! - `C2:S` is columns C through S, from row 2 to the end
//! - `A45:46` is rows 45 and 46, from column A to the end
//! - `B2` is a single cell, `B` a whole column, `3` a whole row
//! - `Sheet1` or `'My Sheet'` alone is the whole sheet
//!
//! Sheet names are quoted with `'` when they contain whitespace or separators;
//! a doubled `''` inside a quoted name is a literal quote.

use crate::cell::CellAddress;
use crate::dimension::Dimension;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A range of cells, optionally qualified with a sheet name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellRange {
    sheet: Option<String>,
    start: CellAddress,
    end: CellAddress,
}

impl CellRange {
    /// Create a range from two endpoints
    ///
    /// Each endpoint must have at least one concrete component, and bounded
    /// starts must not exceed bounded ends.
    pub fn new(start: CellAddress, end: CellAddress) -> Result<Self> {
        if start.is_unbounded() || end.is_unbounded() {
            return Err(Error::malformed(
                "each endpoint needs a column or a row (use CellRange::whole_sheet)",
            ));
        }
        let range = Self {
            sheet: None,
            start,
            end,
        };
        range.validate()?;
        Ok(range)
    }

    /// A single cell
    pub fn cell(col: u32, row: u32) -> Result<Self> {
        let addr = CellAddress::cell(col, row);
        Self::new(addr, addr)
    }

    /// Whole columns `start..=end`, every row
    pub fn columns(start: u32, end: u32) -> Result<Self> {
        Self::new(CellAddress::column(start), CellAddress::column(end))
    }

    /// Whole rows `start..=end`, every column
    pub fn rows(start: u32, end: u32) -> Result<Self> {
        Self::new(CellAddress::row(start), CellAddress::row(end))
    }

    /// Every cell of the named sheet
    pub fn whole_sheet<S: Into<String>>(sheet: S) -> Self {
        Self {
            sheet: Some(sheet.into()),
            start: CellAddress::default(),
            end: CellAddress::default(),
        }
    }

    /// Qualify this range with a sheet name
    pub fn with_sheet<S: Into<String>>(mut self, sheet: S) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Qualify with `sheet` only if no sheet is set yet
    pub fn qualified(&self, sheet: &str) -> Self {
        let mut range = self.clone();
        if range.sheet.is_none() {
            range.sheet = Some(sheet.to_string());
        }
        range
    }

    /// Sheet name (`None` means the current/default sheet)
    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    /// Start (top-left) endpoint
    pub fn start(&self) -> CellAddress {
        self.start
    }

    /// End (bottom-right) endpoint
    pub fn end(&self) -> CellAddress {
        self.end
    }

    /// The `(start, end)` components along one axis
    pub fn bounds(&self, dimension: Dimension) -> (Option<u32>, Option<u32>) {
        match dimension {
            Dimension::Rows => (self.start.row, self.end.row),
            Dimension::Columns => (self.start.col, self.end.col),
        }
    }

    /// Replace the components along one axis, re-checking the invariants
    pub fn with_bounds(
        &self,
        dimension: Dimension,
        start: Option<u32>,
        end: Option<u32>,
    ) -> Result<Self> {
        let mut range = self.clone();
        match dimension {
            Dimension::Rows => {
                range.start.row = start;
                range.end.row = end;
            }
            Dimension::Columns => {
                range.start.col = start;
                range.end.col = end;
            }
        }
        if range.is_whole_sheet() {
            if range.sheet.is_none() {
                return Err(Error::malformed(format!(
                    "clearing {} bounds of {} leaves an unqualified whole sheet",
                    dimension, self
                )));
            }
        } else if range.start.is_unbounded() || range.end.is_unbounded() {
            return Err(Error::malformed(format!(
                "replacing {} bounds of {} leaves an empty endpoint",
                dimension, self
            )));
        }
        range.validate()?;
        Ok(range)
    }

    /// Both row components are concrete
    pub fn rows_bounded(&self) -> bool {
        self.start.row.is_some() && self.end.row.is_some()
    }

    /// Both column components are concrete
    pub fn cols_bounded(&self) -> bool {
        self.start.col.is_some() && self.end.col.is_some()
    }

    /// Rows and columns are both concrete at both ends
    pub fn is_bounded(&self) -> bool {
        self.rows_bounded() && self.cols_bounded()
    }

    /// No component is concrete
    pub fn is_whole_sheet(&self) -> bool {
        self.start.is_unbounded() && self.end.is_unbounded()
    }

    /// Number of rows, `None` when rows are unbounded
    pub fn row_count(&self) -> Option<u32> {
        self.line_count(Dimension::Rows)
    }

    /// Number of columns, `None` when columns are unbounded
    pub fn col_count(&self) -> Option<u32> {
        self.line_count(Dimension::Columns)
    }

    /// Number of rows or columns, `None` when that axis is unbounded
    pub fn line_count(&self, dimension: Dimension) -> Option<u32> {
        match self.bounds(dimension) {
            (Some(start), Some(end)) => Some(end - start + 1),
            _ => None,
        }
    }

    /// Number of cells, `None` unless the range is bounded on both axes
    pub fn cell_count(&self) -> Option<u64> {
        Some(self.row_count()? as u64 * self.col_count()? as u64)
    }

    /// Check whether `other` lies entirely inside this range
    ///
    /// Both ranges must name the same sheet. Unbounded components are
    /// treated as extending to infinity.
    pub fn contains(&self, other: &CellRange) -> bool {
        if self.sheet != other.sheet {
            return false;
        }

        [Dimension::Rows, Dimension::Columns].iter().all(|&dim| {
            let (lo, hi) = self.bounds(dim);
            let (other_lo, other_hi) = other.bounds(dim);
            lo.unwrap_or(1) <= other_lo.unwrap_or(1)
                && other_hi.unwrap_or(u32::MAX) <= hi.unwrap_or(u32::MAX)
        })
    }

    /// Move the end row by `delta` (negative shrinks)
    ///
    /// Does nothing when rows are unbounded.
    pub fn append_rows(&mut self, delta: i64) -> Result<()> {
        *self = self.moved_end(Dimension::Rows, delta)?;
        Ok(())
    }

    /// Move the end column by `delta` (negative shrinks)
    ///
    /// Does nothing when columns are unbounded.
    pub fn append_cols(&mut self, delta: i64) -> Result<()> {
        *self = self.moved_end(Dimension::Columns, delta)?;
        Ok(())
    }

    /// Remove `count` rows from the end
    pub fn reduce_rows(&mut self, count: u32) -> Result<()> {
        self.append_rows(-i64::from(count))
    }

    /// Remove `count` columns from the end
    pub fn reduce_cols(&mut self, count: u32) -> Result<()> {
        self.append_cols(-i64::from(count))
    }

    /// Reset to `rows` x `cols` anchored at A1
    ///
    /// A count of 0 leaves that axis unbounded; 0 x 0 is the whole sheet and
    /// needs a sheet name.
    pub fn reshape(&mut self, rows: u32, cols: u32) -> Result<()> {
        let bound = |n: u32| if n == 0 { (None, None) } else { (Some(1), Some(n)) };
        let (start_row, end_row) = bound(rows);
        let (start_col, end_col) = bound(cols);

        let reshaped = Self {
            sheet: self.sheet.clone(),
            start: CellAddress::new(start_col, start_row),
            end: CellAddress::new(end_col, end_row),
        };
        if reshaped.is_whole_sheet() && reshaped.sheet.is_none() {
            return Err(Error::malformed(
                "an unqualified range cannot be unbounded on both axes",
            ));
        }
        reshaped.validate()?;
        *self = reshaped;
        Ok(())
    }

    fn moved_end(&self, dimension: Dimension, delta: i64) -> Result<Self> {
        let (start, end) = self.bounds(dimension);
        let (Some(start), Some(end)) = (start, end) else {
            return Ok(self.clone());
        };
        if delta == 0 {
            return Ok(self.clone());
        }

        let new_end = i64::from(end) + delta;
        if new_end < i64::from(start) || new_end > i64::from(u32::MAX) {
            return Err(Error::malformed(format!(
                "moving the {} end of {} by {} crosses the start",
                dimension, self, delta
            )));
        }
        self.with_bounds(dimension, Some(start), Some(new_end as u32))
    }

    /// Parse a range from A1 notation
    ///
    /// # Examples
    /// ```
    /// use a1_sheets_core::{CellAddress, CellRange};
    ///
    /// let range = CellRange::parse("B2:C5").unwrap();
    /// assert_eq!(range.start(), CellAddress::cell(2, 2));
    /// assert_eq!(range.end(), CellAddress::cell(3, 5));
    ///
    /// let range = CellRange::parse("'My Sheet'!B:D").unwrap();
    /// assert_eq!(range.sheet(), Some("My Sheet"));
    /// assert_eq!(range.col_count(), Some(3));
    /// assert_eq!(range.row_count(), None);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::malformed("empty range"));
        }

        let (sheet, cells) = split_sheet(s)?;
        let cells = match cells {
            Some(cells) if !cells.trim().is_empty() => cells,
            // `'Sheet'` or `Sheet!`
            _ => match sheet {
                Some(sheet) => return Ok(Self::whole_sheet(sheet)),
                None => return Err(Error::malformed(format!("invalid range '{}'", s))),
            },
        };

        match parse_cells(cells) {
            Ok((start, end)) => {
                let mut range = Self::new(start, end)
                    .map_err(|e| Error::malformed(format!("{} in '{}'", e, s)))?;
                range.sheet = sheet;
                Ok(range)
            }
            // A bare identifier that is not a cell reference is a sheet title
            Err(_) if sheet.is_none() && is_identifier(cells) => Ok(Self::whole_sheet(cells)),
            Err(err) => Err(err),
        }
    }

    /// Format as A1 text
    ///
    /// Unbounded components are omitted, a single bounded cell is written
    /// without `:`, and a whole sheet is written as its name alone.
    pub fn to_a1_string(&self) -> String {
        if self.is_whole_sheet() {
            return match &self.sheet {
                Some(sheet) if is_identifier(sheet) && !looks_like_cells(sheet) => sheet.clone(),
                Some(sheet) => quote_sheet_name(sheet),
                None => String::new(),
            };
        }

        let mut result = String::new();
        if let Some(sheet) = &self.sheet {
            if needs_quotes(sheet) {
                result.push_str(&quote_sheet_name(sheet));
            } else {
                result.push_str(sheet);
            }
            result.push('!');
        }

        result.push_str(&self.start.to_a1_string());
        if self.start != self.end || !self.start.is_bounded() {
            result.push(':');
            result.push_str(&self.end.to_a1_string());
        }
        result
    }

    fn validate(&self) -> Result<()> {
        self.start.validate()?;
        self.end.validate()?;

        for dim in [Dimension::Columns, Dimension::Rows] {
            if let (Some(start), Some(end)) = self.bounds(dim) {
                if start > end {
                    return Err(Error::malformed(format!(
                        "start {} exceeds end {} on {}",
                        self.start, self.end, dim
                    )));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CellRange::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Split off an optional sheet qualifier
///
/// Returns the unquoted sheet name and the cell part. The cell part is `None`
/// for a quoted name with nothing after it.
pub(crate) fn split_sheet(s: &str) -> Result<(Option<String>, Option<&str>)> {
    if let Some(quote) = s.chars().next().filter(|c| *c == '\'' || *c == '"') {
        let (name, rest) = parse_quoted(s, quote)?;
        if rest.is_empty() {
            return Ok((Some(name), None));
        }
        return match rest.strip_prefix('!') {
            Some(cells) => Ok((Some(name), Some(cells))),
            None => Err(Error::malformed(format!(
                "expected '!' after sheet name in '{}'",
                s
            ))),
        };
    }

    match s.split_once('!') {
        Some(("", _)) => Err(Error::malformed(format!("empty sheet name in '{}'", s))),
        Some((name, cells)) => Ok((Some(name.to_string()), Some(cells))),
        None => Ok((None, Some(s))),
    }
}

/// Read a quoted sheet name, returning the name and the text after it
fn parse_quoted(s: &str, quote: char) -> Result<(String, &str)> {
    let mut name = String::new();
    let mut chars = s.char_indices().skip(1).peekable();

    while let Some((i, c)) = chars.next() {
        if c == quote {
            if let Some(&(_, next)) = chars.peek() {
                if next == quote {
                    name.push(quote);
                    chars.next();
                    continue;
                }
            }
            return Ok((name, &s[i + c.len_utf8()..]));
        }
        name.push(c);
    }

    Err(Error::malformed(format!("unterminated sheet name in '{}'", s)))
}

fn parse_cells(cells: &str) -> Result<(CellAddress, CellAddress)> {
    match cells.split_once(':') {
        None => {
            let addr = CellAddress::parse(cells)?;
            Ok((addr, addr))
        }
        Some((start, end)) => {
            if end.contains(':') {
                return Err(Error::malformed(format!("too many ':' in '{}'", cells)));
            }
            Ok((CellAddress::parse(start)?, CellAddress::parse(end)?))
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn looks_like_cells(s: &str) -> bool {
    parse_cells(s).is_ok()
}

pub(crate) fn needs_quotes(name: &str) -> bool {
    name.is_empty()
        || name.starts_with('\'')
        || name.starts_with('"')
        || name
            .chars()
            .any(|c| c.is_whitespace() || c == '!' || c == ':')
}

pub(crate) fn quote_sheet_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_COLUMNS;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_parse_bounded() {
        let range = CellRange::parse("B2:C5").unwrap();
        assert_eq!(range.start(), CellAddress::cell(2, 2));
        assert_eq!(range.end(), CellAddress::cell(3, 5));
        assert_eq!(range.sheet(), None);
        assert!(range.is_bounded());
        assert_eq!(range.to_string(), "B2:C5");
    }

    #[test]
    fn test_parse_sheet_qualified() {
        let range = CellRange::parse("test!C4:BX9").unwrap();
        assert_eq!(range.sheet(), Some("test"));
        assert_eq!(range.start(), CellAddress::cell(3, 4));
        assert_eq!(range.end(), CellAddress::cell(76, 9));
        assert_eq!(range.to_string(), "test!C4:BX9");
    }

    #[test]
    fn test_parse_unbounded_forms() {
        let range = CellRange::parse("B:D").unwrap();
        assert_eq!(range.bounds(Dimension::Columns), (Some(2), Some(4)));
        assert_eq!(range.bounds(Dimension::Rows), (None, None));

        let range = CellRange::parse("3:3").unwrap();
        assert_eq!(range.bounds(Dimension::Rows), (Some(3), Some(3)));
        assert_eq!(range.bounds(Dimension::Columns), (None, None));

        let range = CellRange::parse("test!C2:S").unwrap();
        assert_eq!(range.start(), CellAddress::cell(3, 2));
        assert_eq!(range.end(), CellAddress::column(19));

        let range = CellRange::parse("A45:46").unwrap();
        assert_eq!(range.bounds(Dimension::Columns), (Some(1), None));
        assert_eq!(range.bounds(Dimension::Rows), (Some(45), Some(46)));
        assert_eq!(range.to_string(), "A45:46");

        let range = CellRange::parse("test!4:ASC").unwrap();
        assert_eq!(range.start(), CellAddress::row(4));
        assert_eq!(range.end(), CellAddress::column(1173));
    }

    #[test]
    fn test_parse_shorthands() {
        let cell = CellRange::parse("A45").unwrap();
        assert_eq!(cell.start(), cell.end());
        assert_eq!(cell.cell_count(), Some(1));
        assert_eq!(cell.to_string(), "A45");

        let column = CellRange::parse("B").unwrap();
        assert_eq!(column, CellRange::columns(2, 2).unwrap());
        assert_eq!(column.to_string(), "B:B");

        let row = CellRange::parse("3").unwrap();
        assert_eq!(row, CellRange::rows(3, 3).unwrap());
        assert_eq!(row.to_string(), "3:3");
    }

    #[test]
    fn test_parse_whole_sheet() {
        let range = CellRange::parse("Sheet1").unwrap();
        assert!(range.is_whole_sheet());
        assert_eq!(range.sheet(), Some("Sheet1"));
        assert_eq!(range.to_string(), "Sheet1");

        let range = CellRange::parse("'My Sheet'").unwrap();
        assert_eq!(range.sheet(), Some("My Sheet"));
        assert_eq!(range.to_string(), "'My Sheet'");

        let range = CellRange::parse("test!").unwrap();
        assert_eq!(range, CellRange::whole_sheet("test"));

        // A sheet called "A1" needs quotes to stay a sheet
        let range = CellRange::whole_sheet("A1");
        assert_eq!(range.to_string(), "'A1'");
        assert_eq!(CellRange::parse("'A1'").unwrap(), range);
    }

    #[test]
    fn test_sheet_name_quoting() {
        let range = CellRange::parse("'this is a test'!A1:B2").unwrap();
        assert_eq!(range.sheet(), Some("this is a test"));
        assert_eq!(range.to_string(), "'this is a test'!A1:B2");

        let range = CellRange::parse("\"Q1 sales\"!A:A").unwrap();
        assert_eq!(range.sheet(), Some("Q1 sales"));
        assert_eq!(range.to_string(), "'Q1 sales'!A:A");

        let range = CellRange::parse("'Bob''s data'!C3").unwrap();
        assert_eq!(range.sheet(), Some("Bob's data"));
        assert_eq!(range.to_string(), "'Bob''s data'!C3");

        let range = CellRange::parse("'a!b'!C3").unwrap();
        assert_eq!(range.sheet(), Some("a!b"));
        assert_eq!(range.to_string(), "'a!b'!C3");
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            "", ":", "1A", "B0:C5", "test!:d3", "test:", "test!F2:A3", "A1:B2:C3", "!A1",
            "'unterminated!A1", "'sheet'A1", "A5:A2", "a b",
        ] {
            assert!(
                matches!(CellRange::parse(bad), Err(Error::MalformedRange(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_constructor_invariants() {
        assert!(CellRange::new(CellAddress::cell(3, 1), CellAddress::cell(1, 1)).is_err());
        assert!(CellRange::new(CellAddress::default(), CellAddress::cell(1, 1)).is_err());
        assert!(CellRange::cell(0, 1).is_err());
        assert!(CellRange::cell(MAX_COLUMNS + 1, 1).is_err());
        assert!(CellRange::cell(MAX_COLUMNS, 1).is_ok());
    }

    #[test]
    fn test_counts() {
        let range = CellRange::parse("test!C4:T22").unwrap();
        assert_eq!(range.row_count(), Some(19));
        assert_eq!(range.col_count(), Some(18));
        assert_eq!(range.cell_count(), Some(342));

        assert_eq!(CellRange::parse("test!B:Z").unwrap().cell_count(), None);
        assert_eq!(CellRange::parse("test").unwrap().cell_count(), None);
        assert_eq!(CellRange::parse("test!6:10").unwrap().row_count(), Some(5));
        assert_eq!(range.line_count(Dimension::Columns.other()), Some(19));
        assert_eq!(CellRange::parse("B:D").unwrap().line_count(Dimension::Rows), None);
    }

    #[test]
    fn test_contains() {
        let outer = CellRange::parse("test!C4:AL22").unwrap();
        let inner = CellRange::parse("test!E7:Z22").unwrap();
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));

        let other_sheet = inner.clone().with_sheet("other");
        assert!(!outer.contains(&other_sheet));

        let wide = CellRange::parse("test!BC4:ZZ22").unwrap();
        assert!(!outer.contains(&wide));

        let columns = CellRange::parse("test!A:Z").unwrap();
        assert!(columns.contains(&CellRange::parse("test!A2:B5").unwrap()));
        assert!(!columns.contains(&CellRange::parse("test!A2:AB5").unwrap()));

        let sheet = CellRange::whole_sheet("test");
        assert!(sheet.contains(&outer));
    }

    #[test]
    fn test_append_and_reduce() {
        let mut range = CellRange::parse("test!C4:AB25").unwrap();
        range.append_rows(2).unwrap();
        assert_eq!(range.to_string(), "test!C4:AB27");
        range.reduce_rows(5).unwrap();
        assert_eq!(range.to_string(), "test!C4:AB22");
        range.append_cols(10).unwrap();
        assert_eq!(range.to_string(), "test!C4:AL22");
        range.reduce_cols(18).unwrap();
        assert_eq!(range.to_string(), "test!C4:T22");

        assert!(range.reduce_cols(100).is_err());
        assert_eq!(range.to_string(), "test!C4:T22");

        let mut columns = CellRange::parse("B:D").unwrap();
        columns.append_rows(3).unwrap();
        assert_eq!(columns.to_string(), "B:D");

        let mut edge = CellRange::parse("ZZX1:ZZZ2").unwrap();
        assert!(edge.append_cols(1).is_err());
    }

    #[test]
    fn test_reshape() {
        let mut range = CellRange::parse("Data!C4:T22").unwrap();
        range.reshape(10, 3).unwrap();
        assert_eq!(range.to_string(), "Data!A1:C10");

        range.reshape(5, 0).unwrap();
        assert_eq!(range.to_string(), "Data!1:5");

        range.reshape(0, 0).unwrap();
        assert_eq!(range.to_string(), "Data");

        let mut bare = CellRange::parse("A1:B2").unwrap();
        assert!(bare.reshape(0, 0).is_err());
        assert_eq!(bare.to_string(), "A1:B2");
    }

    #[test]
    fn test_with_bounds() {
        let range = CellRange::parse("B2:D5").unwrap();
        let widened = range.with_bounds(Dimension::Rows, None, None).unwrap();
        assert_eq!(widened.to_string(), "B:D");
        assert!(range.with_bounds(Dimension::Rows, Some(6), Some(5)).is_err());

        // Clearing the last bounded axis needs a sheet to name the result
        assert!(widened.with_bounds(Dimension::Columns, None, None).is_err());
        let whole = widened
            .with_sheet("Data")
            .with_bounds(Dimension::Columns, None, None)
            .unwrap();
        assert!(whole.is_whole_sheet());
        assert_eq!(CellRange::parse(&whole.to_string()).unwrap(), whole);
    }

    fn arb_component(max: u32) -> impl Strategy<Value = Option<u32>> {
        prop_oneof![Just(None), (1..=max).prop_map(Some)]
    }

    fn arb_range() -> impl Strategy<Value = CellRange> {
        (
            arb_component(MAX_COLUMNS),
            arb_component(MAX_COLUMNS),
            arb_component(5_000_000),
            arb_component(5_000_000),
            prop_oneof![
                Just(None),
                Just(Some("Sheet1".to_string())),
                Just(Some("My Sheet".to_string())),
                Just(Some("it's".to_string())),
            ],
        )
            .prop_filter_map("invalid range", |(c1, c2, r1, r2, sheet)| {
                let (c1, c2) = order(c1, c2);
                let (r1, r2) = order(r1, r2);
                let range = CellRange::new(CellAddress::new(c1, r1), CellAddress::new(c2, r2)).ok()?;
                Some(match sheet {
                    Some(sheet) => range.with_sheet(sheet),
                    None => range,
                })
            })
    }

    fn order(a: Option<u32>, b: Option<u32>) -> (Option<u32>, Option<u32>) {
        match (a, b) {
            (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
            other => other,
        }
    }

    proptest! {
        #[test]
        fn prop_parse_format_round_trip(range in arb_range()) {
            let text = range.to_string();
            prop_assert_eq!(CellRange::parse(&text).unwrap(), range);
        }
    }
}
