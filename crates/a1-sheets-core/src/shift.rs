//! Range shifting for row/column insertion and deletion
//!
//! When lines are inserted or deleted elsewhere in a sheet, a stored range
//! has to move with the cells it refers to. [`shift_range`] computes the new
//! range for one [`RangeEdit`].
//!
//! Only the edit's axis changes and unbounded components stay unbounded.
//! An insertion at a range's first line moves the whole range down (or
//! right); an insertion at its last line grows it.

use crate::cell::CellRange;
use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::MAX_COLUMNS;

/// A structural edit along one axis
///
/// Positions are 1-based. `Insert` puts `count` new lines before line `at`;
/// `Delete` removes lines `at..at + count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeEdit {
    /// Insert `count` lines before line `at`
    Insert {
        dimension: Dimension,
        at: u32,
        count: u32,
    },
    /// Delete `count` lines starting at line `at`
    Delete {
        dimension: Dimension,
        at: u32,
        count: u32,
    },
}

impl RangeEdit {
    /// Create an insertion
    pub fn insert(dimension: Dimension, at: u32, count: u32) -> Self {
        RangeEdit::Insert {
            dimension,
            at,
            count,
        }
    }

    /// Create a deletion
    pub fn delete(dimension: Dimension, at: u32, count: u32) -> Self {
        RangeEdit::Delete {
            dimension,
            at,
            count,
        }
    }

    /// The axis being edited
    pub fn dimension(&self) -> Dimension {
        match *self {
            RangeEdit::Insert { dimension, .. } | RangeEdit::Delete { dimension, .. } => dimension,
        }
    }

    /// First line of the edit (1-based)
    pub fn at(&self) -> u32 {
        match *self {
            RangeEdit::Insert { at, .. } | RangeEdit::Delete { at, .. } => at,
        }
    }

    /// Number of lines inserted or deleted
    pub fn count(&self) -> u32 {
        match *self {
            RangeEdit::Insert { count, .. } | RangeEdit::Delete { count, .. } => count,
        }
    }

    /// Edits with a zero count change nothing
    pub fn is_noop(&self) -> bool {
        self.count() == 0
    }
}

/// Compute where `range` ends up after `edit`
///
/// # Errors
///
/// - [`Error::RangeCollapsed`] when a deletion removes every line of the
///   range on that axis. The error carries the range reduced to the single
///   line at the deletion point.
/// - [`Error::InvalidShape`] when an insertion pushes a column past `ZZZ`.
/// - [`Error::MalformedRange`] on `u32` overflow.
///
/// # Examples
/// ```
/// use a1_sheets_core::{shift_range, CellRange, Dimension, RangeEdit};
///
/// let range = CellRange::parse("A1:A5").unwrap();
/// let shifted = shift_range(&range, &RangeEdit::delete(Dimension::Rows, 2, 2)).unwrap();
/// assert_eq!(shifted.to_string(), "A1:A3");
/// ```
pub fn shift_range(range: &CellRange, edit: &RangeEdit) -> Result<CellRange> {
    if edit.is_noop() {
        return Ok(range.clone());
    }

    let dimension = edit.dimension();
    let (start, end) = range.bounds(dimension);
    if start.is_none() && end.is_none() {
        return Ok(range.clone());
    }

    let (new_start, new_end) = match *edit {
        RangeEdit::Insert { at, count, .. } => {
            let shift = |line: u32| shift_for_insert(line, at, count, dimension);
            (start.map(shift).transpose()?, end.map(shift).transpose()?)
        }
        RangeEdit::Delete { at, count, .. } => {
            let block_end = u64::from(at) + u64::from(count);
            let first = u64::from(start.unwrap_or(1));
            if let Some(last) = end {
                if first >= u64::from(at) && u64::from(last) < block_end {
                    let line = at.max(1);
                    let collapsed = range.with_bounds(dimension, Some(line), Some(line))?;
                    return Err(Error::RangeCollapsed(Box::new(collapsed)));
                }
            }
            (
                start.map(|line| shift_for_delete(line, at, block_end, count, true)),
                end.map(|line| shift_for_delete(line, at, block_end, count, false)),
            )
        }
    };

    range.with_bounds(dimension, new_start, new_end)
}

fn shift_for_insert(line: u32, at: u32, count: u32, dimension: Dimension) -> Result<u32> {
    if line < at {
        return Ok(line);
    }
    let shifted = line.checked_add(count).ok_or_else(|| {
        Error::malformed(format!("inserting {} lines at {} overflows", count, at))
    })?;
    if dimension == Dimension::Columns && shifted > MAX_COLUMNS {
        return Err(Error::InvalidShape(format!(
            "inserting {} columns moves column {} past ZZZ",
            count, line
        )));
    }
    Ok(shifted)
}

fn shift_for_delete(line: u32, at: u32, block_end: u64, count: u32, is_start: bool) -> u32 {
    if line < at {
        line
    } else if u64::from(line) >= block_end {
        line - count
    } else if is_start {
        at
    } else {
        // An end inside the block is only reached when the start lies before it
        at - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellAddress;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn rows(start: u32, end: u32) -> CellRange {
        CellRange::parse(&format!("Sheet1!A{}:D{}", start, end)).unwrap()
    }

    fn shift(range: &CellRange, edit: RangeEdit) -> CellRange {
        shift_range(range, &edit).unwrap()
    }

    #[test]
    fn test_insert_inside_grows() {
        let range = rows(1, 5);
        assert_eq!(shift(&range, RangeEdit::insert(Dimension::Rows, 3, 2)), rows(1, 7));
    }

    #[test]
    fn test_insert_after_is_noop() {
        let range = rows(1, 5);
        assert_eq!(shift(&range, RangeEdit::insert(Dimension::Rows, 6, 2)), range);
    }

    #[test]
    fn test_insert_before_moves() {
        let range = rows(1, 5);
        assert_eq!(shift(&range, RangeEdit::insert(Dimension::Rows, 1, 2)), rows(3, 7));
    }

    #[test]
    fn test_insert_at_boundaries() {
        let range = rows(3, 5);
        // At the first line: the new lines land above the range
        assert_eq!(shift(&range, RangeEdit::insert(Dimension::Rows, 3, 1)), rows(4, 6));
        // At the last line: the range grows
        assert_eq!(shift(&range, RangeEdit::insert(Dimension::Rows, 5, 1)), rows(3, 6));
    }

    #[test]
    fn test_delete_inside_shrinks() {
        let range = rows(1, 5);
        assert_eq!(shift(&range, RangeEdit::delete(Dimension::Rows, 2, 2)), rows(1, 3));
    }

    #[test]
    fn test_delete_overlapping_edges() {
        let range = rows(3, 8);
        // Block 1..=4 covers the top of the range
        assert_eq!(shift(&range, RangeEdit::delete(Dimension::Rows, 1, 4)), rows(1, 4));
        // Block 7..=10 covers the bottom
        assert_eq!(shift(&range, RangeEdit::delete(Dimension::Rows, 7, 4)), rows(3, 6));
        // Block entirely above
        assert_eq!(shift(&range, RangeEdit::delete(Dimension::Rows, 1, 2)), rows(1, 6));
        // Block entirely below
        assert_eq!(shift(&range, RangeEdit::delete(Dimension::Rows, 9, 2)), range);
    }

    #[test]
    fn test_delete_whole_span_collapses() {
        let range = rows(2, 4);
        let err = shift_range(&range, &RangeEdit::delete(Dimension::Rows, 1, 5)).unwrap_err();
        let collapsed = err.collapsed_range().unwrap();
        assert_eq!(collapsed, &rows(1, 1));
        assert_eq!(collapsed.to_string(), "Sheet1!A1:D1");

        let err = shift_range(&range, &RangeEdit::delete(Dimension::Rows, 2, 3)).unwrap_err();
        assert_eq!(err.collapsed_range(), Some(&rows(2, 2)));
    }

    #[test]
    fn test_other_axis_untouched() {
        let range = CellRange::parse("C2:E9").unwrap();
        let shifted = shift(&range, RangeEdit::insert(Dimension::Columns, 4, 3));
        assert_eq!(shifted.to_string(), "C2:H9");

        let shifted = shift(&range, RangeEdit::delete(Dimension::Columns, 1, 2));
        assert_eq!(shifted.to_string(), "A2:C9");
    }

    #[test]
    fn test_unbounded_components() {
        // Whole columns are unaffected by row edits
        let columns = CellRange::parse("B:D").unwrap();
        assert_eq!(shift(&columns, RangeEdit::insert(Dimension::Rows, 1, 10)), columns);
        assert_eq!(shift(&columns, RangeEdit::delete(Dimension::Rows, 1, 10)), columns);

        // Open end stays open
        let open = CellRange::parse("A45:46").unwrap();
        let shifted = shift(&open, RangeEdit::insert(Dimension::Columns, 1, 2));
        assert_eq!(shifted.start(), CellAddress::cell(3, 45));
        assert_eq!(shifted.end(), CellAddress::row(46));

        // Open start counts from line 1
        let range = CellRange::new(CellAddress::column(2), CellAddress::cell(4, 5)).unwrap();
        let err = shift_range(&range, &RangeEdit::delete(Dimension::Rows, 1, 5)).unwrap_err();
        assert!(matches!(err, Error::RangeCollapsed(_)));
        let shifted = shift(&range, RangeEdit::delete(Dimension::Rows, 2, 2));
        assert_eq!(shifted.bounds(Dimension::Rows), (None, Some(3)));

        // Open end never collapses
        let tail = CellRange::parse("A3:B").unwrap();
        let shifted = shift(&tail, RangeEdit::delete(Dimension::Rows, 1, 100));
        assert_eq!(shifted.bounds(Dimension::Rows), (Some(1), None));
    }

    #[test]
    fn test_zero_count_is_noop() {
        let range = rows(2, 4);
        assert_eq!(shift(&range, RangeEdit::insert(Dimension::Rows, 1, 0)), range);
        assert_eq!(shift(&range, RangeEdit::delete(Dimension::Rows, 2, 0)), range);
    }

    #[test]
    fn test_column_limit_and_overflow() {
        let range = CellRange::parse("ZZA1:ZZZ1").unwrap();
        let err = shift_range(&range, &RangeEdit::insert(Dimension::Columns, 1, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidShape(_)));

        let range = CellRange::rows(u32::MAX - 1, u32::MAX).unwrap();
        let err = shift_range(&range, &RangeEdit::insert(Dimension::Rows, 1, 5)).unwrap_err();
        assert!(matches!(err, Error::MalformedRange(_)));
    }

    fn arb_bounded() -> impl Strategy<Value = CellRange> {
        (1u32..500, 0u32..50, 1u32..500, 0u32..50).prop_map(|(c, w, r, h)| {
            CellRange::new(CellAddress::cell(c, r), CellAddress::cell(c + w, r + h)).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_insert_then_delete_restores(
            range in arb_bounded(),
            rows_axis in any::<bool>(),
            at in 1u32..600,
            count in 0u32..100,
        ) {
            let dimension = if rows_axis { Dimension::Rows } else { Dimension::Columns };
            let inserted = shift_range(&range, &RangeEdit::insert(dimension, at, count)).unwrap();
            let restored = shift_range(&inserted, &RangeEdit::delete(dimension, at, count)).unwrap();
            prop_assert_eq!(restored, range);
        }

        #[test]
        fn prop_delete_keeps_order(
            range in arb_bounded(),
            at in 1u32..600,
            count in 1u32..100,
        ) {
            match shift_range(&range, &RangeEdit::delete(Dimension::Rows, at, count)) {
                Ok(shifted) => {
                    let (start, end) = shifted.bounds(Dimension::Rows);
                    prop_assert!(start.unwrap() <= end.unwrap());
                    prop_assert!(start.unwrap() >= 1);
                    prop_assert_eq!(shifted.bounds(Dimension::Columns), range.bounds(Dimension::Columns));
                }
                Err(Error::RangeCollapsed(collapsed)) => {
                    prop_assert_eq!(collapsed.row_count(), Some(1));
                }
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
        }
    }
}
