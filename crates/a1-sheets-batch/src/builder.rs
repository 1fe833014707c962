//! Mutation builder
//!
//! A [`MutationBuilder`] is bound to one sheet. Operations are validated and
//! queued in order, then sent as a single request by
//! [`MutationBuilder::execute`]. Queueing a structural operation updates the
//! projected sheet shape and shifts every tracked range on the sheet; a
//! failed request restores both.

use std::collections::BTreeMap;
use std::fmt;

use a1_sheets_core::{shift_range, CellRange, Dimension};

use crate::error::{BatchError, Result};
use crate::ops::{Operation, StructuralOperation, ValueOperation};
use crate::options::BatchOptions;
use crate::request::{BatchRequest, BatchResponse};
use crate::sheet::{SheetHandle, SheetShape};
use crate::transport::{SessionProvider, Transport};
use crate::value::CellScalar;

/// Identifies a range registered with [`MutationBuilder::track`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackedRangeId(u32);

impl fmt::Display for TrackedRangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing queued
    Empty,
    /// At least one operation queued
    Accumulating,
    /// The last request succeeded (only observed inside `execute`)
    Committed,
}

#[derive(Debug, Clone, PartialEq)]
struct TrackedRange {
    range: CellRange,
    preserve: bool,
}

/// Queues operations against one sheet and commits them atomically
#[derive(Debug)]
pub struct MutationBuilder<'a> {
    sheet: &'a mut SheetHandle,
    options: BatchOptions,
    state: BuilderState,
    operations: Vec<Operation>,
    committed_shape: SheetShape,
    shape: SheetShape,
    committed_ranges: BTreeMap<TrackedRangeId, TrackedRange>,
    ranges: BTreeMap<TrackedRangeId, TrackedRange>,
    next_id: u32,
}

impl<'a> MutationBuilder<'a> {
    pub(crate) fn new(sheet: &'a mut SheetHandle, options: BatchOptions) -> Self {
        let shape = sheet.shape();
        Self {
            sheet,
            options,
            state: BuilderState::Empty,
            operations: Vec::new(),
            committed_shape: shape,
            shape,
            committed_ranges: BTreeMap::new(),
            ranges: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of queued operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Queued operations in append order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Sheet shape once every queued operation is applied
    pub fn shape(&self) -> SheetShape {
        self.shape
    }

    /// Sheet shape as of the last successful request
    pub fn committed_shape(&self) -> SheetShape {
        self.committed_shape
    }

    /// The sheet this builder writes to
    pub fn sheet(&self) -> &SheetHandle {
        &*self.sheet
    }

    /// Options used when the batch is sent
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    // === Range tracking ===

    /// Keep `range` pointed at the same cells as lines are added and removed
    pub fn track(&mut self, range: CellRange) -> TrackedRangeId {
        self.insert_tracked(range, false)
    }

    /// Like [`track`](Self::track), but the range's extent must survive
    /// truncation when [`BatchOptions::enforce_preserved_extent`] is set
    pub fn track_preserved(&mut self, range: CellRange) -> TrackedRangeId {
        self.insert_tracked(range, true)
    }

    /// Current (projected) position of a tracked range
    pub fn tracked(&self, id: TrackedRangeId) -> Option<&CellRange> {
        self.ranges.get(&id).map(|t| &t.range)
    }

    /// Stop tracking a range, returning its projected position
    pub fn untrack(&mut self, id: TrackedRangeId) -> Option<CellRange> {
        self.committed_ranges.remove(&id);
        self.ranges.remove(&id).map(|t| t.range)
    }

    /// All tracked ranges with their ids
    pub fn tracked_ranges(&self) -> impl Iterator<Item = (TrackedRangeId, &CellRange)> {
        self.ranges.iter().map(|(id, t)| (*id, &t.range))
    }

    fn insert_tracked(&mut self, range: CellRange, preserve: bool) -> TrackedRangeId {
        let id = TrackedRangeId(self.next_id);
        self.next_id += 1;
        tracing::debug!("Tracking {} as {}", range, id);

        let tracked = TrackedRange { range, preserve };
        self.committed_ranges.insert(id, tracked.clone());
        self.ranges.insert(id, tracked);
        id
    }

    fn on_sheet(&self, range: &CellRange) -> bool {
        range.sheet().map_or(true, |s| s == self.sheet.title)
    }

    // === Queueing ===

    /// Queue any operation
    pub fn append(&mut self, operation: Operation) -> Result<&mut Self> {
        match operation {
            Operation::Structural(op) => self.queue_structural(op)?,
            Operation::Value(op) => self.queue_value(op)?,
        }
        Ok(self)
    }

    /// Append `count` rows or columns at the end of the sheet
    pub fn expand_dimensions(&mut self, count: u32, dimension: Dimension) -> Result<&mut Self> {
        self.append(StructuralOperation::ExpandDimensions { count, dimension }.into())
    }

    /// Remove `count` rows or columns from the end of the sheet
    pub fn reduce_dimension(&mut self, count: u32, dimension: Dimension) -> Result<&mut Self> {
        self.append(StructuralOperation::ReduceDimension { count, dimension }.into())
    }

    /// Set the sheet to exactly `rows` x `columns`
    pub fn reshape_dimensions(&mut self, rows: u32, columns: u32) -> Result<&mut Self> {
        self.append(StructuralOperation::ReshapeDimensions { rows, columns }.into())
    }

    /// Insert `count` lines before line `at`
    pub fn insert_dimension(
        &mut self,
        dimension: Dimension,
        at: u32,
        count: u32,
        inherit_from_before: bool,
    ) -> Result<&mut Self> {
        self.append(
            StructuralOperation::InsertDimension {
                dimension,
                at,
                count,
                inherit_from_before,
            }
            .into(),
        )
    }

    /// Delete `count` lines starting at line `at`
    pub fn delete_dimension(
        &mut self,
        dimension: Dimension,
        at: u32,
        count: u32,
    ) -> Result<&mut Self> {
        self.append(
            StructuralOperation::DeleteDimension {
                dimension,
                at,
                count,
            }
            .into(),
        )
    }

    /// Queue a read of `range`
    pub fn get_values(&mut self, range: CellRange, major_dimension: Dimension) -> Result<&mut Self> {
        self.append(
            ValueOperation::GetValues {
                range,
                major_dimension,
            }
            .into(),
        )
    }

    /// Write a block of values; short rows are padded with empty cells
    pub fn set_values(
        &mut self,
        range: CellRange,
        major_dimension: Dimension,
        values: Vec<Vec<CellScalar>>,
    ) -> Result<&mut Self> {
        self.append(
            ValueOperation::SetValues {
                range,
                major_dimension,
                values,
            }
            .into(),
        )
    }

    /// Queue clearing the values in `range`
    pub fn clear_values(&mut self, range: CellRange) -> Result<&mut Self> {
        self.append(ValueOperation::ClearValues { range }.into())
    }

    fn queue_structural(&mut self, op: StructuralOperation) -> Result<()> {
        if op.is_noop() {
            tracing::trace!("Skipping no-op {} on '{}'", op, self.sheet.title);
            return Ok(());
        }

        let shape = self.shape.apply(&op)?;
        self.check_preserved(&op, shape)?;

        let edits = op.range_edits(self.shape);
        let mut ranges = self.ranges.clone();
        for (id, tracked) in ranges.iter_mut() {
            if !self.on_sheet(&tracked.range) {
                continue;
            }

            let mut range = tracked.range.clone();
            for edit in &edits {
                range = shift_range(&range, edit).map_err(|err| match err {
                    a1_sheets_core::Error::RangeCollapsed(collapsed) => {
                        tracing::warn!(
                            "{} would collapse tracked range {} ({})",
                            op,
                            id,
                            tracked.range
                        );
                        BatchError::RangeCollapsed {
                            id: *id,
                            collapsed: *collapsed,
                        }
                    }
                    a1_sheets_core::Error::InvalidShape(msg) => BatchError::InvalidShape(msg),
                    other => BatchError::Core(other),
                })?;
            }

            if range != tracked.range {
                tracing::debug!("Tracked range {} moved {} -> {}", id, tracked.range, range);
                tracked.range = range;
            }
        }

        tracing::debug!(
            "Queued {} on '{}' ({}x{} -> {}x{})",
            op,
            self.sheet.title,
            self.shape.rows,
            self.shape.columns,
            shape.rows,
            shape.columns
        );
        self.ranges = ranges;
        self.shape = shape;
        self.operations.push(op.into());
        self.state = BuilderState::Accumulating;
        Ok(())
    }

    fn check_preserved(&self, op: &StructuralOperation, target: SheetShape) -> Result<()> {
        if !self.options.enforce_preserved_extent {
            return Ok(());
        }
        if !matches!(
            op,
            StructuralOperation::ReduceDimension { .. }
                | StructuralOperation::ReshapeDimensions { .. }
        ) {
            return Ok(());
        }

        let preserved = self
            .ranges
            .iter()
            .filter(|(_, t)| t.preserve && self.on_sheet(&t.range));
        for (id, tracked) in preserved {
            for dimension in [Dimension::Rows, Dimension::Columns] {
                if let (_, Some(end)) = tracked.range.bounds(dimension) {
                    if target.extent(dimension) < end {
                        return Err(BatchError::InvalidShape(format!(
                            "{} leaves {} {} but preserved range {} ({}) ends at {}",
                            op,
                            target.extent(dimension),
                            dimension,
                            id,
                            tracked.range,
                            end
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn queue_value(&mut self, op: ValueOperation) -> Result<()> {
        let op = op.qualified(&self.sheet.title)?;
        tracing::debug!("Queued {}", op);
        self.operations.push(op.into());
        self.state = BuilderState::Accumulating;
        Ok(())
    }

    // === Execution ===

    /// Send every queued operation as one request
    ///
    /// An empty builder returns an empty response without a round trip. On
    /// success the projected shape and tracked ranges become the committed
    /// state and the sheet handle's counts are updated. On failure they roll
    /// back to the last committed state. Either way the builder is empty
    /// afterwards; nothing is retried.
    pub fn execute<S, T>(&mut self, session: &S, transport: &mut T) -> Result<BatchResponse>
    where
        S: SessionProvider + ?Sized,
        T: Transport + ?Sized,
    {
        if self.operations.is_empty() {
            tracing::trace!("Nothing queued for '{}'", self.sheet.title);
            self.state = BuilderState::Empty;
            return Ok(BatchResponse::empty(self.sheet.spreadsheet_id.clone()));
        }

        let operations = std::mem::take(&mut self.operations);
        tracing::info!(
            "Executing {} operation(s) on '{}'",
            operations.len(),
            self.sheet.title
        );

        let outcome = self.submit(&operations, session, transport);
        match &outcome {
            Ok(_) => self.commit(),
            Err(err) => {
                tracing::warn!("Batch on '{}' failed: {}", self.sheet.title, err);
                self.rollback();
            }
        }
        self.state = BuilderState::Empty;
        outcome
    }

    /// Drop every queued operation and restore the committed state
    pub fn discard(&mut self) {
        if !self.operations.is_empty() {
            tracing::debug!(
                "Discarding {} operation(s) on '{}'",
                self.operations.len(),
                self.sheet.title
            );
        }
        self.operations.clear();
        self.rollback();
        self.state = BuilderState::Empty;
    }

    fn submit<S, T>(
        &self,
        operations: &[Operation],
        session: &S,
        transport: &mut T,
    ) -> Result<BatchResponse>
    where
        S: SessionProvider + ?Sized,
        T: Transport + ?Sized,
    {
        let request = BatchRequest::from_operations(
            self.sheet(),
            self.committed_shape,
            operations,
            &self.options,
        )?;
        let service =
            session.service_endpoint(&self.options.service_name, &self.options.service_version)?;
        Ok(transport.execute(&service, &request)?)
    }

    fn commit(&mut self) {
        self.state = BuilderState::Committed;
        self.committed_shape = self.shape;
        self.committed_ranges = self.ranges.clone();
        self.sheet.set_shape(self.shape);
    }

    fn rollback(&mut self) {
        self.shape = self.committed_shape;
        self.ranges = self.committed_ranges.clone();
    }
}
