// src/session.rs
//
// The accumulation buffer behind the Extract page. Owned by whoever drives
// the session (GUI app, CLI run); `append` and `reset` are the only mutators.

use crate::record::{self, ReviewRecord};
use crate::store::DataSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppendOutcome {
    /// A separator row went in ahead of the batch.
    pub separated: bool,
    pub added: usize,
    pub total_rows: usize,
}

/// Records plus their table view. The view is rebuilt by the mutators so
/// readers (GUI frames) can borrow it without copying.
#[derive(Clone, Debug)]
pub struct SessionTable {
    rows: Vec<ReviewRecord>,
    batches: usize,
    table: DataSet,
}

impl Default for SessionTable {
    fn default() -> Self {
        Self { rows: Vec::new(), batches: 0, table: record::to_dataset(&[]) }
    }
}

impl SessionTable {
    pub fn new() -> Self { Self::default() }

    /// Add one extraction batch. Every append after the first is preceded by a
    /// separator row, even when the batch itself is empty.
    pub fn append(&mut self, batch: Vec<ReviewRecord>) -> AppendOutcome {
        let separated = self.batches > 0;
        if separated {
            self.table.rows.push(ReviewRecord::separator().to_cells());
            self.rows.push(ReviewRecord::separator());
        }
        let added = batch.len();
        self.table.rows.extend(batch.iter().map(ReviewRecord::to_cells));
        self.rows.extend(batch);
        self.batches += 1;
        logf!("Session: Appended batch #{} rows={} separated={}", self.batches, added, separated);
        AppendOutcome { separated, added, total_rows: self.rows.len() }
    }

    /// Back to an empty table with the review columns.
    pub fn reset(&mut self) {
        logf!("Session: Reset ({} rows, {} batches dropped)", self.rows.len(), self.batches);
        self.rows.clear();
        self.table.rows.clear();
        self.batches = 0;
    }

    /// Current table, separator rows included.
    pub fn table(&self) -> &DataSet { &self.table }

    /// Owned copy of `table()`, for export or hand-off.
    pub fn snapshot(&self) -> DataSet {
        self.table.clone()
    }

    pub fn rows(&self) -> &[ReviewRecord] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn batches(&self) -> usize { self.batches }

    pub fn separator_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_separator()).count()
    }
}
