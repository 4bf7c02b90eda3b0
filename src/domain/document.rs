use tokio::sync::{Mutex, MutexGuard};

use super::columns::{ADDRESS_COL, SOURCE_COL, STATUS_COL, ZIP_COL};
use super::row_outcome::RowOutcome;

/// An indexable row/column store a job reads input from and writes
/// outcomes into. Implementations are plain in-memory stores; mutation
/// is not thread-safe on its own, which is why every job wraps its
/// document in a [`SharedDocument`].
pub trait Document: Send + 'static {
    fn cell(&self, row: u32, col: u32) -> Option<&str>;

    fn set_cell(&mut self, row: u32, col: u32, value: String);

    fn row_count(&self) -> u32;

    fn serialize(&self) -> Result<Vec<u8>, DocumentError>;

    /// Extension used for download filename hints, without the dot.
    fn file_extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// The document lock for one job.
///
/// Every access takes the lock internally, so nobody can hold it across
/// a network call by accident. A row's three output cells are written
/// under a single guard: a concurrent download either sees the whole
/// row or none of it.
pub struct SharedDocument<D> {
    inner: Mutex<D>,
}

impl<D: Document> SharedDocument<D> {
    pub fn new(document: D) -> Self {
        Self {
            inner: Mutex::new(document),
        }
    }

    /// Read a single cell, cloning the value out so the lock is not
    /// held after the call returns.
    pub async fn cell(&self, row: u32, col: u32) -> Option<String> {
        self.inner.lock().await.cell(row, col).map(String::from)
    }

    /// Write one row's outcome atomically with respect to downloads.
    pub async fn write_outcome(&self, row: u32, outcome: &RowOutcome) {
        let mut doc = self.inner.lock().await;
        doc.set_cell(row, ADDRESS_COL, outcome.value.clone());
        doc.set_cell(row, STATUS_COL, outcome.status.clone());
        doc.set_cell(row, ZIP_COL, outcome.auxiliary.clone());
    }

    /// Serialize the whole document. Holds the lock for the duration so
    /// the worker cannot write mid-export; the worker's own writes are
    /// short, so this never blocks for long.
    pub async fn serialize(&self) -> Result<Vec<u8>, DocumentError> {
        self.inner.lock().await.serialize()
    }

    /// Direct access for callers that need more than one operation
    /// under the same guard.
    pub async fn lock(&self) -> MutexGuard<'_, D> {
        self.inner.lock().await
    }
}

/// Rows whose source column is non-blank, in worksheet order. These are
/// the rows a job will process.
pub fn collect_target_rows<D: Document>(document: &D, start_row: u32) -> Vec<u32> {
    (start_row..document.row_count())
        .filter(|&row| {
            document
                .cell(row, SOURCE_COL)
                .is_some_and(|value| !value.trim().is_empty())
        })
        .collect()
}
