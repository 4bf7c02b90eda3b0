use async_trait::async_trait;

use crate::domain::{Document, RowOutcome, SharedDocument};

/// Turns one worksheet row's input into a success/failure outcome. May
/// block on network I/O for as long as its own timeouts allow; the
/// engine imposes none.
///
/// Contract: ordinary resolution failures (no match, upstream error
/// code, short keyword, network trouble) must be encoded in the
/// returned [`RowOutcome`], never raised. An `Err` is reserved for
/// programming or integrity faults and makes the whole job terminal.
///
/// Implementations read input cells through the shared document and
/// must not hold its lock across a network call.
#[async_trait]
pub trait RowProcessor<D: Document>: Send + Sync {
    async fn process(
        &self,
        document: &SharedDocument<D>,
        row: u32,
    ) -> Result<RowOutcome, RowProcessorFault>;
}

/// A structural fault from a row processor, as opposed to a per-row
/// resolution failure.
#[derive(Debug, thiserror::Error)]
#[error("row processor fault: {0}")]
pub struct RowProcessorFault(pub String);

impl RowProcessorFault {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}
