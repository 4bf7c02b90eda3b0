/// Result of processing a single row.
///
/// Ordinary lookup failures (no match, short keyword, upstream error
/// codes, network trouble) are encoded here and written into the row,
/// never raised as errors. This is what keeps one bad address from
/// aborting the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// Refined road address on success, the raw input otherwise.
    pub value: String,
    /// Status marker, `성공` or a `실패:…` reason.
    pub status: String,
    /// Zip code on success, empty otherwise.
    pub auxiliary: String,
}

impl RowOutcome {
    pub fn resolved(value: impl Into<String>, auxiliary: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: "성공".to_string(),
            auxiliary: auxiliary.into(),
        }
    }

    pub fn unresolved(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: raw.into(),
            status: reason.into(),
            auxiliary: String::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status == "성공"
    }
}
