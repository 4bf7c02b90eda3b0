mod columns;
mod document;
mod job;
mod job_id;
mod job_state;
mod job_view;
mod row_outcome;

pub use columns::{ADDRESS_COL, FIRST_DATA_ROW, SOURCE_COL, STATUS_COL, ZIP_COL};
pub use document::{Document, DocumentError, SharedDocument, collect_target_rows};
pub use job::{Job, MSG_COMPLETE, NoWorkError, StartDecision, WorkerStep};
pub use job_id::JobId;
pub use job_state::JobState;
pub use job_view::JobView;
pub use row_outcome::RowOutcome;
