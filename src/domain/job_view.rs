use serde::Serialize;

/// Point-in-time snapshot of a job, the only externally observable job
/// shape. `error` and `message` are informational strings; callers must
/// not use them for control decisions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobView {
    pub job_id: String,
    pub source_name: String,
    pub done: usize,
    pub total: usize,
    pub percent: u8,
    pub running: bool,
    pub completed: bool,
    pub stopped: bool,
    pub error: String,
    pub message: String,
    pub can_download: bool,
    pub can_start: bool,
}
