use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::document::{Document, SharedDocument};
use super::job_id::JobId;
use super::job_state::JobState;
use super::job_view::JobView;

pub const MSG_COMPLETE: &str = "주소 정제가 완료되었습니다. 다운로드하세요.";

/// One batch-refinement unit over a fixed, ordered list of worksheet
/// rows.
///
/// Identity, targets and document binding are immutable; everything
/// that moves lives in `Progress` behind the state lock. The state lock
/// is held only for field reads and bookkeeping, never across I/O; the
/// document has its own lock (see [`SharedDocument`]) so status polls
/// stay responsive while a row is being looked up or the document is
/// being exported.
pub struct Job<D> {
    id: JobId,
    owner: String,
    source_name: String,
    targets: Vec<u32>,
    created_at: DateTime<Utc>,
    progress: Mutex<Progress>,
    document: SharedDocument<D>,
}

struct Progress {
    done: usize,
    state: JobState,
    error: Option<String>,
    message: String,
    stop_requested: bool,
}

/// Signalled when a job would be created with nothing to process.
#[derive(Debug, thiserror::Error)]
#[error("no target rows to process")]
pub struct NoWorkError;

/// What a start request decided, under the state lock.
#[derive(Debug)]
pub enum StartDecision {
    /// Transitioned to `Running`; the caller must spawn exactly one
    /// worker for this run.
    Started,
    /// A worker is already active; idempotent no-op.
    AlreadyRunning,
    /// All rows are done; idempotent no-op.
    AlreadyComplete,
    /// The job is terminally errored and may not run again.
    Errored(String),
}

/// Worker-side row-boundary decision, the cancellation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStep {
    /// Process this worksheet row next.
    Row(u32),
    /// Stop was requested; the job is now `Stopped`.
    Stopped,
    /// All target rows are done; the job is now `Completed`.
    Finished,
}

impl<D: Document> Job<D> {
    pub fn new(
        owner: impl Into<String>,
        source_name: impl Into<String>,
        targets: Vec<u32>,
        document: D,
    ) -> Result<Self, NoWorkError> {
        if targets.is_empty() {
            return Err(NoWorkError);
        }
        let message = format!("업로드 완료. 정제 대상 {}건", targets.len());
        Ok(Self {
            id: JobId::new(),
            owner: owner.into(),
            source_name: source_name.into(),
            targets,
            created_at: Utc::now(),
            progress: Mutex::new(Progress {
                done: 0,
                state: JobState::Uploaded,
                error: None,
                message,
                stop_requested: false,
            }),
            document: SharedDocument::new(document),
        })
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn total(&self) -> usize {
        self.targets.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn document(&self) -> &SharedDocument<D> {
        &self.document
    }

    /// Decide whether a new run may start, transitioning to `Running`
    /// and clearing the stop flag if so.
    pub fn begin(&self) -> StartDecision {
        let mut p = self.progress();
        match p.state {
            JobState::Running => StartDecision::AlreadyRunning,
            JobState::Errored => StartDecision::Errored(p.error.clone().unwrap_or_default()),
            JobState::Completed => StartDecision::AlreadyComplete,
            _ if p.done >= self.targets.len() => {
                p.state = JobState::Completed;
                p.message = MSG_COMPLETE.to_string();
                StartDecision::AlreadyComplete
            }
            _ => {
                p.stop_requested = false;
                p.state = JobState::Running;
                p.message = "변환 진행 중...".to_string();
                StartDecision::Started
            }
        }
    }

    /// Row-boundary check for the worker. Resuming after a stop picks
    /// up at position `done`, so rows already processed are never
    /// revisited.
    pub fn next_step(&self) -> WorkerStep {
        let mut p = self.progress();
        if p.done >= self.targets.len() {
            p.state = JobState::Completed;
            p.stop_requested = false;
            p.message = MSG_COMPLETE.to_string();
            WorkerStep::Finished
        } else if p.stop_requested {
            p.state = JobState::Stopped;
            p.stop_requested = false;
            p.message = if p.done > 0 {
                "중지되었습니다. 현재까지 변환한 데이터를 다운로드할 수 있습니다.".to_string()
            } else {
                "중지되었습니다.".to_string()
            };
            WorkerStep::Stopped
        } else {
            WorkerStep::Row(self.targets[p.done])
        }
    }

    /// Bookkeeping after one row's outcome has been written.
    pub fn record_row_done(&self) {
        let mut p = self.progress();
        p.done += 1;
        p.message = format!("변환 진행 중... {}/{}", p.done, self.targets.len());
    }

    /// Terminal failure; the error detail is kept and never cleared.
    pub fn fail(&self, detail: &str) {
        let mut p = self.progress();
        p.state = JobState::Errored;
        p.error = Some(detail.to_string());
        p.message = format!("오류 발생: {}", detail);
    }

    /// Request a cooperative stop. Returns whether a run was actually
    /// running; honored at the next row boundary, never mid-row.
    pub fn request_stop(&self) -> bool {
        let mut p = self.progress();
        if p.state == JobState::Running {
            p.stop_requested = true;
            p.message = "중지 요청됨. 현재 요청 처리 후 멈춥니다.".to_string();
            true
        } else {
            false
        }
    }

    /// Consistent snapshot, computed entirely under the state lock.
    pub fn snapshot(&self) -> JobView {
        let p = self.progress();
        let total = self.targets.len();
        let percent = if total > 0 {
            (p.done * 100 / total) as u8
        } else {
            0
        };
        JobView {
            job_id: self.id.to_string(),
            source_name: self.source_name.clone(),
            done: p.done,
            total,
            percent,
            running: p.state == JobState::Running,
            completed: p.state == JobState::Completed,
            stopped: p.state == JobState::Stopped,
            error: p.error.clone().unwrap_or_default(),
            message: p.message.clone(),
            can_download: p.done > 0,
            can_start: matches!(p.state, JobState::Uploaded | JobState::Stopped)
                && p.error.is_none(),
        }
    }

    fn progress(&self) -> MutexGuard<'_, Progress> {
        // A poisoned lock only means a panic elsewhere; the counters are
        // still coherent, so recover the guard.
        self.progress.lock().unwrap_or_else(|e| e.into_inner())
    }
}
