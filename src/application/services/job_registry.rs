use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Document, Job, JobId};

/// Process-wide job storage: job id → job, plus each owner's most
/// recent job id. Constructed once at startup and injected through the
/// application state; tests build their own isolated instances.
pub struct JobRegistry<D> {
    inner: Mutex<Inner<D>>,
}

struct Inner<D> {
    jobs: HashMap<JobId, Arc<Job<D>>>,
    latest_by_owner: HashMap<String, JobId>,
}

impl<D: Document> JobRegistry<D> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                jobs: HashMap::new(),
                latest_by_owner: HashMap::new(),
            }),
        }
    }

    /// Insert a job and make it the owner's latest, unconditionally.
    pub fn register(&self, job: Arc<Job<D>>) {
        let mut inner = self.lock();
        inner
            .latest_by_owner
            .insert(job.owner().to_string(), job.id());
        inner.jobs.insert(job.id(), job);
    }

    /// Fetch a job for its owner. An ownership mismatch is reported the
    /// same as absence, so job ids leak nothing to non-owners.
    pub fn lookup(&self, owner: &str, id: JobId) -> Option<Arc<Job<D>>> {
        self.lock()
            .jobs
            .get(&id)
            .filter(|job| job.owner() == owner)
            .cloned()
    }

    pub fn latest_for_owner(&self, owner: &str) -> Option<JobId> {
        self.lock().latest_by_owner.get(owner).copied()
    }

    /// Admission control: is the owner's latest job still running?
    pub fn has_active_job(&self, owner: &str) -> bool {
        let inner = self.lock();
        inner
            .latest_by_owner
            .get(owner)
            .and_then(|id| inner.jobs.get(id))
            .is_some_and(|job| job.snapshot().running)
    }

    fn lock(&self) -> MutexGuard<'_, Inner<D>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<D: Document> Default for JobRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
