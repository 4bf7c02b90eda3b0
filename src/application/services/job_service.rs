use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::RowProcessor;
use crate::application::services::job_worker::run_job_worker;
use crate::application::services::JobRegistry;
use crate::domain::{Document, DocumentError, Job, JobId, JobView, StartDecision};

/// The operations the HTTP layer calls. Owns admission control and the
/// worker spawn; everything per-job is delegated to the job itself.
pub struct JobService<D, P> {
    registry: Arc<JobRegistry<D>>,
    processor: Arc<P>,
    throttle: Duration,
}

/// How a start request was resolved. All three are successful responses;
/// only `Started` spawned a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStart {
    Started,
    AlreadyRunning,
    AlreadyComplete,
}

/// A serialized export plus its filename hint. The filename
/// distinguishes a complete export from a partial one.
pub struct JobDownload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("owner already has a job in progress")]
    JobAlreadyActive,
    #[error("job not found")]
    JobNotFound,
    #[error("no target rows to process")]
    NoTargetRows,
    #[error("job is in an error state: {0}")]
    JobErrored(String),
    #[error("no processed rows to download")]
    NothingToDownload,
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl<D, P> JobService<D, P>
where
    D: Document,
    P: RowProcessor<D> + 'static,
{
    pub fn new(registry: Arc<JobRegistry<D>>, processor: Arc<P>, throttle: Duration) -> Self {
        Self {
            registry,
            processor,
            throttle,
        }
    }

    pub fn registry(&self) -> &Arc<JobRegistry<D>> {
        &self.registry
    }

    /// Admit a new job. Rejected while the owner's latest job is still
    /// running, and when there is nothing to process.
    pub fn create_job(
        &self,
        owner: &str,
        source_name: String,
        targets: Vec<u32>,
        document: D,
    ) -> Result<JobView, JobServiceError> {
        if self.registry.has_active_job(owner) {
            return Err(JobServiceError::JobAlreadyActive);
        }

        let job = Job::new(owner, source_name, targets, document)
            .map_err(|_| JobServiceError::NoTargetRows)?;
        let job = Arc::new(job);
        self.registry.register(Arc::clone(&job));

        tracing::info!(
            job_id = %job.id(),
            owner,
            source = %job.source_name(),
            total = job.total(),
            "Job created"
        );
        Ok(job.snapshot())
    }

    /// Start or resume a run. Idempotent for a job that is already
    /// running or already complete; rejected for an errored job.
    pub fn start_job(
        &self,
        owner: &str,
        job_id: JobId,
    ) -> Result<(JobView, JobStart), JobServiceError> {
        let job = self
            .registry
            .lookup(owner, job_id)
            .ok_or(JobServiceError::JobNotFound)?;

        match job.begin() {
            StartDecision::Started => {
                let worker_job = Arc::clone(&job);
                let processor = Arc::clone(&self.processor);
                tokio::spawn(run_job_worker(worker_job, processor, self.throttle));
                tracing::info!(job_id = %job.id(), owner, "Job started");
                Ok((job.snapshot(), JobStart::Started))
            }
            StartDecision::AlreadyRunning => Ok((job.snapshot(), JobStart::AlreadyRunning)),
            StartDecision::AlreadyComplete => Ok((job.snapshot(), JobStart::AlreadyComplete)),
            StartDecision::Errored(detail) => Err(JobServiceError::JobErrored(detail)),
        }
    }

    /// Request a cooperative stop. Idempotent; the second element says
    /// whether a run was actually running when the request landed.
    pub fn stop_job(
        &self,
        owner: &str,
        job_id: JobId,
    ) -> Result<(JobView, bool), JobServiceError> {
        let job = self
            .registry
            .lookup(owner, job_id)
            .ok_or(JobServiceError::JobNotFound)?;
        let was_running = job.request_stop();
        if was_running {
            tracing::info!(job_id = %job.id(), owner, "Stop requested");
        }
        Ok((job.snapshot(), was_running))
    }

    pub fn status_job(&self, owner: &str, job_id: JobId) -> Result<JobView, JobServiceError> {
        self.registry
            .lookup(owner, job_id)
            .map(|job| job.snapshot())
            .ok_or(JobServiceError::JobNotFound)
    }

    /// Serialize the document as it stands. Partial exports are a
    /// supported mode, flagged through the filename.
    pub async fn download_job(
        &self,
        owner: &str,
        job_id: JobId,
    ) -> Result<JobDownload, JobServiceError> {
        let job = self
            .registry
            .lookup(owner, job_id)
            .ok_or(JobServiceError::JobNotFound)?;

        let view = job.snapshot();
        if view.done == 0 {
            return Err(JobServiceError::NothingToDownload);
        }

        let (bytes, extension, mime_type) = {
            let doc = job.document().lock().await;
            (doc.serialize()?, doc.file_extension(), doc.mime_type())
        };

        let filename = if view.done >= view.total {
            format!("output.{}", extension)
        } else {
            format!("output_partial.{}", extension)
        };

        tracing::info!(
            job_id = %job.id(),
            owner,
            done = view.done,
            total = view.total,
            filename = %filename,
            "Export prepared"
        );
        Ok(JobDownload {
            bytes,
            filename,
            mime_type,
        })
    }
}
