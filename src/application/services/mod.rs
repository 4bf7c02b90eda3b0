mod job_registry;
mod job_service;
mod job_worker;

pub use job_registry::JobRegistry;
pub use job_service::{JobDownload, JobService, JobServiceError, JobStart};
pub use job_worker::run_job_worker;
