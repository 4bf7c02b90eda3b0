mod envelope;
mod health;
mod jobs;
mod owner;
mod upload;

pub use envelope::{ApiMessage, JobEnvelope};
pub use health::health_handler;
pub use jobs::{download_job_handler, job_status_handler, start_job_handler, stop_job_handler};
pub use owner::{Owner, OWNER_HEADER};
pub use upload::upload_handler;
