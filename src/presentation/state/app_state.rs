use std::sync::Arc;

use crate::application::ports::RowProcessor;
use crate::application::services::JobService;
use crate::domain::Document;

pub struct AppState<D, P>
where
    D: Document,
    P: RowProcessor<D>,
{
    pub job_service: Arc<JobService<D, P>>,
}

impl<D, P> Clone for AppState<D, P>
where
    D: Document,
    P: RowProcessor<D>,
{
    fn clone(&self) -> Self {
        Self {
            job_service: Arc::clone(&self.job_service),
        }
    }
}
