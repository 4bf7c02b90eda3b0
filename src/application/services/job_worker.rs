use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::application::ports::RowProcessor;
use crate::domain::{Document, Job, WorkerStep};

/// Drain a running job's remaining rows, one background task per run.
///
/// Spawned by `JobService::start_job` after a successful `begin`, which
/// guarantees at most one worker per job. Each iteration checks the row
/// boundary under the state lock, runs the lookup outside any lock,
/// writes the outcome under the document lock only, then updates the
/// counters. The inter-row throttle is a courtesy to the upstream
/// service and is not a cancellation point; a stop requested during the
/// sleep takes effect at the next row boundary.
pub async fn run_job_worker<D, P>(job: Arc<Job<D>>, processor: Arc<P>, throttle: Duration)
where
    D: Document,
    P: RowProcessor<D>,
{
    let span = tracing::info_span!(
        "refine_job",
        job_id = %job.id(),
        owner = %job.owner(),
        source = %job.source_name(),
    );

    async move {
        tracing::info!(total = job.total(), "Worker started");
        loop {
            match job.next_step() {
                WorkerStep::Finished => {
                    tracing::info!("All target rows refined");
                    return;
                }
                WorkerStep::Stopped => {
                    tracing::info!("Stopped at row boundary");
                    return;
                }
                WorkerStep::Row(row) => {
                    match processor.process(job.document(), row).await {
                        Ok(outcome) => {
                            job.document().write_outcome(row, &outcome).await;
                            job.record_row_done();
                            tracing::debug!(row, status = %outcome.status, "Row refined");
                        }
                        Err(fault) => {
                            tracing::error!(row, error = %fault, "Worker aborted");
                            job.fail(&fault.to_string());
                            return;
                        }
                    }
                    if !throttle.is_zero() {
                        tokio::time::sleep(throttle).await;
                    }
                }
            }
        }
    }
    .instrument(span)
    .await
}
