use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::DispatchError;

use super::execution::{build_request, execute_request};
use super::{DispatchContext, Job, JobReceiver, Outcome};

/// Per-worker tally returned when the worker exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub worker_id: usize,
    /// Jobs that received an HTTP response.
    pub completed: u64,
    /// Jobs dropped on a request build or transport error.
    pub failed: u64,
}

/// Pulls jobs until the queue is closed and drained.
pub(super) async fn run_worker(
    worker_id: usize,
    context: Arc<DispatchContext>,
    jobs: JobReceiver,
) -> WorkerStats {
    let mut stats = WorkerStats {
        worker_id,
        ..WorkerStats::default()
    };

    while let Some(job) = jobs.recv().await {
        let seq = job.seq;
        match process_job(worker_id, &context, job).await {
            Ok(()) => stats.completed = stats.completed.saturating_add(1),
            Err(err) => {
                stats.failed = stats.failed.saturating_add(1);
                match err {
                    DispatchError::BuildRequest { .. } => {
                        error!("[w{}] job #{} {}", worker_id, seq, err);
                    }
                    DispatchError::Transport { .. } => {
                        warn!(
                            timed_out = err.is_timeout(),
                            "[w{}] job #{} {} {}", worker_id, seq, context.target, err
                        );
                    }
                }
            }
        }
    }

    debug!(
        completed = stats.completed,
        failed = stats.failed,
        "[w{}] queue drained",
        worker_id
    );
    stats
}

async fn process_job(
    worker_id: usize,
    context: &DispatchContext,
    job: Job,
) -> Result<(), DispatchError> {
    let request = build_request(&context.client, &context.target, &job.body)?;

    let start = Instant::now();
    let response = execute_request(&context.client, request, start).await?;
    let latency = start.elapsed();

    let outcome = Outcome {
        job,
        response_body: response.body,
        status: response.status,
        latency,
        worker_id,
    };
    info!(
        "[w{}] {} -> {} ({:.2}s)",
        outcome.worker_id,
        context.target,
        outcome.status,
        outcome.latency.as_secs_f64()
    );
    if let Err(err) = context.recorder.record(outcome).await {
        error!("[w{}] {}", worker_id, err);
    }
    Ok(())
}
