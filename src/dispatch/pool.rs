use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::error;

use crate::args::PositiveUsize;

use super::worker::{WorkerStats, run_worker};
use super::{DispatchContext, JobReceiver};

/// Fixed set of worker tasks sharing one queue.
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<WorkerStats>>,
}

/// Totals across all workers after [`WorkerPool::join`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub workers: usize,
    pub completed: u64,
    pub failed: u64,
    /// Workers whose task panicked or was cancelled.
    pub lost_workers: usize,
}

/// Spawns `concurrency` workers (ids start at 1) on the current runtime.
#[must_use]
pub fn spawn_pool(
    context: &Arc<DispatchContext>,
    concurrency: PositiveUsize,
    jobs: &JobReceiver,
) -> WorkerPool {
    let handles = (1..=concurrency.get())
        .map(|worker_id| {
            let context = Arc::clone(context);
            let jobs = jobs.clone();
            tokio::spawn(run_worker(worker_id, context, jobs))
        })
        .collect();
    WorkerPool { handles }
}

impl WorkerPool {
    /// Waits for every worker to exit.
    pub async fn join(self) -> PoolStats {
        let mut stats = PoolStats {
            workers: self.handles.len(),
            ..PoolStats::default()
        };
        for handle in self.handles {
            match handle.await {
                Ok(worker) => {
                    stats.completed = stats.completed.saturating_add(worker.completed);
                    stats.failed = stats.failed.saturating_add(worker.failed);
                }
                Err(err) => {
                    error!("Worker task failed: {}", err);
                    stats.lost_workers = stats.lost_workers.saturating_add(1);
                }
            }
        }
        stats
    }
}
