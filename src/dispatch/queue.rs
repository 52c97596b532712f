use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::Job;

/// Creates the job queue. Dropping (or [`JobSender::close`]-ing) the sender is
/// the only "no more work" signal.
#[must_use]
pub fn job_queue(capacity: usize) -> (JobSender, JobReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        JobSender { tx },
        JobReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

#[derive(Debug)]
pub struct JobSender {
    tx: mpsc::Sender<Job>,
}

impl JobSender {
    /// Enqueues a job, waiting for room when the queue is full.
    ///
    /// # Errors
    ///
    /// Hands the job back when every receiver is gone.
    pub async fn enqueue(&self, job: Job) -> Result<(), Job> {
        self.tx.send(job).await.map_err(|err| err.0)
    }

    pub fn close(self) {
        drop(self);
    }
}

/// Cloneable consumer side; every job is delivered to exactly one clone.
#[derive(Debug, Clone)]
pub struct JobReceiver {
    rx: Arc<Mutex<mpsc::Receiver<Job>>>,
}

impl JobReceiver {
    /// Next job, or `None` once the queue is closed and drained.
    pub async fn recv(&self) -> Option<Job> {
        self.rx.lock().await.recv().await
    }
}
