//! Lock-guarded sink for outcomes: result log appends and aggregate metrics.
mod histogram;
mod metrics;


use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::dispatch::Outcome;
use crate::error::{AppResult, RecordError};

pub use metrics::MetricsSnapshot;
use metrics::AggregateMetrics;

/// Serializes every outcome into one logical sequence: the log append and the
/// metrics update for an outcome happen under the same lock.
#[derive(Debug)]
pub struct Recorder {
    path: PathBuf,
    state: Mutex<RecorderState>,
}

#[derive(Debug)]
struct RecorderState {
    file: Option<File>,
    metrics: AggregateMetrics,
}

impl Recorder {
    /// Creates a recorder appending to `path`. The file is opened on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the latency histogram cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> AppResult<Self> {
        Ok(Self {
            path: path.into(),
            state: Mutex::new(RecorderState {
                file: None,
                metrics: AggregateMetrics::new()?,
            }),
        })
    }

    /// Appends `outcome` to the result log and folds it into the metrics.
    ///
    /// Metrics only move when the append succeeded, so the recorded count
    /// always equals the number of log entries.
    ///
    /// # Errors
    ///
    /// Returns an error when the log cannot be opened or written. The failure
    /// is counted in [`MetricsSnapshot::write_failures`].
    pub async fn record(&self, outcome: Outcome) -> Result<(), RecordError> {
        let entry = format_entry(&outcome);
        let mut state = self.state.lock().await;
        match state.append(&self.path, entry.as_bytes()).await {
            Ok(()) => {
                state.metrics.observe(outcome.status, outcome.latency);
                Ok(())
            }
            Err(err) => {
                state.metrics.note_write_failure();
                Err(err)
            }
        }
    }

    /// Reads the metrics under the lock.
    pub async fn snapshot(&self) -> MetricsSnapshot {
        self.state.lock().await.metrics.snapshot()
    }
}

impl RecorderState {
    async fn append(&mut self, path: &Path, bytes: &[u8]) -> Result<(), RecordError> {
        let mut file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await
                .map_err(|err| RecordError::Open {
                    path: path.to_path_buf(),
                    source: err,
                })?,
        };

        let written = match file.write_all(bytes).await {
            Ok(()) => file.flush().await,
            Err(err) => Err(err),
        };
        match written {
            Ok(()) => {
                self.file = Some(file);
                Ok(())
            }
            // the handle is dropped so the next call reopens the log
            Err(err) => Err(RecordError::Write {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// Renders one result log entry. Bodies are trimmed of surrounding whitespace.
#[must_use]
pub fn format_entry(outcome: &Outcome) -> String {
    format!(
        "---\nRequest: {}\nResponse: {}\nStatus: {}\nTime: {:?}\n\n",
        outcome.job.body.trim(),
        outcome.response_body.trim(),
        outcome.status,
        outcome.latency
    )
}

/// Removes the result log left by a previous run.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be removed.
pub async fn reset_log(path: &Path) -> Result<(), RecordError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!("Cleared previous result log {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(RecordError::Reset {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}
