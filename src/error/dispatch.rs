use std::time::Duration;

use thiserror::Error;

/// Per-job failures. These are logged by the worker and never leave the pool.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request create error: {source}")]
    BuildRequest {
        #[source]
        source: reqwest::Error,
    },
    #[error("post error ({:.2}s): {source}", .elapsed.as_secs_f64())]
    Transport {
        elapsed: Duration,
        #[source]
        source: reqwest::Error,
    },
}

impl DispatchError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
            Self::BuildRequest { .. } => false,
        }
    }
}
