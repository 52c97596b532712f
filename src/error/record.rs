use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Error opening result log '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing to result log '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error clearing result log '{path}': {source}")]
    Reset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
