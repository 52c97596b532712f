use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to read payload file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No valid payloads found in '{path}'.")]
    Empty { path: PathBuf },
}
