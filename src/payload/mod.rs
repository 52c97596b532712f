//! Payload file loading: candidate splitting and JSON validation.
mod split;


use std::path::Path;

use tracing::{debug, warn};

use crate::error::PayloadError;

pub use split::{is_valid_payload, split_candidates};

/// Validated request bodies in file order, plus the candidates that were dropped.
#[derive(Debug, Default)]
pub struct PayloadSet {
    pub payloads: Vec<String>,
    pub skipped: Vec<String>,
}

impl PayloadSet {
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let mut set = PayloadSet::default();
        for candidate in split_candidates(content) {
            if is_valid_payload(&candidate) {
                set.payloads.push(candidate);
            } else {
                warn!("Invalid JSON skipped: {}", candidate);
                set.skipped.push(candidate);
            }
        }
        set
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

/// Reads and validates every payload in `path`.
///
/// # Errors
///
/// Returns [`PayloadError::Read`] when the file cannot be read and
/// [`PayloadError::Empty`] when no candidate is well-formed JSON.
pub async fn load_payloads(path: &Path) -> Result<PayloadSet, PayloadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| PayloadError::Read {
            path: path.to_path_buf(),
            source: err,
        })?;

    let set = PayloadSet::from_content(&content);
    debug!(
        valid = set.payloads.len(),
        skipped = set.skipped.len(),
        "Loaded payloads from {}",
        path.display()
    );
    if set.is_empty() {
        return Err(PayloadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(set)
}
