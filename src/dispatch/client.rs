use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;

/// Builds the HTTP client shared by all workers.
///
/// # Errors
///
/// Returns an error when the TLS backend or resolver cannot be initialized.
pub fn build_client(request_timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(request_timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
