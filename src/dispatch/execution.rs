use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Request, Url};
use tokio::time::Instant;
use tracing::warn;

use crate::error::DispatchError;

pub(super) struct Response {
    pub(super) status: u16,
    pub(super) body: String,
}

pub(super) fn build_request(
    client: &Client,
    target: &Url,
    body: &str,
) -> Result<Request, DispatchError> {
    client
        .post(target.clone())
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body.to_owned())
        .build()
        .map_err(|err| DispatchError::BuildRequest { source: err })
}

/// Executes `request`; a body that cannot be read still yields a response
/// with an empty body.
pub(super) async fn execute_request(
    client: &Client,
    request: Request,
    start: Instant,
) -> Result<Response, DispatchError> {
    let response = client
        .execute(request)
        .await
        .map_err(|err| DispatchError::Transport {
            elapsed: start.elapsed(),
            source: err,
        })?;
    let status = response.status().as_u16();
    let body = match read_body(response).await {
        Ok(body) => body,
        Err(err) => {
            warn!("Failed to read response body: {}", err);
            String::new()
        }
    };
    Ok(Response { status, body })
}

async fn read_body(response: reqwest::Response) -> Result<String, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut buffer: Vec<u8> = Vec::new();
    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
