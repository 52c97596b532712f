use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::args::{PositiveUsize, VolleyArgs};
use crate::error::{AppError, AppResult, ConfigError};

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub payload_file: PathBuf,
    pub target: Url,
    pub concurrency: PositiveUsize,
    pub request_timeout: Duration,
    pub output: PathBuf,
}

impl RunConfig {
    /// Checks the required arguments and normalizes the target URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload file or target is missing, or the
    /// target is not an http(s) URL.
    pub fn from_args(args: &VolleyArgs) -> AppResult<Self> {
        let payload_file = args
            .payload_file
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingArgument {
                name: "payload-file",
            })?;
        let target = args
            .target
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingArgument {
                name: "target-base-url",
            })?;

        Ok(Self {
            payload_file: PathBuf::from(payload_file),
            target: normalize_target(target, &args.route).map_err(AppError::config)?,
            concurrency: args.concurrency,
            request_timeout: args.request_timeout,
            output: PathBuf::from(&args.output),
        })
    }
}

/// Joins the base URL (trailing slashes stripped) with `route`.
///
/// # Errors
///
/// Returns an error when the result does not parse as an http(s) URL.
pub fn normalize_target(base: &str, route: &str) -> Result<Url, ConfigError> {
    let base = base.trim().trim_end_matches('/');
    let route = route.trim();
    let joined = if route.is_empty() || route.starts_with('/') {
        format!("{}{}", base, route)
    } else {
        format!("{}/{}", base, route)
    };

    let url = Url::parse(&joined).map_err(|err| ConfigError::InvalidTarget {
        url: joined.clone(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme { url: joined }),
    }
}
