use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_OUTPUT_PATH, DEFAULT_ROUTE};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Replays a file of JSON payloads as POST requests against a target through a fixed-size worker pool and reports latency statistics."
)]
pub struct VolleyArgs {
    /// Payload file: JSON documents separated by blank lines, or one per line
    #[arg(value_name = "PAYLOAD_FILE")]
    pub payload_file: Option<String>,

    /// Target base URL (e.g. http://localhost:18020); the API route is appended
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Number of concurrent workers
    #[arg(value_name = "CONCURRENCY", default_value = "5", value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", short = 't', default_value = "15s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Result log path (cleared at the start of every run)
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// API route appended to the target base URL
    #[arg(long, default_value = DEFAULT_ROUTE)]
    pub route: String,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long, short = 'c')]
    pub config: Option<String>,
}
