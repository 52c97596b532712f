pub(crate) const DEFAULT_USER_AGENT: &str = concat!("volley/", env!("CARGO_PKG_VERSION"));

/// Route appended to the target base URL.
pub const DEFAULT_ROUTE: &str = "/api/find-service";

/// Result log location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "responses.txt";
