//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::VolleyArgs;
pub use defaults::{DEFAULT_OUTPUT_PATH, DEFAULT_ROUTE};
pub use types::PositiveUsize;

pub(crate) use defaults::DEFAULT_USER_AGENT;
