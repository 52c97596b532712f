//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::load_config;

pub(crate) use loader::{DEFAULT_CONFIG_FILES, load_config_file};
