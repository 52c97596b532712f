mod app;
mod config;
mod dispatch;
mod payload;
mod record;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use payload::PayloadError;
pub use record::RecordError;
pub use validation::ValidationError;
