use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_value;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "payloads")]
    pub payload_file: Option<String>,
    #[serde(alias = "url")]
    pub target: Option<String>,
    #[serde(alias = "workers")]
    pub concurrency: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub output: Option<String>,
    pub route: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either whole seconds (`15`) or a unit string (`"500ms"`, `"15s"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
