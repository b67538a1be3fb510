//! Record Builder: wraps surviving messages with their delivery metadata.

use serde::Serialize;

use crate::config::Config;

/// One log record as submitted to the ingestion API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub line: String,
    pub app: String,
    pub level: String,
    pub env: String,
}

/// Maps each message to a [`LogRecord`], preserving order.
///
/// The severity label is upper-cased here; `app` and `env` are attached
/// verbatim from the configuration.
#[must_use]
pub fn build_records(messages: Vec<String>, config: &Config) -> Vec<LogRecord> {
    let level = config.level.to_uppercase();
    messages
        .into_iter()
        .map(|line| LogRecord {
            line,
            app: config.app_name.clone(),
            level: level.clone(),
            env: config.env_tag.clone(),
        })
        .collect()
}
