//! Widget Configuration
//!
//! Every field has a default, so a page can override any subset with a JSON
//! object and omit the rest.

use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

pub const DEFAULT_RECORDS_KEY: &str = "dublinTodos";
pub const DEFAULT_SUBSCRIBERS_KEY: &str = "subscribedEmails";
pub const EMPTY_STATE_MESSAGE: &str = "No items found. Start by adding a new item!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Storage key holding the record collection
    pub records_key: String,
    /// Storage key holding newsletter subscriptions
    pub subscribers_key: String,
    /// How long a success notice stays visible
    pub notice_timeout_ms: u32,
    /// `maxlength` of the inline edit input
    pub edit_max_len: usize,
    /// Minimum level forwarded to the console (`error` .. `trace`)
    pub log_level: String,
    pub empty_state_message: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            records_key: DEFAULT_RECORDS_KEY.to_string(),
            subscribers_key: DEFAULT_SUBSCRIBERS_KEY.to_string(),
            notice_timeout_ms: 5000,
            edit_max_len: 100,
            log_level: "info".to_string(),
            empty_state_message: EMPTY_STATE_MESSAGE.to_string(),
        }
    }
}

impl TodoConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed log level, `INFO` when unrecognized
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = TodoConfig::from_json(r#"{"records_key":"demoTodos","notice_timeout_ms":1500}"#).unwrap();
        assert_eq!(config.records_key, "demoTodos");
        assert_eq!(config.notice_timeout_ms, 1500);
        assert_eq!(config.subscribers_key, DEFAULT_SUBSCRIBERS_KEY);
        assert_eq!(config.edit_max_len, 100);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TodoConfig::from_json("{records_key:").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = TodoConfig::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }
}
