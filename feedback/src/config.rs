//! Feedback configuration with defaults matching server-side limits.
//!
//! Pages may override any value through a JSON block; keys that are absent
//! keep their default. All limits here are presentation-layer only.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const MIB: u64 = 1024 * 1024;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * MIB;
pub const DEFAULT_ALLOWED_MIME_TYPES: [&str; 5] = ["image/png", "image/jpeg", "image/jpg", "image/gif", "image/bmp"];
pub const DEFAULT_ALLOWED_TYPES_LABEL: &str = "PNG, JPG, JPEG, GIF, or BMP";
pub const DEFAULT_MIN_PASSWORD_CHARS: usize = 6;
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 190;
pub const DEFAULT_COUNTER_WARNING_CHARS: usize = 20;
pub const DEFAULT_ALERT_LIFETIME_MS: u32 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error returned by [`FeedbackConfig::from_json`] and [`FeedbackConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid feedback config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("feedback config `{field}` must be greater than zero")]
    ZeroLimit { field: &'static str },
    #[error("feedback config must allow at least one upload type")]
    NoUploadTypes,
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub max_upload_bytes: u64,
    pub allowed_mime_types: Vec<String>,
    /// Human-readable list shown when a file type is rejected.
    pub allowed_types_label: String,
    pub min_password_chars: usize,
    pub max_message_chars: usize,
    /// Remaining-character count below which the counter turns to a warning.
    pub counter_warning_chars: usize,
    pub alert_lifetime_ms: u32,
    pub log_level: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES.iter().map(|&m| m.to_owned()).collect(),
            allowed_types_label: DEFAULT_ALLOWED_TYPES_LABEL.to_owned(),
            min_password_chars: DEFAULT_MIN_PASSWORD_CHARS,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            counter_warning_chars: DEFAULT_COUNTER_WARNING_CHARS,
            alert_lifetime_ms: DEFAULT_ALERT_LIFETIME_MS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl FeedbackConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the other
    /// variants when a parsed value fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make every input invalid.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::ZeroLimit { field: "max_upload_bytes" });
        }
        if self.max_message_chars == 0 {
            return Err(ConfigError::ZeroLimit { field: "max_message_chars" });
        }
        if self.alert_lifetime_ms == 0 {
            return Err(ConfigError::ZeroLimit { field: "alert_lifetime_ms" });
        }
        if self.allowed_mime_types.iter().all(|m| m.trim().is_empty()) {
            return Err(ConfigError::NoUploadTypes);
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] when the name is not a `log` level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
