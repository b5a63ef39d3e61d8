use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of {}",
                self.level,
                LEVELS.join(", ")
            )))
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
