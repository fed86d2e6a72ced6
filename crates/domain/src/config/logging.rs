use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Suppresses per-query output; only fatal errors are printed.
    #[serde(default)]
    pub quiet: bool,
}

impl LoggingConfig {
    /// Level handed to the subscriber once `quiet` has been taken into account.
    pub fn effective_level(&self) -> &str {
        if self.quiet {
            "error"
        } else {
            &self.level
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            quiet: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
