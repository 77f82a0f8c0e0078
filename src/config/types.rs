use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the episode details screen loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Upper bound for a single interactor run, in seconds (default: 300).
    #[serde(default = "default_interactor_timeout")]
    pub interactor_timeout_seconds: u64,
}

/// Settings for the user-visible message queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// How long a message stays visible before it is hidden automatically (default: 6).
    #[serde(default = "default_max_visible")]
    pub max_visible_seconds: u64,
    /// Messages waiting behind the visible one; the oldest is dropped when full (default: 3).
    #[serde(default = "default_pending_capacity")]
    pub pending_capacity: usize,
}

/// Settings for the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_interactor_timeout() -> u64 {
    300
}

fn default_max_visible() -> u64 {
    6
}

fn default_pending_capacity() -> usize {
    3
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            interactor_timeout_seconds: default_interactor_timeout(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            max_visible_seconds: default_max_visible(),
            pending_capacity: default_pending_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl ScreenConfig {
    pub fn interactor_timeout(&self) -> Duration {
        Duration::from_secs(self.interactor_timeout_seconds)
    }
}

impl MessagesConfig {
    pub fn max_visible(&self) -> Duration {
        Duration::from_secs(self.max_visible_seconds)
    }
}
