#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::core::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::domain::ports::ConfigProvider;
use std::time::Duration;

pub const API_KEY_ENV: &str = "WHATSAPP_RT_API_KEY";
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Default wait between consecutive batch calls.
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(1000);

/// Fully resolved runtime configuration. Precedence for every field:
/// CLI flag > config file > environment > built-in default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
    pub pacing_delay: Duration,
}

impl Settings {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
        pacing_delay: Duration,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout,
            pacing_delay,
        }
    }

    /// API key from the environment, with the documented placeholder
    /// fallback so examples run without a key (and get rejected upstream).
    pub fn api_key_from_env() -> String {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: Self::api_key_from_env(),
            timeout: DEFAULT_TIMEOUT,
            pacing_delay: DEFAULT_PACING_DELAY,
        }
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn pacing_delay(&self) -> Duration {
        self.pacing_delay
    }
}
