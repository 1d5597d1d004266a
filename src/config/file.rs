use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration file. All fields are optional; anything unset falls
/// through to the environment or the built-in defaults.
///
/// ```toml
/// [service]
/// endpoint = "https://api.checknumber.ai/v1/realtime/whatsapp"
/// api_key = "${WHATSAPP_RT_API_KEY}"
/// timeout_seconds = 30
///
/// [batch]
/// delay_ms = 1000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub service: ServiceSection,
    pub batch: Option<BatchSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub delay_ms: Option<u64>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        let config: FileConfig = toml::from_str(&processed)?;
        Ok(config)
    }

    /// Replaces `${VAR}` references with environment values. Unresolved
    /// references are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.service.endpoint {
            validate_url("service.endpoint", endpoint)?;
        }
        if let Some(timeout) = self.service.timeout_seconds {
            validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
