use crate::config::file::FileConfig;
use crate::config::{Settings, DEFAULT_PACING_DELAY, PLACEHOLDER_API_KEY};
use crate::core::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::domain::model::LookupRequest;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "numcheck")]
#[command(about = "Realtime WhatsApp number lookup via checknumber.ai")]
pub struct CliConfig {
    #[arg(long, help = "API key; defaults to the WHATSAPP_RT_API_KEY environment variable")]
    pub api_key: Option<String>,

    #[arg(long, help = "Lookup service endpoint override")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check one number
    Check {
        #[arg(long)]
        number: String,

        #[arg(long, help = "Two-letter country code")]
        country: String,

        #[arg(long, help = "Callback URL for asynchronous delivery")]
        callback: Option<String>,
    },
    /// Check a list of numbers sequentially with a pacing delay
    Batch {
        #[arg(long, value_delimiter = ',', help = "number:country pairs")]
        items: Vec<String>,

        #[arg(long, help = "Wait between consecutive calls in milliseconds")]
        delay_ms: Option<u64>,

        #[arg(long, help = "Callback URL applied to every item")]
        callback: Option<String>,
    },
}

impl CliConfig {
    fn batch_delay_flag(&self) -> Option<u64> {
        match &self.command {
            Command::Batch { delay_ms, .. } => *delay_ms,
            Command::Check { .. } => None,
        }
    }
}

impl Settings {
    /// Merges CLI flags, the optional config file, and the environment into
    /// runtime settings. Flags win over the file, the file over the
    /// environment, the environment over built-in defaults.
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let config = FileConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };
        let service = file.as_ref().map(|f| &f.service);

        let endpoint = cli
            .endpoint
            .clone()
            .or_else(|| service.and_then(|s| s.endpoint.clone()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        validate_url("endpoint", &endpoint)?;

        let api_key = cli
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| service.and_then(|s| s.api_key.clone()).filter(|key| !key.is_empty()))
            .unwrap_or_else(Settings::api_key_from_env);
        if api_key == PLACEHOLDER_API_KEY {
            tracing::warn!("No API key configured; requests will be rejected by the service");
        }

        let timeout = cli
            .timeout_seconds
            .or_else(|| service.and_then(|s| s.timeout_seconds))
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(CheckError::ConfigError {
                message: "timeout_seconds must be at least 1".to_string(),
            });
        }

        let pacing_delay = cli
            .batch_delay_flag()
            .or_else(|| {
                file.as_ref()
                    .and_then(|f| f.batch.as_ref())
                    .and_then(|b| b.delay_ms)
            })
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_PACING_DELAY);

        Ok(Settings::new(endpoint, api_key, timeout, pacing_delay))
    }
}

/// Parses one `number:country` batch item.
pub fn parse_batch_item(item: &str) -> Result<LookupRequest> {
    let (number, country) = item.split_once(':').ok_or_else(|| CheckError::ConfigError {
        message: format!("batch item '{}' must be in number:country form", item),
    })?;

    let number = number.trim();
    let country = country.trim();
    if number.is_empty() || country.is_empty() {
        return Err(CheckError::ConfigError {
            message: format!("batch item '{}' has an empty number or country", item),
        });
    }

    Ok(LookupRequest::new(number, country))
}

pub fn parse_batch_items(items: &[String], callback: Option<&str>) -> Result<Vec<LookupRequest>> {
    items
        .iter()
        .map(|item| {
            let request = parse_batch_item(item)?;
            Ok(match callback {
                Some(url) if !url.is_empty() => request.with_callback(url),
                _ => request,
            })
        })
        .collect()
}
