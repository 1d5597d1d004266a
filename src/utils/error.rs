use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CheckError {
    /// True when the service could not be reached or answered outside 2xx,
    /// as opposed to answering 2xx with an undecodable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CheckError::TransportError(_) | CheckError::HttpError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
