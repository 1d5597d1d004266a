use crate::domain::model::{LookupRequest, LookupResponse};
use crate::domain::ports::{ConfigProvider, NumberVerifier};
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.checknumber.ai/v1/realtime/whatsapp";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the realtime lookup endpoint. One POST per check, no retries,
/// no caching; retry policy (if any) belongs to the caller.
pub struct WhatsappChecker {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl WhatsappChecker {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        Self::build(api_key.into(), endpoint.into(), DEFAULT_TIMEOUT)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::build(
            config.api_key().to_string(),
            config.api_endpoint().to_string(),
            config.request_timeout(),
        )
    }

    fn build(api_key: String, endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Performs one lookup. The country code is upper-cased on the wire and
    /// the callback field is sent only when a non-empty value was supplied.
    pub async fn check(&self, request: &LookupRequest) -> Result<LookupResponse> {
        let mut form = vec![
            ("number", request.number.clone()),
            ("country", request.country.to_uppercase()),
        ];
        if let Some(callback) = request.callback.as_deref() {
            if !callback.is_empty() {
                form.push(("callback", callback.to_string()));
            }
        }

        tracing::debug!("POST {} for number {}", self.endpoint, request.number);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-Key", &self.api_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CheckError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(CheckError::DecodeError)
    }
}

#[async_trait]
impl NumberVerifier for WhatsappChecker {
    async fn verify(&self, request: &LookupRequest) -> Result<LookupResponse> {
        self.check(request).await
    }
}
