use crate::domain::model::{LookupRequest, LookupResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The seam between the batch layer and the remote service. Implemented by
/// the HTTP checker; substituted in tests.
#[async_trait]
pub trait NumberVerifier: Send + Sync {
    async fn verify(&self, request: &LookupRequest) -> Result<LookupResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn pacing_delay(&self) -> Duration;
}
