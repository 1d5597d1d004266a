use serde::{Deserialize, Serialize};

/// One verification request for a single phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub number: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

impl LookupRequest {
    pub fn new(number: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            country: country.into(),
            callback: None,
        }
    }

    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }
}

/// Envelope status returned by the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookupStatus {
    Ok,
    Fail,
    InvalidInput,
    RetryLater,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Ok => "OK",
            LookupStatus::Fail => "FAIL",
            LookupStatus::InvalidInput => "INVALID_INPUT",
            LookupStatus::RetryLater => "RETRY_LATER",
        }
    }
}

impl std::fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WhatsApp presence as reported by the service. The service is only
/// expected to answer "yes" or "no"; anything else is kept as Unknown
/// rather than failing the decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhatsappPresence {
    Yes,
    No,
    #[default]
    #[serde(other)]
    Unknown,
}

impl WhatsappPresence {
    /// Presentation label, sentinel included.
    pub fn label(&self) -> &'static str {
        match self {
            WhatsappPresence::Yes => "yes",
            WhatsappPresence::No => "no",
            WhatsappPresence::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupMessage {
    pub number: Option<String>,
    #[serde(default)]
    pub whatsapp: WhatsappPresence,
}

/// The fixed JSON envelope returned by the lookup service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub status: LookupStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<LookupMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// One batch item paired with either its response or the error that
/// prevented one. Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome {
    pub request: LookupRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<LookupResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupOutcome {
    pub fn success(request: LookupRequest, response: LookupResponse) -> Self {
        Self {
            request,
            response: Some(response),
            error: None,
        }
    }

    pub fn failure(request: LookupRequest, error: String) -> Self {
        Self {
            request,
            response: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.response.is_some()
    }
}

/// Aggregate tallies over a batch. Always recomputed from the outcome list,
/// never maintained incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStatistics {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub whatsapp_yes: usize,
    pub whatsapp_no: usize,
}

impl BatchStatistics {
    pub fn from_outcomes(outcomes: &[LookupOutcome]) -> Self {
        let mut stats = Self {
            total: outcomes.len(),
            ..Self::default()
        };

        for outcome in outcomes {
            match &outcome.response {
                Some(response) => {
                    stats.successful += 1;
                    if let Some(message) = &response.message {
                        // Unexpected values count in neither tally.
                        match message.whatsapp {
                            WhatsappPresence::Yes => stats.whatsapp_yes += 1,
                            WhatsappPresence::No => stats.whatsapp_no += 1,
                            WhatsappPresence::Unknown => {}
                        }
                    }
                }
                None => stats.failed += 1,
            }
        }

        stats
    }
}
