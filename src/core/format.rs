use crate::domain::model::{LookupResponse, LookupStatus};

/// Renders one envelope for display. OK responses get the one-line summary
/// with "Unknown"/"N/A" standing in for missing fields; anything else is
/// rendered as a diagnostic with the serialized envelope.
pub fn format_response(response: &LookupResponse) -> String {
    if response.status == LookupStatus::Ok {
        let message = response.message.as_ref();
        let number = message
            .and_then(|m| m.number.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown");
        let whatsapp = message.map_or("Unknown", |m| m.whatsapp.label());
        let transaction_id = response
            .transaction_id
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("N/A");

        format!(
            "Number: {}, WhatsApp: {}, Transaction ID: {}",
            number, whatsapp, transaction_id
        )
    } else {
        let raw = serde_json::to_string(response)
            .unwrap_or_else(|_| "<unserializable response>".to_string());
        format!("Status: {}, Error: {}", response.status, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LookupMessage, WhatsappPresence};

    #[test]
    fn test_format_ok_response() {
        let response = LookupResponse {
            status: LookupStatus::Ok,
            message: Some(LookupMessage {
                number: Some("+628138800001".to_string()),
                whatsapp: WhatsappPresence::Yes,
            }),
            pricing_strategy: Some("PAY_ALWAYS".to_string()),
            transaction_id: Some("tphxc6te38gpcoyk8hkvwc".to_string()),
        };

        assert_eq!(
            format_response(&response),
            "Number: +628138800001, WhatsApp: yes, Transaction ID: tphxc6te38gpcoyk8hkvwc"
        );
    }

    #[test]
    fn test_format_ok_response_without_message() {
        let response = LookupResponse {
            status: LookupStatus::Ok,
            message: None,
            pricing_strategy: None,
            transaction_id: None,
        };

        assert_eq!(
            format_response(&response),
            "Number: Unknown, WhatsApp: Unknown, Transaction ID: N/A"
        );
    }

    #[test]
    fn test_format_ok_response_with_empty_fields() {
        let response = LookupResponse {
            status: LookupStatus::Ok,
            message: Some(LookupMessage {
                number: Some(String::new()),
                whatsapp: WhatsappPresence::Unknown,
            }),
            pricing_strategy: None,
            transaction_id: Some(String::new()),
        };

        assert_eq!(
            format_response(&response),
            "Number: Unknown, WhatsApp: Unknown, Transaction ID: N/A"
        );
    }

    #[test]
    fn test_format_non_ok_response_is_diagnostic() {
        let response = LookupResponse {
            status: LookupStatus::RetryLater,
            message: None,
            pricing_strategy: None,
            transaction_id: Some("abc".to_string()),
        };

        let formatted = format_response(&response);
        assert!(formatted.starts_with("Status: RETRY_LATER, Error: "));
        assert!(formatted.contains("\"status\":\"RETRY_LATER\""));
        assert!(formatted.contains("\"transactionId\":\"abc\""));
    }

    #[test]
    fn test_format_is_deterministic() {
        let response = LookupResponse {
            status: LookupStatus::Fail,
            message: None,
            pricing_strategy: None,
            transaction_id: None,
        };

        assert_eq!(format_response(&response), format_response(&response));
    }
}
