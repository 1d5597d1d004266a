use httpmock::prelude::*;
use numcheck::{CheckError, LookupRequest, LookupStatus, WhatsappChecker, WhatsappPresence};

#[tokio::test]
async fn test_single_check_end_to_end() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/realtime/whatsapp")
            .header("X-API-Key", "integration-key")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body("number=628138800001&country=ID");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "OK",
                "message": {"number": "628138800001", "whatsapp": "yes"},
                "pricingStrategy": "PAY_ALWAYS",
                "transactionId": "tphxc6te38gpcoyk8hkvwc"
            }));
    });

    let checker =
        WhatsappChecker::with_endpoint("integration-key", server.url("/v1/realtime/whatsapp"))
            .unwrap();

    // Lower-case country on input; the wire carries the upper-cased form.
    let request = LookupRequest::new("628138800001", "id");
    let response = checker.check(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(response.status, LookupStatus::Ok);

    let message = response.message.unwrap();
    assert_eq!(message.number.as_deref(), Some("628138800001"));
    assert_eq!(message.whatsapp, WhatsappPresence::Yes);
    assert_eq!(
        response.transaction_id.as_deref(),
        Some("tphxc6te38gpcoyk8hkvwc")
    );
}

#[tokio::test]
async fn test_single_check_surfaces_http_failure() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/realtime/whatsapp");
        then.status(429).body("rate limited");
    });

    let checker =
        WhatsappChecker::with_endpoint("integration-key", server.url("/v1/realtime/whatsapp"))
            .unwrap();

    let err = checker
        .check(&LookupRequest::new("628138800001", "ID"))
        .await
        .unwrap_err();

    api_mock.assert();
    match err {
        CheckError::HttpError { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected HttpError, got {:?}", other),
    }
}
