//! Tests for the Communication Services SMS provider against a mock server

use mockito::{Matcher, Server};
use switchboard_domain::value_objects::{PhoneNumber, Secret};
use switchboard_providers::SmsProvider;
use switchboard_providers::sms::{CommunicationServicesOptions, CommunicationServicesSmsProvider};

fn options(endpoint: &str) -> CommunicationServicesOptions {
    CommunicationServicesOptions {
        endpoint: endpoint.to_string(),
        // "secret-key"
        access_key: Secret::new("c2VjcmV0LWtleQ=="),
        phone_number: PhoneNumber::parse("+33100000000").unwrap(),
    }
}

#[tokio::test]
async fn test_send_signs_request_and_reads_result() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/sms")
        .match_query(Matcher::UrlEncoded(
            "api-version".to_string(),
            "2021-03-07".to_string(),
        ))
        .match_header("x-ms-date", Matcher::Regex(r" GMT$".to_string()))
        .match_header("x-ms-content-sha256", Matcher::Any)
        .match_header(
            "authorization",
            Matcher::Regex("^HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature=".to_string()),
        )
        .match_body(Matcher::PartialJson(serde_json::json!({
            "from": "+33100000000",
            "smsRecipients": [{"to": "+33612345678"}],
            "message": "Bonjour",
        })))
        .with_status(202)
        .with_body(r#"{"value":[{"to":"+33612345678","successful":true,"httpStatusCode":202}]}"#)
        .create_async()
        .await;

    let provider = CommunicationServicesSmsProvider::new(&options(&server.url())).unwrap();
    let to = PhoneNumber::parse("+33612345678").unwrap();

    assert!(provider.send(&to, "Bonjour").await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unsuccessful_recipient_returns_false() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/sms")
        .match_query(Matcher::Any)
        .with_status(202)
        .with_body(
            r#"{"value":[{"to":"+33612345678","successful":false,"errorMessage":"Blocked"}]}"#,
        )
        .create_async()
        .await;

    let provider = CommunicationServicesSmsProvider::new(&options(&server.url())).unwrap();
    let to = PhoneNumber::parse("+33612345678").unwrap();

    assert!(!provider.send(&to, "Bonjour").await.unwrap());
}

#[tokio::test]
async fn test_rejected_request_returns_false() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/sms")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":{"code":"Denied"}}"#)
        .create_async()
        .await;

    let provider = CommunicationServicesSmsProvider::new(&options(&server.url())).unwrap();
    let to = PhoneNumber::parse("+33612345678").unwrap();

    assert!(!provider.send(&to, "Bonjour").await.unwrap());
}
