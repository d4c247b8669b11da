//! Tests for the Twilio SMS provider against a mock server

use mockito::{Matcher, Server};
use switchboard_domain::value_objects::{PhoneNumber, Secret};
use switchboard_providers::sms::{TwilioOptions, TwilioSmsProvider};
use switchboard_providers::{Error, SmsProvider};

const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC123/Messages.json";

fn options(base_url: &str) -> TwilioOptions {
    TwilioOptions::new(
        "AC123",
        Secret::new("token"),
        PhoneNumber::parse("+15550001111").unwrap(),
    )
    .with_base_url(base_url)
}

#[tokio::test]
async fn test_send_posts_form_with_basic_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MESSAGES_PATH)
        .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("To".to_string(), "+33612345678".to_string()),
            Matcher::UrlEncoded("From".to_string(), "+15550001111".to_string()),
            Matcher::UrlEncoded("Body".to_string(), "Votre dossier est ouvert".to_string()),
        ]))
        .with_status(201)
        .with_body(r#"{"sid":"SM1","status":"queued"}"#)
        .create_async()
        .await;

    let provider = TwilioSmsProvider::new(options(&server.url())).unwrap();
    let to = PhoneNumber::parse("+33 6 12 34 56 78").unwrap();

    assert!(provider.send(&to, "Votre dossier est ouvert").await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refused_message_returns_false() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", MESSAGES_PATH)
        .with_status(400)
        .with_body(r#"{"code":21211,"message":"Invalid 'To' Phone Number"}"#)
        .create_async()
        .await;

    let provider = TwilioSmsProvider::new(options(&server.url())).unwrap();
    let to = PhoneNumber::parse("+33612345678").unwrap();

    assert!(!provider.send(&to, "hello").await.unwrap());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let provider = TwilioSmsProvider::new(options("http://127.0.0.1:1")).unwrap();
    let to = PhoneNumber::parse("+33612345678").unwrap();

    let result = provider.send(&to, "hello").await;
    assert!(matches!(result, Err(Error::Network { .. })));
}

#[test]
fn test_empty_account_sid_rejected() {
    let mut opts = options("http://localhost");
    opts.account_sid = "  ".to_string();
    assert!(matches!(
        TwilioSmsProvider::new(opts),
        Err(Error::BackendConstruction { .. })
    ));
}
