//! Communication Services SMS provider
//!
//! Platform-managed messaging through the Communication Services SMS REST
//! API. Requests are signed with HMAC-SHA256 over the method, path, date,
//! host and content hash, using the base64 access key of the resource.

use crate::constants::{COMMUNICATION_SERVICES_SMS_API_VERSION, SMS_REQUEST_TIMEOUT_SECS};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::Duration;
use switchboard_domain::error::{Error, Result};
use switchboard_domain::ports::SmsProvider;
use switchboard_domain::value_objects::{PhoneNumber, Secret};
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

/// Resource endpoint, access key and sender number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationServicesOptions {
    /// Resource endpoint (e.g. `https://my-resource.communication.azure.com`)
    pub endpoint: String,
    /// Base64-encoded access key
    pub access_key: Secret,
    /// Sender phone number
    pub phone_number: PhoneNumber,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest<'a> {
    from: &'a str,
    sms_recipients: Vec<Recipient<'a>>,
    message: &'a str,
    sms_send_options: SendOptions,
}

#[derive(Serialize)]
struct Recipient<'a> {
    to: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOptions {
    enable_delivery_report: bool,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    value: Vec<SendResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResult {
    successful: bool,
    #[serde(default)]
    error_message: Option<String>,
}

/// Communication Services SMS provider
#[derive(Clone)]
pub struct CommunicationServicesSmsProvider {
    client: Client,
    send_url: Url,
    authority: String,
    key: Vec<u8>,
    phone_number: PhoneNumber,
}

impl CommunicationServicesSmsProvider {
    /// Create the provider
    ///
    /// Fails when the endpoint is not a URL or the access key is not base64.
    pub fn new(options: &CommunicationServicesOptions) -> Result<Self> {
        let base = Url::parse(&options.endpoint).map_err(|e| {
            Error::backend_construction_with_source(
                "communication_services",
                format!("Invalid endpoint '{}'", options.endpoint),
                e,
            )
        })?;

        let host = base.host_str().ok_or_else(|| {
            Error::backend_construction(
                "communication_services",
                format!("Endpoint '{}' has no host", options.endpoint),
            )
        })?;
        let authority = match base.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let mut send_url = base.join("sms").map_err(|e| {
            Error::backend_construction_with_source(
                "communication_services",
                "Cannot derive SMS URL from endpoint",
                e,
            )
        })?;
        send_url
            .query_pairs_mut()
            .append_pair("api-version", COMMUNICATION_SERVICES_SMS_API_VERSION);

        let key = STANDARD.decode(options.access_key.expose()).map_err(|e| {
            Error::backend_construction_with_source(
                "communication_services",
                "Access key is not valid base64",
                e,
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(SMS_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                Error::backend_construction_with_source(
                    "communication_services",
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            send_url,
            authority,
            key,
            phone_number: options.phone_number.clone(),
        })
    }

    /// `Authorization` header value for a request
    fn authorization(&self, path_and_query: &str, date: &str, content_hash: &str) -> Result<String> {
        let string_to_sign = format!(
            "POST\n{path_and_query}\n{date};{};{content_hash}",
            self.authority
        );

        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| Error::sms(format!("Invalid signing key: {e}")))?;
        mac.update(string_to_sign.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        Ok(format!(
            "HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature={signature}"
        ))
    }

    fn path_and_query(&self) -> String {
        match self.send_url.query() {
            Some(query) => format!("{}?{query}", self.send_url.path()),
            None => self.send_url.path().to_string(),
        }
    }
}

#[async_trait]
impl SmsProvider for CommunicationServicesSmsProvider {
    async fn send(&self, recipient: &PhoneNumber, body: &str) -> Result<bool> {
        debug!(to = %recipient, "Sending SMS via Communication Services");

        let payload = serde_json::to_vec(&SendRequest {
            from: self.phone_number.as_str(),
            sms_recipients: vec![Recipient {
                to: recipient.as_str(),
            }],
            message: body,
            sms_send_options: SendOptions {
                enable_delivery_report: true,
            },
        })?;

        let content_hash = STANDARD.encode(Sha256::digest(&payload));
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let authorization = self.authorization(&self.path_and_query(), &date, &content_hash)?;

        let response = self
            .client
            .post(self.send_url.clone())
            .header("x-ms-date", &date)
            .header("x-ms-content-sha256", &content_hash)
            .header("Authorization", authorization)
            .header("Content-Type", "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                Error::network_with_source(format!("Communication Services request failed: {e}"), e)
            })?;

        let status = response.status();
        if status != StatusCode::ACCEPTED && !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(to = %recipient, %status, detail = %detail, "SMS refused by Communication Services");
            return Ok(false);
        }

        let parsed: SendResponse = response.json().await.map_err(|e| {
            Error::sms_with_source(format!("Unreadable Communication Services response: {e}"), e)
        })?;

        let mut delivered = !parsed.value.is_empty();
        for result in parsed.value.iter().filter(|r| !r.successful) {
            delivered = false;
            warn!(
                to = %recipient,
                error = result.error_message.as_deref().unwrap_or("unknown"),
                "SMS not accepted for recipient"
            );
        }
        Ok(delivered)
    }

    fn provider_name(&self) -> &str {
        "communication_services"
    }
}

impl std::fmt::Debug for CommunicationServicesSmsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommunicationServicesSmsProvider")
            .field("endpoint", &self.authority)
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}
