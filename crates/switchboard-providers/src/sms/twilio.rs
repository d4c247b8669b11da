//! Twilio SMS provider
//!
//! Sends messages through the Twilio Programmable Messaging REST API.

use crate::constants::{SMS_REQUEST_TIMEOUT_SECS, TWILIO_API_BASE_URL};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use switchboard_domain::error::{Error, Result};
use switchboard_domain::ports::SmsProvider;
use switchboard_domain::value_objects::{PhoneNumber, Secret};
use tracing::{debug, warn};

/// Twilio account credentials and sender number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioOptions {
    /// Account SID (`AC...`)
    pub account_sid: String,
    /// Auth token
    pub auth_token: Secret,
    /// Sender phone number
    pub phone_number: PhoneNumber,
    /// API base URL
    pub base_url: String,
}

impl TwilioOptions {
    /// Options against the public Twilio API
    pub fn new<S: Into<String>>(account_sid: S, auth_token: Secret, phone_number: PhoneNumber) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token,
            phone_number,
            base_url: TWILIO_API_BASE_URL.to_string(),
        }
    }

    /// Point the provider at another base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Twilio SMS provider
#[derive(Clone)]
pub struct TwilioSmsProvider {
    client: Client,
    options: TwilioOptions,
}

impl TwilioSmsProvider {
    /// Create the provider and its HTTP client
    pub fn new(options: TwilioOptions) -> Result<Self> {
        if options.account_sid.trim().is_empty() {
            return Err(Error::backend_construction(
                "twilio",
                "Account SID cannot be empty",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(SMS_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                Error::backend_construction_with_source(
                    "twilio",
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self { client, options })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.options.base_url.trim_end_matches('/'),
            self.options.account_sid
        )
    }
}

#[async_trait]
impl SmsProvider for TwilioSmsProvider {
    async fn send(&self, recipient: &PhoneNumber, body: &str) -> Result<bool> {
        debug!(to = %recipient, "Sending SMS via Twilio");

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(
                &self.options.account_sid,
                Some(self.options.auth_token.expose()),
            )
            .form(&[
                ("To", recipient.as_str()),
                ("From", self.options.phone_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("Twilio request failed: {e}"), e))?;

        let status = response.status();
        if status.is_success() {
            debug!(to = %recipient, %status, "SMS accepted by Twilio");
            Ok(true)
        } else {
            let detail = response.text().await.unwrap_or_default();
            warn!(to = %recipient, %status, detail = %detail, "SMS refused by Twilio");
            Ok(false)
        }
    }

    fn provider_name(&self) -> &str {
        "twilio"
    }
}

impl std::fmt::Debug for TwilioSmsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioSmsProvider")
            .field("account_sid", &self.options.account_sid)
            .field("phone_number", &self.options.phone_number)
            .finish_non_exhaustive()
    }
}
