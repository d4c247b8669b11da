//! Null SMS provider for testing
//!
//! Accepts every message without sending anything.

use async_trait::async_trait;
use switchboard_domain::error::Result;
use switchboard_domain::ports::SmsProvider;
use switchboard_domain::value_objects::PhoneNumber;
use tracing::debug;

/// SMS provider that reports every message as accepted
#[derive(Debug, Clone, Default)]
pub struct NullSmsProvider;

impl NullSmsProvider {
    /// Create a new null SMS provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsProvider for NullSmsProvider {
    async fn send(&self, recipient: &PhoneNumber, _body: &str) -> Result<bool> {
        debug!(to = %recipient, "Discarding SMS (null provider)");
        Ok(true)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
