//! SMS Provider Port
//!
//! Port for text-message delivery backends (platform-managed Communication
//! Services, Twilio, null).

use crate::error::Result;
use crate::value_objects::PhoneNumber;
use async_trait::async_trait;

/// Message sending capability
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send `body` to `recipient`
    ///
    /// # Returns
    /// * `Ok(true)` - the backend accepted the message
    /// * `Ok(false)` - the backend answered but refused the message
    /// * `Err(_)` - the backend could not be reached
    async fn send(&self, recipient: &PhoneNumber, body: &str) -> Result<bool>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
