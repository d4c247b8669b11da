//! Communication Services configuration types

use serde::{Deserialize, Serialize};
use switchboard_domain::value_objects::{PhoneNumber, Secret};
use switchboard_providers::sms::CommunicationServicesOptions;

/// Top-level Communication Services section
///
/// ```toml
/// [communication_services]
/// endpoint = "https://my-resource.communication.azure.com"
/// access_key = "..."
/// phone_number = "+33100000000"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommunicationServicesConfig {
    /// Resource endpoint
    pub endpoint: String,
    /// Base64 access key of the resource
    pub access_key: Secret,
    /// Sender phone number
    pub phone_number: PhoneNumber,
}

impl CommunicationServicesConfig {
    /// Provider options for the SMS backend
    pub fn sms_options(&self) -> CommunicationServicesOptions {
        CommunicationServicesOptions {
            endpoint: self.endpoint.clone(),
            access_key: self.access_key.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}
