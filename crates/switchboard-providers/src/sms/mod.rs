//! SMS Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullSmsProvider`] | Testing | Accepts everything, sends nothing |
//! | [`CommunicationServicesSmsProvider`] | Platform | Communication Services SMS with HMAC request signing |
//! | [`TwilioSmsProvider`] | Third party | Twilio Programmable Messaging |

#[cfg(feature = "sms-communication-services")]
pub mod communication_services;
pub mod null;
#[cfg(feature = "sms-twilio")]
pub mod twilio;

#[cfg(feature = "sms-communication-services")]
pub use communication_services::{CommunicationServicesOptions, CommunicationServicesSmsProvider};
pub use null::NullSmsProvider;
#[cfg(feature = "sms-twilio")]
pub use twilio::{TwilioOptions, TwilioSmsProvider};
