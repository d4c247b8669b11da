//! Provider constants

/// Timeout applied to every outbound SMS API request, in seconds
pub const SMS_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Public Twilio REST API base URL
pub const TWILIO_API_BASE_URL: &str = "https://api.twilio.com";

/// Communication Services SMS REST API version
pub const COMMUNICATION_SERVICES_SMS_API_VERSION: &str = "2021-03-07";
