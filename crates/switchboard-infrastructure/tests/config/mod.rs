//! Configuration Tests
//!
//! Mode selection, workflow sections and loading.

mod mode_test;
mod workflow_test;

use switchboard_domain::value_objects::{PhoneNumber, Secret};
use switchboard_infrastructure::config::CommunicationServicesConfig;

/// Communication Services section shared by every test in this binary
///
/// The section is installed process-wide on load, so all loads must agree.
pub const COMMUNICATION_SERVICES_TOML: &str = r#"
[communication_services]
endpoint = "https://switchboard-test.communication.azure.com"
access_key = "c2VjcmV0LWtleQ=="
phone_number = "+33100000000"
"#;

/// Minimal workflow section
pub const WORKFLOW_TOML: &str = r#"
[workflow.initiate]
agent_phone_number = "+33600000000"
bot_company = "Contoso"
bot_name = "Amelie"
"#;

pub fn communication_services_section() -> CommunicationServicesConfig {
    CommunicationServicesConfig {
        endpoint: "https://switchboard-test.communication.azure.com".to_string(),
        access_key: Secret::new("c2VjcmV0LWtleQ=="),
        phone_number: PhoneNumber::parse("+33100000000").unwrap(),
    }
}

/// Required sections followed by `extra`
pub fn config_toml(extra: &str) -> String {
    format!("{COMMUNICATION_SERVICES_TOML}\n{WORKFLOW_TOML}\n{extra}")
}
