//! Process-wide configuration sections
//!
//! Some backends take their settings from a top-level section rather than
//! from their own variant block. The section is installed once, normally by
//! the configuration loader, and read at backend construction.

use super::types::CommunicationServicesConfig;
use std::sync::OnceLock;
use switchboard_domain::error::{Error, Result};
use tracing::{debug, info};

static COMMUNICATION_SERVICES: OnceLock<CommunicationServicesConfig> = OnceLock::new();

/// Install the Communication Services section
///
/// The first installation wins. Installing an equal value again is a no-op;
/// installing a different one fails.
pub fn install_communication_services(config: CommunicationServicesConfig) -> Result<()> {
    let endpoint = config.endpoint.clone();
    match COMMUNICATION_SERVICES.set(config) {
        Ok(()) => {
            info!(endpoint = %endpoint, "Installed Communication Services configuration");
            Ok(())
        }
        Err(rejected) if COMMUNICATION_SERVICES.get() == Some(&rejected) => {
            debug!("Communication Services configuration already installed");
            Ok(())
        }
        Err(_) => Err(Error::configuration(
            "Communication Services configuration is already installed with different values",
        )),
    }
}

/// Installed Communication Services section, if any
pub fn communication_services() -> Option<&'static CommunicationServicesConfig> {
    COMMUNICATION_SERVICES.get()
}
