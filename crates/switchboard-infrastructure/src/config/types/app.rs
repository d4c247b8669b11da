//! Main application configuration

use super::{CacheConfig, CommunicationServicesConfig, LoggingConfig, SmsConfig, WorkflowConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// Sections with defaults may be omitted; `workflow` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cache backend selection
    #[serde(default)]
    pub cache: CacheConfig,

    /// Communication Services resource, shared by the platform SMS backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_services: Option<CommunicationServicesConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// SMS backend selection
    #[serde(default)]
    pub sms: SmsConfig,

    /// Conversation workflow
    pub workflow: WorkflowConfig,
}

impl AppConfig {
    /// Configuration with default sections around `workflow`
    pub fn new(workflow: WorkflowConfig) -> Self {
        Self {
            cache: CacheConfig::default(),
            communication_services: None,
            logging: LoggingConfig::default(),
            sms: SmsConfig::default(),
            workflow,
        }
    }
}
