//! Configuration types module

pub mod app;
pub mod cache;
pub mod communication_services;
pub mod logging;
pub mod sms;
pub mod workflow;

pub use app::AppConfig;
pub use cache::{CacheConfig, CacheMode, MemoryConfig, RedisConfig};
pub use communication_services::CommunicationServicesConfig;
pub use logging::LoggingConfig;
pub use sms::{CommunicationServicesSmsConfig, SmsConfig, SmsMode, TwilioConfig};
pub use workflow::{LanguageConfig, WorkflowConfig, WorkflowInitiateConfig};
