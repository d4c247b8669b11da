//! SMS configuration types
//!
//! ```toml
//! [sms]
//! mode = "twilio"
//!
//! [sms.twilio]
//! account_sid = "AC..."
//! auth_token = "..."
//! phone_number = "+15550001111"
//! ```

use crate::config::ambient;
use crate::config::mode::{ModeSelector, check_variant, require_slot};
use crate::di::{SingletonFactory, VariantConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};
use switchboard_domain::error::{Error, Result};
use switchboard_domain::ports::SmsProvider;
use switchboard_domain::value_objects::{PhoneNumber, Secret};
use switchboard_providers::sms::{CommunicationServicesSmsProvider, TwilioOptions, TwilioSmsProvider};
use validator::Validate;

/// SMS backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SmsMode {
    /// Platform-managed Communication Services
    #[default]
    CommunicationServices,
    /// Twilio
    Twilio,
}

impl SmsMode {
    /// Every SMS mode
    pub const ALL: [SmsMode; 2] = [SmsMode::CommunicationServices, SmsMode::Twilio];

    /// Configuration tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommunicationServices => "communication_services",
            Self::Twilio => "twilio",
        }
    }
}

impl fmt::Display for SmsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Communication Services block
///
/// Carries nothing: the backend reads the top-level
/// `[communication_services]` section installed in [`ambient`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommunicationServicesSmsConfig {}

#[async_trait]
impl VariantConfig for CommunicationServicesSmsConfig {
    type Capability = dyn SmsProvider;

    fn registry() -> &'static SingletonFactory<Self, dyn SmsProvider> {
        static REGISTRY: LazyLock<SingletonFactory<CommunicationServicesSmsConfig, dyn SmsProvider>> =
            LazyLock::new(|| SingletonFactory::new("sms.communication_services"));
        &REGISTRY
    }

    async fn build(&self) -> Result<Arc<dyn SmsProvider>> {
        let section = ambient::communication_services().ok_or_else(|| {
            Error::backend_construction(
                "communication_services",
                "Communication Services configuration is not installed",
            )
        })?;
        let provider = CommunicationServicesSmsProvider::new(&section.sms_options())?;
        Ok(Arc::new(provider))
    }
}

/// Twilio block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct TwilioConfig {
    /// Account SID
    #[validate(length(min = 1))]
    pub account_sid: String,
    /// Auth token
    pub auth_token: Secret,
    /// Sender phone number
    pub phone_number: PhoneNumber,
}

#[async_trait]
impl VariantConfig for TwilioConfig {
    type Capability = dyn SmsProvider;

    fn registry() -> &'static SingletonFactory<Self, dyn SmsProvider> {
        static REGISTRY: LazyLock<SingletonFactory<TwilioConfig, dyn SmsProvider>> =
            LazyLock::new(|| SingletonFactory::new("sms.twilio"));
        &REGISTRY
    }

    async fn build(&self) -> Result<Arc<dyn SmsProvider>> {
        let options = TwilioOptions::new(
            self.account_sid.clone(),
            self.auth_token.clone(),
            self.phone_number.clone(),
        );
        Ok(Arc::new(TwilioSmsProvider::new(options)?))
    }
}

/// Shape of the `[sms]` section before whole-record validation
#[derive(Deserialize)]
struct SmsConfigData {
    #[serde(default = "default_communication_services_slot")]
    communication_services: Option<CommunicationServicesSmsConfig>,
    #[serde(default)]
    mode: SmsMode,
    #[serde(default)]
    twilio: Option<TwilioConfig>,
}

#[allow(clippy::unnecessary_wraps)]
fn default_communication_services_slot() -> Option<CommunicationServicesSmsConfig> {
    Some(CommunicationServicesSmsConfig::default())
}

/// SMS section: active mode plus one slot per mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SmsConfigData")]
pub struct SmsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    communication_services: Option<CommunicationServicesSmsConfig>,
    mode: SmsMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    twilio: Option<TwilioConfig>,
}

impl SmsConfig {
    /// Build and validate an SMS section
    pub fn new(
        mode: SmsMode,
        communication_services: Option<CommunicationServicesSmsConfig>,
        twilio: Option<TwilioConfig>,
    ) -> Result<Self> {
        let config = Self {
            communication_services,
            mode,
            twilio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Twilio mode with the given block
    pub fn twilio(twilio: TwilioConfig) -> Result<Self> {
        Self::new(SmsMode::Twilio, None, Some(twilio))
    }

    /// Communication Services slot
    pub fn communication_services_config(&self) -> Option<&CommunicationServicesSmsConfig> {
        self.communication_services.as_ref()
    }

    /// Twilio slot
    pub fn twilio_config(&self) -> Option<&TwilioConfig> {
        self.twilio.as_ref()
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            communication_services: Some(CommunicationServicesSmsConfig::default()),
            mode: SmsMode::CommunicationServices,
            twilio: None,
        }
    }
}

impl TryFrom<SmsConfigData> for SmsConfig {
    type Error = Error;

    fn try_from(data: SmsConfigData) -> Result<Self> {
        Self::new(data.mode, data.communication_services, data.twilio)
    }
}

#[async_trait]
impl ModeSelector for SmsConfig {
    type Mode = SmsMode;
    type Capability = dyn SmsProvider;

    fn mode(&self) -> SmsMode {
        self.mode
    }

    fn validate(&self) -> Result<()> {
        for mode in SmsMode::ALL {
            match mode {
                SmsMode::CommunicationServices => {
                    require_slot(
                        self.communication_services.as_ref(),
                        mode,
                        self.mode,
                        "Communication Services",
                    )?;
                }
                SmsMode::Twilio => {
                    require_slot(self.twilio.as_ref(), mode, self.mode, "Twilio")?;
                }
            }
        }

        if let Some(twilio) = &self.twilio {
            check_variant("twilio", twilio)?;
        }
        Ok(())
    }

    async fn instance(&self) -> Result<Arc<dyn SmsProvider>> {
        match self.mode {
            SmsMode::CommunicationServices => {
                let Some(communication_services) = &self.communication_services else {
                    return Err(Error::internal("validated sms config without communication_services slot"));
                };
                communication_services.instance().await
            }
            SmsMode::Twilio => {
                let Some(twilio) = &self.twilio else {
                    return Err(Error::internal("validated sms config without twilio slot"));
                };
                twilio.instance().await
            }
        }
    }
}
