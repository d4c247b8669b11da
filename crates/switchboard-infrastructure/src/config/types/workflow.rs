//! Conversation workflow configuration types

use crate::constants::{
    CLAIM_SCHEMA_NAME, WORKFLOW_CONVERSATION_TIMEOUT_HOURS,
    WORKFLOW_INTELLIGENCE_HARD_TIMEOUT_SECS, WORKFLOW_INTELLIGENCE_SOFT_TIMEOUT_SECS,
    WORKFLOW_MAX_VOICE_RECOGNITION_RETRY, WORKFLOW_VOICE_TIMEOUT_AFTER_SILENCE_SECS,
};
use crate::schema::{RecordSchema, synthesize};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use switchboard_domain::constants::DEFAULT_LANGUAGE_SHORT_CODE;
use switchboard_domain::error::{Error, Result};
use switchboard_domain::value_objects::{FieldDescriptor, FieldType, LanguageEntry, PhoneNumber};

const DEFAULT_TASK: &str = "Help the customer with their insurance claim. Assistant requires data \
from the customer to fill the claim. Claim data is located in the customer file. Assistant role \
is not over until all the relevant data is gathered.";

/// Shape of the `[workflow.initiate.lang]` section before validation
#[derive(Deserialize)]
struct LanguageConfigData {
    #[serde(default = "default_short_code")]
    default_short_code: String,
    #[serde(default = "default_languages")]
    availables: Vec<LanguageEntry>,
}

fn default_short_code() -> String {
    DEFAULT_LANGUAGE_SHORT_CODE.to_string()
}

fn default_languages() -> Vec<LanguageEntry> {
    vec![
        LanguageEntry::new(
            "fr-FR",
            &["French", "FR", "France"],
            "fr-FR-VivienneMultilingualNeural",
        ),
        LanguageEntry::new(
            "en-US",
            &["English", "EN", "United States"],
            "en-US-AvaMultilingualNeural",
        ),
        LanguageEntry::new("es-ES", &["Spanish", "ES", "Spain"], "es-ES-XimenaNeural"),
        LanguageEntry::new(
            "zh-CN",
            &["Chinese", "ZH", "China"],
            "zh-CN-XiaoxiaoMultilingualNeural",
        ),
    ]
}

/// Languages offered to callers and the one used by default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LanguageConfigData")]
pub struct LanguageConfig {
    default_short_code: String,
    availables: Vec<LanguageEntry>,
}

impl LanguageConfig {
    /// Build a language list; it must hold at least one valid entry
    pub fn new<S: Into<String>>(default_short_code: S, availables: Vec<LanguageEntry>) -> Result<Self> {
        if availables.is_empty() {
            return Err(Error::configuration(
                "At least one available language is required",
            ));
        }
        for entry in &availables {
            entry.validate()?;
        }
        Ok(Self {
            default_short_code: default_short_code.into(),
            availables,
        })
    }

    /// Configured default short code
    pub fn default_short_code(&self) -> &str {
        &self.default_short_code
    }

    /// Available languages, in configuration order
    pub fn availables(&self) -> &[LanguageEntry] {
        &self.availables
    }

    /// Entry matching the default short code, else the first entry
    pub fn default_lang(&self) -> &LanguageEntry {
        self.availables
            .iter()
            .find(|lang| lang.short_code == self.default_short_code)
            .unwrap_or(&self.availables[0])
    }

    /// Entry for `short_code`, if available
    pub fn find(&self, short_code: &str) -> Option<&LanguageEntry> {
        self.availables
            .iter()
            .find(|lang| lang.short_code == short_code)
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default_short_code: default_short_code(),
            availables: default_languages(),
        }
    }
}

impl TryFrom<LanguageConfigData> for LanguageConfig {
    type Error = Error;

    fn try_from(data: LanguageConfigData) -> Result<Self> {
        Self::new(data.default_short_code, data.availables)
    }
}

fn default_claim_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(
            "incident_datetime",
            "Date and time of the incident",
            FieldType::DateTime,
        ),
        FieldDescriptor::new(
            "incident_description",
            "Description of the incident",
            FieldType::Text,
        ),
        FieldDescriptor::new("incident_location", "Location of the incident", FieldType::Text),
        FieldDescriptor::new(
            "injuries",
            "Injuries sustained during the incident",
            FieldType::Text,
        ),
        FieldDescriptor::new(
            "involved_parties",
            "Involved parties in the incident",
            FieldType::Text,
        ),
        FieldDescriptor::new(
            "medical_records",
            "Medical records related to the incident",
            FieldType::Text,
        ),
        FieldDescriptor::new("policy_number", "Policy number of the customer", FieldType::Text),
        FieldDescriptor::new("pre_existing_damages", "Pre-existing damages", FieldType::Text),
        FieldDescriptor::new("witnesses", "Witnesses of the incident", FieldType::Text),
    ]
}

fn policyholder_fields() -> [FieldDescriptor; 3] {
    [
        FieldDescriptor::new(
            "policyholder_email",
            "Email of the customer",
            FieldType::Email,
        ),
        FieldDescriptor::new(
            "policyholder_name",
            "First and last name of the customer",
            FieldType::Text,
        ),
        FieldDescriptor::new(
            "policyholder_phone",
            "Phone number of the customer",
            FieldType::PhoneNumber,
        ),
    ]
}

fn default_task() -> String {
    DEFAULT_TASK.to_string()
}

/// How the assistant opens a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowInitiateConfig {
    /// Human agent to transfer to
    pub agent_phone_number: PhoneNumber,
    /// Company the assistant speaks for
    pub bot_company: String,
    /// Assistant name
    pub bot_name: String,
    /// Claim fields to collect
    #[serde(default = "default_claim_fields")]
    pub claim: Vec<FieldDescriptor>,
    /// Conversation languages
    #[serde(default)]
    pub lang: LanguageConfig,
    /// Assistant task prompt
    #[serde(default = "default_task")]
    pub task: String,
}

impl WorkflowInitiateConfig {
    /// Configuration with the default claim fields, languages and task
    pub fn new<C, N>(agent_phone_number: PhoneNumber, bot_company: C, bot_name: N) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            agent_phone_number,
            bot_company: bot_company.into(),
            bot_name: bot_name.into(),
            claim: default_claim_fields(),
            lang: LanguageConfig::default(),
            task: default_task(),
        }
    }

    /// Claim record schema: configured fields followed by the policyholder fields
    pub fn claim_schema(&self) -> Result<RecordSchema> {
        let fields: Vec<FieldDescriptor> = self
            .claim
            .iter()
            .cloned()
            .chain(policyholder_fields())
            .collect();
        synthesize(CLAIM_SCHEMA_NAME, &fields)
    }
}

fn default_conversation_timeout_hour() -> u64 {
    WORKFLOW_CONVERSATION_TIMEOUT_HOURS
}

fn default_intelligence_hard_timeout_sec() -> u64 {
    WORKFLOW_INTELLIGENCE_HARD_TIMEOUT_SECS
}

fn default_intelligence_soft_timeout_sec() -> u64 {
    WORKFLOW_INTELLIGENCE_SOFT_TIMEOUT_SECS
}

fn default_max_voice_recognition_retry() -> u32 {
    WORKFLOW_MAX_VOICE_RECOGNITION_RETRY
}

fn default_use_slow_llm_for_chat() -> bool {
    true
}

fn default_voice_timeout_after_silence_sec() -> u64 {
    WORKFLOW_VOICE_TIMEOUT_AFTER_SILENCE_SECS
}

/// Conversation workflow section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Idle time after which a conversation is closed, in hours
    #[serde(default = "default_conversation_timeout_hour")]
    pub conversation_timeout_hour: u64,
    /// Conversation opening
    pub initiate: WorkflowInitiateConfig,
    /// Intelligence call abort threshold, in seconds
    #[serde(default = "default_intelligence_hard_timeout_sec")]
    pub intelligence_hard_timeout_sec: u64,
    /// Intelligence call "still working" threshold, in seconds
    #[serde(default = "default_intelligence_soft_timeout_sec")]
    pub intelligence_soft_timeout_sec: u64,
    /// Voice recognition attempts
    #[serde(default = "default_max_voice_recognition_retry")]
    pub max_voice_recognition_retry: u32,
    /// Prefer the slower, more capable model for chat
    #[serde(default = "default_use_slow_llm_for_chat")]
    pub use_slow_llm_for_chat_as_default: bool,
    /// Silence ending the caller's turn, in seconds
    #[serde(default = "default_voice_timeout_after_silence_sec")]
    pub voice_timeout_after_silence_sec: u64,
}

impl WorkflowConfig {
    /// Workflow with default timings
    pub fn new(initiate: WorkflowInitiateConfig) -> Self {
        Self {
            conversation_timeout_hour: default_conversation_timeout_hour(),
            initiate,
            intelligence_hard_timeout_sec: default_intelligence_hard_timeout_sec(),
            intelligence_soft_timeout_sec: default_intelligence_soft_timeout_sec(),
            max_voice_recognition_retry: default_max_voice_recognition_retry(),
            use_slow_llm_for_chat_as_default: default_use_slow_llm_for_chat(),
            voice_timeout_after_silence_sec: default_voice_timeout_after_silence_sec(),
        }
    }

    pub fn conversation_timeout(&self) -> Duration {
        Duration::from_secs(self.conversation_timeout_hour.saturating_mul(3600))
    }

    pub fn intelligence_hard_timeout(&self) -> Duration {
        Duration::from_secs(self.intelligence_hard_timeout_sec)
    }

    pub fn intelligence_soft_timeout(&self) -> Duration {
        Duration::from_secs(self.intelligence_soft_timeout_sec)
    }

    pub fn voice_timeout_after_silence(&self) -> Duration {
        Duration::from_secs(self.voice_timeout_after_silence_sec)
    }
}
