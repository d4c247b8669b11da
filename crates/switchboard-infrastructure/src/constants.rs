//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `switchboard_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "switchboard.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "switchboard";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SWITCHBOARD";

/// Separator between nested keys in environment variable names
///
/// Doubled so that section names containing `_` (e.g. `communication_services`)
/// survive the split.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV_VAR: &str = "SWITCHBOARD_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "switchboard";

// ============================================================================
// WORKFLOW CONSTANTS
// ============================================================================

/// Conversation timeout, in hours (3 days)
pub const WORKFLOW_CONVERSATION_TIMEOUT_HOURS: u64 = 72;

/// Hard timeout on an intelligence call, in seconds
pub const WORKFLOW_INTELLIGENCE_HARD_TIMEOUT_SECS: u64 = 180;

/// Soft timeout on an intelligence call, in seconds
pub const WORKFLOW_INTELLIGENCE_SOFT_TIMEOUT_SECS: u64 = 30;

/// Voice recognition attempts before giving up
pub const WORKFLOW_MAX_VOICE_RECOGNITION_RETRY: u32 = 3;

/// Silence after which the caller's turn ends, in seconds
pub const WORKFLOW_VOICE_TIMEOUT_AFTER_SILENCE_SECS: u64 = 2;

/// Name of the synthesized claim record schema
pub const CLAIM_SCHEMA_NAME: &str = "ClaimEntryModel";

// ============================================================================
// SCHEMA CONSTANTS
// ============================================================================

/// JSON Schema dialect emitted by `RecordSchema::to_json_schema`
pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";
