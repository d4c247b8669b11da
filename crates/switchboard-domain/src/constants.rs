//! Domain layer constants
//!
//! Defaults shared by configuration types and providers.

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default number of entries held by the in-memory cache
pub const MEMORY_CACHE_DEFAULT_MAX_SIZE: u64 = 100;

/// Smallest accepted in-memory cache bound
pub const MEMORY_CACHE_MIN_SIZE: u64 = 10;

/// Default Redis port
pub const REDIS_DEFAULT_PORT: u16 = 6379;

/// Default Redis database index
pub const REDIS_DEFAULT_DATABASE: u32 = 0;

// ============================================================================
// LANGUAGE CONSTANTS
// ============================================================================

/// Default conversation language
pub const DEFAULT_LANGUAGE_SHORT_CODE: &str = "fr-FR";
