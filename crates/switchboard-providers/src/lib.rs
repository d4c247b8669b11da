//! # Switchboard - Provider Implementations
//!
//! Concrete backends for the capability ports defined in
//! `switchboard-domain`. The configuration layer in
//! `switchboard-infrastructure` selects and constructs them; nothing here
//! knows about modes or memoization.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//! | SMS | `SmsProvider` | Communication Services, Twilio, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! switchboard-providers = { version = "0.1", default-features = false, features = ["cache-moka", "sms-twilio"] }
//! ```

pub use switchboard_domain::error::{Error, Result};
pub use switchboard_domain::ports::providers::{CacheProvider, SmsProvider};

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
///
/// Implements `CacheProvider` for in-memory and distributed backends.
pub mod cache;

/// SMS provider implementations
///
/// Implements `SmsProvider` for the messaging APIs.
pub mod sms;
