//! External Provider Ports
//!
//! Capability contracts that concrete backends implement.
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Key/value cache with optional TTL |
//! | SmsProvider | Text-message delivery |

/// Cache provider port
pub mod cache;
/// SMS provider port
pub mod sms;

pub use cache::CacheProvider;
pub use sms::SmsProvider;
