//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the configuration layer and the
//! backends it selects. High-level modules define the interfaces; providers
//! implement them.

/// External service provider ports
pub mod providers;

pub use providers::{CacheProvider, SmsProvider};
