//! # Switchboard Domain
//!
//! Core types shared by every layer: the error type, the capability ports
//! backends implement, and the value objects configuration is made of.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error enum and `Result` alias |
//! | [`ports`] | `CacheProvider` and `SmsProvider` capability traits |
//! | [`value_objects`] | Phone numbers, secrets, field descriptors, languages |
//! | [`constants`] | Shared defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
