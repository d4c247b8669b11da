//! Configuration
//!
//! Typed configuration sections, mode selection between backends, and the
//! figment-based loader.

pub mod ambient;
pub mod loader;
pub mod mode;
pub mod types;

pub use loader::ConfigLoader;
pub use mode::{ModeSelector, require_slot};
pub use types::*;
