//! # Infrastructure Layer
//!
//! Configuration-driven backend selection and data-driven record schemas.
//!
//! ## Module Categories
//!
//! ### Configuration & Construction
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Typed sections, mode selectors, figment loader |
//! | [`di`] | Singleton factory and variant configuration contract |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Data
//! | Module | Description |
//! |--------|-------------|
//! | [`schema`] | Record schemas synthesized from field descriptors |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ## Usage
//!
//! ```ignore
//! use switchboard_infrastructure::config::{ConfigLoader, ModeSelector};
//!
//! let config = ConfigLoader::new().load()?;
//! let cache = config.cache.instance().await?;
//! let sms = config.sms.instance().await?;
//! let claim = config.workflow.initiate.claim_schema()?;
//! ```

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod schema;

pub use error_ext::ErrorContext;
pub use switchboard_domain::error::{Error, Result};
