//! Backend construction
//!
//! | Item | Description |
//! |------|-------------|
//! | [`SingletonFactory`] | Keyed memo table, one instance per distinct configuration |
//! | [`VariantConfig`] | Contract between a variant configuration and its backend |

pub mod singleton;
pub mod variant;

pub use singleton::SingletonFactory;
pub use variant::VariantConfig;
