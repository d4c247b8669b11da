//! Value Objects
//!
//! Immutable, validated values shared by configuration, providers and
//! schema synthesis.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`PhoneNumber`] | E.164-normalised phone number |
//! | [`Secret`] | Credential that never prints its content |
//! | [`FieldDescriptor`] | Name, description and type tag of an extractable field |
//! | [`FieldType`] | Closed set of logical field types |
//! | [`LanguageEntry`] | Supported locale with aliases and voice |

/// Field descriptors and logical types
pub mod field;
/// Language catalog entries
pub mod language;
/// E.164 phone numbers
pub mod phone_number;
/// Redacted secrets
pub mod secret;

pub use field::{FieldDescriptor, FieldType};
pub use language::LanguageEntry;
pub use phone_number::PhoneNumber;
pub use secret::Secret;
