//! Field descriptors for data-driven record schemas
//!
//! A [`FieldDescriptor`] names one piece of data to extract from a
//! conversation, describes it for the consumer, and tags it with a logical
//! type. Descriptors are configuration data; the type tag stays as raw text
//! until schema synthesis resolves it into a [`FieldType`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical field types supported by schema synthesis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Any string
    Text,
    /// Email address
    Email,
    /// E.164-normalisable phone number
    PhoneNumber,
    /// ISO-8601 compatible date-time
    #[serde(rename = "datetime")]
    DateTime,
}

impl FieldType {
    /// All supported types, in declaration order
    pub const ALL: [FieldType; 4] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::PhoneNumber,
        FieldType::DateTime,
    ];

    /// Configuration tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::DateTime => "datetime",
        }
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field_type| field_type.as_str() == s)
            .ok_or_else(|| Error::unsupported_type(s))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extractable data field: name, human description, logical type tag
///
/// ```toml
/// [[workflow.initiate.claim]]
/// name = "incident_location"
/// description = "Location of the incident"
/// type = "text"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Unique identifier within one descriptor list, used as the schema key
    pub name: String,
    /// Guidance surfaced to the schema consumer
    pub description: String,
    /// Logical type tag, resolved at synthesis time
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldDescriptor {
    /// Create a descriptor with a known type
    pub fn new<N, D>(name: N, description: D, field_type: FieldType) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            field_type: field_type.as_str().to_string(),
        }
    }

    /// Create a descriptor from a raw, possibly unsupported, type tag
    pub fn with_tag<N, D, T>(name: N, description: D, type_tag: T) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            field_type: type_tag.into(),
        }
    }

    /// Resolve the type tag
    pub fn resolve_type(&self) -> Result<FieldType> {
        self.field_type.parse()
    }
}
