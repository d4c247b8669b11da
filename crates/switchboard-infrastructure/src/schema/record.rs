//! Validated records
//!
//! A [`Record`] is the outcome of validating one JSON object against a
//! `RecordSchema`: every declared field, in declaration order, either holds a
//! typed value or is absent.

use chrono::{DateTime, FixedOffset};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use switchboard_domain::value_objects::PhoneNumber;
use thiserror::Error;

/// Typed value of one field
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// Email address, as given
    Email(String),
    /// Normalised E.164 phone number
    PhoneNumber(PhoneNumber),
    /// Date-time with its offset
    DateTime(DateTime<FixedOffset>),
}

impl FieldValue {
    /// Text content for text and email values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Email(s) => Some(s),
            Self::PhoneNumber(phone) => Some(phone.as_str()),
            Self::DateTime(_) => None,
        }
    }

    /// JSON form: strings, with date-times in RFC 3339
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(s) | Self::Email(s) => Value::String(s.clone()),
            Self::PhoneNumber(phone) => Value::String(phone.as_str().to_string()),
            Self::DateTime(dt) => Value::String(dt.to_rfc3339()),
        }
    }

    /// Date-time content
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

/// Validation failure scoped to one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// What was wrong with the value
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered field values of one validated object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: Vec<(String, Option<FieldValue>)>,
}

impl Record {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: Option<FieldValue>) {
        self.values.push((name, value));
    }

    /// Value of `name`, if the field exists and is present
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Whether `name` holds a value
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the schema declared no field
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// JSON object with `null` for absent fields
    pub fn to_value(&self) -> Value {
        let object: Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| {
                let json = value.as_ref().map_or(Value::Null, FieldValue::to_value);
                (name.clone(), json)
            })
            .collect();
        Value::Object(object)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Result of validating an object: the record plus every field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    /// Parsed values; fields that failed are absent
    pub record: Record,
    /// One entry per failing field
    pub errors: Vec<FieldError>,
}

impl ValidatedRecord {
    /// Whether every present field validated
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The record, or the field errors if any
    pub fn into_result(self) -> std::result::Result<Record, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(self.record)
        } else {
            Err(self.errors)
        }
    }
}
