//! Record schema synthesis
//!
//! Turns an ordered list of [`FieldDescriptor`]s into a [`RecordSchema`]:
//! type tags are resolved up front, so an unsupported tag fails here rather
//! than at the first validation. Every synthesized field is optional.

use super::record::{FieldError, Record, ValidatedRecord};
use super::validators::parse_value;
use crate::constants::JSON_SCHEMA_DIALECT;
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use switchboard_domain::error::{Error, Result};
use switchboard_domain::value_objects::{FieldDescriptor, FieldType};
use tracing::debug;

/// One resolved field of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Key in the validated object
    pub name: String,
    /// Guidance for whoever fills the record
    pub description: String,
    /// Resolved logical type
    pub field_type: FieldType,
}

impl SchemaField {
    fn json_schema(&self) -> Value {
        let mut property = json!({
            "type": ["string", "null"],
            "description": self.description,
        });
        match self.field_type {
            FieldType::Text => {}
            FieldType::Email => {
                property["format"] = json!("email");
            }
            FieldType::PhoneNumber => {
                property["format"] = json!("phone");
            }
            FieldType::DateTime => {
                property["type"] = json!(["string", "integer", "null"]);
                property["format"] = json!("date-time");
            }
        }
        property
    }
}

/// Named, ordered set of optional typed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    name: String,
    fields: Vec<SchemaField>,
}

/// Build a schema named `name` from `fields`
///
/// Fails with [`Error::UnsupportedType`] on an unknown type tag and with
/// [`Error::DuplicateField`] when two descriptors share a name.
pub fn synthesize(name: &str, fields: &[FieldDescriptor]) -> Result<RecordSchema> {
    let mut seen = HashSet::with_capacity(fields.len());
    let mut resolved = Vec::with_capacity(fields.len());

    for descriptor in fields {
        let field_type = descriptor.resolve_type()?;
        if !seen.insert(descriptor.name.as_str()) {
            return Err(Error::duplicate_field(&descriptor.name));
        }
        resolved.push(SchemaField {
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            field_type,
        });
    }

    debug!(schema = name, fields = resolved.len(), "Synthesized record schema");
    Ok(RecordSchema {
        name: name.to_string(),
        fields: resolved,
    })
}

impl RecordSchema {
    /// Schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Field named `name`
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Validate an object
    ///
    /// Missing keys and `null` values leave the field absent. Keys the schema
    /// does not declare are dropped. Every failing field is reported.
    pub fn validate(&self, object: &Map<String, Value>) -> ValidatedRecord {
        let mut record = Record::with_capacity(self.fields.len());
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = match object.get(&field.name) {
                None | Some(Value::Null) => None,
                Some(raw) => match parse_value(field.field_type, raw) {
                    Ok(value) => Some(value),
                    Err(message) => {
                        errors.push(FieldError::new(&field.name, message));
                        None
                    }
                },
            };
            record.push(field.name.clone(), value);
        }

        if !errors.is_empty() {
            debug!(schema = %self.name, errors = errors.len(), "Record failed validation");
        }
        ValidatedRecord { record, errors }
    }

    /// Validate an arbitrary JSON value, which must be an object
    pub fn validate_value(&self, value: &Value) -> Result<ValidatedRecord> {
        match value {
            Value::Object(object) => Ok(self.validate(object)),
            _ => Err(Error::invalid_argument(format!(
                "{} expects a JSON object",
                self.name
            ))),
        }
    }

    /// JSON Schema describing accepted objects
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.json_schema()))
            .collect();

        json!({
            "$schema": JSON_SCHEMA_DIALECT,
            "title": self.name,
            "type": "object",
            "properties": properties,
            "additionalProperties": true,
        })
    }
}
