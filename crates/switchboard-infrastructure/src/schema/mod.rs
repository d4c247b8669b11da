//! Dynamic record schemas
//!
//! | Item | Description |
//! |------|-------------|
//! | [`synthesize`] | Build a [`RecordSchema`] from field descriptors |
//! | [`RecordSchema`] | Validator and JSON Schema for one record shape |
//! | [`Record`] | Typed values of a validated object |

pub mod record;
pub mod synthesizer;
mod validators;

pub use record::{FieldError, FieldValue, Record, ValidatedRecord};
pub use synthesizer::{RecordSchema, SchemaField, synthesize};
