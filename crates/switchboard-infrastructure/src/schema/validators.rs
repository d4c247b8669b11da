//! Per-type value parsing

use super::record::FieldValue;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;
use switchboard_domain::value_objects::{FieldType, PhoneNumber};
use validator::ValidateEmail;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse `value` as `field_type`; the error is a human-readable message
pub(crate) fn parse_value(field_type: FieldType, value: &Value) -> Result<FieldValue, String> {
    match field_type {
        FieldType::Text => expect_string(value).map(|s| FieldValue::Text(s.to_string())),
        FieldType::Email => {
            let email = expect_string(value)?.to_string();
            if email.validate_email() {
                Ok(FieldValue::Email(email))
            } else {
                Err(format!("'{email}' is not a valid email address"))
            }
        }
        FieldType::PhoneNumber => {
            let raw = expect_string(value)?;
            PhoneNumber::parse(raw)
                .map(FieldValue::PhoneNumber)
                .map_err(|_| format!("'{raw}' is not a valid phone number"))
        }
        FieldType::DateTime => parse_datetime(value).map(FieldValue::DateTime),
    }
}

fn expect_string(value: &Value) -> Result<&str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("expected a string, got {}", kind(value)))
}

/// RFC 3339, naive ISO 8601 (UTC assumed), plain date, or Unix seconds
fn parse_datetime(value: &Value) -> Result<DateTime<FixedOffset>, String> {
    match value {
        Value::String(raw) => parse_datetime_str(raw.trim())
            .ok_or_else(|| format!("'{raw}' is not a valid date-time")),
        Value::Number(number) => number
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| format!("{number} is not a valid Unix timestamp")),
        other => Err(format!(
            "expected a date-time string or Unix timestamp, got {}",
            kind(other)
        )),
    }
}

fn parse_datetime_str(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().fixed_offset())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
