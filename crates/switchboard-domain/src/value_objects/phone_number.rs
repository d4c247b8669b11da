//! E.164 phone numbers
//!
//! Phone numbers enter the system from configuration files and from
//! loosely-shaped extraction output. Both paths go through [`PhoneNumber::parse`],
//! which normalises separators away and stores the canonical `+<digits>` form.

use crate::error::{Error, Result};
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Canonical E.164 grammar: `+`, country code without leading zero, 7 to 15 digits total
static E164: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").expect("Invalid regex"));

/// Phone number normalised to E.164
///
/// # Example
///
/// ```
/// use switchboard_domain::value_objects::PhoneNumber;
///
/// let number = PhoneNumber::parse("+33 (6) 12-34-56-78").unwrap();
/// assert_eq!(number.as_str(), "+33612345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and normalise a phone number
    ///
    /// Accepts spaces, dashes, dots and parentheses as separators and the
    /// `00` international prefix in place of `+`.
    pub fn parse(input: &str) -> Result<Self> {
        let compact: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')' | '\t'))
            .collect();

        let normalised = match compact.strip_prefix("00") {
            Some(rest) => format!("+{rest}"),
            None => compact,
        };

        if E164.is_match(&normalised) {
            Ok(Self(normalised))
        } else {
            Err(Error::invalid_argument(format!(
                "'{input}' is not a valid E.164 phone number"
            )))
        }
    }

    /// E.164 representation, including the leading `+`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Country calling code digits are not split out; this returns the digits after `+`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl FromStr for PhoneNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct PhoneNumberVisitor;

impl Visitor<'_> for PhoneNumberVisitor {
    type Value = PhoneNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an E.164 phone number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<PhoneNumber, E> {
        PhoneNumber::parse(value).map_err(E::custom)
    }

    // Environment providers read `+33611111111` as the integer 33611111111
    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<PhoneNumber, E> {
        PhoneNumber::parse(&format!("+{value}")).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<PhoneNumber, E> {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(PhoneNumberVisitor)
    }
}
