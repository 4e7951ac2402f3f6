//! Payload value model shared by every schema operation.
//!
//! A single [`Value`] enum serves as both the external representation (the
//! loosely-typed JSON shapes a decoder hands over) and the internal one (the
//! same shapes plus strongly-typed variants a parser may introduce, currently
//! [`Value::DateTime`]). Keeping both sides in one type is what makes the
//! "unset capability is identity" convention literal: a pass-through really
//! does return its input unchanged.
//!
//! The module also defines the two signaling wrappers of the validation and
//! serialization protocols:
//!
//! - [`Candidate`] - validator input, carrying the `SkipReadOnly` envelope
//! - [`Serialized`] - serializer output, carrying the `Omit` marker

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Serialize, Serializer};
use serde_json::Number;
use std::collections::BTreeMap;

/// Payloads shaped like JSON objects.
pub type Object = BTreeMap<String, Value>;

/// Payloads shaped like JSON arrays.
pub type Array = Vec<Value>;

/// A payload value, external or internal.
///
/// The `Null` through `Object` variants cover everything a generic JSON
/// decoder produces; [`Value::DateTime`] only appears after parsing through a
/// date-time schema. Equality is structural, and date-times compare by
/// instant regardless of their original UTC offset - this is the equality the
/// ReadOnly/CreateOnly guard relies on.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null. Note that null is a value: serializing it exports `null`,
    /// it does not omit the field.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, kept in its arbitrary-precision wire form.
    Number(Number),
    /// JSON string.
    String(String),
    /// JSON array.
    Array(Array),
    /// JSON object.
    Object(Object),
    /// A parsed native date-time with its original UTC offset.
    DateTime(DateTime<FixedOffset>),
}

impl Value {
    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrows the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the parsed date-time, if this is a date-time.
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Value::DateTime(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Borrows the object content, if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Borrows the array content, if this is an array.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON representation and map to `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value.fixed_offset())
    }
}

impl From<serde_json::Value> for Value {
    /// Bridges an externally decoded JSON document into the payload model.
    /// The conversion is lossless; object key order is normalized.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    /// Renders the value as JSON, with date-times in RFC 3339. Used when a
    /// documentation record carries a `default` value.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(map) => map.serialize(serializer),
            Value::DateTime(ts) => ts.serialize(serializer),
        }
    }
}

/// Input to a [`Validator`](crate::Validator).
///
/// A candidate is either a regular value, subject to whatever guards the
/// schema layers on, or a `SkipReadOnly` envelope asking for the
/// ReadOnly/CreateOnly check to be bypassed for this one call. The envelope
/// is a call-site-only escape hatch: the engine unwraps it before delegating,
/// and it never appears in parse or serialize output.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// A regular candidate value.
    Value(Value),
    /// Validate the wrapped value, bypassing ReadOnly/CreateOnly enforcement.
    SkipReadOnly(Value),
}

impl Candidate {
    /// Consumes the candidate, dropping the envelope if present.
    pub fn into_value(self) -> Value {
        match self {
            Candidate::Value(value) | Candidate::SkipReadOnly(value) => value,
        }
    }

    /// Borrows the carried value, envelope or not.
    pub fn value(&self) -> &Value {
        match self {
            Candidate::Value(value) | Candidate::SkipReadOnly(value) => value,
        }
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        Candidate::Value(value)
    }
}

/// Output of a [`Serializer`](crate::Serializer).
///
/// `Omit` means "exclude this field from the serialized document". It is
/// distinct from serializing `Value::Null`, which exports an explicit null.
/// Only the top level of a schema tree interprets the marker; containers
/// composing child schemas decide what nested omission means.
#[derive(Debug, Clone, PartialEq)]
pub enum Serialized {
    /// An external value to export.
    Value(Value),
    /// The field must not appear in the output.
    Omit,
}

impl Serialized {
    /// Returns true if the field should be excluded from the output.
    pub fn is_omit(&self) -> bool {
        matches!(self, Serialized::Omit)
    }

    /// Extracts the exported value, or `None` when omitted.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Serialized::Value(value) => Some(value),
            Serialized::Omit => None,
        }
    }
}

impl From<Value> for Serialized {
    fn from(value: Value) -> Self {
        Serialized::Value(value)
    }
}
