//! Date-time payloads: strings on the wire, native timestamps in process.

use crate::capability::{DocType, Lesser, LesserType, Parser, Serializer, Type, Validator};
use crate::error::SchemaError;
use crate::schema::{Doc, Format, Schema, StringDoc};
use crate::value::{Serialized, Value};
use chrono::{DateTime, DurationRound, TimeDelta};
use log::{debug, trace};

/// RFC 3339 with optional fractional seconds, as a chrono format string.
pub const LAYOUT_RFC3339: &str = "%+";

/// RFC 1123 with a numeric zone, e.g. `Wed, 02 Jan 2019 13:37:00 +0000`.
pub const LAYOUT_RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// RFC 822 with a numeric zone, e.g. `02 Jan 19 13:37 +0000`.
pub const LAYOUT_RFC822Z: &str = "%d %b %y %H:%M %z";

/// Layouts tried, in order, when none are configured.
pub const DEFAULT_PARSE_LAYOUTS: [&str; 3] = [LAYOUT_RFC3339, LAYOUT_RFC1123Z, LAYOUT_RFC822Z];

/// Parses date-time strings to [`Value::DateTime`] and back.
///
/// All fields default to "unset", which selects the built-in behavior; a
/// zero-configured `DateTimeType::default()` is fully usable.
///
/// ```rust
/// use payload_schema::{DateTimeType, Schema, Value};
///
/// # fn main() -> Result<(), payload_schema::SchemaError> {
/// let schema = Schema::with_type(DateTimeType::default());
/// let parsed = schema.parser().parse(Value::from("2019-01-02T13:37:00Z"))?;
/// assert!(parsed.as_datetime().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateTimeType {
    /// chrono format strings to try for parsing, in order. Empty selects
    /// [`DEFAULT_PARSE_LAYOUTS`].
    pub parse_layouts: Vec<String>,

    /// chrono format string used for serialization. `None` selects
    /// [`LAYOUT_RFC3339`].
    pub serialize_layout: Option<String>,

    /// When set, parsed timestamps are truncated to this granularity.
    pub truncate: Option<TimeDelta>,
}

impl Type for DateTimeType {
    /// Accepts strings only; tries each configured layout in order and
    /// returns the first successful parse. Individual layout errors are
    /// discarded: the caller sees one uniform
    /// [`SchemaError::InvalidFormat`].
    fn parser(&self) -> Parser {
        let layouts: Vec<String> = if self.parse_layouts.is_empty() {
            DEFAULT_PARSE_LAYOUTS.iter().map(|l| (*l).to_owned()).collect()
        } else {
            self.parse_layouts.clone()
        };
        let truncate = self.truncate;

        Parser::new(move |input| {
            let Value::String(raw) = input else {
                return Err(SchemaError::NotString);
            };

            for layout in &layouts {
                if let Ok(ts) = DateTime::parse_from_str(&raw, layout) {
                    trace!("parsed {raw:?} with layout {layout:?}");
                    let ts = match truncate {
                        Some(granularity) => ts.duration_trunc(granularity).unwrap_or(ts),
                        None => ts,
                    };
                    return Ok(Value::DateTime(ts));
                }
            }

            debug!("no date-time layout matched {raw:?}");
            Err(SchemaError::InvalidFormat)
        })
    }

    /// Requires an already-parsed [`Value::DateTime`] and passes it through
    /// unchanged; there are no semantic constraints on timestamps.
    fn validator(&self) -> Validator {
        Validator::new(|input, _original| match input.into_value() {
            Value::DateTime(ts) => Ok(Value::DateTime(ts)),
            _ => Err(SchemaError::NotDateTime),
        })
    }

    /// Formats with the configured serialize layout.
    fn serializer(&self) -> Serializer {
        let layout = self
            .serialize_layout
            .clone()
            .unwrap_or_else(|| LAYOUT_RFC3339.to_owned());

        Serializer::new(move |input| {
            let Value::DateTime(ts) = input else {
                return Err(SchemaError::NotDateTime);
            };
            Ok(Serialized::Value(Value::String(
                ts.format(&layout).to_string(),
            )))
        })
    }

    fn as_doc_type(&self) -> Option<&dyn DocType> {
        Some(self)
    }

    fn as_lesser_type(&self) -> Option<&dyn LesserType> {
        Some(self)
    }
}

impl DocType for DateTimeType {
    fn doc(&self, schema: &Schema) -> Doc {
        Doc::String(StringDoc {
            format: Some(Format::DateTime),
            ..StringDoc::new(schema)
        })
    }
}

impl LesserType for DateTimeType {
    /// Strict chronological "before". Unlike the unset comparator, this one
    /// tolerates operand type mismatch by answering `false`.
    fn lesser(&self) -> Lesser {
        Lesser::new(|a, b| match (a, b) {
            (Value::DateTime(a), Value::DateTime(b)) => a < b,
            _ => false,
        })
    }
}
