//! The schema entity and the capability derivations composed from it.

use crate::capability::{Parser, Serializer, Type, Validator};
use crate::error::SchemaError;
use crate::schema::doc::{Doc, SchemaDoc};
use crate::value::{Candidate, Value};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// A payload schema: an optional [`Type`] plus cross-cutting access rules.
///
/// From one schema value, [`parser`](Schema::parser),
/// [`validator`](Schema::validator), [`serializer`](Schema::serializer) and
/// [`doc`](Schema::doc) derive the operational capabilities by layering the
/// flag semantics around whatever the wrapped type provides. A schema with
/// no type passes values through untouched and accepts every candidate.
///
/// Schemas are built once - typically as static configuration - and never
/// mutated afterwards; every derivation is a pure function of the current
/// field values and safe to call from any number of threads.
///
/// ```rust
/// use payload_schema::{DateTimeType, Schema, Value};
///
/// # fn main() -> Result<(), payload_schema::SchemaError> {
/// let created = Schema {
///     title: Some("Created".to_owned()),
///     read_only: true,
///     ..Schema::with_type(DateTimeType::default())
/// };
///
/// let stamp = created.parser().parse(Value::from("2019-01-02T13:37:00Z"))?;
/// let kept = created.validator().validate(stamp.clone(), Some(&stamp))?;
/// assert_eq!(kept, stamp);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Schema {
    /// The type-specific part. `None` means identity parse/serialize and
    /// accept-everything validation.
    pub value_type: Option<Arc<dyn Type>>,
    /// Display title, surfaced in documentation only.
    pub title: Option<String>,
    /// Display description, surfaced in documentation only.
    pub description: Option<String>,
    /// Reject any candidate that differs from the value it would replace.
    pub read_only: bool,
    /// Same guard as `read_only`; the flags differ only in when callers are
    /// expected to run validation, which is outside this engine.
    pub create_only: bool,
    /// Serialize every value to the omit marker.
    pub write_only: bool,
    /// Default internal value, surfaced to callers and documentation; the
    /// engine itself never applies it.
    pub default: Option<Value>,
}

impl Schema {
    /// A schema wrapping `value_type` with no flags set.
    pub fn with_type(value_type: impl Type + 'static) -> Self {
        Schema {
            value_type: Some(Arc::new(value_type)),
            ..Schema::default()
        }
    }

    /// The parser for this schema.
    ///
    /// Parsing is entirely the wrapped type's concern; the flags add
    /// nothing here.
    pub fn parser(&self) -> Parser {
        self.value_type
            .as_ref()
            .map(|value_type| value_type.parser())
            .unwrap_or_default()
    }

    /// The validator for this schema.
    ///
    /// Starts from the wrapped type's validator and, when `read_only` or
    /// `create_only` is set, wraps it with a guard applied before
    /// delegation: a [`Candidate::SkipReadOnly`] envelope bypasses the guard
    /// and validates the wrapped value, while any other candidate must equal
    /// `original` or the call fails with [`SchemaError::CreateOnly`]. An
    /// absent original compares like [`Value::Null`].
    pub fn validator(&self) -> Validator {
        let delegate = self
            .value_type
            .as_ref()
            .map(|value_type| value_type.validator())
            .unwrap_or_default();

        if !(self.read_only || self.create_only) {
            return delegate;
        }

        Validator::new(move |input, original| {
            let effective = match input {
                Candidate::SkipReadOnly(value) => value,
                Candidate::Value(value) => {
                    if *original.unwrap_or(&Value::Null) != value {
                        debug!("rejecting candidate that differs from the guarded original");
                        return Err(SchemaError::CreateOnly);
                    }
                    value
                }
            };
            delegate.validate(effective, original)
        })
    }

    /// The serializer for this schema.
    ///
    /// A `write_only` schema omits every value regardless of the wrapped
    /// type; otherwise serialization is the type's concern.
    pub fn serializer(&self) -> Serializer {
        if self.write_only {
            return Serializer::omit();
        }
        self.value_type
            .as_ref()
            .map(|value_type| value_type.serializer())
            .unwrap_or_default()
    }

    /// The documentation snapshot for this schema.
    ///
    /// Delegates to the wrapped type's [`DocType`](crate::DocType)
    /// capability when present, handing it the schema so the generic fields
    /// merge in; otherwise falls back to the schema's own fields.
    pub fn doc(&self) -> Doc {
        match self.value_type.as_ref().and_then(|t| t.as_doc_type()) {
            Some(doc_type) => doc_type.doc(self),
            None => Doc::Schema(SchemaDoc::from(self)),
        }
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("value_type", &self.value_type.as_ref().map(|_| ".."))
            .field("title", &self.title)
            .field("description", &self.description)
            .field("read_only", &self.read_only)
            .field("create_only", &self.create_only)
            .field("write_only", &self.write_only)
            .field("default", &self.default)
            .finish()
    }
}
