//! Composable payload schemas for Rust.
//!
//! Describe the shape and access rules of a value once, as a [`Schema`], and
//! derive four pure behaviors from that single description: parsing an
//! external representation into an internal one, validating a proposed value
//! against the rules and the value it would replace, serializing back out,
//! and rendering a JSON Schema Draft 7 documentation snapshot.
//!
//! # Core Components
//!
//! - [`Schema`] - the central entity; wraps an optional [`Type`] and layers
//!   the read-only/create-only/write-only semantics around it
//! - [`Type`] - the capability contract concrete types implement, with
//!   opt-in extensions ([`DocType`], [`LesserType`], [`ElementType`],
//!   [`PropertyType`])
//! - [`Value`], [`Candidate`], [`Serialized`] - the payload model and the
//!   `SkipReadOnly`/`Omit` signaling protocol
//! - [`DateTimeType`] - the built-in reference type for date-time payloads
//!
//! # Quick Start
//!
//! ```rust
//! use payload_schema::{DateTimeType, Schema, Value};
//!
//! # fn main() -> Result<(), payload_schema::SchemaError> {
//! let schema = Schema {
//!     title: Some("Last update".to_owned()),
//!     ..Schema::with_type(DateTimeType::default())
//! };
//!
//! // External string to internal timestamp.
//! let parsed = schema.parser().parse(Value::from("2019-01-02T13:37:00Z"))?;
//!
//! // Validate a proposed value against the stored one.
//! let accepted = schema.validator().validate(parsed.clone(), Some(&parsed))?;
//!
//! // And back out to a string.
//! let exported = schema.serializer().serialize(accepted)?;
//! assert!(exported.into_value().unwrap().as_str().is_some());
//! # Ok(())
//! # }
//! ```
//!
//! Schemas are immutable after construction; everything a derivation returns
//! is `Send + Sync` and safe to share across threads.

pub mod capability;
pub mod error;
pub mod schema;
pub mod types;
pub mod value;

// Re-export the working surface at the crate root.
pub use capability::{DocType, ElementType, Lesser, LesserType, Parser, PropertyType, Serializer, Type, Validator};
pub use error::{SchemaError, SchemaResult};
pub use schema::{ArrayDoc, Doc, DocValueType, Format, NumberDoc, ObjectDoc, Schema, SchemaDoc, StringDoc};
pub use types::DateTimeType;
pub use value::{Array, Candidate, Object, Serialized, Value};
