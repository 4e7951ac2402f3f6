//! Schema composition: one description, four derived behaviors.
//!
//! A [`Schema`] wraps an optional [`Type`](crate::Type) together with the
//! cross-cutting access flags (read-only, create-only, write-only) and
//! display metadata. The flags are implemented once, here, and layered
//! around whatever the wrapped type provides - concrete types never
//! re-implement them.
//!
//! # Key Types
//!
//! - [`Schema`] - the central entity; derives parser, validator, serializer
//!   and documentation
//! - [`Doc`] - the closed set of JSON Schema Draft 7 documentation records
//! - [`Format`] - predefined `format` annotations for string documents

pub mod core;
pub mod doc;

#[cfg(test)]
mod tests;

pub use core::Schema;
pub use doc::{ArrayDoc, Doc, DocValueType, Format, NumberDoc, ObjectDoc, SchemaDoc, StringDoc};
