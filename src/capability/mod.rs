//! The capability contract: function values and the `Type` aggregate.
//!
//! Schemas do not call into concrete types directly; they go through four
//! single-purpose capability values - [`Parser`], [`Validator`],
//! [`Serializer`] and [`Lesser`] - each a cheaply cloneable, thread-safe
//! wrapper around an optional function. A [`Type`] bundles the first three,
//! and may opt into the extension contracts ([`DocType`], [`LesserType`],
//! [`ElementType`], [`PropertyType`]) through structural capability
//! accessors.
//!
//! # Unset capabilities
//!
//! An unset [`Parser`], [`Validator`] or [`Serializer`] is a documented
//! identity pass-through. An unset [`Lesser`] is deliberately different: it
//! panics when invoked, because "compare using no comparator" has no
//! meaningful `false` default. The two conventions are kept apart on
//! purpose; do not unify them.

pub mod contract;
pub mod functions;


pub use contract::{DocType, ElementType, LesserType, PropertyType, Type};
pub use functions::{Lesser, Parser, Serializer, Validator};
