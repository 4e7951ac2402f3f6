//! The `Type` aggregate and its opt-in extension contracts.

use crate::capability::functions::{Lesser, Parser, Serializer, Validator};
use crate::schema::{Doc, Schema};

/// The type-specific part of a schema.
///
/// A `Type` supplies the three operational capabilities; the wrapping
/// [`Schema`] layers the cross-cutting flag semantics around them. Extension
/// capabilities are not part of the aggregate - a concrete type opts in by
/// implementing the matching extension trait and overriding the
/// corresponding `as_*` accessor to return itself:
///
/// ```rust
/// use payload_schema::{Doc, DocType, Parser, Schema, SchemaDoc, Serializer, Type, Validator};
///
/// struct Opaque;
///
/// impl Type for Opaque {
///     fn parser(&self) -> Parser {
///         Parser::identity()
///     }
///     fn validator(&self) -> Validator {
///         Validator::identity()
///     }
///     fn serializer(&self) -> Serializer {
///         Serializer::identity()
///     }
///     fn as_doc_type(&self) -> Option<&dyn DocType> {
///         Some(self)
///     }
/// }
///
/// impl DocType for Opaque {
///     fn doc(&self, schema: &Schema) -> Doc {
///         Doc::Schema(SchemaDoc::from(schema))
///     }
/// }
/// ```
///
/// The default accessors all answer `None`, so a minimal type implements
/// exactly three methods.
pub trait Type: Send + Sync {
    /// The parser for this type's external representation.
    fn parser(&self) -> Parser;

    /// The validator for this type's internal representation.
    fn validator(&self) -> Validator;

    /// The serializer for this type's internal representation.
    fn serializer(&self) -> Serializer;

    /// Documentation capability, when implemented.
    fn as_doc_type(&self) -> Option<&dyn DocType> {
        None
    }

    /// Ordering capability, when implemented.
    fn as_lesser_type(&self) -> Option<&dyn LesserType> {
        None
    }

    /// Array element lookup capability, when implemented.
    fn as_element_type(&self) -> Option<&dyn ElementType> {
        None
    }

    /// Object property lookup capability, when implemented.
    fn as_property_type(&self) -> Option<&dyn PropertyType> {
        None
    }
}

/// A type that can document itself as JSON Schema Draft 7.
pub trait DocType: Type {
    /// Produces the documentation record, merging the generic fields of
    /// `schema` with the type-specific ones.
    fn doc(&self, schema: &Schema) -> Doc;
}

/// A type whose internal values have a strict chronological or numeric
/// order.
pub trait LesserType: Type {
    /// The comparator for this type's internal representation.
    fn lesser(&self) -> Lesser;
}

/// A type that may accept an array payload.
///
/// Container types composing this engine call [`element_schema`] to find the
/// schema governing each index; `None` means the index is not allowed.
///
/// [`element_schema`]: ElementType::element_schema
pub trait ElementType: Type {
    /// The schema for the element at `index`, if such an element is allowed.
    fn element_schema(&self, index: usize) -> Option<&Schema>;
}

/// A type that may accept an object payload.
///
/// Container types composing this engine call [`property_schema`] to find
/// the schema governing each property; `None` means the property is not
/// allowed.
///
/// [`property_schema`]: PropertyType::property_schema
pub trait PropertyType: Type {
    /// The schema for the named property, if such a property is allowed.
    fn property_schema(&self, name: &str) -> Option<&Schema>;
}
