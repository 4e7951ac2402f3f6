//! JSON Schema Draft 7 flavored documentation records.
//!
//! A [`Doc`] is a read-only snapshot describing a schema to external tooling.
//! The record shapes form a closed set - one per JSON payload flavor plus the
//! generic fallback - and every constraint field on them (`minLength`,
//! `multipleOf`, ...) is documentation only: nothing in this crate enforces
//! them. Records serialize with the exact Draft 7 field names; absent
//! options and false flags are omitted.

use crate::schema::core::Schema;
use crate::value::Value;
use serde::Serialize;
use serde_json::Number;
use std::collections::BTreeMap;

/// The `type` discriminator of a documentation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocValueType {
    /// JSON null.
    Null,
    /// JSON object.
    Object,
    /// JSON string.
    String,
    /// JSON number.
    Number,
    /// JSON integer.
    Integer,
    /// JSON array.
    Array,
}

/// Predefined Draft 7 `format` annotations for string-typed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Format {
    /// RFC 3339 date and time.
    #[serde(rename = "date-time")]
    DateTime,
    /// RFC 3339 full-date.
    #[serde(rename = "date")]
    Date,
    /// RFC 3339 full-time.
    #[serde(rename = "time")]
    Time,
    /// RFC 5321 mailbox.
    #[serde(rename = "email")]
    Email,
    /// RFC 6531 internationalized mailbox.
    #[serde(rename = "idn-email")]
    IdnEmail,
    /// RFC 1034 host name.
    #[serde(rename = "hostname")]
    Hostname,
    /// RFC 5890 internationalized host name.
    #[serde(rename = "idn-hostname")]
    IdnHostname,
    /// RFC 3986 URI.
    #[serde(rename = "uri")]
    Uri,
    /// RFC 3986 URI reference.
    #[serde(rename = "uri-reference")]
    UriReference,
    /// RFC 6570 URI template.
    #[serde(rename = "uri-template")]
    UriTemplate,
    /// RFC 3987 IRI.
    #[serde(rename = "iri")]
    Iri,
    /// RFC 3987 IRI reference.
    #[serde(rename = "iri-reference")]
    IriReference,
    /// RFC 6901 JSON pointer.
    #[serde(rename = "json-pointer")]
    JsonPointer,
    /// Relative JSON pointer.
    #[serde(rename = "relative-json-pointer")]
    RelativeJsonPointer,
    /// ECMA 262 regular expression.
    #[serde(rename = "regex")]
    Regex,
}

impl Format {
    /// The annotation exactly as it appears in rendered documentation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::DateTime => "date-time",
            Format::Date => "date",
            Format::Time => "time",
            Format::Email => "email",
            Format::IdnEmail => "idn-email",
            Format::Hostname => "hostname",
            Format::IdnHostname => "idn-hostname",
            Format::Uri => "uri",
            Format::UriReference => "uri-reference",
            Format::UriTemplate => "uri-template",
            Format::Iri => "iri",
            Format::IriReference => "iri-reference",
            Format::JsonPointer => "json-pointer",
            Format::RelativeJsonPointer => "relative-json-pointer",
            Format::Regex => "regex",
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The generic documentation fields every record shares.
///
/// Also serves as the fallback record when a schema's type declines to
/// document itself (or the schema has no type at all). `create_only` is
/// deliberately absent: it never appears in rendered documentation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SchemaDoc {
    /// Default value, rendered as JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Display description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the value is managed by the producing side.
    #[serde(rename = "readOnly", skip_serializing_if = "is_false")]
    pub read_only: bool,
    /// Whether the value is accepted but never exported.
    #[serde(rename = "writeOnly", skip_serializing_if = "is_false")]
    pub write_only: bool,
}

impl From<&Schema> for SchemaDoc {
    fn from(schema: &Schema) -> Self {
        SchemaDoc {
            default: schema.default.clone(),
            title: schema.title.clone(),
            description: schema.description.clone(),
            read_only: schema.read_only,
            write_only: schema.write_only,
        }
    }
}

/// Documentation for string-typed payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringDoc {
    /// Generic schema fields.
    #[serde(flatten)]
    pub schema: SchemaDoc,
    /// Always [`DocValueType::String`].
    #[serde(rename = "type")]
    pub value_type: DocValueType,
    /// Predefined format annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// ECMA 262 pattern the string should match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Minimum length in Unicode code points.
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length in Unicode code points.
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
}

impl StringDoc {
    /// A string record carrying the generic fields of `schema` and no
    /// string-specific constraints.
    pub fn new(schema: &Schema) -> Self {
        StringDoc {
            schema: SchemaDoc::from(schema),
            value_type: DocValueType::String,
            format: None,
            pattern: None,
            min_length: None,
            max_length: None,
        }
    }
}

/// Documentation for numeric payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberDoc {
    /// Generic schema fields.
    #[serde(flatten)]
    pub schema: SchemaDoc,
    /// [`DocValueType::Number`] or [`DocValueType::Integer`].
    #[serde(rename = "type")]
    pub value_type: DocValueType,
    /// The value should be a multiple of this number.
    #[serde(rename = "multipleOf", skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Exclusive lower bound.
    #[serde(rename = "exclusiveMinimum", skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Number>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Exclusive upper bound.
    #[serde(rename = "exclusiveMaximum", skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Number>,
}

impl NumberDoc {
    /// A number record carrying the generic fields of `schema` and no
    /// numeric constraints.
    pub fn new(schema: &Schema) -> Self {
        NumberDoc {
            schema: SchemaDoc::from(schema),
            value_type: DocValueType::Number,
            multiple_of: None,
            minimum: None,
            exclusive_minimum: None,
            maximum: None,
            exclusive_maximum: None,
        }
    }

    /// Like [`NumberDoc::new`] with the `integer` discriminator.
    pub fn integer(schema: &Schema) -> Self {
        NumberDoc {
            value_type: DocValueType::Integer,
            ..NumberDoc::new(schema)
        }
    }
}

/// Documentation for object-typed payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDoc {
    /// Generic schema fields.
    #[serde(flatten)]
    pub schema: SchemaDoc,
    /// Always [`DocValueType::Object`].
    #[serde(rename = "type")]
    pub value_type: DocValueType,
    /// Documentation per named property.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Doc>,
    /// Documentation per property-name pattern.
    #[serde(rename = "patternProperties", skip_serializing_if = "BTreeMap::is_empty")]
    pub pattern_properties: BTreeMap<String, Doc>,
    /// Documentation for properties not otherwise matched.
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub additional_properties: BTreeMap<String, Doc>,
    /// Schemas activated by the presence of a property.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dependency: BTreeMap<String, Doc>,
    /// Property names that must be present.
    pub required: Vec<String>,
    /// Constraints on the property names themselves.
    #[serde(rename = "propertyNames", skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Box<StringDoc>>,
    /// Minimum number of properties.
    #[serde(rename = "minProperties", skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Maximum number of properties.
    #[serde(rename = "maxProperties", skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
}

impl ObjectDoc {
    /// An object record carrying the generic fields of `schema` and no
    /// members.
    pub fn new(schema: &Schema) -> Self {
        ObjectDoc {
            schema: SchemaDoc::from(schema),
            value_type: DocValueType::Object,
            properties: BTreeMap::new(),
            pattern_properties: BTreeMap::new(),
            additional_properties: BTreeMap::new(),
            dependency: BTreeMap::new(),
            required: Vec::new(),
            property_names: None,
            min_properties: None,
            max_properties: None,
        }
    }
}

/// Documentation for array-typed payloads.
///
/// Shares the member-description fields with [`ObjectDoc`]; only the `type`
/// discriminator differs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayDoc {
    /// Generic schema fields.
    #[serde(flatten)]
    pub schema: SchemaDoc,
    /// Always [`DocValueType::Array`].
    #[serde(rename = "type")]
    pub value_type: DocValueType,
    /// Documentation per named member.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Doc>,
    /// Documentation per member-name pattern.
    #[serde(rename = "patternProperties", skip_serializing_if = "BTreeMap::is_empty")]
    pub pattern_properties: BTreeMap<String, Doc>,
    /// Documentation for members not otherwise matched.
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub additional_properties: BTreeMap<String, Doc>,
    /// Schemas activated by the presence of a member.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dependency: BTreeMap<String, Doc>,
    /// Member names that must be present.
    pub required: Vec<String>,
    /// Constraints on member names.
    #[serde(rename = "propertyNames", skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Box<StringDoc>>,
    /// Minimum number of members.
    #[serde(rename = "minProperties", skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Maximum number of members.
    #[serde(rename = "maxProperties", skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
}

impl ArrayDoc {
    /// An array record carrying the generic fields of `schema` and no
    /// members.
    pub fn new(schema: &Schema) -> Self {
        ArrayDoc {
            schema: SchemaDoc::from(schema),
            value_type: DocValueType::Array,
            properties: BTreeMap::new(),
            pattern_properties: BTreeMap::new(),
            additional_properties: BTreeMap::new(),
            dependency: BTreeMap::new(),
            required: Vec::new(),
            property_names: None,
            min_properties: None,
            max_properties: None,
        }
    }
}

/// A documentation snapshot, one of the closed set of record shapes.
///
/// Serializes untagged: the record's own `type` field is the discriminator,
/// and the generic fallback carries no `type` at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Doc {
    /// Generic fallback: only the schema's own fields.
    Schema(SchemaDoc),
    /// A string-typed document.
    String(StringDoc),
    /// A number- or integer-typed document.
    Number(NumberDoc),
    /// An object-typed document.
    Object(ObjectDoc),
    /// An array-typed document.
    Array(ArrayDoc),
}

impl From<SchemaDoc> for Doc {
    fn from(doc: SchemaDoc) -> Self {
        Doc::Schema(doc)
    }
}

impl From<StringDoc> for Doc {
    fn from(doc: StringDoc) -> Self {
        Doc::String(doc)
    }
}

impl From<NumberDoc> for Doc {
    fn from(doc: NumberDoc) -> Self {
        Doc::Number(doc)
    }
}

impl From<ObjectDoc> for Doc {
    fn from(doc: ObjectDoc) -> Self {
        Doc::Object(doc)
    }
}

impl From<ArrayDoc> for Doc {
    fn from(doc: ArrayDoc) -> Self {
        Doc::Array(doc)
    }
}
