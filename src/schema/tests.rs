//! Tests for the composition engine: flag semantics layered over types.

use super::core::Schema;
use crate::capability::{Parser, Serializer, Type, Validator};
use crate::error::SchemaError;
use crate::types::DateTimeType;
use crate::value::{Candidate, Serialized, Value};
use serde_json::json;

/// A minimal concrete type: parses strings by trimming, validates strings by
/// lowercasing them, serializes them unchanged. The normalization makes
/// delegation observable in guard tests.
struct Token;

impl Type for Token {
    fn parser(&self) -> Parser {
        Parser::new(|input| match input {
            Value::String(s) => Ok(Value::String(s.trim().to_owned())),
            _ => Err(SchemaError::NotString),
        })
    }

    fn validator(&self) -> Validator {
        Validator::new(|input, _original| match input.into_value() {
            Value::String(s) => Ok(Value::String(s.to_lowercase())),
            _ => Err(SchemaError::NotString),
        })
    }

    fn serializer(&self) -> Serializer {
        Serializer::new(|input| match input {
            Value::String(s) => Ok(Serialized::Value(Value::String(s))),
            _ => Err(SchemaError::NotString),
        })
    }
}

#[test]
fn bare_schema_is_identity() {
    let schema = Schema::default();
    let samples = [
        Value::Null,
        Value::from(true),
        Value::from(13i64),
        Value::from("unchanged"),
        Value::Array(vec![Value::from(1i64), Value::Null]),
    ];

    for value in samples {
        assert_eq!(schema.parser().parse(value.clone()), Ok(value.clone()));
        assert_eq!(schema.validator().validate(value.clone(), None), Ok(value.clone()));
        assert_eq!(
            schema.serializer().serialize(value.clone()),
            Ok(Serialized::Value(value))
        );
    }
}

#[test]
fn typed_schema_delegates_parsing() {
    let schema = Schema::with_type(Token);
    assert_eq!(
        schema.parser().parse(Value::from("  padded  ")),
        Ok(Value::from("padded"))
    );
    assert_eq!(schema.parser().parse(Value::Null), Err(SchemaError::NotString));
}

#[test]
fn read_only_rejects_changed_value() {
    let schema = Schema {
        read_only: true,
        ..Schema::default()
    };
    let original = Value::from("before");

    let result = schema
        .validator()
        .validate(Value::from("after"), Some(&original));
    assert_eq!(result, Err(SchemaError::CreateOnly));
}

#[test]
fn read_only_accepts_unchanged_value() {
    let schema = Schema {
        read_only: true,
        ..Schema::default()
    };
    let original = Value::from("same");

    let result = schema
        .validator()
        .validate(original.clone(), Some(&original));
    assert_eq!(result, Ok(original));
}

#[test]
fn create_only_uses_the_same_guard() {
    let schema = Schema {
        create_only: true,
        ..Schema::default()
    };
    let original = Value::from(1i64);

    assert_eq!(
        schema.validator().validate(Value::from(2i64), Some(&original)),
        Err(SchemaError::CreateOnly)
    );
    assert_eq!(
        schema.validator().validate(original.clone(), Some(&original)),
        Ok(original)
    );
}

#[test]
fn guard_treats_absent_original_as_null() {
    let schema = Schema {
        read_only: true,
        ..Schema::default()
    };

    assert_eq!(schema.validator().validate(Value::Null, None), Ok(Value::Null));
    assert_eq!(
        schema.validator().validate(Value::from("new"), None),
        Err(SchemaError::CreateOnly)
    );
}

#[test]
fn skip_envelope_bypasses_the_guard() {
    let schema = Schema {
        read_only: true,
        ..Schema::default()
    };
    let original = Value::from("before");
    let replacement = Value::from("after");

    let result = schema.validator().validate(
        Candidate::SkipReadOnly(replacement.clone()),
        Some(&original),
    );
    assert_eq!(result, Ok(replacement));
}

#[test]
fn skip_envelope_still_reaches_the_delegate() {
    let schema = Schema {
        read_only: true,
        ..Schema::with_type(Token)
    };

    // The guard is bypassed, but the type validator still runs and rejects
    // a non-string replacement.
    let result = schema
        .validator()
        .validate(Candidate::SkipReadOnly(Value::from(5i64)), None);
    assert_eq!(result, Err(SchemaError::NotString));

    let normalized = schema
        .validator()
        .validate(Candidate::SkipReadOnly(Value::from("MiXeD")), None);
    assert_eq!(normalized, Ok(Value::from("mixed")));
}

#[test]
fn guard_delegates_with_the_effective_input() {
    let schema = Schema {
        read_only: true,
        ..Schema::with_type(Token)
    };
    let original = Value::from("KEPT");

    // Candidate equals original, so the guard passes it to the delegate,
    // which normalizes.
    let result = schema
        .validator()
        .validate(original.clone(), Some(&original));
    assert_eq!(result, Ok(Value::from("kept")));
}

#[test]
fn write_only_serializes_to_omit() {
    let bare = Schema {
        write_only: true,
        ..Schema::default()
    };
    let typed = Schema {
        write_only: true,
        ..Schema::with_type(Token)
    };

    for value in [Value::from("secret"), Value::Null, Value::from(42i64)] {
        assert_eq!(bare.serializer().serialize(value.clone()), Ok(Serialized::Omit));
        assert_eq!(typed.serializer().serialize(value), Ok(Serialized::Omit));
    }
}

#[test]
fn write_only_does_not_affect_parsing_or_validation() {
    let schema = Schema {
        write_only: true,
        ..Schema::with_type(Token)
    };

    assert_eq!(schema.parser().parse(Value::from(" a ")), Ok(Value::from("a")));
    assert_eq!(
        schema.validator().validate(Value::from("A"), None),
        Ok(Value::from("a"))
    );
}

#[test]
fn doc_falls_back_to_schema_fields() {
    let schema = Schema {
        title: Some("Secret".to_owned()),
        description: Some("Never exported".to_owned()),
        write_only: true,
        default: Some(Value::from("hunter2")),
        ..Schema::with_type(Token)
    };

    let rendered = serde_json::to_value(schema.doc()).expect("doc serializes");
    assert_eq!(
        rendered,
        json!({
            "title": "Secret",
            "description": "Never exported",
            "writeOnly": true,
            "default": "hunter2",
        })
    );
}

#[test]
fn doc_omits_unset_fields() {
    let rendered = serde_json::to_value(Schema::default().doc()).expect("doc serializes");
    assert_eq!(rendered, json!({}));
}

#[test]
fn doc_delegates_to_the_type() {
    let schema = Schema {
        title: Some("Created".to_owned()),
        read_only: true,
        ..Schema::with_type(DateTimeType::default())
    };

    let rendered = serde_json::to_value(schema.doc()).expect("doc serializes");
    assert_eq!(
        rendered,
        json!({
            "title": "Created",
            "readOnly": true,
            "type": "string",
            "format": "date-time",
        })
    );
}

#[test]
fn derived_capabilities_outlive_the_schema() {
    let validator = {
        let schema = Schema {
            read_only: true,
            ..Schema::with_type(Token)
        };
        schema.validator()
    };

    let original = Value::from("kept");
    assert_eq!(
        validator.validate(original.clone(), Some(&original)),
        Ok(original)
    );
}
