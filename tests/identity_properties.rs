//! Property tests for the engine's pass-through and guard laws.

use payload_schema::{Candidate, Schema, SchemaError, Serialized, Value};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

proptest! {
    /// A schema with no type and no flags changes nothing, ever.
    #[test]
    fn bare_schema_is_identity(value in arb_value()) {
        let schema = Schema::default();
        prop_assert_eq!(schema.parser().parse(value.clone()), Ok(value.clone()));
        prop_assert_eq!(schema.validator().validate(value.clone(), None), Ok(value.clone()));
        prop_assert_eq!(
            schema.serializer().serialize(value.clone()),
            Ok(Serialized::Value(value))
        );
    }

    /// The guard accepts a candidate exactly when it equals the original.
    #[test]
    fn guard_accepts_only_matching_candidates(a in arb_value(), b in arb_value()) {
        let schema = Schema { read_only: true, ..Schema::default() };
        let validator = schema.validator();

        prop_assert_eq!(validator.validate(a.clone(), Some(&a)), Ok(a.clone()));

        let expected = if a == b {
            Ok(a.clone())
        } else {
            Err(SchemaError::CreateOnly)
        };
        prop_assert_eq!(validator.validate(a.clone(), Some(&b)), expected);
    }

    /// The envelope bypasses the guard for any candidate/original pair.
    #[test]
    fn skip_envelope_always_bypasses(a in arb_value(), b in arb_value()) {
        let schema = Schema { create_only: true, ..Schema::default() };
        let result = schema
            .validator()
            .validate(Candidate::SkipReadOnly(a.clone()), Some(&b));
        prop_assert_eq!(result, Ok(a));
    }

    /// Write-only schemas omit every value.
    #[test]
    fn write_only_omits_everything(value in arb_value()) {
        let schema = Schema { write_only: true, ..Schema::default() };
        prop_assert_eq!(schema.serializer().serialize(value), Ok(Serialized::Omit));
    }
}
