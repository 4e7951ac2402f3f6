//! Cloneable function values for the four schema capabilities.
//!
//! Each wrapper holds an optional `Arc`'d closure. Construction captures all
//! configuration the closure needs, so a capability value stays valid and
//! thread-safe independent of the schema or type it was derived from.

use crate::error::SchemaResult;
use crate::value::{Candidate, Serialized, Value};
use std::fmt;
use std::sync::Arc;

type ParseFn = dyn Fn(Value) -> SchemaResult<Value> + Send + Sync;
type ValidateFn = dyn Fn(Candidate, Option<&Value>) -> SchemaResult<Value> + Send + Sync;
type SerializeFn = dyn Fn(Value) -> SchemaResult<Serialized> + Send + Sync;
type LessFn = dyn Fn(&Value, &Value) -> bool + Send + Sync;

/// Converts an external representation into an internal one.
///
/// A parser handles type and shape conversion only; semantic checks such as
/// range limits belong to [`Validator`]. The unset parser (its `Default`)
/// returns its input unchanged.
#[derive(Clone, Default)]
pub struct Parser(Option<Arc<ParseFn>>);

impl Parser {
    /// Wraps a parse function.
    pub fn new<F>(parse: F) -> Self
    where
        F: Fn(Value) -> SchemaResult<Value> + Send + Sync + 'static,
    {
        Parser(Some(Arc::new(parse)))
    }

    /// The identity parser.
    pub fn identity() -> Self {
        Parser(None)
    }

    /// True when this parser is the identity pass-through.
    pub fn is_identity(&self) -> bool {
        self.0.is_none()
    }

    /// Parses one external value.
    pub fn parse(&self, input: Value) -> SchemaResult<Value> {
        match &self.0 {
            Some(parse) => parse(input),
            None => Ok(input),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Parser(..)"),
            None => f.write_str("Parser(identity)"),
        }
    }
}

/// Validates a candidate internal value against the value it would replace.
///
/// `original` is `None` when no prior value exists. Leaf validators may
/// ignore it, but anything delegating to child schemas must pass it along
/// unchanged. The unset validator accepts every candidate, returning the
/// carried value unchanged (a `SkipReadOnly` envelope is unwrapped so that
/// it cannot leak into validated output).
#[derive(Clone, Default)]
pub struct Validator(Option<Arc<ValidateFn>>);

impl Validator {
    /// Wraps a validate function.
    pub fn new<F>(validate: F) -> Self
    where
        F: Fn(Candidate, Option<&Value>) -> SchemaResult<Value> + Send + Sync + 'static,
    {
        Validator(Some(Arc::new(validate)))
    }

    /// The accept-everything validator.
    pub fn identity() -> Self {
        Validator(None)
    }

    /// True when this validator is the accept-everything pass-through.
    pub fn is_identity(&self) -> bool {
        self.0.is_none()
    }

    /// Validates one candidate, returning the accepted (possibly normalized)
    /// value.
    pub fn validate(
        &self,
        input: impl Into<Candidate>,
        original: Option<&Value>,
    ) -> SchemaResult<Value> {
        let input = input.into();
        match &self.0 {
            Some(validate) => validate(input, original),
            None => Ok(input.into_value()),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Validator(..)"),
            None => f.write_str("Validator(identity)"),
        }
    }
}

/// Converts an internal representation back into an external one.
///
/// May return [`Serialized::Omit`] to exclude the field from the output;
/// `Value::Null` on the other hand is a value to be exported. The unset
/// serializer returns its input unchanged.
#[derive(Clone, Default)]
pub struct Serializer(Option<Arc<SerializeFn>>);

impl Serializer {
    /// Wraps a serialize function.
    pub fn new<F>(serialize: F) -> Self
    where
        F: Fn(Value) -> SchemaResult<Serialized> + Send + Sync + 'static,
    {
        Serializer(Some(Arc::new(serialize)))
    }

    /// The identity serializer.
    pub fn identity() -> Self {
        Serializer(None)
    }

    /// A serializer that omits every value, whatever it is.
    pub fn omit() -> Self {
        Serializer::new(|_| Ok(Serialized::Omit))
    }

    /// True when this serializer is the identity pass-through.
    pub fn is_identity(&self) -> bool {
        self.0.is_none()
    }

    /// Serializes one internal value.
    pub fn serialize(&self, input: Value) -> SchemaResult<Serialized> {
        match &self.0 {
            Some(serialize) => serialize(input),
            None => Ok(Serialized::Value(input)),
        }
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Serializer(..)"),
            None => f.write_str("Serializer(identity)"),
        }
    }
}

/// Strict total-order comparison of two internal values of one type.
///
/// Concrete comparators tolerate operand type mismatch by returning `false`.
/// The unset comparator (its `Default`) has no safe answer and panics when
/// invoked: reaching it means the call site never checked whether the type
/// orders its values at all.
#[derive(Clone, Default)]
pub struct Lesser(Option<Arc<LessFn>>);

impl Lesser {
    /// Wraps a comparison function.
    pub fn new<F>(less: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        Lesser(Some(Arc::new(less)))
    }

    /// The unset comparator. Calling [`Lesser::less`] on it panics.
    pub fn unset() -> Self {
        Lesser(None)
    }

    /// True when a comparison function is present.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Returns true if both operands are of the expected type and `a` orders
    /// strictly before `b`.
    ///
    /// # Panics
    ///
    /// Panics when the comparator is unset.
    pub fn less(&self, a: &Value, b: &Value) -> bool {
        match &self.0 {
            Some(less) => less(a, b),
            None => panic!("Lesser::less called on an unset comparator"),
        }
    }
}

impl fmt::Debug for Lesser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Lesser(..)"),
            None => f.write_str("Lesser(unset)"),
        }
    }
}
