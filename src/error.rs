//! Error types for schema operations.
//!
//! Every failure a schema can produce is one of a small set of sentinel
//! kinds, so callers branch on the kind rather than parsing messages. The
//! same kinds are reused by the built-in reference type and are intended to
//! be reused by external [`Type`](crate::Type) implementations.

/// Failure kinds shared by parsers, validators and serializers.
///
/// Variants carry no payload and compare by kind. All operations surface
/// these as ordinary `Result` errors; nothing in the engine panics on bad
/// input. The single fail-fast exception is invoking an unset
/// [`Lesser`](crate::Lesser), which is a caller bug rather than a data
/// condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A read-only value was changed.
    ///
    /// Reserved for callers that want to distinguish read-only from
    /// create-only rejections; the engine itself currently reports both as
    /// [`SchemaError::CreateOnly`].
    #[error("read-only")]
    ReadOnly,

    /// A guarded value differs from the value it would replace.
    ///
    /// Reported by the ReadOnly/CreateOnly guard whenever the candidate is
    /// not equal to the original and the check was not explicitly skipped.
    #[error("create-only")]
    CreateOnly,

    /// A parser received an external value that is not a string.
    #[error("not a string")]
    NotString,

    /// No configured layout matched the input.
    #[error("invalid format")]
    InvalidFormat,

    /// A validator or serializer received a value that is not the expected
    /// native date-time representation.
    #[error("not a date-time")]
    NotDateTime,
}

/// Result alias for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
