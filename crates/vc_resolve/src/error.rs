use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// The reason a path could not be resolved.
///
/// Every resolution stops at the first failure. The `Display` output is
/// stable and is the primary way errors are reported to users.
///
/// ```
/// use vc_resolve::{ResolveError, direct_resolve};
///
/// let err = direct_resolve(&vec![1, 2, 3], "list[x]").unwrap_err();
/// assert_eq!(err, ResolveError::InvalidIndex { token: "x".into() });
/// assert_eq!(err.to_string(), "could not parse index of array");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    /// The path has no tokens, or its first token is empty.
    #[error("could not resolve: expression is empty")]
    EmptyExpression,

    /// The registry has no root named like the first token.
    ///
    /// `path` is the normalized path.
    #[error("could not resolve {path}: {root} was not found")]
    RootNotFound { path: String, root: String },

    /// A sequence was indexed with a token that is not an integer.
    #[error("could not parse index of array")]
    InvalidIndex { token: String },

    /// A sequence was indexed outside `0..len`.
    #[error("index is out of range")]
    IndexOutOfRange { index: i64, len: usize },

    /// The current value has no field, key or element named `field`.
    ///
    /// `type_path` names the value after indirections were unwrapped.
    /// `remaining` holds the tokens after `field`, joined by `.`.
    #[error("{type_path} does not have field {field}: {} left to resolve", left(.remaining))]
    FieldNotFound {
        type_path: &'static str,
        field: String,
        remaining: Option<String>,
    },

    /// A null indirection was reached before the path was exhausted.
    #[error(
        "could not dereference nil {type_path} to resolve field {field}: {} left to resolve",
        left(.remaining)
    )]
    NilDereference {
        type_path: &'static str,
        field: String,
        remaining: Option<String>,
    },

    /// The resolved value does not have the requested type.
    #[error("resolved value is {actual}, not {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

#[inline]
fn left(remaining: &Option<String>) -> &str {
    remaining.as_deref().unwrap_or("nothing")
}
