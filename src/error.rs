//! Usage errors raised while declaring or resolving cases.

use thiserror::Error;

/// Errors surfaced by [`evaluate`](crate::evaluate) and the pattern builders.
///
/// All of these are caller errors. Nothing is retried or recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No registered case (and no default) accepted the value.
    #[error("All cases failed, perhaps a default could be provided.")]
    NoMatch,

    /// `or_default` was called a second time within one case declaration.
    #[error("Cannot match on more than one default")]
    DuplicateDefault,

    /// A by-type lookup named a type the lookup does not know.
    #[error("Unknown type name: {0:?}")]
    UnknownType(String),

    /// A parametrized type name had missing or malformed parameters.
    #[error("Invalid parameters for type {name:?}: {reason}")]
    InvalidTypeParameters { name: String, reason: String },

    /// A `$regex` pattern failed to compile.
    #[error("Invalid regular expression: {0}")]
    InvalidRegex(String),

    /// A JSON pattern used a directive object incorrectly.
    #[error("Invalid pattern notation: {0}")]
    InvalidNotation(String),
}

impl From<regex::Error> for MatchError {
    fn from(err: regex::Error) -> Self {
        MatchError::InvalidRegex(err.to_string())
    }
}
