//! Error types for the commitment scheme.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    /// Batch verification was given a different number of openings and
    /// commitments.
    #[error("{left} openings but {right} commitments")]
    LengthMismatch { left: usize, right: usize },

    /// The two generators have an obvious discrete-log relation.
    ///
    /// Raised when either generator is the point at infinity, or when the
    /// blinding generator equals the value generator or its inverse. Any
    /// such pair lets the committer open one commitment to several values.
    #[error("value and blinding generators are dependent")]
    DependentGenerators,

    #[error(transparent)]
    Curve(#[from] curve::Error),
}
