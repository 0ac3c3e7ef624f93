//! Error types for field, group and sampling operations.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors returned by the arithmetic layers.
///
/// Absence of a square root or of a liftable x-coordinate is not an error
/// and is reported through `Option` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The multiplicative inverse of zero was requested.
    #[error("division by zero")]
    DivisionByZero,
    /// The value shares a factor with a composite modulus.
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: BigUint, modulus: BigUint },
    /// Pollard's rho used up every restart without finding a logarithm.
    ///
    /// For a cyclic group of the configured order this cannot happen, so it
    /// signals a mismatch between the order and the generator.
    #[error("discrete log search failed after {attempts} attempts")]
    ArithmeticFailure { attempts: BigUint },
    /// The random point sampler found no liftable candidate.
    #[error("no curve point among {attempts} candidates starting at index {index}")]
    Exhausted { index: u64, attempts: u64 },
    /// Paired inputs of a batch operation differ in length.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
    /// A decoded value lies outside `[0, modulus)`.
    #[error("{value} is not reduced modulo {modulus}")]
    NotReduced { value: BigUint, modulus: BigUint },
    /// A counter would run past `u64::MAX`.
    #[error("sampler counter overflows at index {index}")]
    CounterOverflow { index: u64 },
    /// The modulus cannot define a field or group.
    #[error("invalid modulus: {0}")]
    InvalidModulus(BigUint),
    /// The generator is the point at infinity.
    #[error("generator must not be the point at infinity")]
    InvalidGenerator,
    /// The generator does not have the configured order.
    #[error("generator does not have order {0}")]
    OrderMismatch(BigUint),
    /// More distinct points were requested than the group holds.
    #[error("requested {requested} distinct points, only {available} available")]
    NotEnoughPoints { requested: usize, available: BigUint },
    /// A configuration document could not be decoded or encoded.
    #[error("config: {0}")]
    Config(String),
}
