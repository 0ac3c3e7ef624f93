//! Deterministic sequence of pseudo-random curve points.
//!
//! Candidate x-coordinates are SHA-256 digests of a counter, reduced modulo
//! the field prime. This is an ad hoc sampler, not a hash-to-curve standard.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::{Curve, CurvePoint, Error};

/// Number of counter values tried per point before giving up.
pub const MAX_SUB_INDEX: u64 = 1000;

/// Stateful generator of non-infinity points.
///
/// Two samplers built for the same curve produce the same sequence. The n-th
/// call to [`RandomPoints::next_point`] on a fresh sampler returns the same
/// point as the first call after `seed(n - 1)`.
#[derive(Clone, Debug)]
pub struct RandomPoints {
    curve: Curve,
    index: u64,
}

impl RandomPoints {
    pub fn new(curve: Curve) -> Self {
        RandomPoints { curve, index: 0 }
    }

    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Jump to the start of the `n`-th block of candidates.
    ///
    /// Fails with [`Error::CounterOverflow`] if the block starts past
    /// `u64::MAX`; the cursor is left unchanged in that case.
    pub fn seed(&mut self, n: u64) -> Result<(), Error> {
        self.index = n
            .checked_mul(MAX_SUB_INDEX)
            .ok_or(Error::CounterOverflow { index: n })?;
        Ok(())
    }

    /// Next point in the sequence.
    ///
    /// Fails with [`Error::Exhausted`] if none of the [`MAX_SUB_INDEX`]
    /// candidates of the current block lies on the curve, and with
    /// [`Error::CounterOverflow`] if the block does not fit below
    /// `u64::MAX`. The cursor is left unchanged in both cases.
    pub fn next_point(&mut self) -> Result<CurvePoint, Error> {
        let Some(next_index) = self.index.checked_add(MAX_SUB_INDEX) else {
            return Err(Error::CounterOverflow { index: self.index });
        };

        for counter in self.index..next_index {
            let x = self.curve.element(hash_counter(counter));

            match self.curve.lift_x(&x) {
                Some(point) => {
                    self.index = next_index;
                    return Ok(point);
                }
                None => trace!(counter, x = %x, "candidate not on curve"),
            }
        }

        Err(Error::Exhausted {
            index: self.index,
            attempts: MAX_SUB_INDEX,
        })
    }
}

// Big-endian counter, never shorter than two bytes.
fn hash_counter(counter: u64) -> BigUint {
    let bytes = counter.to_be_bytes();
    let skip = (counter.leading_zeros() / 8).min(6) as usize;
    let digest = Sha256::digest(&bytes[skip..]);
    BigUint::from_bytes_be(&digest)
}
