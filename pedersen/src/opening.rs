//! Commitment openings.

use core::fmt::{self, Display, Formatter};

use curve::{CurvePoint, Error, Group, GroupLaw, Scalar};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::errors::CommitmentError;

/// Everything needed to recompute and check a commitment.
///
/// The commitment itself is `blinding * blinding_generator +
/// value * value_generator`, see [`Opening::close`]. Serializing an opening
/// writes the four components without the group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Opening<'g> {
    #[serde(skip)]
    group: &'g Group,
    value: Scalar,
    blinding: Scalar,
    value_generator: CurvePoint,
    blinding_generator: CurvePoint,
}

impl<'g> Opening<'g> {
    /// Commit to `value` with a fresh uniformly random blinding factor.
    pub fn open<R: Rng + ?Sized>(
        group: &'g Group,
        value: Scalar,
        value_generator: CurvePoint,
        blinding_generator: CurvePoint,
        rng: &mut R,
    ) -> Result<Self, CommitmentError> {
        let blinding = group.random_scalar(rng);
        Self::with_blinding(group, value, blinding, value_generator, blinding_generator)
    }

    /// Commit to `value` with a caller-chosen blinding factor.
    pub fn with_blinding(
        group: &'g Group,
        value: Scalar,
        blinding: Scalar,
        value_generator: CurvePoint,
        blinding_generator: CurvePoint,
    ) -> Result<Self, CommitmentError> {
        for scalar in [&value, &blinding] {
            if scalar.order() != group.order() {
                return Err(Error::OrderMismatch(scalar.order().clone()).into());
            }
        }
        check_generators(group, &value_generator, &blinding_generator)?;

        Ok(Opening {
            group,
            value,
            blinding,
            value_generator,
            blinding_generator,
        })
    }

    #[inline]
    pub fn group(&self) -> &'g Group {
        self.group
    }

    #[inline]
    pub fn value(&self) -> &Scalar {
        &self.value
    }

    #[inline]
    pub fn blinding(&self) -> &Scalar {
        &self.blinding
    }

    #[inline]
    pub fn value_generator(&self) -> &CurvePoint {
        &self.value_generator
    }

    #[inline]
    pub fn blinding_generator(&self) -> &CurvePoint {
        &self.blinding_generator
    }

    /// The `(value, blinding)` pair a committer broadcasts to open the
    /// commitment.
    pub fn reveal(&self) -> (&Scalar, &Scalar) {
        (&self.value, &self.blinding)
    }

    /// Compute the commitment.
    pub fn close(&self) -> CurvePoint {
        let hidden = self.group.scalar_mul(&self.blinding_generator, &self.blinding);
        let committed = self.group.scalar_mul(&self.value_generator, &self.value);
        self.group.curve().add(&hidden, &committed)
    }

    pub fn verify(&self, commitment: &CurvePoint) -> bool {
        *commitment == self.close()
    }

    /// Check `openings[i]` against `commitments[i]` for every `i`, stopping
    /// at the first mismatch.
    pub fn batch_verify(
        openings: &[Opening<'_>],
        commitments: &[CurvePoint],
    ) -> Result<bool, CommitmentError> {
        if openings.len() != commitments.len() {
            return Err(CommitmentError::LengthMismatch {
                left: openings.len(),
                right: commitments.len(),
            });
        }

        Ok(openings
            .iter()
            .zip(commitments)
            .enumerate()
            .all(|(index, (opening, commitment))| {
                let ok = opening.verify(commitment);
                if !ok {
                    debug!(index, %commitment, "commitment does not match its opening");
                }
                ok
            }))
    }
}

impl Display for Opening<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value, self.close())
    }
}

fn check_generators(
    group: &Group,
    value_generator: &CurvePoint,
    blinding_generator: &CurvePoint,
) -> Result<(), CommitmentError> {
    let curve = group.curve();
    for point in [value_generator, blinding_generator] {
        if point.is_zero() {
            return Err(CommitmentError::DependentGenerators);
        }
        if !curve.is_on_curve(point) {
            return Err(Error::NotOnCurve.into());
        }
    }
    if value_generator == blinding_generator || *value_generator == blinding_generator.negate() {
        return Err(CommitmentError::DependentGenerators);
    }
    Ok(())
}
