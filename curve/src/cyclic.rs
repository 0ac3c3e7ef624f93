//! The group context: curve, group order and generator.
//!
//! Every scalar multiplication and discrete logarithm is relative to the
//! generator held here. There is no process-wide generator; callers pass a
//! [`Group`] around explicitly.

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::random::random_below;
use crate::{Curve, CurvePoint, Error, GroupLaw, RandomPoints, Scalar};

/// A cyclic group of points generated by `generator`, with `order` elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGroup")]
pub struct Group {
    curve: Curve,
    order: BigUint,
    generator: CurvePoint,
}

#[derive(Deserialize)]
struct RawGroup {
    curve: Curve,
    order: BigUint,
    generator: CurvePoint,
}

impl TryFrom<RawGroup> for Group {
    type Error = Error;

    fn try_from(raw: RawGroup) -> Result<Self, Error> {
        Group::new(raw.curve, raw.order, raw.generator)
    }
}

impl Group {
    /// Build a group, checking that the generator is a finite point on the
    /// curve and that `order * generator` is the point at infinity.
    ///
    /// Only the annihilation is checked, not that `order` is minimal.
    pub fn new(curve: Curve, order: BigUint, generator: CurvePoint) -> Result<Self, Error> {
        if order.is_zero() {
            return Err(Error::InvalidModulus(order));
        }
        if generator.is_zero() {
            return Err(Error::InvalidGenerator);
        }
        if !curve.is_on_curve(&generator) {
            return Err(Error::NotOnCurve);
        }
        if !curve.scalar_mul(&generator, &order).is_zero() {
            return Err(Error::OrderMismatch(order));
        }
        if curve.is_singular() {
            warn!(modulus = %curve.modulus(), "curve is singular");
        }

        Ok(Group {
            curve,
            order,
            generator,
        })
    }

    /// Build a group whose generator is the first point of a fresh
    /// [`RandomPoints`] sequence.
    pub fn with_sampled_generator(curve: Curve, order: BigUint) -> Result<Self, Error> {
        let generator = RandomPoints::new(curve.clone()).next_point()?;
        Self::new(curve, order, generator)
    }

    /// Replace the generator.
    ///
    /// Scalar multiples and discrete logarithms are defined relative to the
    /// generator: every scalar previously derived from this group refers to a
    /// different point afterwards. The old group is consumed so it cannot be
    /// mixed with the new one by accident.
    pub fn reset_generator(self, generator: CurvePoint) -> Result<Self, Error> {
        warn!(
            old = %self.generator,
            new = %generator,
            "resetting generator invalidates previously derived scalars"
        );
        Self::new(self.curve, self.order, generator)
    }

    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    #[inline]
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    #[inline]
    pub fn scalar(&self, value: impl Into<BigUint>) -> Scalar {
        Scalar::new(value.into(), &self.order)
    }

    pub fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> Scalar {
        Scalar::random(&self.order, rng)
    }

    /// `scalar * point`. Distinct from scalar-by-scalar multiplication, which
    /// is the `Mul` impl on [`Scalar`].
    pub fn scalar_mul(&self, point: &CurvePoint, scalar: &Scalar) -> CurvePoint {
        debug_assert_eq!(scalar.order(), &self.order);
        self.curve.scalar_mul(point, scalar.value())
    }

    /// `scalar * generator`.
    #[inline]
    pub fn mul_generator(&self, scalar: &Scalar) -> CurvePoint {
        self.scalar_mul(&self.generator, scalar)
    }

    /// The `n`-th point `(n mod order) * generator`.
    pub fn nth_point(&self, n: impl Into<BigUint>) -> CurvePoint {
        self.mul_generator(&self.scalar(n))
    }

    /// Uniformly random group element.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> CurvePoint {
        self.mul_generator(&self.random_scalar(rng))
    }

    /// `count` distinct random points, none of them infinity or the
    /// generator itself.
    pub fn sample_distinct_points<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<CurvePoint>, Error> {
        let two = BigUint::from(2u32);
        let available = if self.order > two {
            &self.order - &two
        } else {
            BigUint::zero()
        };
        if BigUint::from(count) > available {
            return Err(Error::NotEnoughPoints {
                requested: count,
                available,
            });
        }

        let mut seen = HashSet::with_capacity(count);
        let mut points = Vec::with_capacity(count);
        while points.len() < count {
            let k = random_below(rng, &available) + &two;
            if seen.insert(k.clone()) {
                points.push(self.nth_point(k));
            }
        }

        Ok(points)
    }

    /// Number of points in the group, recovered as `log(-generator) + 1`.
    ///
    /// Agrees with [`Group::order`] whenever the configured order is the
    /// true order of the generator.
    pub fn count_points(&self) -> Result<BigUint, Error> {
        let minus_one = self.generator.negate();
        let k = self.discrete_log(&minus_one)?;
        debug_assert_eq!(self.mul_generator(&k), minus_one);
        Ok(k.value() + 1u32)
    }
}
