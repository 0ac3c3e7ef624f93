//! Scalars: integers modulo the group order `N`.
//!
//! The group order need not be prime, so inversion uses the extended
//! Euclidean algorithm and reports non-units instead of returning garbage.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::random::random_below;
use crate::Error;

/// Integer modulo the group order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScalar")]
pub struct Scalar {
    value: BigUint,
    order: BigUint,
}

#[derive(Deserialize)]
struct RawScalar {
    value: BigUint,
    order: BigUint,
}

impl TryFrom<RawScalar> for Scalar {
    type Error = Error;

    fn try_from(raw: RawScalar) -> Result<Self, Error> {
        let RawScalar { value, order } = raw;
        if order.is_zero() {
            return Err(Error::InvalidModulus(order));
        }
        if value >= order {
            return Err(Error::NotReduced {
                value,
                modulus: order,
            });
        }
        Ok(Scalar { value, order })
    }
}

impl Scalar {
    /// Create a scalar, reducing `value` modulo `order`.
    pub fn new(value: BigUint, order: &BigUint) -> Self {
        Scalar {
            value: value % order,
            order: order.clone(),
        }
    }

    #[inline]
    pub fn from_u64(value: u64, order: &BigUint) -> Self {
        Self::new(BigUint::from(value), order)
    }

    #[inline]
    pub fn zero(order: &BigUint) -> Self {
        Self::new(BigUint::zero(), order)
    }

    #[inline]
    pub fn one(order: &BigUint) -> Self {
        Self::new(BigUint::one(), order)
    }

    /// Uniformly random scalar in `[0, order)`.
    pub fn random<R: Rng + ?Sized>(order: &BigUint, rng: &mut R) -> Self {
        Scalar {
            value: random_below(rng, order),
            order: order.clone(),
        }
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    fn with_value(&self, value: BigUint) -> Self {
        Self::new(value, &self.order)
    }

    pub fn pow(&self, exponent: &BigUint) -> Self {
        self.with_value(self.value.modpow(exponent, &self.order))
    }

    /// Multiplicative inverse modulo the group order.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.value
            .modinv(&self.order)
            .map(|inverse| self.with_value(inverse))
            .ok_or_else(|| Error::NotInvertible {
                value: self.value.clone(),
                modulus: self.order.clone(),
            })
    }

    pub fn divide(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self * &rhs.reciprocal()?)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        debug_assert_eq!(self.order, rhs.order);
        self.with_value(&self.value + &rhs.value)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        debug_assert_eq!(self.order, rhs.order);
        self.with_value(&self.value + &self.order - &rhs.value)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        debug_assert_eq!(self.order, rhs.order);
        self.with_value(&self.value * &rhs.value)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(&self.order - &self.value)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -&self
    }
}

forward_owned_binops!(Scalar; Add add, Sub sub, Mul mul);

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
