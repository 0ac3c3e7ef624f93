//! Elements of a prime field `GF(p)`.
//!
//! A [`FieldElement`] carries the prime it is reduced by, so elements of
//! different curves never share hidden state. Every operation re-reduces its
//! result into `[0, p)`.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Integer modulo a prime `p`.
///
/// The modulus is not checked for primality. `reciprocal` and `sqrt` are only
/// meaningful when it is prime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFieldElement")]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

// Decoded form, checked before it becomes a `FieldElement`.
#[derive(Deserialize)]
struct RawFieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl TryFrom<RawFieldElement> for FieldElement {
    type Error = Error;

    fn try_from(raw: RawFieldElement) -> Result<Self, Error> {
        let RawFieldElement { value, modulus } = raw;
        if modulus.is_zero() {
            return Err(Error::InvalidModulus(modulus));
        }
        if value >= modulus {
            return Err(Error::NotReduced { value, modulus });
        }
        Ok(FieldElement { value, modulus })
    }
}

impl FieldElement {
    /// Create an element, reducing `value` modulo `modulus`.
    pub fn new(value: BigUint, modulus: &BigUint) -> Self {
        FieldElement {
            value: value % modulus,
            modulus: modulus.clone(),
        }
    }

    #[inline]
    pub fn from_u64(value: u64, modulus: &BigUint) -> Self {
        Self::new(BigUint::from(value), modulus)
    }

    #[inline]
    pub fn zero(modulus: &BigUint) -> Self {
        Self::new(BigUint::zero(), modulus)
    }

    #[inline]
    pub fn one(modulus: &BigUint) -> Self {
        Self::new(BigUint::one(), modulus)
    }

    /// Canonical representative in `[0, p)`.
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    fn with_value(&self, value: BigUint) -> Self {
        Self::new(value, &self.modulus)
    }

    /// Raise to an arbitrary non-negative power.
    pub fn pow(&self, exponent: &BigUint) -> Self {
        self.with_value(self.value.modpow(exponent, &self.modulus))
    }

    #[inline]
    pub fn square(&self) -> Self {
        self * self
    }

    /// Multiplicative inverse via Fermat's little theorem: `x^(p-2)`.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let exponent = &self.modulus - 2u32;
        Ok(self.pow(&exponent))
    }

    /// `self / rhs`, failing when `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self * &rhs.reciprocal()?)
    }

    /// Euler's criterion `x^((p-1)/2)`.
    ///
    /// Returns `1` for a non-zero quadratic residue, `0` for zero and `p - 1`
    /// for a non-residue.
    pub fn legendre_symbol(&self) -> BigUint {
        let exponent = (&self.modulus - 1u32) >> 1;
        self.value.modpow(&exponent, &self.modulus)
    }

    /// Square root `r` with `r * r == self`, or `None` for a non-residue.
    ///
    /// Of the two roots `r` and `p - r` the smaller representative is
    /// returned, so the result is independent of the algorithm branch taken.
    ///
    /// For a composite modulus Euler's criterion is unreliable; the search
    /// still terminates and only returns a value that squares to `self`.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(self.clone());
        }
        if self.modulus == BigUint::from(2u32) {
            return Some(self.clone());
        }
        if !self.legendre_symbol().is_one() {
            return None;
        }

        let root = if &self.modulus % 4u32 == BigUint::from(3u32) {
            // p = 3 (mod 4): x^((p+1)/4) is a root.
            self.pow(&((&self.modulus + 1u32) >> 2))
        } else {
            self.tonelli_shanks()?
        };
        if &root.square() != self {
            return None;
        }

        Some(root.canonical_root())
    }

    fn canonical_root(self) -> Self {
        let other = -&self;
        if other.value < self.value {
            other
        } else {
            self
        }
    }

    // Expects `self` to pass Euler's criterion and p odd. Gives up with
    // `None` when no non-residue exists or the 2-power search runs out,
    // which only happens for composite moduli.
    fn tonelli_shanks(&self) -> Option<Self> {
        let p_minus_one = &self.modulus - 1u32;

        // p - 1 = q * 2^s with q odd
        let s = p_minus_one.trailing_zeros().unwrap_or(0);
        let q = &p_minus_one >> s;

        // Half of all elements are non-residues, so this ends quickly.
        let one = Self::one(&self.modulus);
        let mut z = &one + &one;
        while z.legendre_symbol() != p_minus_one {
            z = &z + &one;
            if z.is_zero() {
                return None;
            }
        }

        let mut m = s;
        let mut c = z.pow(&q);
        let mut t = self.pow(&q);
        let mut r = self.pow(&((&q + 1u32) >> 1));

        while !t.value.is_one() {
            // Least 0 < i < m with t^(2^i) = 1.
            let mut i = 1;
            let mut t_pow = t.square();
            while !t_pow.value.is_one() && i < m {
                t_pow = t_pow.square();
                i += 1;
            }
            if i >= m {
                return None;
            }

            // b = c^(2^(m - i - 1))
            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t = &t * &c;
            r = &r * &b;
        }

        Some(r)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        debug_assert_eq!(self.modulus, rhs.modulus);
        self.with_value(&self.value + &rhs.value)
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        debug_assert_eq!(self.modulus, rhs.modulus);
        self.with_value(&self.value + &self.modulus - &rhs.value)
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        debug_assert_eq!(self.modulus, rhs.modulus);
        self.with_value(&self.value * &rhs.value)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(&self.modulus - &self.value)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

forward_owned_binops!(FieldElement; Add add, Sub sub, Mul mul);

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(p: u64) -> impl Iterator<Item = FieldElement> {
        let modulus = BigUint::from(p);
        (0..p).map(move |x| FieldElement::from_u64(x, &modulus))
    }

    #[test]
    fn test_reduction() {
        let p = BigUint::from(7u32);
        assert_eq!(FieldElement::from_u64(23, &p).value(), &BigUint::from(2u32));
        assert_eq!(FieldElement::from_u64(7, &p), FieldElement::zero(&p));
    }

    #[test]
    fn test_additive_inverse() {
        for p in [7u64, 17, 1009] {
            let modulus = BigUint::from(p);
            for x in elements(p) {
                let complement = FieldElement::new(&modulus - x.value(), &modulus);
                assert!((&x + &complement).is_zero());
                assert!((&x + &-&x).is_zero());
            }
        }
    }

    #[test]
    fn test_subtraction_wraps() {
        let p = BigUint::from(7u32);
        let a = FieldElement::from_u64(2, &p);
        let b = FieldElement::from_u64(5, &p);
        assert_eq!(a - b, FieldElement::from_u64(4, &p));
    }

    #[test]
    fn test_reciprocal() {
        for p in [2u64, 7, 17, 1009] {
            let one = FieldElement::one(&BigUint::from(p));
            for x in elements(p).skip(1) {
                let inverse = x.reciprocal().unwrap();
                assert_eq!(&x * &inverse, one);
            }
        }
    }

    #[test]
    fn test_reciprocal_of_zero() {
        let zero = FieldElement::zero(&BigUint::from(7u32));
        assert_eq!(zero.reciprocal(), Err(Error::DivisionByZero));

        let one = FieldElement::one(&BigUint::from(7u32));
        assert_eq!(one.divide(&zero), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_divide() {
        let p = BigUint::from(7u32);
        let six = FieldElement::from_u64(6, &p);
        let four = FieldElement::from_u64(4, &p);
        // 6 / 4 = 6 * 2 = 12 = 5 (mod 7)
        assert_eq!(six.divide(&four).unwrap(), FieldElement::from_u64(5, &p));
    }

    #[test]
    fn test_pow() {
        for x in elements(17) {
            assert_eq!(&(&x * &x) * &x, x.pow(&BigUint::from(3u32)));
            assert_eq!(x.pow(&BigUint::zero()), FieldElement::one(x.modulus()));
        }
    }

    #[test]
    fn test_legendre_symbol() {
        for p in [7u64, 17, 97] {
            let minus_one = BigUint::from(p - 1);
            for x in elements(p) {
                let symbol = x.legendre_symbol();
                assert!(symbol.is_one() || symbol.is_zero() || symbol == minus_one);
                assert_eq!(symbol.is_zero(), x.is_zero());
            }
        }
    }

    #[test]
    fn test_sqrt() {
        // 7 and 1019 take the p = 3 (mod 4) shortcut, the others Tonelli-Shanks.
        for p in [2u64, 7, 17, 41, 97, 1009, 1019] {
            let half = BigUint::from(p / 2);
            let mut roots = 0;
            for x in elements(p) {
                if let Some(r) = x.sqrt() {
                    assert_eq!(r.square(), x);
                    assert!(r.value() <= &half);
                    roots += 1;
                } else {
                    assert!(!x.legendre_symbol().is_one());
                }
            }
            // Zero plus (p - 1) / 2 non-zero residues.
            if p > 2 {
                assert_eq!(roots, 1 + (p - 1) / 2);
            }
        }
    }

    #[test]
    fn test_sqrt_composite_modulus() {
        // Euler's criterion lies for these; sqrt must still terminate and
        // never return a wrong root.
        for n in [9u64, 15, 21, 25, 45, 65, 91] {
            for x in elements(n) {
                if let Some(r) = x.sqrt() {
                    assert_eq!(r.square(), x);
                }
            }
        }
        // 1 passes Euler's criterion mod 9, but no element has symbol 8.
        let one = FieldElement::one(&BigUint::from(9u32));
        assert_eq!(one.sqrt(), None);
    }

    #[test]
    fn test_deserialize_checks_range() {
        let p = BigUint::from(7u32);
        let x = FieldElement::from_u64(5, &p);
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(serde_json::from_str::<FieldElement>(&json).unwrap(), x);

        let err = serde_json::from_str::<FieldElement>(r#"{"value":[10],"modulus":[7]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("10 is not reduced modulo 7"));
        assert!(serde_json::from_str::<FieldElement>(r#"{"value":[],"modulus":[]}"#).is_err());
    }

    #[test]
    fn test_sqrt_known_values() {
        let p = BigUint::from(7u32);
        // 2 = 3^2 = 4^2 (mod 7)
        let two = FieldElement::from_u64(2, &p);
        assert_eq!(two.sqrt(), Some(FieldElement::from_u64(3, &p)));
        // 3 is a non-residue mod 7
        assert_eq!(FieldElement::from_u64(3, &p).sqrt(), None);
        assert_eq!(FieldElement::zero(&p).sqrt(), Some(FieldElement::zero(&p)));
    }
}
