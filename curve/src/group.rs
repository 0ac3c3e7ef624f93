use num_bigint::BigUint;

use crate::Error;

/// An additive group law over some element type.
///
/// Implementors supply the five primitive operations; scalar multiplication
/// and its variants are derived from them.
pub trait GroupLaw {
    type Element: Clone + PartialEq;

    fn identity(&self) -> Self::Element;
    fn is_identity(&self, element: &Self::Element) -> bool;
    fn add(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element;
    fn double(&self, element: &Self::Element) -> Self::Element;
    fn negate(&self, element: &Self::Element) -> Self::Element;

    #[inline]
    fn sub(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add(lhs, &self.negate(rhs))
    }

    /// `k * point` by double-and-add over the bits of `k`, least significant
    /// bit first. Takes `O(log k)` group operations.
    fn scalar_mul(&self, point: &Self::Element, k: &BigUint) -> Self::Element {
        let mut result = self.identity();
        let mut temp = point.clone();

        for bit in 0..k.bits() {
            if k.bit(bit) {
                result = self.add(&result, &temp);
            }
            temp = self.double(&temp);
        }

        result
    }

    fn mul_u64(&self, point: &Self::Element, n: u64) -> Self::Element {
        match n {
            0 => self.identity(),
            1 => point.clone(),
            _ => self.scalar_mul(point, &BigUint::from(n)),
        }
    }

    /// `sum(scalars[i] * points[i])`.
    fn multi_scalar_mul(
        &self,
        points: &[Self::Element],
        scalars: &[BigUint],
    ) -> Result<Self::Element, Error> {
        if points.len() != scalars.len() {
            return Err(Error::LengthMismatch {
                left: points.len(),
                right: scalars.len(),
            });
        }

        Ok(points
            .iter()
            .zip(scalars)
            .fold(self.identity(), |acc, (point, k)| {
                self.add(&acc, &self.scalar_mul(point, k))
            }))
    }
}
