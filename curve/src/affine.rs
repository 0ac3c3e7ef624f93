//! Short Weierstrass curves `y^2 = x^3 + a*x + b` over `GF(p)` and their
//! points in affine coordinates.

use core::fmt::{self, Display, Formatter};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{Error, FieldElement, GroupLaw};

/// Curve parameters: the field modulus and the coefficients `a` and `b`.
///
/// The curve is assumed non-singular (`4a^3 + 27b^2 != 0`). This is not
/// enforced; see [`Curve::is_singular`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCurve")]
pub struct Curve {
    modulus: BigUint,
    a: FieldElement,
    b: FieldElement,
}

#[derive(Deserialize)]
struct RawCurve {
    modulus: BigUint,
    a: FieldElement,
    b: FieldElement,
}

impl TryFrom<RawCurve> for Curve {
    type Error = Error;

    fn try_from(raw: RawCurve) -> Result<Self, Error> {
        let RawCurve { modulus, a, b } = raw;
        if a.modulus() != &modulus || b.modulus() != &modulus {
            return Err(Error::InvalidModulus(modulus));
        }
        Curve::new(modulus, a.value().clone(), b.value().clone())
    }
}

/// A point on a curve: the point at infinity or an affine pair `(x, y)`.
///
/// Points do not carry their curve. Group operations live on [`Curve`] via
/// [`GroupLaw`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurvePoint {
    /// The identity element.
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Curve {
    /// Create a curve over `GF(modulus)`.
    ///
    /// Characteristic two is rejected since the short Weierstrass group law
    /// divides by `2y`.
    pub fn new(modulus: BigUint, a: BigUint, b: BigUint) -> Result<Self, Error> {
        if modulus <= BigUint::from(2u32) {
            return Err(Error::InvalidModulus(modulus));
        }
        let a = FieldElement::new(a, &modulus);
        let b = FieldElement::new(b, &modulus);
        Ok(Curve { modulus, a, b })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Field element of this curve's base field.
    #[inline]
    pub fn element(&self, value: impl Into<BigUint>) -> FieldElement {
        FieldElement::new(value.into(), &self.modulus)
    }

    /// Whether `4a^3 + 27b^2 == 0`.
    pub fn is_singular(&self) -> bool {
        let four = self.element(4u32);
        let twenty_seven = self.element(27u32);
        let a_cubed = &self.a.square() * &self.a;
        (&(&four * &a_cubed) + &(&twenty_seven * &self.b.square())).is_zero()
    }

    /// `x^3 + a*x + b`
    fn rhs(&self, x: &FieldElement) -> FieldElement {
        &(&(&x.square() * x) + &(&self.a * x)) + &self.b
    }

    /// Point with the given x-coordinate, if `x^3 + a*x + b` is a square.
    ///
    /// The y-coordinate is the canonical (smaller) square root.
    pub fn lift_x(&self, x: &FieldElement) -> Option<CurvePoint> {
        let y = self.rhs(x).sqrt()?;
        Some(CurvePoint::Affine { x: x.clone(), y })
    }

    /// Affine point from integer coordinates, checked against the equation.
    pub fn point(
        &self,
        x: impl Into<BigUint>,
        y: impl Into<BigUint>,
    ) -> Result<CurvePoint, Error> {
        let point = CurvePoint::Affine {
            x: self.element(x),
            y: self.element(y),
        };
        if !self.is_on_curve(&point) {
            return Err(Error::NotOnCurve);
        }
        Ok(point)
    }

    /// Check if a point is on the curve: `y^2 = x^3 + a*x + b`.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                x.modulus() == &self.modulus
                    && y.modulus() == &self.modulus
                    && y.square() == self.rhs(x)
            }
        }
    }

    /// Every point on the curve, infinity first, then by ascending `(x, y)`.
    ///
    /// Walks the whole base field, so only use it for small moduli.
    pub fn points(&self) -> Vec<CurvePoint> {
        let mut points = vec![CurvePoint::Infinity];
        let mut x = BigUint::zero();

        while x < self.modulus {
            let x_elem = self.element(x.clone());
            if let Some(y) = self.rhs(&x_elem).sqrt() {
                let minus_y = -&y;
                let has_pair = !y.is_zero();
                points.push(CurvePoint::Affine {
                    x: x_elem.clone(),
                    y,
                });
                if has_pair {
                    points.push(CurvePoint::Affine {
                        x: x_elem,
                        y: minus_y,
                    });
                }
            }
            x += BigUint::one();
        }

        points
    }

    // Shared tail of addition and doubling once the slope is known.
    fn chord(
        slope: &FieldElement,
        x1: &FieldElement,
        y1: &FieldElement,
        x2: &FieldElement,
    ) -> CurvePoint {
        // x_r = s^2 - x1 - x2
        let x = &(&slope.square() - x1) - x2;
        // y_r = s(x1 - x_r) - y1
        let y = &(slope * &(x1 - &x)) - y1;
        CurvePoint::Affine { x, y }
    }
}

impl GroupLaw for Curve {
    type Element = CurvePoint;

    #[inline]
    fn identity(&self) -> CurvePoint {
        CurvePoint::Infinity
    }

    #[inline]
    fn is_identity(&self, element: &CurvePoint) -> bool {
        element.is_zero()
    }

    fn add(&self, lhs: &CurvePoint, rhs: &CurvePoint) -> CurvePoint {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (CurvePoint::Infinity, _) => return rhs.clone(),
            (_, CurvePoint::Infinity) => return lhs.clone(),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(lhs);
            }
            // Points are inverses
            return CurvePoint::Infinity;
        }

        // s = (y2 - y1) / (x2 - x1)
        let Ok(slope) = (y2 - y1).divide(&(x2 - x1)) else {
            unreachable!("distinct x-coordinates have a non-zero difference");
        };

        Self::chord(&slope, x1, y1, x2)
    }

    fn double(&self, element: &CurvePoint) -> CurvePoint {
        let CurvePoint::Affine { x, y } = element else {
            return CurvePoint::Infinity;
        };

        // y = 0 means the point is its own inverse
        if y.is_zero() {
            return CurvePoint::Infinity;
        }

        // s = (3x^2 + a) / (2y)
        let numerator = &(&self.element(3u32) * &x.square()) + &self.a;
        let denominator = y + y;
        let Ok(slope) = numerator.divide(&denominator) else {
            unreachable!("2y is non-zero in odd characteristic");
        };

        Self::chord(&slope, x, y, x)
    }

    #[inline]
    fn negate(&self, element: &CurvePoint) -> CurvePoint {
        element.negate()
    }
}

impl CurvePoint {
    /// Whether this is the point at infinity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// Integer coordinates, or `None` for the point at infinity.
    pub fn xy(&self) -> Option<(BigUint, BigUint)> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, y } => Some((x.value().clone(), y.value().clone())),
        }
    }

    #[inline]
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, .. } => Some(x),
        }
    }

    /// `(x, -y)`; infinity is its own negation.
    pub fn negate(&self) -> Self {
        match self {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x: x.clone(),
                y: -y,
            },
        }
    }
}

impl Display for CurvePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Infinity => write!(f, "(zero)"),
            CurvePoint::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
