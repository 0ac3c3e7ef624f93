//! Short-Weierstrass elliptic curves over prime fields.
//!
//! This crate provides prime field and scalar arithmetic on arbitrary-size
//! integers, the affine group law on `y^2 = x^3 + a*x + b`, a deterministic
//! hash-based point sampler, cyclic group contexts with Pollard's rho
//! discrete logarithm, and a regenerable lookup table of generator multiples.
//! Curve parameters are not fixed: build a [`Curve`] directly or load one
//! from a JSON [`CurveConfig`].

/// Implement `T op T`, `T op &T` and `&T op T` in terms of `&T op &T`.
macro_rules! forward_owned_binops {
    ($t:ty; $($imp:ident $method:ident),+ $(,)?) => {
        $(
            impl ::core::ops::$imp<$t> for $t {
                type Output = $t;

                #[inline]
                fn $method(self, rhs: $t) -> $t {
                    <&$t as ::core::ops::$imp<&$t>>::$method(&self, &rhs)
                }
            }

            impl ::core::ops::$imp<&$t> for $t {
                type Output = $t;

                #[inline]
                fn $method(self, rhs: &$t) -> $t {
                    <&$t as ::core::ops::$imp<&$t>>::$method(&self, rhs)
                }
            }

            impl ::core::ops::$imp<$t> for &$t {
                type Output = $t;

                #[inline]
                fn $method(self, rhs: $t) -> $t {
                    <&$t as ::core::ops::$imp<&$t>>::$method(self, &rhs)
                }
            }
        )+
    };
}

mod affine;
mod basefield;
mod config;
mod cyclic;
mod dlog;
mod error;
mod group;
mod random;
mod sampler;
mod scalarfield;
mod table;

pub use affine::{Curve, CurvePoint};
pub use basefield::FieldElement;
pub use config::{Coordinates, CurveConfig};
pub use cyclic::Group;
pub use error::Error;
pub use group::GroupLaw;
pub use random::random_below;
pub use sampler::{RandomPoints, MAX_SUB_INDEX};
pub use scalarfield::Scalar;
pub use table::PointTable;
